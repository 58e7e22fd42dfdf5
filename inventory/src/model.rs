//! Building and item records.
//!
//! Buildings measure in feet, items in inches. Both carry optional map
//! placement fields; only buildings are drawn by the map today.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use floorplan::building::BuildingView;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const DEFAULT_BUILDING_NAME: &str = "My Workshop";
pub const DEFAULT_CONDITION: &str = "Used";

// =============================================================================
// BUILDING
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Building {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub photo_id: Option<String>,
    /// Feet.
    #[serde(default)]
    pub height: f64,
    /// Feet.
    #[serde(default)]
    pub width: f64,
    /// Feet.
    #[serde(default)]
    pub length: f64,
    #[serde(default)]
    pub map_x: Option<f64>,
    #[serde(default)]
    pub map_y: Option<f64>,
    #[serde(default)]
    pub map_width: Option<f64>,
    #[serde(default)]
    pub map_height: Option<f64>,
    #[serde(default)]
    pub shape_type: Option<String>,
    #[serde(default)]
    pub map_label: Option<String>,
}

impl Default for Building {
    fn default() -> Self {
        Self::new(DEFAULT_BUILDING_NAME)
    }
}

impl Building {
    /// New building with zero dimensions, no map placement, and the map
    /// label set to `name`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: Uuid::new_v4(),
            map_label: Some(name.clone()),
            name,
            photo_id: None,
            height: 0.0,
            width: 0.0,
            length: 0.0,
            map_x: None,
            map_y: None,
            map_width: None,
            map_height: None,
            shape_type: None,
        }
    }

    /// Builder: physical size in feet.
    #[must_use]
    pub fn with_dimensions(mut self, length: f64, width: f64, height: f64) -> Self {
        self.length = length;
        self.width = width;
        self.height = height;
        self
    }

    /// Builder: map placement in map units.
    #[must_use]
    pub fn with_map_rect(mut self, x: f64, y: f64, width: f64, height: f64) -> Self {
        self.map_x = Some(x);
        self.map_y = Some(y);
        self.map_width = Some(width);
        self.map_height = Some(height);
        self
    }

    /// Projection handed to the map.
    #[must_use]
    pub fn view(&self) -> BuildingView {
        BuildingView {
            id: self.id,
            name: self.name.clone(),
            length_feet: Some(self.length),
            width_feet: Some(self.width),
            map_x: self.map_x,
            map_y: self.map_y,
            map_width: self.map_width,
            map_height: self.map_height,
            label: self.map_label.clone(),
            shape_type: self.shape_type.clone(),
        }
    }
}

// =============================================================================
// ITEM
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub photo_id: Option<String>,
    /// Inches.
    #[serde(default)]
    pub height: f64,
    /// Inches.
    #[serde(default)]
    pub width: f64,
    /// Inches.
    #[serde(default)]
    pub length: f64,
    #[serde(default)]
    pub category: String,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default = "default_condition")]
    pub condition: String,
    /// Owning building. Every item has one.
    pub building_id: Uuid,
    #[serde(default)]
    pub map_x: Option<f64>,
    #[serde(default)]
    pub map_y: Option<f64>,
    #[serde(default)]
    pub map_width: Option<f64>,
    #[serde(default)]
    pub map_height: Option<f64>,
    #[serde(default)]
    pub shape_type: Option<String>,
    #[serde(default)]
    pub map_label: Option<String>,
}

fn default_quantity() -> u32 {
    1
}

fn default_condition() -> String {
    DEFAULT_CONDITION.to_string()
}

impl Item {
    /// New item in `building_id`: quantity 1, condition "Used", map label = name.
    #[must_use]
    pub fn new(name: impl Into<String>, building_id: Uuid) -> Self {
        let name = name.into();
        Self {
            id: Uuid::new_v4(),
            map_label: Some(name.clone()),
            name,
            photo_id: None,
            height: 0.0,
            width: 0.0,
            length: 0.0,
            category: String::new(),
            quantity: default_quantity(),
            notes: None,
            sku: None,
            condition: default_condition(),
            building_id,
            map_x: None,
            map_y: None,
            map_width: None,
            map_height: None,
            shape_type: None,
        }
    }

    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    #[must_use]
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }
}
