//! Building view-model consumed by the map.
//!
//! The surrounding application owns building records; the map only reads the
//! subset below. Every field except `id` and `name` may be absent, and the
//! map must degrade gracefully when it is.

#[cfg(test)]
#[path = "building_test.rs"]
mod building_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::geometry::Rect;

/// Unique identifier for a building.
pub type BuildingId = Uuid;

/// Read-only projection of a building record.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BuildingView {
    pub id: BuildingId,
    pub name: String,
    /// Real-world length in feet; pairs with `map_width`.
    #[serde(default)]
    pub length_feet: Option<f64>,
    /// Real-world width in feet; pairs with `map_height`.
    #[serde(default)]
    pub width_feet: Option<f64>,
    #[serde(default)]
    pub map_x: Option<f64>,
    #[serde(default)]
    pub map_y: Option<f64>,
    #[serde(default)]
    pub map_width: Option<f64>,
    #[serde(default)]
    pub map_height: Option<f64>,
    /// Label shown on the map. Falls back to `name`.
    #[serde(default)]
    pub label: Option<String>,
    /// Outline kind. Only rectangles are drawn; absent is treated as a rectangle.
    #[serde(default)]
    pub shape_type: Option<String>,
}

/// Map units per real-world foot along each axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapScale {
    /// `map_width / length_feet`.
    pub x: f64,
    /// `map_height / width_feet`.
    pub y: f64,
}

impl MapScale {
    /// Mean of the two axis scales. Circles use this so they stay round.
    #[must_use]
    pub fn average(&self) -> f64 {
        (self.x + self.y) * 0.5
    }
}

impl BuildingView {
    /// Map-space rectangle, or `None` if any coordinate is missing.
    #[must_use]
    pub fn map_rect(&self) -> Option<Rect> {
        Some(Rect::new(self.map_x?, self.map_y?, self.map_width?, self.map_height?))
    }

    /// Text drawn inside the building outline.
    #[must_use]
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.name)
    }

    /// Scale derived from physical dimensions.
    ///
    /// `None` when the map size is missing or either physical dimension is
    /// not positive; shapes are then drawn at their raw size.
    #[must_use]
    pub fn scale(&self) -> Option<MapScale> {
        let map_w = self.map_width?;
        let map_h = self.map_height?;
        let length = self.length_feet.filter(|v| *v > 0.0)?;
        let width = self.width_feet.filter(|v| *v > 0.0)?;
        Some(MapScale { x: map_w / length, y: map_h / width })
    }

    /// Whether the outline should be drawn.
    #[must_use]
    pub fn draws_outline(&self) -> bool {
        self.shape_type
            .as_deref()
            .is_none_or(|s| s.eq_ignore_ascii_case("rectangle"))
    }
}
