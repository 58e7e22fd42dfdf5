//! Placed shapes: the user-drawn rooms and zones overlaid on a building map.
//!
//! This module defines the shape model (`PlacedShape`, `ShapeKind`,
//! `ShapeColor`), a sparse-update type for edits (`ShapePatch`), and the
//! session-owned collection the UI binds to (`ShapeStore`).
//!
//! Positions are map-space centers. Widths and lengths are real-world feet;
//! the renderer converts them to map units with the building's
//! [`MapScale`]. The store keeps insertion order, which is also draw order.

#[cfg(test)]
#[path = "shapes_test.rs"]
mod shapes_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::building::MapScale;
use crate::geometry::{Point, Size};

/// Unique identifier for a placed shape.
pub type ShapeId = Uuid;

/// The outline of a placed shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    /// Axis-aligned rectangle, `length` wide and `width` tall.
    Rectangle,
    /// Circle whose diameter is `width`.
    Circle,
    /// Apex-up isosceles triangle inscribed in the bounding box.
    Triangle,
    /// Rhombus with vertices at the bounding-box edge midpoints.
    Diamond,
}

impl ShapeKind {
    /// Every kind, in palette order.
    pub const ALL: [ShapeKind; 4] = [Self::Rectangle, Self::Circle, Self::Triangle, Self::Diamond];

    /// Default width in feet for a freshly created shape.
    #[must_use]
    pub fn default_width(self) -> f64 {
        match self {
            Self::Circle => 8.0,
            Self::Rectangle | Self::Triangle | Self::Diamond => 4.0,
        }
    }

    /// Default length in feet. Circles mirror their diameter.
    #[must_use]
    pub fn default_length(self) -> f64 {
        match self {
            Self::Circle => 8.0,
            Self::Rectangle | Self::Triangle | Self::Diamond => 6.0,
        }
    }

    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Rectangle => "Rectangle",
            Self::Circle => "Circle",
            Self::Triangle => "Triangle",
            Self::Diamond => "Diamond",
        }
    }

    /// Whether `length` is meaningful for this kind.
    #[must_use]
    pub fn uses_length(self) -> bool {
        !matches!(self, Self::Circle)
    }

    /// Caption for the dimension fields of the edit dialog.
    #[must_use]
    pub fn dimension_label(self) -> &'static str {
        match self {
            Self::Circle => "Diameter (ft)",
            Self::Rectangle | Self::Triangle | Self::Diamond => "Length × Width (ft)",
        }
    }
}

/// Color tag for a placed shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeColor {
    #[default]
    Blue,
    Red,
    Green,
    Orange,
    Purple,
}

impl ShapeColor {
    pub const ALL: [ShapeColor; 5] = [Self::Blue, Self::Red, Self::Green, Self::Orange, Self::Purple];

    /// Opaque CSS color used for strokes and text.
    #[must_use]
    pub fn css(self) -> &'static str {
        match self {
            Self::Blue => "#007AFF",
            Self::Red => "#FF3B30",
            Self::Green => "#34C759",
            Self::Orange => "#FF9500",
            Self::Purple => "#AF52DE",
        }
    }

    /// Translucent CSS color used for fills.
    #[must_use]
    pub fn css_fill(self) -> &'static str {
        match self {
            Self::Blue => "rgba(0, 122, 255, 0.3)",
            Self::Red => "rgba(255, 59, 48, 0.3)",
            Self::Green => "rgba(52, 199, 89, 0.3)",
            Self::Orange => "rgba(255, 149, 0, 0.3)",
            Self::Purple => "rgba(175, 82, 222, 0.3)",
        }
    }

    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Blue => "Blue",
            Self::Red => "Red",
            Self::Green => "Green",
            Self::Orange => "Orange",
            Self::Purple => "Purple",
        }
    }
}

/// A user-authored annotation on the building map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedShape {
    pub id: ShapeId,
    pub kind: ShapeKind,
    /// Center of the shape in map coordinates.
    pub position: Point,
    /// Width in feet. For circles this is the diameter.
    pub width: f64,
    /// Length in feet. Unused for circles, where it tracks `width`.
    pub length: f64,
    pub label: String,
    pub color: ShapeColor,
}

impl PlacedShape {
    /// Create a shape of `kind` centered at `position` with the kind's default size.
    #[must_use]
    pub fn create(kind: ShapeKind, position: Point) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            position,
            width: kind.default_width(),
            length: kind.default_length(),
            label: format!("New {}", kind.display_name()),
            color: ShapeColor::default(),
        }
    }

    /// Dimension caption shown beneath the shape, in whole feet.
    #[must_use]
    pub fn measurement_text(&self) -> String {
        match self.kind {
            ShapeKind::Circle => format!("{:.0}ft ⌀", self.width.trunc()),
            ShapeKind::Rectangle | ShapeKind::Triangle | ShapeKind::Diamond => {
                format!("{:.0}ft × {:.0}ft", self.length.trunc(), self.width.trunc())
            }
        }
    }

    /// Size of the shape in map units.
    ///
    /// With a building scale, feet are converted per axis (circles use the
    /// average scale). Without one, the raw feet values are used as map
    /// units unchanged.
    #[must_use]
    pub fn map_size(&self, scale: Option<MapScale>) -> Size {
        match (self.kind, scale) {
            (ShapeKind::Circle, None) => Size::new(self.width, self.width),
            (ShapeKind::Circle, Some(s)) => {
                let diameter = self.width * s.average();
                Size::new(diameter, diameter)
            }
            (ShapeKind::Rectangle | ShapeKind::Triangle | ShapeKind::Diamond, None) => {
                Size::new(self.length, self.width)
            }
            (ShapeKind::Rectangle | ShapeKind::Triangle | ShapeKind::Diamond, Some(s)) => {
                Size::new(self.length * s.x, self.width * s.y)
            }
        }
    }
}

/// Sparse update for a placed shape. Only present fields are applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShapePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Point>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,
}

impl ShapePatch {
    /// Patch that only moves the shape.
    #[must_use]
    pub fn moved_to(position: Point) -> Self {
        Self { position: Some(position), ..Default::default() }
    }
}

/// Session-owned, ordered collection of placed shapes with a single selection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShapeStore {
    shapes: Vec<PlacedShape>,
    selected: Option<ShapeId>,
}

impl ShapeStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a shape and make it the selection.
    pub fn add(&mut self, shape: PlacedShape) {
        self.selected = Some(shape.id);
        self.shapes.push(shape);
    }

    /// Apply a partial update. Returns false if no shape has this id.
    pub fn update(&mut self, id: &ShapeId, patch: &ShapePatch) -> bool {
        let Some(shape) = self.shapes.iter_mut().find(|s| s.id == *id) else {
            return false;
        };
        if let Some(position) = patch.position {
            shape.position = position;
        }
        if let Some(ref label) = patch.label {
            shape.label.clone_from(label);
        }
        if let Some(width) = patch.width {
            shape.width = width;
        }
        if let Some(length) = patch.length {
            shape.length = length;
        }
        true
    }

    /// Remove a shape by id, returning it if it was present.
    ///
    /// Clears the selection when the removed shape was selected.
    pub fn delete(&mut self, id: &ShapeId) -> Option<PlacedShape> {
        let index = self.shapes.iter().position(|s| s.id == *id)?;
        if self.selected == Some(*id) {
            self.selected = None;
        }
        Some(self.shapes.remove(index))
    }

    /// Select a shape by id. Returns false (and leaves the selection alone) if it doesn't exist.
    pub fn select(&mut self, id: &ShapeId) -> bool {
        if self.get(id).is_none() {
            return false;
        }
        self.selected = Some(*id);
        true
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Remove every shape and the selection.
    pub fn clear(&mut self) {
        self.shapes.clear();
        self.selected = None;
    }

    /// Replace all shapes with a snapshot. The selection is dropped.
    pub fn load_snapshot(&mut self, shapes: Vec<PlacedShape>) {
        self.shapes = shapes;
        self.selected = None;
    }

    #[must_use]
    pub fn get(&self, id: &ShapeId) -> Option<&PlacedShape> {
        self.shapes.iter().find(|s| s.id == *id)
    }

    /// Shapes in insertion (draw) order.
    #[must_use]
    pub fn shapes(&self) -> &[PlacedShape] {
        &self.shapes
    }

    #[must_use]
    pub fn selected_id(&self) -> Option<ShapeId> {
        self.selected
    }

    #[must_use]
    pub fn selected(&self) -> Option<&PlacedShape> {
        self.selected.as_ref().and_then(|id| self.get(id))
    }

    #[must_use]
    pub fn is_selected(&self, id: &ShapeId) -> bool {
        self.selected.as_ref() == Some(id)
    }

    /// Number of shapes currently in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Returns `true` if the store contains no shapes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}
