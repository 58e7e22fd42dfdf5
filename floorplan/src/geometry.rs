//! Points, sizes, rectangles, and the screen/map coordinate transform.
//!
//! Map space is the building's own coordinate system (the units its
//! `map_x`/`map_y`/`map_width`/`map_height` are stored in). Screen space is
//! viewport pixels. A [`Transform`] is a frozen snapshot of the camera for
//! one frame or one gesture event: it centers the building in the viewport,
//! scales by the effective zoom, then offsets by the effective pan.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use serde::{Deserialize, Serialize};

/// A point in either screen or map space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance_to(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Component-wise `self + other`.
    #[must_use]
    pub fn offset_by(self, other: Point) -> Self {
        Self { x: self.x + other.x, y: self.y + other.y }
    }

    /// Component-wise `self - other`.
    #[must_use]
    pub fn delta_from(self, other: Point) -> Self {
        Self { x: self.x - other.x, y: self.y - other.y }
    }

    #[must_use]
    pub fn midpoint(self, other: Point) -> Self {
        Self { x: (self.x + other.x) * 0.5, y: (self.y + other.y) * 0.5 }
    }
}

/// Width and height in either screen or map units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn center(self) -> Point {
        Point::new(self.width * 0.5, self.height * 0.5)
    }

    /// Uniformly scale both axes.
    #[must_use]
    pub fn scaled(self, factor: f64) -> Self {
        Self { width: self.width * factor, height: self.height * factor }
    }
}

/// Axis-aligned rectangle with its origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Rectangle of `size` centered on `center`.
    #[must_use]
    pub fn from_center(center: Point, size: Size) -> Self {
        Self {
            x: center.x - size.width * 0.5,
            y: center.y - size.height * 0.5,
            width: size.width,
            height: size.height,
        }
    }

    #[must_use]
    pub fn min_x(&self) -> f64 {
        self.x
    }

    #[must_use]
    pub fn min_y(&self) -> f64 {
        self.y
    }

    #[must_use]
    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }

    #[must_use]
    pub fn mid_x(&self) -> f64 {
        self.x + self.width * 0.5
    }

    #[must_use]
    pub fn mid_y(&self) -> f64 {
        self.y + self.height * 0.5
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.mid_x(), self.mid_y())
    }

    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Grow the rectangle by `amount` on every side.
    #[must_use]
    pub fn inflate(&self, amount: f64) -> Self {
        Self {
            x: self.x - amount,
            y: self.y - amount,
            width: self.width + amount * 2.0,
            height: self.height + amount * 2.0,
        }
    }

    /// Inclusive containment test.
    #[must_use]
    pub fn contains(&self, pt: Point) -> bool {
        pt.x >= self.min_x() && pt.x <= self.max_x() && pt.y >= self.min_y() && pt.y <= self.max_y()
    }
}

/// Snapshot of the camera used to convert between screen and map space.
///
/// `anchor` is the map-space point pinned to the viewport center (before
/// pan). It is `None` when there is no building to anchor to, in which case
/// both conversions are the identity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Effective zoom: committed zoom times any in-progress pinch.
    pub zoom: f64,
    /// Effective pan: committed pan plus any in-progress drag that is not suppressed.
    pub pan: Point,
    pub viewport: Size,
    pub anchor: Option<Point>,
}

impl Transform {
    /// Identity transform for a viewport with no building.
    #[must_use]
    pub fn identity(viewport: Size) -> Self {
        Self { zoom: 1.0, pan: Point::default(), viewport, anchor: None }
    }

    /// Convert a map-space point to screen coordinates.
    #[must_use]
    pub fn to_screen(&self, map: Point) -> Point {
        let Some(anchor) = self.anchor else {
            return map;
        };
        let center = self.viewport.center();
        Point {
            x: (map.x - anchor.x) * self.zoom + center.x + self.pan.x,
            y: (map.y - anchor.y) * self.zoom + center.y + self.pan.y,
        }
    }

    /// Convert a screen-space point to map coordinates. Exact inverse of [`Self::to_screen`].
    #[must_use]
    pub fn to_map(&self, screen: Point) -> Point {
        let Some(anchor) = self.anchor else {
            return screen;
        };
        let center = self.viewport.center();
        Point {
            x: (screen.x - center.x - self.pan.x) / self.zoom + anchor.x,
            y: (screen.y - center.y - self.pan.y) / self.zoom + anchor.y,
        }
    }

    /// Convert a screen-space length to map units.
    #[must_use]
    pub fn screen_dist_to_map(&self, screen_dist: f64) -> f64 {
        screen_dist / self.zoom
    }

    /// Convert a map-space rectangle to its screen-space bounds.
    #[must_use]
    pub fn rect_to_screen(&self, map: Rect) -> Rect {
        let origin = self.to_screen(Point::new(map.x, map.y));
        let scale = if self.anchor.is_some() { self.zoom } else { 1.0 };
        Rect::new(origin.x, origin.y, map.width * scale, map.height * scale)
    }

    /// The map-space rectangle currently visible through the viewport.
    #[must_use]
    pub fn visible_map_rect(&self) -> Rect {
        let top_left = self.to_map(Point::new(0.0, 0.0));
        let bottom_right = self.to_map(Point::new(self.viewport.width, self.viewport.height));
        Rect::new(top_left.x, top_left.y, bottom_right.x - top_left.x, bottom_right.y - top_left.y)
    }
}
