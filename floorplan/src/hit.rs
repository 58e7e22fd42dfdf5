//! Screen-space hit-testing of placed shapes.
//!
//! Shapes are tested against their axis-aligned bounds, padded by a few
//! pixels so small shapes stay easy to grab. Later shapes are drawn on top,
//! so the store is scanned back to front.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::building::MapScale;
use crate::geometry::{Point, Rect, Transform};
use crate::shapes::{PlacedShape, ShapeId};

/// Map-space bounds of `shape`, centered on its position.
#[must_use]
pub fn shape_map_rect(shape: &PlacedShape, scale: Option<MapScale>) -> Rect {
    Rect::from_center(shape.position, shape.map_size(scale))
}

/// Screen-space bounds of `shape` under `transform`.
#[must_use]
pub fn shape_screen_rect(shape: &PlacedShape, transform: &Transform, scale: Option<MapScale>) -> Rect {
    transform.rect_to_screen(shape_map_rect(shape, scale))
}

/// Whether `screen_pt` lands on `shape`, with `slop` pixels of padding per side.
#[must_use]
pub fn shape_contains(
    shape: &PlacedShape,
    screen_pt: Point,
    transform: &Transform,
    scale: Option<MapScale>,
    slop: f64,
) -> bool {
    shape_screen_rect(shape, transform, scale)
        .inflate(slop)
        .contains(screen_pt)
}

/// The topmost shape under `screen_pt`, if any.
#[must_use]
pub fn hit_test(
    screen_pt: Point,
    shapes: &[PlacedShape],
    transform: &Transform,
    scale: Option<MapScale>,
    slop: f64,
) -> Option<ShapeId> {
    shapes
        .iter()
        .rev()
        .find(|shape| shape_contains(shape, screen_pt, transform, scale, slop))
        .map(|shape| shape.id)
}
