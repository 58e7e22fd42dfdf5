#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use crate::consts::{FIT_PADDING_PX, MAX_FIT_ZOOM, MAX_ZOOM, MIN_ZOOM};
use crate::geometry::{Point, Rect, Size};

/// Camera state for pan/zoom over the building map.
///
/// `zoom` and `pan` are committed values. `magnify` and `drag_offset` are
/// transient: they track an in-progress pinch or pan and are folded into the
/// committed values (or dropped) when the gesture ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub zoom: f64,
    /// Screen-pixel offset applied after scaling.
    pub pan: Point,
    /// Live pinch multiplier (1.0 when no pinch is active).
    pub magnify: f64,
    /// Live pan translation in screen pixels (zero when no pan is active).
    pub drag_offset: Point,
}

impl Default for Camera {
    fn default() -> Self {
        Self { zoom: 1.0, pan: Point::default(), magnify: 1.0, drag_offset: Point::default() }
    }
}

impl Camera {
    /// Committed zoom composed with any live pinch.
    #[must_use]
    pub fn effective_zoom(&self) -> f64 {
        self.zoom * self.magnify
    }

    /// Committed pan, plus the live drag unless `suppress_drag` is set.
    #[must_use]
    pub fn effective_pan(&self, suppress_drag: bool) -> Point {
        if suppress_drag {
            self.pan
        } else {
            self.pan.offset_by(self.drag_offset)
        }
    }

    /// Zoom that fits `target` inside `viewport` with a fixed margin, capped at 2x.
    ///
    /// Axes with a non-positive extent don't constrain the fit. Falls back
    /// to 1.0 when the viewport is too small to produce a positive zoom.
    #[must_use]
    pub fn fit_zoom(target: Rect, viewport: Size) -> f64 {
        let axis = |available: f64, extent: f64| {
            if extent > 0.0 {
                (available - FIT_PADDING_PX * 2.0) / extent
            } else {
                f64::INFINITY
            }
        };
        let zoom = axis(viewport.width, target.width)
            .min(axis(viewport.height, target.height))
            .min(MAX_FIT_ZOOM);
        if zoom.is_finite() && zoom > 0.0 { zoom } else { 1.0 }
    }

    /// Reset to fit `target`, or to the identity when there is nothing to fit.
    ///
    /// Pan and any transient gesture state are cleared either way.
    pub fn reset_view(&mut self, target: Option<Rect>, viewport: Size) {
        self.zoom = target.map_or(1.0, |rect| Self::fit_zoom(rect, viewport));
        self.pan = Point::default();
        self.magnify = 1.0;
        self.drag_offset = Point::default();
    }

    /// Commit a finished pinch: `zoom = clamp(zoom * delta)`.
    pub fn apply_pinch(&mut self, delta: f64) {
        let next = self.zoom * delta;
        self.zoom = if next.is_nan() { self.zoom } else { next }.clamp(MIN_ZOOM, MAX_ZOOM);
        self.magnify = 1.0;
    }

    /// Commit a finished pan by adding `delta` to the pan offset.
    pub fn apply_pan(&mut self, delta: Point) {
        self.pan = self.pan.offset_by(delta);
        self.drag_offset = Point::default();
    }

    /// Drop any in-progress pan without committing it.
    pub fn discard_drag(&mut self) {
        self.drag_offset = Point::default();
    }
}
