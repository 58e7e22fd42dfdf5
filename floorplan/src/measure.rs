//! Ruler measurements and the scale bar.
//!
//! Both work purely in screen space and convert to map units by dividing by
//! the effective zoom. Map units are treated as feet for display.

#[cfg(test)]
#[path = "measure_test.rs"]
mod measure_test;

use crate::consts::SCALE_BAR_NOMINAL_PX;
use crate::geometry::Point;

/// A live ruler drag between two screen-space points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    pub start: Point,
    pub end: Point,
}

impl Measurement {
    /// A zero-length measurement anchored at the first touch.
    #[must_use]
    pub fn starting_at(pt: Point) -> Self {
        Self { start: pt, end: pt }
    }

    /// Exact map-space distance at the given effective zoom.
    #[must_use]
    pub fn distance(&self, zoom: f64) -> f64 {
        self.start.distance_to(self.end) / zoom
    }

    /// Distance label, rounded to the nearest whole foot.
    #[must_use]
    pub fn label(&self, zoom: f64) -> String {
        format!("{:.0} ft", self.distance(zoom).round())
    }

    #[must_use]
    pub fn midpoint(&self) -> Point {
        self.start.midpoint(self.end)
    }
}

/// A 1-2-5 rounded scale bar for the current zoom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleBar {
    /// Map units the bar represents.
    pub units: f64,
    /// On-screen length of the bar in pixels.
    pub length_px: f64,
}

impl ScaleBar {
    #[must_use]
    pub fn for_zoom(zoom: f64) -> Self {
        let units = round_scale(SCALE_BAR_NOMINAL_PX / zoom);
        Self { units, length_px: units * zoom }
    }

    #[must_use]
    pub fn label(&self) -> String {
        format!("{:.0} ft", self.units.trunc())
    }
}

/// Round `value` up to the next 1, 2, 5 or 10 times a power of ten.
///
/// Non-positive or non-finite input is returned unchanged.
#[must_use]
pub fn round_scale(value: f64) -> f64 {
    if !value.is_finite() || value <= 0.0 {
        return value;
    }
    let magnitude = 10f64.powf(value.log10().floor());
    let normalized = value / magnitude;
    let step = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    step * magnitude
}
