//! Map configuration supplied by the host.
//!
//! Every field has a default, so hosts only send what they want to change.
//! Fixed behavior (zoom bounds, fit padding) lives in [`crate::consts`].

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{GRID_LABEL_INTERVAL, GRID_SPACING, HIT_SLOP_PX, SHAPE_DRAG_MIN_DISTANCE_PX};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid map config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid map config: {field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f64 },
}

#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    /// Initial grid visibility.
    pub show_grid: bool,
    /// Initial dimension-callout visibility.
    pub show_dimensions: bool,
    /// Initial scale-bar visibility.
    pub show_measurements: bool,
    /// Screen pixels a drag on the selected shape must travel before it moves.
    pub shape_drag_min_distance: f64,
    /// Screen pixels of slop around each shape for tap/drag hit-testing.
    pub hit_slop: f64,
    /// Map units between grid lines.
    pub grid_spacing: f64,
    /// Map units between labeled grid lines.
    pub grid_label_interval: f64,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            show_grid: false,
            show_dimensions: true,
            show_measurements: true,
            shape_drag_min_distance: SHAPE_DRAG_MIN_DISTANCE_PX,
            hit_slop: HIT_SLOP_PX,
            grid_spacing: GRID_SPACING,
            grid_label_interval: GRID_LABEL_INTERVAL,
        }
    }
}

impl MapConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns `Parse` for malformed JSON and `NotPositive` when a spacing or
    /// threshold is zero, negative, or not a number.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the numeric fields.
    ///
    /// # Errors
    ///
    /// Returns the first field that is not strictly positive. `hit_slop` may be zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("shape_drag_min_distance", self.shape_drag_min_distance),
            ("grid_spacing", self.grid_spacing),
            ("grid_label_interval", self.grid_label_interval),
        ];
        for (field, value) in positive {
            if value.is_nan() || value <= 0.0 {
                return Err(ConfigError::NotPositive { field, value });
            }
        }
        if self.hit_slop.is_nan() || self.hit_slop < 0.0 {
            return Err(ConfigError::NotPositive { field: "hit_slop", value: self.hit_slop });
        }
        Ok(())
    }
}
