//! View state: the camera plus the map's toggles and live measurement.
//!
//! One `ViewState` belongs to one map session. Every mutation goes through
//! a method here so the renderer and the interaction controller see the same
//! rules (e.g. transient pan is ignored while measuring or dragging a shape).

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use crate::building::BuildingView;
use crate::camera::Camera;
use crate::config::MapConfig;
use crate::geometry::{Point, Size, Transform};
use crate::measure::Measurement;

/// Camera, display toggles, and interaction flags for one map session.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub camera: Camera,
    /// Show the background grid.
    pub show_grid: bool,
    /// Show the building's length/width callouts.
    pub show_dimensions: bool,
    /// Show the scale bar overlay.
    pub show_measurements: bool,
    /// Drags draw a ruler instead of panning.
    pub measurement_mode: bool,
    /// The shape palette toolbar is open.
    pub show_shape_editor: bool,
    /// The shape list panel is open.
    pub show_shape_list: bool,
    /// A placed shape is being dragged; suppresses panning.
    pub dragging_shape: bool,
    /// Live ruler, only while measuring.
    pub measurement: Option<Measurement>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(&MapConfig::default())
    }
}

impl ViewState {
    /// Fresh view state with toggles taken from `config`.
    #[must_use]
    pub fn new(config: &MapConfig) -> Self {
        Self {
            camera: Camera::default(),
            show_grid: config.show_grid,
            show_dimensions: config.show_dimensions,
            show_measurements: config.show_measurements,
            measurement_mode: false,
            show_shape_editor: false,
            show_shape_list: false,
            dragging_shape: false,
            measurement: None,
        }
    }

    /// Whether live pan translation is currently ignored.
    #[must_use]
    pub fn pan_suppressed(&self) -> bool {
        self.measurement_mode || self.dragging_shape
    }

    /// Snapshot transform for the given building and viewport.
    #[must_use]
    pub fn transform(&self, building: Option<&BuildingView>, viewport: Size) -> Transform {
        Transform {
            zoom: self.camera.effective_zoom(),
            pan: self.camera.effective_pan(self.pan_suppressed()),
            viewport,
            anchor: building.and_then(BuildingView::map_rect).map(|r| r.center()),
        }
    }

    /// Fit the camera to `building` (or reset it when absent).
    pub fn reset_view(&mut self, building: Option<&BuildingView>, viewport: Size) {
        self.camera
            .reset_view(building.and_then(BuildingView::map_rect), viewport);
    }

    /// Commit a finished pan, unless measuring or dragging a shape.
    ///
    /// Returns whether the pan was committed.
    pub fn apply_pan(&mut self, delta: Point) -> bool {
        if self.pan_suppressed() {
            self.camera.discard_drag();
            return false;
        }
        self.camera.apply_pan(delta);
        true
    }

    /// Commit a finished pinch.
    pub fn apply_pinch(&mut self, delta: f64) {
        self.camera.apply_pinch(delta);
    }

    pub fn toggle_grid(&mut self) {
        self.show_grid = !self.show_grid;
    }

    pub fn toggle_dimensions(&mut self) {
        self.show_dimensions = !self.show_dimensions;
    }

    pub fn toggle_measurements(&mut self) {
        self.show_measurements = !self.show_measurements;
    }

    /// Flip measurement mode. Leaving the mode discards the live ruler.
    pub fn toggle_measurement_mode(&mut self) {
        self.measurement_mode = !self.measurement_mode;
        if !self.measurement_mode {
            self.measurement = None;
        }
    }

    pub fn toggle_shape_editor(&mut self) {
        self.show_shape_editor = !self.show_shape_editor;
    }

    pub fn toggle_shape_list(&mut self) {
        self.show_shape_list = !self.show_shape_list;
    }

    /// Start a fresh ruler at `pt`, replacing any previous one.
    pub fn begin_measurement(&mut self, pt: Point) {
        self.measurement = Some(Measurement::starting_at(pt));
    }

    /// Record a ruler point: the first becomes the start, later ones move the end.
    pub fn extend_measurement(&mut self, pt: Point) {
        match self.measurement.as_mut() {
            Some(m) => m.end = pt,
            None => self.measurement = Some(Measurement::starting_at(pt)),
        }
    }

    pub fn clear_measurement(&mut self) {
        self.measurement = None;
    }
}
