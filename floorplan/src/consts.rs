//! Shared numeric constants for the floorplan crate.

// ── Camera ──────────────────────────────────────────────────────

/// Lower bound for committed zoom.
pub const MIN_ZOOM: f64 = 0.5;

/// Upper bound for committed zoom.
pub const MAX_ZOOM: f64 = 5.0;

/// Fit-to-view never zooms in beyond this factor.
pub const MAX_FIT_ZOOM: f64 = 2.0;

/// Margin kept around the building on each side after a view reset, in screen pixels.
pub const FIT_PADDING_PX: f64 = 50.0;

// ── Interaction ─────────────────────────────────────────────────

/// A drag on the selected shape must travel this far (screen pixels) before it moves the shape.
pub const SHAPE_DRAG_MIN_DISTANCE_PX: f64 = 8.0;

/// Extra screen-space padding around a shape's bounds that still counts as a hit.
pub const HIT_SLOP_PX: f64 = 5.0;

// ── Grid ────────────────────────────────────────────────────────

/// Distance between grid lines in map units.
pub const GRID_SPACING: f64 = 50.0;

/// Grid lines whose coordinate is a multiple of this get a text label.
pub const GRID_LABEL_INTERVAL: f64 = 100.0;

/// Grid labels are only drawn above this zoom.
pub const GRID_LABEL_MIN_ZOOM: f64 = 0.5;

/// Most grid lines drawn along one axis. Past this the spacing doubles.
pub const MAX_GRID_LINES: f64 = 200.0;

// ── Annotations ─────────────────────────────────────────────────

/// Distance from the building edge to its dimension callouts, in screen pixels.
pub const DIMENSION_OFFSET_PX: f64 = 20.0;

/// Half-length of a dimension end-cap tick, in screen pixels.
pub const DIMENSION_CAP_PX: f64 = 5.0;

/// Corner radius of the building outline in map units.
pub const BUILDING_CORNER_RADIUS: f64 = 10.0;

/// Corner radius of rectangle shapes in map units.
pub const SHAPE_CORNER_RADIUS: f64 = 3.0;

/// Gap between a shape's bottom edge and its measurement text, in screen pixels.
pub const SHAPE_CAPTION_GAP_PX: f64 = 15.0;

/// Gap between the selected shape's bottom edge and the drag hint, in screen pixels.
pub const SELECTION_HINT_GAP_PX: f64 = 25.0;

// ── Measurement overlay ─────────────────────────────────────────

/// Radius of the endpoint markers on the measurement line, in screen pixels.
pub const MEASURE_ENDPOINT_RADIUS_PX: f64 = 4.0;

/// Vertical offset of the distance label above the line midpoint, in screen pixels.
pub const MEASURE_LABEL_OFFSET_PX: f64 = 20.0;

/// Nominal length of the scale bar before rounding, in screen pixels.
pub const SCALE_BAR_NOMINAL_PX: f64 = 100.0;

/// Height of the scale bar, in screen pixels.
pub const SCALE_BAR_HEIGHT_PX: f64 = 3.0;

/// Top-left corner of the scale bar panel, in screen pixels.
pub const SCALE_BAR_ORIGIN_X: f64 = 16.0;
pub const SCALE_BAR_ORIGIN_Y: f64 = 56.0;
