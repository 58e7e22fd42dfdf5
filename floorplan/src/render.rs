//! Rendering: derives an ordered draw list from the map state.
//!
//! [`build_scene`] is a pure function of the view state, the building and the
//! shape list. It produces [`DrawCmd`]s back to front and never touches a
//! canvas; [`crate::paint`] plays the result onto one. Keeping the two apart
//! lets the whole draw order be asserted in native tests.
//!
//! Commands between [`DrawCmd::BeginMapSpace`] and [`DrawCmd::EndMapSpace`]
//! are in map units. Line widths and font sizes inside that span are already
//! divided by the zoom so they stay constant on screen. Everything else is in
//! screen pixels.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::building::{BuildingView, MapScale};
use crate::config::MapConfig;
use crate::consts::{
    BUILDING_CORNER_RADIUS, DIMENSION_CAP_PX, DIMENSION_OFFSET_PX, GRID_LABEL_MIN_ZOOM, MAX_GRID_LINES,
    MEASURE_ENDPOINT_RADIUS_PX, MEASURE_LABEL_OFFSET_PX, SCALE_BAR_HEIGHT_PX, SCALE_BAR_ORIGIN_X, SCALE_BAR_ORIGIN_Y,
    SELECTION_HINT_GAP_PX, SHAPE_CAPTION_GAP_PX, SHAPE_CORNER_RADIUS,
};
use crate::geometry::{Point, Rect, Size, Transform};
use crate::hit;
use crate::measure::{Measurement, ScaleBar};
use crate::shapes::{PlacedShape, ShapeId, ShapeKind};
use crate::view::ViewState;

// =============================================================
// Palette
// =============================================================

pub const BACKGROUND: &str = "rgba(142, 142, 147, 0.1)";
pub const GRID_LINE: &str = "rgba(142, 142, 147, 0.3)";
pub const MUTED_TEXT: &str = "#8E8E93";
pub const BUILDING_STROKE: &str = "#007AFF";
pub const BUILDING_FILL: &str = "rgba(0, 122, 255, 0.1)";
pub const ALERT: &str = "#FF3B30";
pub const SELECTION_OVERLAY: &str = "rgba(255, 59, 48, 0.15)";
pub const BACKDROP: &str = "rgba(255, 255, 255, 0.9)";
pub const PANEL: &str = "rgba(255, 255, 255, 0.8)";
pub const INK: &str = "#000000";
pub const PAPER: &str = "#FFFFFF";

pub const PLACEHOLDER_TEXT: &str = "No Building Data";
pub const SELECTION_HINT: &str = "Selected - Drag to move";

/// Inner padding of the scale bar panel.
const PANEL_PADDING_PX: f64 = 8.0;
const PANEL_RADIUS_PX: f64 = 8.0;
const CAPTION_FONT_PX: f64 = 12.0;
const HINT_FONT_PX: f64 = 11.0;
const PLACEHOLDER_FONT_PX: f64 = 17.0;

// =============================================================
// Draw list types
// =============================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: &'static str,
    pub width: f64,
}

/// Fill and stroke for a closed primitive. Fill is painted first.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Style {
    pub fill: Option<&'static str>,
    pub stroke: Option<Stroke>,
}

impl Style {
    #[must_use]
    pub fn filled(color: &'static str) -> Self {
        Self { fill: Some(color), stroke: None }
    }

    #[must_use]
    pub fn stroked(stroke: Stroke) -> Self {
        Self { fill: None, stroke: Some(stroke) }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontWeight {
    #[default]
    Regular,
    Medium,
    Bold,
}

impl FontWeight {
    /// CSS `font-weight` value.
    #[must_use]
    pub fn css(self) -> &'static str {
        match self {
            Self::Regular => "400",
            Self::Medium => "500",
            Self::Bold => "700",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    /// `at` is the center of the text.
    #[default]
    Center,
    /// `at` is the left edge, vertically centered.
    Left,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub at: Point,
    pub size: f64,
    pub weight: FontWeight,
    pub color: &'static str,
    pub align: TextAlign,
    /// Rounded backdrop painted behind the text.
    pub backdrop: Option<&'static str>,
}

impl Label {
    fn new(text: impl Into<String>, at: Point, size: f64, color: &'static str) -> Self {
        Self {
            text: text.into(),
            at,
            size,
            weight: FontWeight::Regular,
            color,
            align: TextAlign::Center,
            backdrop: None,
        }
    }

    fn weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    fn align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    fn backdrop(mut self, color: &'static str) -> Self {
        self.backdrop = Some(color);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    /// Fill the whole viewport.
    Background { color: &'static str },
    /// Following commands are in map units under this transform.
    BeginMapSpace(Transform),
    EndMapSpace,
    Line { from: Point, to: Point, stroke: Stroke },
    Rect { rect: Rect, radius: f64, style: Style },
    /// Ellipse inscribed in `rect`.
    Ellipse { rect: Rect, style: Style },
    Polygon { points: Vec<Point>, style: Style },
    Text(Label),
}

/// Ordered draw list, back to front.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    pub commands: Vec<DrawCmd>,
}

impl Scene {
    fn push(&mut self, cmd: DrawCmd) {
        self.commands.push(cmd);
    }

    fn text(&mut self, label: Label) {
        self.commands.push(DrawCmd::Text(label));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Every text label, in draw order.
    pub fn labels(&self) -> impl Iterator<Item = &Label> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCmd::Text(label) => Some(label),
            _ => None,
        })
    }

    /// Index of the first label with exactly this text.
    #[must_use]
    pub fn position_of_text(&self, text: &str) -> Option<usize> {
        self.commands
            .iter()
            .position(|cmd| matches!(cmd, DrawCmd::Text(label) if label.text == text))
    }
}

/// Everything the renderer reads for one frame.
#[derive(Debug, Clone, Copy)]
pub struct SceneInput<'a> {
    pub view: &'a ViewState,
    pub building: Option<&'a BuildingView>,
    pub shapes: &'a [PlacedShape],
    pub selected: Option<ShapeId>,
    pub viewport: Size,
    pub config: &'a MapConfig,
    /// Live map-space center of a shape that is being dragged.
    pub drag_preview: Option<(ShapeId, Point)>,
}

// =============================================================
// Scene assembly
// =============================================================

/// Build the full draw list for one frame.
#[must_use]
pub fn build_scene(input: &SceneInput<'_>) -> Scene {
    let mut scene = Scene::default();
    scene.push(DrawCmd::Background { color: BACKGROUND });

    let transform = input.view.transform(input.building, input.viewport);

    match input.building {
        Some(building) => {
            if let Some(rect) = building.map_rect() {
                draw_map(&mut scene, input, building, rect, &transform);
            }
        }
        None => draw_placeholder(&mut scene, input.viewport),
    }

    if input.view.show_measurements {
        draw_scale_bar(&mut scene, transform.zoom);
    }

    if let Some(measurement) = input.view.measurement {
        draw_measurement(&mut scene, &measurement, transform.zoom);
    }

    scene
}

fn draw_map(scene: &mut Scene, input: &SceneInput<'_>, building: &BuildingView, rect: Rect, transform: &Transform) {
    let zoom = transform.zoom;
    scene.push(DrawCmd::BeginMapSpace(*transform));

    if input.view.show_grid {
        draw_grid(scene, transform, input.config);
    }

    if building.draws_outline() {
        draw_building(scene, building, rect, zoom, input.view.show_dimensions);
    }

    let scale = building.scale();
    for shape in input.shapes {
        let center = live_center(shape, input.drag_preview);
        draw_shape(scene, shape, center, scale, zoom, input.selected == Some(shape.id));
    }

    scene.push(DrawCmd::EndMapSpace);

    if let Some(shape) = input.selected.and_then(|id| input.shapes.iter().find(|s| s.id == id)) {
        draw_selection(scene, shape, input, scale, transform);
    }
}

fn live_center(shape: &PlacedShape, preview: Option<(ShapeId, Point)>) -> Point {
    match preview {
        Some((id, center)) if id == shape.id => center,
        _ => shape.position,
    }
}

// =============================================================
// Grid
// =============================================================

fn draw_grid(scene: &mut Scene, transform: &Transform, config: &MapConfig) {
    let zoom = transform.zoom;
    let visible = transform.visible_map_rect();
    let Some(spacing) = grid_spacing_for(visible.width.max(visible.height), config.grid_spacing) else {
        return;
    };
    let stroke = Stroke { color: GRID_LINE, width: 0.5 / zoom };
    let labeled = zoom > GRID_LABEL_MIN_ZOOM;
    let font = (10.0 / zoom).max(8.0);

    for x in grid_steps(visible.min_x(), visible.max_x(), spacing) {
        scene.push(DrawCmd::Line {
            from: Point::new(x, visible.min_y()),
            to: Point::new(x, visible.max_y()),
            stroke,
        });
        if labeled && on_interval(x, config.grid_label_interval) {
            let at = Point::new(x, visible.min_y() + 10.0 / zoom);
            scene.text(Label::new(whole_feet(x), at, font, MUTED_TEXT));
        }
    }

    for y in grid_steps(visible.min_y(), visible.max_y(), spacing) {
        scene.push(DrawCmd::Line {
            from: Point::new(visible.min_x(), y),
            to: Point::new(visible.max_x(), y),
            stroke,
        });
        if labeled && on_interval(y, config.grid_label_interval) {
            let at = Point::new(visible.min_x() + 10.0 / zoom, y);
            scene.text(Label::new(whole_feet(y), at, font, MUTED_TEXT));
        }
    }
}

/// Base spacing, doubled until `span` needs at most [`MAX_GRID_LINES`] lines.
fn grid_spacing_for(span: f64, base: f64) -> Option<f64> {
    if !span.is_finite() || !base.is_finite() || base <= 0.0 {
        return None;
    }
    let mut spacing = base;
    while span / spacing > MAX_GRID_LINES {
        spacing *= 2.0;
    }
    Some(spacing)
}

/// Multiples of `spacing` covering `[min, max]`, widened to whole steps.
fn grid_steps(min: f64, max: f64, spacing: f64) -> impl Iterator<Item = f64> {
    let start = (min / spacing).floor();
    let end = (max / spacing).ceil();
    let valid = spacing > 0.0 && start.is_finite() && end.is_finite();
    let mut i = start;
    std::iter::from_fn(move || {
        if !valid || i > end {
            return None;
        }
        let value = i * spacing;
        i += 1.0;
        Some(value)
    })
}

fn on_interval(value: f64, interval: f64) -> bool {
    (value % interval).abs() < 1e-6
}

/// Whole-foot caption, truncated toward zero.
fn whole_feet(value: f64) -> String {
    // Adding zero folds -0.0 into 0.0.
    format!("{:.0}ft", value.trunc() + 0.0)
}

// =============================================================
// Building
// =============================================================

fn draw_building(scene: &mut Scene, building: &BuildingView, rect: Rect, zoom: f64, show_dimensions: bool) {
    scene.push(DrawCmd::Rect {
        rect,
        radius: BUILDING_CORNER_RADIUS,
        style: Style {
            fill: Some(BUILDING_FILL),
            stroke: Some(Stroke { color: BUILDING_STROKE, width: 2.0 / zoom }),
        },
    });

    if show_dimensions {
        draw_dimensions(scene, building, rect, zoom);
    }

    let center = rect.center();
    scene.text(
        Label::new(
            building.display_label(),
            Point::new(center.x, center.y - 10.0 / zoom),
            (18.0 / zoom).max(12.0),
            BUILDING_STROKE,
        )
        .weight(FontWeight::Bold),
    );
}

fn draw_dimensions(scene: &mut Scene, building: &BuildingView, rect: Rect, zoom: f64) {
    let offset = DIMENSION_OFFSET_PX / zoom;
    let cap = DIMENSION_CAP_PX / zoom;
    let stroke = Stroke { color: ALERT, width: 1.0 / zoom };
    let font = (14.0 / zoom).max(10.0);

    if let Some(length) = building.length_feet {
        let y = rect.max_y() + offset;
        scene.push(DrawCmd::Line { from: Point::new(rect.min_x(), y), to: Point::new(rect.max_x(), y), stroke });
        for x in [rect.min_x(), rect.max_x()] {
            scene.push(DrawCmd::Line { from: Point::new(x, y - cap), to: Point::new(x, y + cap), stroke });
        }
        scene.text(Label::new(whole_feet(length), Point::new(rect.mid_x(), y), font, ALERT).weight(FontWeight::Medium));
    }

    if let Some(width) = building.width_feet {
        let x = rect.max_x() + offset;
        scene.push(DrawCmd::Line { from: Point::new(x, rect.min_y()), to: Point::new(x, rect.max_y()), stroke });
        for y in [rect.min_y(), rect.max_y()] {
            scene.push(DrawCmd::Line { from: Point::new(x - cap, y), to: Point::new(x + cap, y), stroke });
        }
        scene.text(Label::new(whole_feet(width), Point::new(x, rect.mid_y()), font, ALERT).weight(FontWeight::Medium));
    }
}

// =============================================================
// Shapes
// =============================================================

fn draw_shape(
    scene: &mut Scene,
    shape: &PlacedShape,
    center: Point,
    scale: Option<MapScale>,
    zoom: f64,
    selected: bool,
) {
    let size = shape.map_size(scale);
    let rect = Rect::from_center(center, size);
    let stroke_color = if selected { ALERT } else { shape.color.css() };
    let line_width = (if selected { 3.0 } else { 2.0 }) / zoom;
    let style = Style {
        fill: Some(shape.color.css_fill()),
        stroke: Some(Stroke { color: stroke_color, width: line_width }),
    };

    let outline = match shape.kind {
        ShapeKind::Rectangle => DrawCmd::Rect { rect, radius: SHAPE_CORNER_RADIUS, style },
        ShapeKind::Circle => DrawCmd::Ellipse { rect, style },
        ShapeKind::Triangle => DrawCmd::Polygon {
            points: vec![
                Point::new(rect.mid_x(), rect.min_y()),
                Point::new(rect.min_x(), rect.max_y()),
                Point::new(rect.max_x(), rect.max_y()),
            ],
            style,
        },
        ShapeKind::Diamond => DrawCmd::Polygon {
            points: vec![
                Point::new(rect.mid_x(), rect.min_y()),
                Point::new(rect.max_x(), rect.mid_y()),
                Point::new(rect.mid_x(), rect.max_y()),
                Point::new(rect.min_x(), rect.mid_y()),
            ],
            style,
        },
    };
    scene.push(outline);

    scene.text(Label::new(shape.label.as_str(), center, (12.0 / zoom).max(8.0), stroke_color).weight(FontWeight::Medium));

    let caption_at = Point::new(center.x, center.y + size.height * 0.5 + SHAPE_CAPTION_GAP_PX / zoom);
    scene.text(Label::new(shape.measurement_text(), caption_at, (10.0 / zoom).max(6.0), MUTED_TEXT));
}

/// Screen-space highlight and drag hint for the selected shape.
fn draw_selection(
    scene: &mut Scene,
    shape: &PlacedShape,
    input: &SceneInput<'_>,
    scale: Option<MapScale>,
    transform: &Transform,
) {
    let map_rect = Rect::from_center(live_center(shape, input.drag_preview), shape.map_size(scale));
    let screen = transform.rect_to_screen(map_rect);
    scene.push(DrawCmd::Rect {
        rect: screen.inflate(input.config.hit_slop),
        radius: 0.0,
        style: Style::filled(SELECTION_OVERLAY),
    });
    let hint_at = Point::new(screen.mid_x(), screen.max_y() + SELECTION_HINT_GAP_PX);
    scene.text(
        Label::new(SELECTION_HINT, hint_at, HINT_FONT_PX, ALERT)
            .weight(FontWeight::Bold)
            .backdrop(BACKDROP),
    );
}

// =============================================================
// Overlays
// =============================================================

fn draw_placeholder(scene: &mut Scene, viewport: Size) {
    scene.text(Label::new(PLACEHOLDER_TEXT, viewport.center(), PLACEHOLDER_FONT_PX, MUTED_TEXT).weight(FontWeight::Bold));
}

fn draw_scale_bar(scene: &mut Scene, zoom: f64) {
    let bar = ScaleBar::for_zoom(zoom);
    if !bar.length_px.is_finite() || bar.length_px <= 0.0 {
        return;
    }
    let origin = Point::new(SCALE_BAR_ORIGIN_X, SCALE_BAR_ORIGIN_Y);
    let panel = Rect::new(
        origin.x,
        origin.y,
        bar.length_px + PANEL_PADDING_PX * 2.0,
        SCALE_BAR_HEIGHT_PX + CAPTION_FONT_PX + PANEL_PADDING_PX * 2.5,
    );
    scene.push(DrawCmd::Rect { rect: panel, radius: PANEL_RADIUS_PX, style: Style::filled(PANEL) });

    let half = bar.length_px * 0.5;
    let bar_x = origin.x + PANEL_PADDING_PX;
    let bar_y = origin.y + PANEL_PADDING_PX;
    let edge = Stroke { color: INK, width: 1.0 };
    scene.push(DrawCmd::Rect {
        rect: Rect::new(bar_x, bar_y, half, SCALE_BAR_HEIGHT_PX),
        radius: 0.0,
        style: Style::filled(INK),
    });
    scene.push(DrawCmd::Rect {
        rect: Rect::new(bar_x + half, bar_y, half, SCALE_BAR_HEIGHT_PX),
        radius: 0.0,
        style: Style { fill: Some(PAPER), stroke: Some(edge) },
    });
    scene.push(DrawCmd::Rect {
        rect: Rect::new(bar_x, bar_y, bar.length_px, SCALE_BAR_HEIGHT_PX),
        radius: 0.0,
        style: Style::stroked(edge),
    });

    let label_at = Point::new(bar_x, bar_y + SCALE_BAR_HEIGHT_PX + PANEL_PADDING_PX * 0.5 + CAPTION_FONT_PX * 0.5);
    scene.text(Label::new(bar.label(), label_at, CAPTION_FONT_PX, INK).align(TextAlign::Left));
}

fn draw_measurement(scene: &mut Scene, measurement: &Measurement, zoom: f64) {
    scene.push(DrawCmd::Line {
        from: measurement.start,
        to: measurement.end,
        stroke: Stroke { color: ALERT, width: 2.0 },
    });
    let marker = Size::new(MEASURE_ENDPOINT_RADIUS_PX * 2.0, MEASURE_ENDPOINT_RADIUS_PX * 2.0);
    for pt in [measurement.start, measurement.end] {
        scene.push(DrawCmd::Ellipse { rect: Rect::from_center(pt, marker), style: Style::filled(ALERT) });
    }
    let mid = measurement.midpoint();
    scene.text(
        Label::new(
            measurement.label(zoom),
            Point::new(mid.x, mid.y - MEASURE_LABEL_OFFSET_PX),
            CAPTION_FONT_PX,
            INK,
        )
        .backdrop(BACKDROP),
    );
}

/// On-screen size of `shape` for the given building and transform.
#[must_use]
pub fn shape_screen_size(shape: &PlacedShape, building: Option<&BuildingView>, transform: &Transform) -> Size {
    let scale = building.and_then(BuildingView::scale);
    hit::shape_screen_rect(shape, transform, scale).size()
}
