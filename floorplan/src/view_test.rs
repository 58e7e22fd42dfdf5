#![allow(clippy::float_cmp)]

use uuid::Uuid;

use super::*;
use crate::geometry::Rect;

fn building(x: f64, y: f64, w: f64, h: f64) -> BuildingView {
    BuildingView {
        id: Uuid::new_v4(),
        name: "Barn".into(),
        length_feet: Some(20.0),
        width_feet: Some(15.0),
        map_x: Some(x),
        map_y: Some(y),
        map_width: Some(w),
        map_height: Some(h),
        ..Default::default()
    }
}

// --- Defaults ---

#[test]
fn default_toggles() {
    let v = ViewState::default();
    assert!(!v.show_grid);
    assert!(v.show_dimensions);
    assert!(v.show_measurements);
    assert!(!v.measurement_mode);
    assert!(!v.show_shape_editor);
    assert!(!v.show_shape_list);
    assert!(!v.dragging_shape);
    assert!(v.measurement.is_none());
}

#[test]
fn new_honors_config_toggles() {
    let config = MapConfig { show_grid: true, show_dimensions: false, ..MapConfig::default() };
    let v = ViewState::new(&config);
    assert!(v.show_grid);
    assert!(!v.show_dimensions);
}

// --- transform ---

#[test]
fn transform_anchors_on_building_center() {
    let mut v = ViewState::default();
    v.camera.zoom = 2.0;
    v.camera.pan = Point::new(10.0, 10.0);
    let b = building(0.0, 0.0, 100.0, 100.0);
    let t = v.transform(Some(&b), Size::new(300.0, 300.0));
    assert_eq!(t.anchor, Some(Point::new(50.0, 50.0)));
    assert_eq!(t.to_screen(Point::new(50.0, 50.0)), Point::new(160.0, 160.0));
}

#[test]
fn transform_without_building_is_identity() {
    let mut v = ViewState::default();
    v.camera.zoom = 3.0;
    let t = v.transform(None, Size::new(300.0, 300.0));
    assert!(t.anchor.is_none());
    assert_eq!(t.to_screen(Point::new(7.0, 8.0)), Point::new(7.0, 8.0));
}

#[test]
fn transform_includes_live_drag_when_panning() {
    let mut v = ViewState::default();
    v.camera.drag_offset = Point::new(20.0, -5.0);
    let t = v.transform(None, Size::new(100.0, 100.0));
    assert_eq!(t.pan, Point::new(20.0, -5.0));
}

#[test]
fn transform_suppresses_live_drag_while_measuring() {
    let mut v = ViewState::default();
    v.measurement_mode = true;
    v.camera.drag_offset = Point::new(20.0, -5.0);
    let t = v.transform(None, Size::new(100.0, 100.0));
    assert_eq!(t.pan, Point::new(0.0, 0.0));
}

#[test]
fn transform_suppresses_live_drag_while_dragging_shape() {
    let mut v = ViewState::default();
    v.dragging_shape = true;
    v.camera.pan = Point::new(1.0, 1.0);
    v.camera.drag_offset = Point::new(20.0, -5.0);
    let t = v.transform(None, Size::new(100.0, 100.0));
    assert_eq!(t.pan, Point::new(1.0, 1.0));
}

#[test]
fn transform_composes_live_pinch() {
    let mut v = ViewState::default();
    v.camera.zoom = 2.0;
    v.camera.magnify = 1.25;
    let t = v.transform(None, Size::new(100.0, 100.0));
    assert_eq!(t.zoom, 2.5);
}

// --- reset_view ---

#[test]
fn reset_view_fits_building() {
    let mut v = ViewState::default();
    v.camera.pan = Point::new(99.0, 99.0);
    let b = building(0.0, 0.0, 200.0, 150.0);
    v.reset_view(Some(&b), Size::new(400.0, 800.0));
    assert_eq!(v.camera.zoom, 1.5);
    assert_eq!(v.camera.pan, Point::new(0.0, 0.0));
}

#[test]
fn reset_view_without_map_rect_is_identity() {
    let mut v = ViewState::default();
    v.camera.zoom = 4.0;
    let mut b = building(0.0, 0.0, 200.0, 150.0);
    b.map_x = None;
    v.reset_view(Some(&b), Size::new(400.0, 800.0));
    assert_eq!(v.camera.zoom, 1.0);
}

#[test]
fn reset_view_result_fits_with_padding() {
    let mut v = ViewState::default();
    let b = building(-40.0, 10.0, 640.0, 210.0);
    let viewport = Size::new(390.0, 844.0);
    v.reset_view(Some(&b), viewport);
    let rect = b.map_rect().unwrap_or(Rect::default());
    assert!(rect.width * v.camera.zoom <= viewport.width - 100.0 + 1e-9);
    assert!(rect.height * v.camera.zoom <= viewport.height - 100.0 + 1e-9);
    assert!(v.camera.zoom <= 2.0);
}

// --- apply_pan / apply_pinch ---

#[test]
fn apply_pan_commits_in_normal_mode() {
    let mut v = ViewState::default();
    assert!(v.apply_pan(Point::new(30.0, 40.0)));
    assert_eq!(v.camera.pan, Point::new(30.0, 40.0));
}

#[test]
fn apply_pan_ignored_while_measuring() {
    let mut v = ViewState::default();
    v.measurement_mode = true;
    v.camera.drag_offset = Point::new(3.0, 3.0);
    assert!(!v.apply_pan(Point::new(30.0, 40.0)));
    assert_eq!(v.camera.pan, Point::new(0.0, 0.0));
    assert_eq!(v.camera.drag_offset, Point::new(0.0, 0.0));
}

#[test]
fn apply_pan_ignored_while_dragging_shape() {
    let mut v = ViewState::default();
    v.dragging_shape = true;
    assert!(!v.apply_pan(Point::new(30.0, 40.0)));
    assert_eq!(v.camera.pan, Point::new(0.0, 0.0));
}

#[test]
fn apply_pinch_clamps() {
    let mut v = ViewState::default();
    v.apply_pinch(100.0);
    assert_eq!(v.camera.zoom, 5.0);
}

// --- toggles ---

#[test]
fn simple_toggles_flip() {
    let mut v = ViewState::default();
    v.toggle_grid();
    v.toggle_dimensions();
    v.toggle_measurements();
    v.toggle_shape_editor();
    v.toggle_shape_list();
    assert!(v.show_grid);
    assert!(!v.show_dimensions);
    assert!(!v.show_measurements);
    assert!(v.show_shape_editor);
    assert!(v.show_shape_list);
    v.toggle_grid();
    assert!(!v.show_grid);
}

#[test]
fn leaving_measurement_mode_clears_ruler() {
    let mut v = ViewState::default();
    v.toggle_measurement_mode();
    assert!(v.measurement_mode);
    v.extend_measurement(Point::new(1.0, 1.0));
    v.extend_measurement(Point::new(5.0, 4.0));
    assert!(v.measurement.is_some());
    v.toggle_measurement_mode();
    assert!(!v.measurement_mode);
    assert!(v.measurement.is_none());
}

// --- measurement session ---

#[test]
fn extend_measurement_sets_start_then_end() {
    let mut v = ViewState::default();
    v.extend_measurement(Point::new(100.0, 100.0));
    v.extend_measurement(Point::new(130.0, 120.0));
    v.extend_measurement(Point::new(160.0, 140.0));
    let m = v.measurement.unwrap();
    assert_eq!(m.start, Point::new(100.0, 100.0));
    assert_eq!(m.end, Point::new(160.0, 140.0));
}

#[test]
fn begin_measurement_replaces_previous_ruler() {
    let mut v = ViewState::default();
    v.extend_measurement(Point::new(1.0, 1.0));
    v.extend_measurement(Point::new(9.0, 9.0));
    v.begin_measurement(Point::new(4.0, 4.0));
    assert_eq!(v.measurement, Some(Measurement::starting_at(Point::new(4.0, 4.0))));
}

#[test]
fn clear_measurement_drops_ruler() {
    let mut v = ViewState::default();
    v.extend_measurement(Point::new(1.0, 1.0));
    v.clear_measurement();
    assert!(v.measurement.is_none());
}
