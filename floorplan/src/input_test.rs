use super::*;
use crate::config::MapConfig;

// =============================================================
// InteractionMode
// =============================================================

#[test]
fn mode_default_is_normal() {
    assert_eq!(InteractionMode::default(), InteractionMode::Normal);
    assert_eq!(InteractionMode::of(&ViewState::new(&MapConfig::default())), InteractionMode::Normal);
}

#[test]
fn mode_measurement() {
    let mut view = ViewState::default();
    view.toggle_measurement_mode();
    assert_eq!(InteractionMode::of(&view), InteractionMode::Measurement);
}

#[test]
fn mode_shape_drag() {
    let view = ViewState { dragging_shape: true, ..ViewState::default() };
    assert_eq!(InteractionMode::of(&view), InteractionMode::ShapeDrag);
}

#[test]
fn shape_drag_takes_precedence_over_measurement() {
    let view = ViewState { dragging_shape: true, measurement_mode: true, ..ViewState::default() };
    assert_eq!(InteractionMode::of(&view), InteractionMode::ShapeDrag);
}

// =============================================================
// InputState
// =============================================================

#[test]
fn input_state_default_is_idle() {
    let state = InputState::default();
    assert!(state.is_idle());
    assert_eq!(state.shape_id(), None);
}

#[test]
fn panning_has_no_shape() {
    let state = InputState::Panning { start: Point::new(1.0, 2.0) };
    assert!(!state.is_idle());
    assert_eq!(state.shape_id(), None);
}

#[test]
fn measuring_has_no_shape() {
    assert_eq!(InputState::Measuring.shape_id(), None);
}

#[test]
fn pressing_and_dragging_report_shape() {
    let id = uuid::Uuid::new_v4();
    let pressing = InputState::PressingShape { id, start: Point::default(), orig: Point::new(5.0, 5.0) };
    let dragging = InputState::DraggingShape {
        id,
        start: Point::default(),
        orig: Point::new(5.0, 5.0),
        translation: Point::new(10.0, 0.0),
    };
    assert_eq!(pressing.shape_id(), Some(id));
    assert_eq!(dragging.shape_id(), Some(id));
}

#[test]
fn input_state_is_copy() {
    let a = InputState::Panning { start: Point::new(3.0, 4.0) };
    let b = a;
    assert_eq!(a, b);
}

// =============================================================
// PaletteDrop
// =============================================================

#[test]
fn palette_drop_carries_kind_and_point() {
    let drop = PaletteDrop { kind: ShapeKind::Diamond, at: Point::new(12.0, 34.0) };
    assert_eq!(drop.kind, ShapeKind::Diamond);
    assert_eq!(drop.at, Point::new(12.0, 34.0));
}
