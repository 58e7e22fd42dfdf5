#![allow(clippy::float_cmp)]

use super::*;

fn workshop() -> BuildingView {
    BuildingView {
        id: Uuid::new_v4(),
        name: "Workshop".into(),
        length_feet: Some(20.0),
        width_feet: Some(15.0),
        map_x: Some(0.0),
        map_y: Some(0.0),
        map_width: Some(200.0),
        map_height: Some(150.0),
        label: None,
        shape_type: Some("rectangle".into()),
    }
}

#[test]
fn map_rect_when_all_fields_present() {
    assert_eq!(workshop().map_rect(), Some(Rect::new(0.0, 0.0, 200.0, 150.0)));
}

#[test]
fn map_rect_none_when_any_field_missing() {
    let mut b = workshop();
    b.map_y = None;
    assert!(b.map_rect().is_none());
}

#[test]
fn display_label_prefers_label() {
    let mut b = workshop();
    assert_eq!(b.display_label(), "Workshop");
    b.label = Some("Shop".into());
    assert_eq!(b.display_label(), "Shop");
}

#[test]
fn scale_is_map_units_per_foot() {
    let s = workshop().scale().unwrap();
    assert_eq!(s.x, 10.0);
    assert_eq!(s.y, 10.0);
    assert_eq!(s.average(), 10.0);
}

#[test]
fn scale_none_for_zero_length() {
    let mut b = workshop();
    b.length_feet = Some(0.0);
    assert!(b.scale().is_none());
}

#[test]
fn scale_none_for_negative_width() {
    let mut b = workshop();
    b.width_feet = Some(-3.0);
    assert!(b.scale().is_none());
}

#[test]
fn scale_none_without_map_size() {
    let mut b = workshop();
    b.map_width = None;
    assert!(b.scale().is_none());
}

#[test]
fn scale_axes_can_differ() {
    let mut b = workshop();
    b.map_height = Some(300.0);
    let s = b.scale().unwrap();
    assert_eq!(s.x, 10.0);
    assert_eq!(s.y, 20.0);
    assert_eq!(s.average(), 15.0);
}

#[test]
fn outline_drawn_for_rectangle_any_case() {
    let mut b = workshop();
    assert!(b.draws_outline());
    b.shape_type = Some("Rectangle".into());
    assert!(b.draws_outline());
    b.shape_type = None;
    assert!(b.draws_outline());
    b.shape_type = Some("circle".into());
    assert!(!b.draws_outline());
}

#[test]
fn deserializes_with_missing_optionals() {
    let json = serde_json::json!({
        "id": Uuid::nil(),
        "name": "Shed",
    });
    let b: BuildingView = serde_json::from_value(json).unwrap();
    assert_eq!(b.name, "Shed");
    assert!(b.map_rect().is_none());
    assert!(b.scale().is_none());
}
