#![allow(clippy::clone_on_copy, clippy::float_cmp)]

use super::*;

fn make_shape(kind: ShapeKind) -> PlacedShape {
    PlacedShape::create(kind, Point::new(0.0, 0.0))
}

fn scale(x: f64, y: f64) -> MapScale {
    MapScale { x, y }
}

// =============================================================
// ShapeKind
// =============================================================

#[test]
fn kind_serde_all_variants() {
    let cases = [
        (ShapeKind::Rectangle, "\"rectangle\""),
        (ShapeKind::Circle, "\"circle\""),
        (ShapeKind::Triangle, "\"triangle\""),
        (ShapeKind::Diamond, "\"diamond\""),
    ];
    for (kind, expected) in cases {
        assert_eq!(serde_json::to_string(&kind).unwrap(), expected);
        let back: ShapeKind = serde_json::from_str(expected).unwrap();
        assert_eq!(back, kind);
    }
}

#[test]
fn kind_deserialize_invalid_rejects() {
    assert!(serde_json::from_str::<ShapeKind>("\"hexagon\"").is_err());
}

#[test]
fn kind_defaults() {
    assert_eq!(ShapeKind::Circle.default_width(), 8.0);
    assert_eq!(ShapeKind::Circle.default_length(), 8.0);
    for kind in [ShapeKind::Rectangle, ShapeKind::Triangle, ShapeKind::Diamond] {
        assert_eq!(kind.default_width(), 4.0);
        assert_eq!(kind.default_length(), 6.0);
    }
}

#[test]
fn kind_uses_length_except_circle() {
    assert!(!ShapeKind::Circle.uses_length());
    assert!(ShapeKind::Rectangle.uses_length());
    assert!(ShapeKind::Triangle.uses_length());
    assert!(ShapeKind::Diamond.uses_length());
}

#[test]
fn kind_dimension_labels() {
    assert_eq!(ShapeKind::Circle.dimension_label(), "Diameter (ft)");
    assert_eq!(ShapeKind::Diamond.dimension_label(), "Length × Width (ft)");
}

#[test]
fn kind_all_is_palette_order() {
    let names: Vec<_> = ShapeKind::ALL.iter().map(|k| k.display_name()).collect();
    assert_eq!(names, ["Rectangle", "Circle", "Triangle", "Diamond"]);
}

// =============================================================
// ShapeColor
// =============================================================

#[test]
fn color_default_is_blue() {
    assert_eq!(ShapeColor::default(), ShapeColor::Blue);
}

#[test]
fn color_fill_differs_from_stroke() {
    for color in ShapeColor::ALL {
        assert_ne!(color.css(), color.css_fill());
        assert!(color.css_fill().starts_with("rgba("));
    }
}

// =============================================================
// PlacedShape
// =============================================================

#[test]
fn create_uses_kind_defaults_and_label() {
    let s = PlacedShape::create(ShapeKind::Triangle, Point::new(12.0, 34.0));
    assert_eq!(s.kind, ShapeKind::Triangle);
    assert_eq!(s.position, Point::new(12.0, 34.0));
    assert_eq!(s.width, 4.0);
    assert_eq!(s.length, 6.0);
    assert_eq!(s.label, "New Triangle");
    assert_eq!(s.color, ShapeColor::Blue);
}

#[test]
fn create_assigns_unique_ids() {
    let a = make_shape(ShapeKind::Rectangle);
    let b = make_shape(ShapeKind::Rectangle);
    assert_ne!(a.id, b.id);
}

#[test]
fn measurement_text_for_rectangle() {
    let s = make_shape(ShapeKind::Rectangle);
    assert_eq!(s.measurement_text(), "6ft × 4ft");
}

#[test]
fn measurement_text_for_circle() {
    let s = make_shape(ShapeKind::Circle);
    assert_eq!(s.measurement_text(), "8ft ⌀");
}

#[test]
fn measurement_text_truncates() {
    let mut s = make_shape(ShapeKind::Diamond);
    s.length = 6.9;
    s.width = 4.5;
    assert_eq!(s.measurement_text(), "6ft × 4ft");
}

#[test]
fn map_size_scaled_rectangle() {
    let mut s = make_shape(ShapeKind::Rectangle);
    s.width = 4.0;
    s.length = 6.0;
    assert_eq!(s.map_size(Some(scale(10.0, 10.0))), Size::new(60.0, 40.0));
}

#[test]
fn map_size_scaled_per_axis() {
    let s = make_shape(ShapeKind::Triangle);
    assert_eq!(s.map_size(Some(scale(2.0, 3.0))), Size::new(12.0, 12.0));
}

#[test]
fn map_size_circle_uses_average_scale() {
    let s = make_shape(ShapeKind::Circle);
    assert_eq!(s.map_size(Some(scale(10.0, 20.0))), Size::new(120.0, 120.0));
}

#[test]
fn map_size_unscaled_falls_back_to_raw() {
    let rect = make_shape(ShapeKind::Rectangle);
    assert_eq!(rect.map_size(None), Size::new(6.0, 4.0));
    let circle = make_shape(ShapeKind::Circle);
    assert_eq!(circle.map_size(None), Size::new(8.0, 8.0));
}

#[test]
fn placed_shape_serde_roundtrip() {
    let s = make_shape(ShapeKind::Diamond);
    let json = serde_json::to_string(&s).unwrap();
    let back: PlacedShape = serde_json::from_str(&json).unwrap();
    assert_eq!(back, s);
}

// =============================================================
// ShapePatch
// =============================================================

#[test]
fn patch_skips_absent_fields() {
    let patch = ShapePatch::moved_to(Point::new(1.0, 2.0));
    let json = serde_json::to_value(&patch).unwrap();
    assert!(json.get("position").is_some());
    assert!(json.get("label").is_none());
    assert!(json.get("width").is_none());
}

// =============================================================
// ShapeStore
// =============================================================

#[test]
fn store_starts_empty() {
    let store = ShapeStore::new();
    assert!(store.is_empty());
    assert_eq!(store.len(), 0);
    assert!(store.selected().is_none());
}

#[test]
fn add_appends_and_selects() {
    let mut store = ShapeStore::new();
    let a = make_shape(ShapeKind::Rectangle);
    let b = make_shape(ShapeKind::Circle);
    let (a_id, b_id) = (a.id, b.id);
    store.add(a);
    assert_eq!(store.selected_id(), Some(a_id));
    store.add(b);
    assert_eq!(store.selected_id(), Some(b_id));
    assert_eq!(store.shapes().iter().map(|s| s.id).collect::<Vec<_>>(), vec![a_id, b_id]);
}

#[test]
fn update_applies_only_present_fields() {
    let mut store = ShapeStore::new();
    let s = make_shape(ShapeKind::Rectangle);
    let id = s.id;
    store.add(s);
    let patch = ShapePatch { label: Some("Garage".into()), width: Some(10.0), ..Default::default() };
    assert!(store.update(&id, &patch));
    let got = store.get(&id).unwrap();
    assert_eq!(got.label, "Garage");
    assert_eq!(got.width, 10.0);
    assert_eq!(got.length, 6.0);
    assert_eq!(got.position, Point::new(0.0, 0.0));
}

#[test]
fn update_position() {
    let mut store = ShapeStore::new();
    let s = make_shape(ShapeKind::Diamond);
    let id = s.id;
    store.add(s);
    assert!(store.update(&id, &ShapePatch::moved_to(Point::new(5.0, -5.0))));
    assert_eq!(store.get(&id).unwrap().position, Point::new(5.0, -5.0));
}

#[test]
fn update_missing_id_is_noop() {
    let mut store = ShapeStore::new();
    let s = make_shape(ShapeKind::Rectangle);
    store.add(s.clone());
    assert!(!store.update(&Uuid::new_v4(), &ShapePatch::moved_to(Point::new(9.0, 9.0))));
    assert_eq!(store.shapes(), &[s]);
}

#[test]
fn delete_removes_and_clears_selection() {
    let mut store = ShapeStore::new();
    let s = make_shape(ShapeKind::Rectangle);
    let id = s.id;
    store.add(s);
    let removed = store.delete(&id).unwrap();
    assert_eq!(removed.id, id);
    assert!(store.is_empty());
    assert!(store.selected_id().is_none());
}

#[test]
fn delete_unselected_keeps_selection() {
    let mut store = ShapeStore::new();
    let a = make_shape(ShapeKind::Rectangle);
    let b = make_shape(ShapeKind::Circle);
    let (a_id, b_id) = (a.id, b.id);
    store.add(a);
    store.add(b);
    store.delete(&a_id);
    assert_eq!(store.selected_id(), Some(b_id));
}

#[test]
fn delete_missing_id_is_noop() {
    let mut store = ShapeStore::new();
    store.add(make_shape(ShapeKind::Rectangle));
    assert!(store.delete(&Uuid::new_v4()).is_none());
    assert_eq!(store.len(), 1);
}

#[test]
fn select_by_id() {
    let mut store = ShapeStore::new();
    let a = make_shape(ShapeKind::Rectangle);
    let a_id = a.id;
    store.add(a);
    store.add(make_shape(ShapeKind::Circle));
    assert!(store.select(&a_id));
    assert!(store.is_selected(&a_id));
    assert_eq!(store.selected().map(|s| s.id), Some(a_id));
}

#[test]
fn select_unknown_id_keeps_selection() {
    let mut store = ShapeStore::new();
    let a = make_shape(ShapeKind::Rectangle);
    let a_id = a.id;
    store.add(a);
    assert!(!store.select(&Uuid::new_v4()));
    assert_eq!(store.selected_id(), Some(a_id));
}

#[test]
fn selection_is_exclusive() {
    let mut store = ShapeStore::new();
    let ids: Vec<_> = (0..4)
        .map(|_| {
            let s = make_shape(ShapeKind::Triangle);
            let id = s.id;
            store.add(s);
            id
        })
        .collect();
    store.select(&ids[1]);
    let selected = ids.iter().filter(|id| store.is_selected(id)).count();
    assert_eq!(selected, 1);
}

#[test]
fn clear_selection_keeps_shapes() {
    let mut store = ShapeStore::new();
    store.add(make_shape(ShapeKind::Rectangle));
    store.clear_selection();
    assert!(store.selected_id().is_none());
    assert_eq!(store.len(), 1);
}

#[test]
fn clear_empties_everything() {
    let mut store = ShapeStore::new();
    store.add(make_shape(ShapeKind::Rectangle));
    store.add(make_shape(ShapeKind::Circle));
    store.clear();
    assert!(store.is_empty());
    assert!(store.selected().is_none());
    assert!(store.shapes().is_empty());
}

#[test]
fn load_snapshot_replaces_and_drops_selection() {
    let mut store = ShapeStore::new();
    store.add(make_shape(ShapeKind::Rectangle));
    let incoming = vec![make_shape(ShapeKind::Circle), make_shape(ShapeKind::Diamond)];
    store.load_snapshot(incoming.clone());
    assert_eq!(store.shapes(), incoming.as_slice());
    assert!(store.selected_id().is_none());
}

#[test]
fn store_serde_roundtrip_preserves_order_and_selection() {
    let mut store = ShapeStore::new();
    store.add(make_shape(ShapeKind::Rectangle));
    store.add(make_shape(ShapeKind::Circle));
    let json = serde_json::to_string(&store).unwrap();
    let back: ShapeStore = serde_json::from_str(&json).unwrap();
    assert_eq!(back.shapes(), store.shapes());
    assert_eq!(back.selected_id(), store.selected_id());
}
