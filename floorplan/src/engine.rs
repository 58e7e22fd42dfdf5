//! Map engine: gesture dispatch, dialogs, and the mountable canvas view.

use tracing::{debug, info};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::building::BuildingView;
use crate::camera::Camera;
use crate::config::MapConfig;
use crate::editor::{EditError, PendingDelete, ShapeEditDraft};
use crate::geometry::{Point, Size, Transform};
use crate::hit;
use crate::input::{InputState, InteractionMode, PaletteDrop};
use crate::paint;
use crate::render::{self, Scene, SceneInput};
use crate::shapes::{PlacedShape, ShapeId, ShapePatch, ShapeStore};
use crate::view::ViewState;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    RenderNeeded,
    ShapeCreated(PlacedShape),
    ShapeUpdated { id: ShapeId, patch: ShapePatch },
    ShapeDeleted { id: ShapeId },
    SelectionChanged(Option<ShapeId>),
    ViewReset,
    /// The user asked to leave the map for the list view.
    SwitchToList,
}

/// Core engine state: all logic that doesn't depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
pub struct EngineCore {
    pub view: ViewState,
    pub shapes: ShapeStore,
    pub building: Option<BuildingView>,
    pub input: InputState,
    pub viewport: Size,
    pub dpr: f64,
    pub config: MapConfig,
    /// Open edit dialog, if any.
    pub edit: Option<ShapeEditDraft>,
    /// Delete awaiting confirmation, if any.
    pub pending_delete: Option<PendingDelete>,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self::new(MapConfig::default())
    }
}

impl EngineCore {
    #[must_use]
    pub fn new(config: MapConfig) -> Self {
        Self {
            view: ViewState::new(&config),
            shapes: ShapeStore::new(),
            building: None,
            input: InputState::Idle,
            viewport: Size::default(),
            dpr: 1.0,
            config,
            edit: None,
            pending_delete: None,
        }
    }

    // --- Data inputs ---

    /// Display `building` (or none).
    ///
    /// A different building id discards every placed shape and any gesture or
    /// dialog in flight, then refits the view. The same id only refreshes the
    /// record.
    pub fn set_building(&mut self, building: Option<BuildingView>) -> Vec<Action> {
        let old_id = self.building.as_ref().map(|b| b.id);
        let new_id = building.as_ref().map(|b| b.id);
        self.building = building;
        if old_id == new_id {
            return vec![Action::RenderNeeded];
        }

        info!(?old_id, ?new_id, shapes = self.shapes.len(), "building switched; clearing map session");
        self.shapes.clear();
        self.input = InputState::Idle;
        self.view.dragging_shape = false;
        self.view.show_shape_list = false;
        self.view.clear_measurement();
        self.edit = None;
        self.pending_delete = None;
        self.reset_view()
    }

    /// Update viewport dimensions (CSS pixels) and device pixel ratio.
    ///
    /// The first non-empty layout fits the view to the building.
    pub fn set_viewport(&mut self, width: f64, height: f64, dpr: f64) -> Vec<Action> {
        let first_layout = self.viewport.width <= 0.0 || self.viewport.height <= 0.0;
        self.viewport = Size::new(width, height);
        if dpr.is_finite() && dpr > 0.0 {
            self.dpr = dpr;
        }
        if first_layout && width > 0.0 && height > 0.0 {
            return self.reset_view();
        }
        vec![Action::RenderNeeded]
    }

    /// Replace all shapes with a snapshot the host kept from an earlier session.
    pub fn load_shapes(&mut self, shapes: Vec<PlacedShape>) -> Vec<Action> {
        self.shapes.load_snapshot(shapes);
        vec![Action::SelectionChanged(None), Action::RenderNeeded]
    }

    // --- Queries ---

    /// Transform for the current camera, building and viewport.
    #[must_use]
    pub fn transform(&self) -> Transform {
        self.view.transform(self.building.as_ref(), self.viewport)
    }

    #[must_use]
    pub fn mode(&self) -> InteractionMode {
        InteractionMode::of(&self.view)
    }

    #[must_use]
    pub fn selection(&self) -> Option<ShapeId> {
        self.shapes.selected_id()
    }

    #[must_use]
    pub fn camera(&self) -> Camera {
        self.view.camera
    }

    #[must_use]
    pub fn shape(&self, id: &ShapeId) -> Option<&PlacedShape> {
        self.shapes.get(id)
    }

    /// Map-space center of the shape currently being dragged, at its live position.
    #[must_use]
    pub fn drag_preview(&self) -> Option<(ShapeId, Point)> {
        let InputState::DraggingShape { id, orig, translation, .. } = self.input else {
            return None;
        };
        let zoom = self.transform().zoom;
        Some((id, Point::new(orig.x + translation.x / zoom, orig.y + translation.y / zoom)))
    }

    /// Build the draw list for the current state.
    #[must_use]
    pub fn scene(&self) -> Scene {
        render::build_scene(&SceneInput {
            view: &self.view,
            building: self.building.as_ref(),
            shapes: self.shapes.shapes(),
            selected: self.shapes.selected_id(),
            viewport: self.viewport,
            config: &self.config,
            drag_preview: self.drag_preview(),
        })
    }

    // --- Single-finger drag ---

    /// Starts a fresh gesture. A drag whose release never arrived is dropped.
    pub fn on_drag_start(&mut self, screen_pt: Point) -> Vec<Action> {
        self.drop_gesture();
        if self.view.measurement_mode {
            self.view.begin_measurement(screen_pt);
            self.input = InputState::Measuring;
            return vec![Action::RenderNeeded];
        }

        if let Some(shape) = self.shapes.selected() {
            let scale = self.building.as_ref().and_then(BuildingView::scale);
            if hit::shape_contains(shape, screen_pt, &self.transform(), scale, self.config.hit_slop) {
                self.input = InputState::PressingShape { id: shape.id, start: screen_pt, orig: shape.position };
                return Vec::new();
            }
        }

        self.input = InputState::Panning { start: screen_pt };
        Vec::new()
    }

    pub fn on_drag_move(&mut self, screen_pt: Point) -> Vec<Action> {
        match self.input {
            InputState::Idle => Vec::new(),
            InputState::Panning { start } => {
                if self.view.pan_suppressed() {
                    return Vec::new();
                }
                self.view.camera.drag_offset = screen_pt.delta_from(start);
                vec![Action::RenderNeeded]
            }
            InputState::Measuring => {
                self.view.extend_measurement(screen_pt);
                vec![Action::RenderNeeded]
            }
            InputState::PressingShape { id, start, orig } => {
                if start.distance_to(screen_pt) < self.config.shape_drag_min_distance {
                    return Vec::new();
                }
                debug!(%id, "shape drag started");
                self.view.dragging_shape = true;
                self.view.camera.discard_drag();
                self.input = InputState::DraggingShape { id, start, orig, translation: screen_pt.delta_from(start) };
                vec![Action::RenderNeeded]
            }
            InputState::DraggingShape { id, start, orig, .. } => {
                self.input = InputState::DraggingShape { id, start, orig, translation: screen_pt.delta_from(start) };
                vec![Action::RenderNeeded]
            }
        }
    }

    pub fn on_drag_end(&mut self, screen_pt: Point) -> Vec<Action> {
        let state = std::mem::take(&mut self.input);
        match state {
            InputState::Idle => Vec::new(),
            InputState::Panning { start } => {
                self.view.apply_pan(screen_pt.delta_from(start));
                vec![Action::RenderNeeded]
            }
            InputState::Measuring => {
                self.view.extend_measurement(screen_pt);
                vec![Action::RenderNeeded]
            }
            InputState::PressingShape { id, start, orig } => {
                if start.distance_to(screen_pt) < self.config.shape_drag_min_distance {
                    return Vec::new();
                }
                self.commit_shape_drag(id, orig, screen_pt.delta_from(start))
            }
            InputState::DraggingShape { id, start, orig, .. } => {
                self.commit_shape_drag(id, orig, screen_pt.delta_from(start))
            }
        }
    }

    fn drop_gesture(&mut self) {
        self.input = InputState::Idle;
        self.view.dragging_shape = false;
        self.view.camera.discard_drag();
    }

    fn commit_shape_drag(&mut self, id: ShapeId, orig: Point, translation: Point) -> Vec<Action> {
        self.view.dragging_shape = false;
        self.view.camera.discard_drag();
        let zoom = self.transform().zoom;
        let position = Point::new(orig.x + translation.x / zoom, orig.y + translation.y / zoom);
        let patch = ShapePatch::moved_to(position);
        if !self.shapes.update(&id, &patch) {
            return vec![Action::RenderNeeded];
        }
        info!(%id, x = position.x, y = position.y, "shape moved");
        vec![Action::ShapeUpdated { id, patch }, Action::RenderNeeded]
    }

    // --- Pinch ---

    /// Live pinch magnification relative to the start of the gesture.
    pub fn on_pinch_change(&mut self, magnify: f64) -> Vec<Action> {
        if !magnify.is_finite() || magnify <= 0.0 {
            return Vec::new();
        }
        self.view.camera.magnify = magnify;
        vec![Action::RenderNeeded]
    }

    pub fn on_pinch_end(&mut self, magnify: f64) -> Vec<Action> {
        if magnify.is_finite() && magnify > 0.0 {
            self.view.apply_pinch(magnify);
        } else {
            self.view.camera.magnify = 1.0;
        }
        debug!(zoom = self.view.camera.zoom, "pinch committed");
        vec![Action::RenderNeeded]
    }

    // --- Taps ---

    /// Single tap: clears the ruler in measurement mode, otherwise selects
    /// the topmost shape under the finger or clears the selection.
    pub fn on_tap(&mut self, screen_pt: Point) -> Vec<Action> {
        self.drop_gesture();
        if self.view.measurement_mode {
            self.view.clear_measurement();
            return vec![Action::RenderNeeded];
        }

        let scale = self.building.as_ref().and_then(BuildingView::scale);
        let target = hit::hit_test(screen_pt, self.shapes.shapes(), &self.transform(), scale, self.config.hit_slop);
        let before = self.shapes.selected_id();
        match target {
            Some(id) => {
                self.shapes.select(&id);
            }
            None => self.shapes.clear_selection(),
        }
        let after = self.shapes.selected_id();
        if before == after {
            return Vec::new();
        }
        vec![Action::SelectionChanged(after), Action::RenderNeeded]
    }

    /// Double tap: refit the view unless measuring or placing shapes.
    pub fn on_double_tap(&mut self, _screen_pt: Point) -> Vec<Action> {
        if self.view.measurement_mode || self.view.show_shape_editor {
            return Vec::new();
        }
        self.reset_view()
    }

    // --- Palette ---

    /// Create a shape where a palette button was released.
    pub fn on_palette_drop(&mut self, drop: PaletteDrop) -> Vec<Action> {
        let position = self.transform().to_map(drop.at);
        let shape = PlacedShape::create(drop.kind, position);
        info!(id = %shape.id, kind = ?shape.kind, "shape placed");
        let id = shape.id;
        self.shapes.add(shape.clone());
        vec![Action::ShapeCreated(shape), Action::SelectionChanged(Some(id)), Action::RenderNeeded]
    }

    // --- Toolbar ---

    pub fn reset_view(&mut self) -> Vec<Action> {
        self.view.reset_view(self.building.as_ref(), self.viewport);
        debug!(zoom = self.view.camera.zoom, "view reset");
        vec![Action::ViewReset, Action::RenderNeeded]
    }

    pub fn toggle_grid(&mut self) -> Vec<Action> {
        self.view.toggle_grid();
        vec![Action::RenderNeeded]
    }

    pub fn toggle_dimensions(&mut self) -> Vec<Action> {
        self.view.toggle_dimensions();
        vec![Action::RenderNeeded]
    }

    pub fn toggle_measurements(&mut self) -> Vec<Action> {
        self.view.toggle_measurements();
        vec![Action::RenderNeeded]
    }

    pub fn toggle_measurement_mode(&mut self) -> Vec<Action> {
        self.view.toggle_measurement_mode();
        if matches!(self.input, InputState::Measuring) {
            self.input = InputState::Idle;
        }
        vec![Action::RenderNeeded]
    }

    pub fn toggle_shape_editor(&mut self) -> Vec<Action> {
        self.view.toggle_shape_editor();
        vec![Action::RenderNeeded]
    }

    /// Open or close the shape list. It only opens when there is something to list.
    pub fn toggle_shape_list(&mut self) -> Vec<Action> {
        if !self.view.show_shape_list && self.shapes.is_empty() {
            return Vec::new();
        }
        self.view.toggle_shape_list();
        vec![Action::RenderNeeded]
    }

    /// Ask the host to leave the map for the list view. Any gesture in flight is dropped.
    pub fn switch_to_list(&mut self) -> Vec<Action> {
        self.drop_gesture();
        self.view.show_shape_list = false;
        vec![Action::SwitchToList]
    }

    // --- Shape list ---

    /// Select a row from the shape list and close the panel.
    pub fn select_from_list(&mut self, id: &ShapeId) -> Vec<Action> {
        if !self.shapes.select(id) {
            return Vec::new();
        }
        self.view.show_shape_list = false;
        vec![Action::SelectionChanged(Some(*id)), Action::RenderNeeded]
    }

    // --- Edit dialog ---

    /// Open the edit dialog for `id`, closing the shape list. Returns false if the shape is gone.
    pub fn begin_edit(&mut self, id: &ShapeId) -> bool {
        let Some(shape) = self.shapes.get(id) else {
            return false;
        };
        self.edit = Some(ShapeEditDraft::from_shape(shape));
        self.view.show_shape_list = false;
        true
    }

    /// Apply the open draft.
    ///
    /// # Errors
    ///
    /// Returns the parse failure without mutating anything; the draft stays
    /// open so the dialog keeps its fields. `ShapeGone` closes the draft.
    pub fn save_edit(&mut self) -> Result<Vec<Action>, EditError> {
        let draft = self.edit.as_ref().ok_or(EditError::NoDraft)?;
        let id = draft.id;
        let patch = draft.to_patch()?;
        self.edit = None;
        if !self.shapes.update(&id, &patch) {
            return Err(EditError::ShapeGone(id));
        }
        info!(%id, "shape edited");
        Ok(vec![Action::ShapeUpdated { id, patch }, Action::RenderNeeded])
    }

    pub fn cancel_edit(&mut self) {
        self.edit = None;
    }

    // --- Delete confirmation ---

    /// Ask to delete `id`, closing the shape list. Returns false if the shape is gone.
    pub fn request_delete(&mut self, id: &ShapeId) -> bool {
        let Some(shape) = self.shapes.get(id) else {
            return false;
        };
        self.pending_delete = Some(PendingDelete::for_shape(shape));
        self.view.show_shape_list = false;
        true
    }

    pub fn confirm_delete(&mut self) -> Vec<Action> {
        let Some(pending) = self.pending_delete.take() else {
            return Vec::new();
        };
        let was_selected = self.shapes.is_selected(&pending.id);
        if self.shapes.delete(&pending.id).is_none() {
            return Vec::new();
        }
        info!(id = %pending.id, "shape deleted");
        if matches!(self.edit, Some(ref draft) if draft.id == pending.id) {
            self.edit = None;
        }
        let mut actions = vec![Action::ShapeDeleted { id: pending.id }];
        if was_selected {
            actions.push(Action::SelectionChanged(None));
        }
        actions.push(Action::RenderNeeded);
        actions
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }
}

/// The mountable map view. Wraps `EngineCore` and owns the browser canvas element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    pub core: EngineCore,
    on_switch_to_list: Box<dyn FnMut()>,
}

impl Engine {
    /// Mount the map on `canvas`, showing `building`.
    ///
    /// `on_switch_to_list` runs when the user asks to leave the map.
    #[must_use]
    pub fn new(
        canvas: HtmlCanvasElement,
        building: Option<BuildingView>,
        config: MapConfig,
        on_switch_to_list: Box<dyn FnMut()>,
    ) -> Self {
        let mut core = EngineCore::new(config);
        core.building = building;
        Self { canvas, core, on_switch_to_list }
    }

    /// Forward host-bound actions. `SwitchToList` is handled here.
    fn dispatch(&mut self, actions: Vec<Action>) -> Vec<Action> {
        let (switch, rest): (Vec<_>, Vec<_>) = actions.into_iter().partition(|a| *a == Action::SwitchToList);
        if !switch.is_empty() {
            (self.on_switch_to_list)();
        }
        rest
    }

    // --- Delegated inputs ---

    pub fn set_building(&mut self, building: Option<BuildingView>) -> Vec<Action> {
        self.core.set_building(building)
    }

    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) -> Vec<Action> {
        self.canvas.set_width(device_pixels(width_css, dpr));
        self.canvas.set_height(device_pixels(height_css, dpr));
        self.core.set_viewport(width_css, height_css, dpr)
    }

    pub fn on_drag_start(&mut self, screen_pt: Point) -> Vec<Action> {
        self.core.on_drag_start(screen_pt)
    }

    pub fn on_drag_move(&mut self, screen_pt: Point) -> Vec<Action> {
        self.core.on_drag_move(screen_pt)
    }

    pub fn on_drag_end(&mut self, screen_pt: Point) -> Vec<Action> {
        self.core.on_drag_end(screen_pt)
    }

    pub fn on_pinch_change(&mut self, magnify: f64) -> Vec<Action> {
        self.core.on_pinch_change(magnify)
    }

    pub fn on_pinch_end(&mut self, magnify: f64) -> Vec<Action> {
        self.core.on_pinch_end(magnify)
    }

    pub fn on_tap(&mut self, screen_pt: Point) -> Vec<Action> {
        self.core.on_tap(screen_pt)
    }

    pub fn on_double_tap(&mut self, screen_pt: Point) -> Vec<Action> {
        self.core.on_double_tap(screen_pt)
    }

    pub fn on_palette_drop(&mut self, drop: PaletteDrop) -> Vec<Action> {
        self.core.on_palette_drop(drop)
    }

    pub fn switch_to_list(&mut self) -> Vec<Action> {
        let actions = self.core.switch_to_list();
        self.dispatch(actions)
    }

    // --- Render ---

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the 2D context is unavailable or a `Canvas2D` call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        let ctx = self
            .canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(JsValue::from)?;
        paint::paint(&ctx, &self.core.scene(), self.core.viewport, self.core.dpr)
    }

    // --- Delegated queries ---

    #[must_use]
    pub fn selection(&self) -> Option<ShapeId> {
        self.core.selection()
    }

    #[must_use]
    pub fn camera(&self) -> Camera {
        self.core.camera()
    }

    #[must_use]
    pub fn shape(&self, id: &ShapeId) -> Option<&PlacedShape> {
        self.core.shape(id)
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn device_pixels(css: f64, dpr: f64) -> u32 {
    (css * dpr).round().clamp(0.0, f64::from(u32::MAX)) as u32
}
