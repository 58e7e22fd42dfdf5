//! Input model: the gesture state machine and the interaction modes it implies.
//!
//! `InputState` is the single-finger gesture being tracked between
//! drag-start and drag-end. Pinch runs alongside it and lives entirely in the
//! camera's transient `magnify`, so it never appears here.
//!
//! All points in this module are screen-space.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::geometry::Point;
use crate::shapes::{ShapeId, ShapeKind};
use crate::view::ViewState;

/// Mutually exclusive interaction modes of the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionMode {
    /// Drags pan, taps select or clear.
    #[default]
    Normal,
    /// Drags draw a ruler, taps clear it.
    Measurement,
    /// A selected shape is following the finger; panning is suppressed.
    ShapeDrag,
}

impl InteractionMode {
    /// Derive the mode from the view flags.
    #[must_use]
    pub fn of(view: &ViewState) -> Self {
        if view.dragging_shape {
            Self::ShapeDrag
        } else if view.measurement_mode {
            Self::Measurement
        } else {
            Self::Normal
        }
    }
}

/// Internal state for the single-finger gesture.
///
/// Each active variant carries what is needed to compute the live
/// translation and to commit the result on release.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InputState {
    /// No gesture in progress.
    #[default]
    Idle,
    /// Dragging the canvas.
    Panning {
        /// Where the finger went down.
        start: Point,
    },
    /// Dragging a ruler in measurement mode.
    Measuring,
    /// Finger is down on the selected shape but hasn't travelled far enough to move it.
    PressingShape {
        id: ShapeId,
        start: Point,
        /// Map-space shape center at drag start.
        orig: Point,
    },
    /// Moving the selected shape.
    DraggingShape {
        id: ShapeId,
        start: Point,
        /// Map-space shape center at drag start.
        orig: Point,
        /// Live screen-space translation from `start`.
        translation: Point,
    },
}

impl InputState {
    /// The shape being pressed or dragged, if any.
    #[must_use]
    pub fn shape_id(&self) -> Option<ShapeId> {
        match *self {
            Self::PressingShape { id, .. } | Self::DraggingShape { id, .. } => Some(id),
            Self::Idle | Self::Panning { .. } | Self::Measuring => None,
        }
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}

/// A shape-type button dragged out of the palette toolbar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaletteDrop {
    pub kind: ShapeKind,
    /// Screen point where the button was released.
    pub at: Point,
}
