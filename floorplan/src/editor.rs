//! Shape edit dialog and delete confirmation.
//!
//! The host renders the dialog; this module holds its text fields and turns
//! them into a [`ShapePatch`]. A draft that fails to parse is left untouched
//! so the host can keep the dialog open.

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

use crate::shapes::{PlacedShape, ShapeId, ShapeKind, ShapePatch};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EditError {
    #[error("no shape is being edited")]
    NoDraft,
    #[error("shape {0} no longer exists")]
    ShapeGone(ShapeId),
    #[error("{field} is not a number: {input:?}")]
    NotANumber { field: &'static str, input: String },
    #[error("{field} must be finite, got {value}")]
    NotFinite { field: &'static str, value: f64 },
}

/// Text fields of the edit dialog for one shape.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeEditDraft {
    pub id: ShapeId,
    pub kind: ShapeKind,
    pub label: String,
    pub width_text: String,
    /// Ignored for circles.
    pub length_text: String,
}

impl ShapeEditDraft {
    /// Pre-fill from `shape`, showing dimensions as whole feet.
    #[must_use]
    pub fn from_shape(shape: &PlacedShape) -> Self {
        Self {
            id: shape.id,
            kind: shape.kind,
            label: shape.label.clone(),
            width_text: format!("{:.0}", shape.width.trunc()),
            length_text: format!("{:.0}", shape.length.trunc()),
        }
    }

    /// Field caption for the width input.
    #[must_use]
    pub fn width_caption(&self) -> &'static str {
        if self.kind.uses_length() { "Width (ft)" } else { "Diameter (ft)" }
    }

    /// Parse the draft into a patch of label, width and length.
    ///
    /// Circles take their length from the width.
    ///
    /// # Errors
    ///
    /// `NotANumber` when a dimension doesn't parse, `NotFinite` for `inf` or
    /// `NaN`. Zero and negative sizes are accepted as typed.
    pub fn to_patch(&self) -> Result<ShapePatch, EditError> {
        let width = parse_dimension("width", &self.width_text)?;
        let length = if self.kind.uses_length() {
            parse_dimension("length", &self.length_text)?
        } else {
            width
        };
        Ok(ShapePatch {
            position: None,
            label: Some(self.label.clone()),
            width: Some(width),
            length: Some(length),
        })
    }
}

fn parse_dimension(field: &'static str, input: &str) -> Result<f64, EditError> {
    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| EditError::NotANumber { field, input: input.to_owned() })?;
    if !value.is_finite() {
        return Err(EditError::NotFinite { field, value });
    }
    Ok(value)
}

/// A delete awaiting the user's confirmation.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingDelete {
    pub id: ShapeId,
    /// Label at the time of the request, for the confirmation prompt.
    pub label: String,
}

impl PendingDelete {
    #[must_use]
    pub fn for_shape(shape: &PlacedShape) -> Self {
        Self { id: shape.id, label: shape.label.clone() }
    }

    #[must_use]
    pub fn prompt(&self) -> String {
        format!("Are you sure you want to delete \"{}\"?", self.label)
    }
}
