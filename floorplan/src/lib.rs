//! Interactive building map for the inventory app.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It draws one
//! building's floor outline on a canvas, lets the user pan, pinch-zoom and
//! measure, and keeps the session's placed shapes (user annotations) in
//! memory. The host JavaScript layer wires DOM gestures to the engine, renders
//! the toolbar and dialogs, and reacts to the returned [`engine::Action`]s.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`geometry`] | Points, rects and the screen/map [`geometry::Transform`] |
//! | [`camera`] | Committed and transient zoom/pan, fit-to-building |
//! | [`view`] | Camera plus display toggles and the live ruler |
//! | [`building`] | Building view-model and its feet-per-unit scale |
//! | [`shapes`] | Placed shapes and their in-memory store |
//! | [`measure`] | Ruler measurements and the scale bar |
//! | [`hit`] | Hit-testing placed shapes |
//! | [`input`] | Gesture state machine and interaction modes |
//! | [`editor`] | Edit dialog drafts and delete confirmation |
//! | [`render`] | Scene building: state in, draw list out |
//! | [`paint`] | Plays a draw list onto a `Canvas2D` context |
//! | [`config`] | Host-supplied map configuration |
//! | [`consts`] | Shared numeric constants (zoom limits, spacing, sizes) |

pub mod building;
pub mod camera;
pub mod config;
pub mod consts;
pub mod editor;
pub mod engine;
pub mod geometry;
pub mod hit;
pub mod input;
pub mod measure;
pub mod paint;
pub mod render;
pub mod shapes;
pub mod view;
