//! Inventory records and photo storage backing the building map.
//!
//! The map crate only ever sees a [`floorplan::building::BuildingView`]. This
//! crate owns the records those views come from, the items stored in each
//! building, and the photos attached to both.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`model`] | `Building` and `Item` records |
//! | [`store`] | `InventoryStore` trait and the in-memory, JSON-snapshotted store |
//! | [`photos`] | `PhotoStore` trait and the filesystem implementation |
//! | [`config`] | Data directories from the environment |

pub mod config;
pub mod model;
pub mod photos;
pub mod store;
