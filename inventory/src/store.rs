//! Inventory store: buildings and the items inside them.
//!
//! DESIGN
//! ======
//! Every item belongs to exactly one building. Deleting a building deletes
//! its items; when the caller passes a photo store, the photos of the
//! building and of every removed item go with them. Photo cleanup runs after
//! the records are gone, so a failed photo delete is logged and skipped
//! rather than leaving a half-deleted building behind.
//!
//! `MemoryStore` keeps records in insertion order and can snapshot itself to
//! a JSON file.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::model::{Building, Item};
use crate::photos::PhotoStore;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum InventoryError {
    #[error("building not found: {0}")]
    BuildingNotFound(Uuid),
    #[error("item not found: {0}")]
    ItemNotFound(Uuid),
    #[error("duplicate id: {0}")]
    DuplicateId(Uuid),
    #[error("item {item} references missing building {building}")]
    OrphanItem { item: Uuid, building: Uuid },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Persistence for buildings and items.
pub trait InventoryStore {
    /// # Errors
    ///
    /// `DuplicateId` if a building with the same id exists.
    fn create_building(&mut self, building: Building) -> Result<(), InventoryError>;

    /// # Errors
    ///
    /// `BuildingNotFound` if there is no such building.
    fn building(&self, id: Uuid) -> Result<Building, InventoryError>;

    fn buildings(&self) -> Vec<Building>;

    /// Replace the stored building with the same id.
    ///
    /// # Errors
    ///
    /// `BuildingNotFound` if there is no such building.
    fn update_building(&mut self, building: Building) -> Result<(), InventoryError>;

    /// Delete a building and every item in it. Returns the removed items.
    ///
    /// # Errors
    ///
    /// `BuildingNotFound` if there is no such building.
    fn delete_building(&mut self, id: Uuid, photos: Option<&dyn PhotoStore>) -> Result<Vec<Item>, InventoryError>;

    /// # Errors
    ///
    /// `BuildingNotFound` if the item's building doesn't exist, `DuplicateId`
    /// if an item with the same id exists.
    fn create_item(&mut self, item: Item) -> Result<(), InventoryError>;

    /// # Errors
    ///
    /// `ItemNotFound` if there is no such item.
    fn item(&self, id: Uuid) -> Result<Item, InventoryError>;

    /// Items whose building is `building_id`, in insertion order.
    ///
    /// # Errors
    ///
    /// `BuildingNotFound` if there is no such building.
    fn items_in(&self, building_id: Uuid) -> Result<Vec<Item>, InventoryError>;

    /// Replace the stored item with the same id.
    ///
    /// # Errors
    ///
    /// `ItemNotFound` if there is no such item, `BuildingNotFound` if it was
    /// moved to a building that doesn't exist.
    fn update_item(&mut self, item: Item) -> Result<(), InventoryError>;

    /// # Errors
    ///
    /// `ItemNotFound` if there is no such item.
    fn delete_item(&mut self, id: Uuid, photos: Option<&dyn PhotoStore>) -> Result<Item, InventoryError>;
}

// =============================================================================
// MEMORY STORE
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoryStore {
    buildings: Vec<Building>,
    items: Vec<Item>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Write a JSON snapshot of every record to `path`.
    ///
    /// # Errors
    ///
    /// Returns `Json` if serialization fails or `Io` if the write fails.
    pub fn save_to(&self, path: &Path) -> Result<(), InventoryError> {
        let json = serde_json::to_vec_pretty(self)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, json)?;
        info!(path = %path.display(), buildings = self.buildings.len(), items = self.items.len(), "inventory saved");
        Ok(())
    }

    /// Load a snapshot written by [`MemoryStore::save_to`].
    ///
    /// # Errors
    ///
    /// Returns `Io` if the file can't be read, `Json` if it doesn't parse,
    /// `DuplicateId` or `OrphanItem` if the records are inconsistent.
    pub fn load_from(path: &Path) -> Result<Self, InventoryError> {
        let bytes = fs::read(path)?;
        let snapshot: Self = serde_json::from_slice(&bytes)?;
        let mut store = Self::new();
        for building in snapshot.buildings {
            store.create_building(building)?;
        }
        for item in snapshot.items {
            let (item_id, building) = (item.id, item.building_id);
            store.create_item(item).map_err(|e| match e {
                InventoryError::BuildingNotFound(_) => InventoryError::OrphanItem { item: item_id, building },
                other => other,
            })?;
        }
        info!(path = %path.display(), buildings = store.buildings.len(), items = store.items.len(), "inventory loaded");
        Ok(store)
    }

    /// Load `path` if it exists, otherwise start empty.
    ///
    /// # Errors
    ///
    /// Same as [`MemoryStore::load_from`] for an existing file.
    pub fn load_or_default(path: &Path) -> Result<Self, InventoryError> {
        if path.exists() { Self::load_from(path) } else { Ok(Self::new()) }
    }

    fn building_index(&self, id: Uuid) -> Result<usize, InventoryError> {
        self.buildings
            .iter()
            .position(|b| b.id == id)
            .ok_or(InventoryError::BuildingNotFound(id))
    }

    fn item_index(&self, id: Uuid) -> Result<usize, InventoryError> {
        self.items
            .iter()
            .position(|i| i.id == id)
            .ok_or(InventoryError::ItemNotFound(id))
    }
}

impl InventoryStore for MemoryStore {
    fn create_building(&mut self, building: Building) -> Result<(), InventoryError> {
        if self.buildings.iter().any(|b| b.id == building.id) {
            return Err(InventoryError::DuplicateId(building.id));
        }
        info!(id = %building.id, name = %building.name, "building created");
        self.buildings.push(building);
        Ok(())
    }

    fn building(&self, id: Uuid) -> Result<Building, InventoryError> {
        let idx = self.building_index(id)?;
        Ok(self.buildings[idx].clone())
    }

    fn buildings(&self) -> Vec<Building> {
        self.buildings.clone()
    }

    fn update_building(&mut self, building: Building) -> Result<(), InventoryError> {
        let idx = self.building_index(building.id)?;
        self.buildings[idx] = building;
        Ok(())
    }

    fn delete_building(&mut self, id: Uuid, photos: Option<&dyn PhotoStore>) -> Result<Vec<Item>, InventoryError> {
        let idx = self.building_index(id)?;
        let building = self.buildings.remove(idx);
        let (removed, kept): (Vec<Item>, Vec<Item>) =
            std::mem::take(&mut self.items).into_iter().partition(|i| i.building_id == id);
        self.items = kept;
        info!(%id, items = removed.len(), "building deleted with its items");

        if let Some(photos) = photos {
            let photo_ids = building.photo_id.iter().chain(removed.iter().filter_map(|i| i.photo_id.as_ref()));
            for photo_id in photo_ids {
                if let Err(e) = photos.delete(photo_id) {
                    warn!(%id, %photo_id, error = %e, "photo cleanup failed");
                }
            }
        }
        Ok(removed)
    }

    fn create_item(&mut self, item: Item) -> Result<(), InventoryError> {
        self.building_index(item.building_id)?;
        if self.items.iter().any(|i| i.id == item.id) {
            return Err(InventoryError::DuplicateId(item.id));
        }
        info!(id = %item.id, building = %item.building_id, name = %item.name, "item created");
        self.items.push(item);
        Ok(())
    }

    fn item(&self, id: Uuid) -> Result<Item, InventoryError> {
        let idx = self.item_index(id)?;
        Ok(self.items[idx].clone())
    }

    fn items_in(&self, building_id: Uuid) -> Result<Vec<Item>, InventoryError> {
        self.building_index(building_id)?;
        Ok(self.items.iter().filter(|i| i.building_id == building_id).cloned().collect())
    }

    fn update_item(&mut self, item: Item) -> Result<(), InventoryError> {
        let idx = self.item_index(item.id)?;
        self.building_index(item.building_id)?;
        self.items[idx] = item;
        Ok(())
    }

    fn delete_item(&mut self, id: Uuid, photos: Option<&dyn PhotoStore>) -> Result<Item, InventoryError> {
        let idx = self.item_index(id)?;
        let item = self.items.remove(idx);
        info!(%id, "item deleted");
        if let (Some(photos), Some(photo_id)) = (photos, item.photo_id.as_deref()) {
            if let Err(e) = photos.delete(photo_id) {
                warn!(%id, %photo_id, error = %e, "photo cleanup failed");
            }
        }
        Ok(item)
    }
}
