//! Inventory configuration parsed from environment variables.

use std::path::PathBuf;

pub const DEFAULT_DATA_DIR: &str = "./clutterbug-data";
pub const PHOTO_DIR_NAME: &str = "ClutterBugPhotos";
pub const STORE_FILE_NAME: &str = "inventory.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryConfig {
    /// Root for the record snapshot.
    pub data_dir: PathBuf,
    /// Directory holding `<id>.png` photos.
    pub photo_dir: PathBuf,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl InventoryConfig {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `CLUTTERBUG_DATA_DIR`: default `./clutterbug-data`
    /// - `CLUTTERBUG_PHOTO_DIR`: default `<data dir>/ClutterBugPhotos`
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`InventoryConfig::from_env`] with an explicit variable source.
    /// Empty values count as unset.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let data_dir = PathBuf::from(var("CLUTTERBUG_DATA_DIR").unwrap_or_else(|| DEFAULT_DATA_DIR.to_string()));
        let photo_dir = var("CLUTTERBUG_PHOTO_DIR").map_or_else(|| data_dir.join(PHOTO_DIR_NAME), PathBuf::from);
        Self { data_dir, photo_dir }
    }

    /// Path of the JSON record snapshot.
    #[must_use]
    pub fn store_path(&self) -> PathBuf {
        self.data_dir.join(STORE_FILE_NAME)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
