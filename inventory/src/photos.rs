//! Photo storage for buildings and items.
//!
//! DESIGN
//! ======
//! Records only hold a photo identifier; the bytes live behind a
//! [`PhotoStore`] passed in by the caller. The filesystem store keeps one
//! `<id>.png` per photo in a single directory. Identifiers are treated as
//! file stems, so anything that could escape that directory is rejected.

#[cfg(test)]
#[path = "photos_test.rs"]
mod photos_test;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info};
use uuid::Uuid;

const PHOTO_EXTENSION: &str = "png";

#[derive(Debug, thiserror::Error)]
pub enum PhotoError {
    #[error("invalid photo id: {0:?}")]
    InvalidId(String),
    #[error("photo io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Saves, loads, and deletes photo bytes by identifier.
pub trait PhotoStore {
    /// Write `bytes` under `id`, replacing any existing photo.
    ///
    /// # Errors
    ///
    /// `InvalidId` for an unusable identifier, `Io` if the write fails.
    fn save(&self, bytes: &[u8], id: &str) -> Result<(), PhotoError>;

    /// Read the photo stored under `id`, or `None` if there isn't one.
    ///
    /// # Errors
    ///
    /// `InvalidId` for an unusable identifier, `Io` if the read fails.
    fn load(&self, id: &str) -> Result<Option<Vec<u8>>, PhotoError>;

    /// Remove the photo stored under `id`. A missing photo is not an error.
    ///
    /// # Errors
    ///
    /// `InvalidId` for an unusable identifier, `Io` if the removal fails.
    fn delete(&self, id: &str) -> Result<(), PhotoError>;
}

/// Fresh identifier for a new photo.
#[must_use]
pub fn new_photo_id() -> String {
    Uuid::new_v4().to_string()
}

// =============================================================================
// FILESYSTEM
// =============================================================================

/// Photos as `<dir>/<id>.png`.
#[derive(Debug, Clone)]
pub struct FsPhotoStore {
    dir: PathBuf,
}

impl FsPhotoStore {
    /// Open the store rooted at `dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the directory can't be created.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, PhotoError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        debug!(dir = %dir.display(), "photo directory ready");
        Ok(Self { dir })
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, id: &str) -> Result<PathBuf, PhotoError> {
        validate_id(id)?;
        Ok(self.dir.join(format!("{id}.{PHOTO_EXTENSION}")))
    }
}

impl PhotoStore for FsPhotoStore {
    fn save(&self, bytes: &[u8], id: &str) -> Result<(), PhotoError> {
        let path = self.path_for(id)?;
        fs::write(&path, bytes)?;
        info!(%id, bytes = bytes.len(), "photo saved");
        Ok(())
    }

    fn load(&self, id: &str) -> Result<Option<Vec<u8>>, PhotoError> {
        let path = self.path_for(id)?;
        match fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn delete(&self, id: &str) -> Result<(), PhotoError> {
        let path = self.path_for(id)?;
        match fs::remove_file(&path) {
            Ok(()) => {
                info!(%id, "photo deleted");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(%id, "photo already absent");
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }
}

fn validate_id(id: &str) -> Result<(), PhotoError> {
    if id.is_empty() || id.contains(['/', '\\']) || id.contains("..") {
        return Err(PhotoError::InvalidId(id.to_string()));
    }
    Ok(())
}
