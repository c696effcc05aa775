//! Durable persistence of the favorites collection.
//!
//! # Design
//! One named slot: a JSON-encoded array of `Movie` at a fixed path. The
//! whole collection is re-serialized and rewritten on every save — there is
//! no partial-update API. Writes go through a sibling temp file followed by
//! a rename, so a crash mid-write leaves the previous slot contents intact.
//!
//! This layer is strict (`Result` everywhere); the registry applies the
//! fail-soft policy on top.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::StoreError;
use crate::types::Movie;

/// File name of the favorites slot under the app data directory.
const SLOT_FILE: &str = "favorites.json";

/// Load/save of the favorites collection at a single slot path.
#[derive(Debug, Clone)]
pub struct FavoritesStore {
    path: PathBuf,
}

impl FavoritesStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The platform-conventional slot location, e.g.
    /// `~/.local/share/catalog-core/favorites.json` on Linux. `None` when no
    /// data directory can be determined for the platform.
    pub fn default_path() -> Option<PathBuf> {
        dirs::data_dir().map(|dir| dir.join("catalog-core").join(SLOT_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the slot. An absent slot is an empty collection, not an error;
    /// unreadable or undecodable contents are classified for the caller.
    pub fn load(&self) -> Result<Vec<Movie>, StoreError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StoreError::Io(e)),
        };
        serde_json::from_slice(&bytes).map_err(|e| StoreError::Corrupt(e.to_string()))
    }

    /// Serialize the entire collection and replace the slot contents.
    pub fn save(&self, movies: &[Movie]) -> Result<(), StoreError> {
        let bytes =
            serde_json::to_vec(movies).map_err(|e| StoreError::Corrupt(e.to_string()))?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Temp file in the same directory so the rename stays on one filesystem.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, &bytes)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
