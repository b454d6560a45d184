//! Cart persistence abstraction and built-in stores.
//!
//! The engine is storage-agnostic: anything that can load and save a
//! [`CartSnapshot`] under the fixed [`STORAGE_KEY`] works. [`MemoryStore`]
//! backs tests and per-request buffers; [`FileStore`] is a durable
//! JSON-on-disk store for long-lived processes.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::StoreError;
use crate::snapshot::{CartSnapshot, STORAGE_KEY};

/// A persistence read/write pair for cart snapshots.
///
/// `load` returns `Ok(None)` when nothing has been persisted yet; that is
/// the normal first-visit case, not an error.
pub trait CartStore {
    /// Read the persisted snapshot, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Hydration`] if persisted data exists but cannot
    /// be read or parsed.
    fn load(&self) -> Result<Option<CartSnapshot>, StoreError>;

    /// Persist the snapshot, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Write`] if the snapshot could not be stored.
    fn save(&mut self, snapshot: &CartSnapshot) -> Result<(), StoreError>;
}

/// In-memory key-value store holding serialized snapshots.
///
/// Snapshots pass through JSON on the way in and out, so this fake exercises
/// the same serialization path as a real store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// An empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-seeded with a snapshot, as if a previous session had
    /// saved it.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Write`] if the snapshot cannot be serialized.
    pub fn with_snapshot(snapshot: &CartSnapshot) -> Result<Self, StoreError> {
        let mut store = Self::new();
        store.save(snapshot)?;
        Ok(store)
    }

    /// Raw serialized payload under the storage key, if any.
    #[must_use]
    pub fn raw(&self) -> Option<&str> {
        self.entries.get(STORAGE_KEY).map(String::as_str)
    }

    /// Overwrite the raw payload under the storage key.
    ///
    /// Intended for tests that need to plant unparseable or stale data.
    pub fn set_raw(&mut self, payload: impl Into<String>) {
        self.entries.insert(STORAGE_KEY.to_owned(), payload.into());
    }
}

impl CartStore for MemoryStore {
    fn load(&self) -> Result<Option<CartSnapshot>, StoreError> {
        let Some(payload) = self.entries.get(STORAGE_KEY) else {
            return Ok(None);
        };
        let snapshot = serde_json::from_str(payload)
            .map_err(|e| StoreError::Hydration(e.to_string()))?;
        Ok(Some(snapshot))
    }

    fn save(&mut self, snapshot: &CartSnapshot) -> Result<(), StoreError> {
        let payload =
            serde_json::to_string(snapshot).map_err(|e| StoreError::Write(e.to_string()))?;
        self.entries.insert(STORAGE_KEY.to_owned(), payload);
        Ok(())
    }
}

/// JSON-file-backed store.
///
/// Persists the snapshot as `<dir>/cart.v1.json`. A missing file is an empty
/// store; a file that exists but does not parse is a hydration error.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Store rooted at the given directory.
    #[must_use]
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(format!("{STORAGE_KEY}.json")),
        }
    }

    /// The file the snapshot is persisted to.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CartStore for FileStore {
    fn load(&self) -> Result<Option<CartSnapshot>, StoreError> {
        let payload = match fs::read_to_string(&self.path) {
            Ok(payload) => payload,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StoreError::Hydration(e.to_string())),
        };
        let snapshot = serde_json::from_str(&payload)
            .map_err(|e| StoreError::Hydration(e.to_string()))?;
        Ok(Some(snapshot))
    }

    fn save(&mut self, snapshot: &CartSnapshot) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| StoreError::Write(e.to_string()))?;
        }
        let payload =
            serde_json::to_string(snapshot).map_err(|e| StoreError::Write(e.to_string()))?;
        fs::write(&self.path, payload).map_err(|e| StoreError::Write(e.to_string()))
    }
}
