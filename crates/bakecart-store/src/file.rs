use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tempfile::NamedTempFile;
use tracing::{debug, warn};

use crate::error::{StoreError, StoreResult};
use crate::traits::KvStore;

/// Default file name inside the store directory.
pub const STORE_FILE: &str = "storage.json";

/// Key-value store backed by a single JSON object file.
///
/// On-disk format is a flat JSON object mapping keys to string values:
/// ```text
/// { "carrinho": "[{\"id\":\"bolo-fit\", ...}]" }
/// ```
///
/// Every `set`/`remove` rewrites the whole file through a temp file in the
/// same directory followed by a rename, so readers never observe a partial
/// write. A missing or unparseable file reads as an empty store; the next
/// write replaces a corrupt file.
pub struct FileKvStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileKvStore {
    /// Open (or prepare) a store at `dir/storage.json`.
    ///
    /// Creates `dir` if needed.
    pub fn open(dir: &Path) -> StoreResult<Self> {
        fs::create_dir_all(dir)?;
        Self::open_file(dir.join(STORE_FILE))
    }

    /// Open a store at an explicit file path. The parent directory must exist.
    pub fn open_file(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let store = Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        };
        let entries = store.read_map()?;
        debug!(path = %store.path.display(), keys = entries.len(), "opened file store");
        Ok(store)
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> StoreResult<BTreeMap<String, String>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(e.into()),
        };
        if raw.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        match serde_json::from_str(&raw) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "store file is corrupt, treating as empty");
                Ok(BTreeMap::new())
            }
        }
    }

    fn write_map(&self, entries: &BTreeMap<String, String>) -> StoreResult<()> {
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let json = serde_json::to_string_pretty(entries)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(json.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| StoreError::Io(e.error))?;
        Ok(())
    }
}

impl KvStore for FileKvStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.read_map()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let _guard = self.write_lock.lock().map_err(|_| StoreError::Poisoned)?;
        let mut entries = self.read_map()?;
        entries.insert(key.to_string(), value.to_string());
        self.write_map(&entries)?;
        debug!(key, bytes = value.len(), "file store write");
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<bool> {
        let _guard = self.write_lock.lock().map_err(|_| StoreError::Poisoned)?;
        let mut entries = self.read_map()?;
        if entries.remove(key).is_none() {
            return Ok(false);
        }
        self.write_map(&entries)?;
        Ok(true)
    }

    fn keys(&self) -> StoreResult<Vec<String>> {
        Ok(self.read_map()?.into_keys().collect())
    }
}

impl std::fmt::Debug for FileKvStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileKvStore")
            .field("path", &self.path)
            .finish()
    }
}
