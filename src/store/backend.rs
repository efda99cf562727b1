//! Raw key/value storage backends.
//!
//! A backend maps string keys to string values, like a browser origin's
//! `localStorage`. [`ContentStore`](super::ContentStore) layers JSON records
//! and failure handling on top.

use super::error::StoreError;
use parking_lot::RwLock;
use std::{
    collections::BTreeMap,
    fs, io,
    path::{Path, PathBuf},
};

/// Synchronous string key/value storage.
pub trait Backend: Send + Sync {
    /// Read the value under `key`, `Ok(None)` when absent.
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous value.
    fn write(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

// ============================================================================
// MemoryBackend
// ============================================================================

/// In-memory storage that lives as long as the process.
///
/// Used for session-scoped keys and in tests. An optional byte quota
/// mimics a browser's storage limit.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: RwLock<BTreeMap<String, String>>,
    quota: Option<usize>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Limit the total size of stored values to `bytes`.
    pub fn with_quota(bytes: usize) -> Self {
        Self {
            entries: RwLock::default(),
            quota: Some(bytes),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl Backend for MemoryBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.write();
        if let Some(limit) = self.quota {
            let others: usize = entries
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(_, v)| v.len())
                .sum();
            let needed = others + value.len();
            if needed > limit {
                return Err(StoreError::QuotaExceeded {
                    key: key.to_owned(),
                    needed,
                    limit,
                });
            }
        }
        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.entries.write().remove(key);
        Ok(())
    }
}

// ============================================================================
// FileBackend
// ============================================================================

/// One `<key>.json` file per key inside a storage directory.
///
/// Writes go through a temporary file and a rename, so a reader never sees
/// a half-written record.
#[derive(Debug, Clone)]
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl Backend for FileBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StoreError::Io(path, err)),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir).map_err(|err| StoreError::Io(self.dir.clone(), err))?;

        let path = self.path_for(key);
        let tmp = self.dir.join(format!(".{key}.json.tmp"));
        fs::write(&tmp, value).map_err(|err| StoreError::Io(tmp.clone(), err))?;
        fs::rename(&tmp, &path).map_err(|err| StoreError::Io(path, err))
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let path = self.path_for(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(StoreError::Io(path, err)),
        }
    }
}
