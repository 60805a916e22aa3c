use std::{
    collections::HashMap,
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    sync::Mutex,
};

use tracing::debug;

use crate::error::StorageError;

/// Durable key-value port the session store persists through.
pub trait StorageClient: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// One recorded call against [`MemoryStorage`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageWrite {
    Set { key: String, value: String },
    Remove { key: String },
}

#[derive(Default)]
struct MemoryInner {
    entries: HashMap<String, String>,
    writes: Vec<StorageWrite>,
    fail_writes: bool,
}

/// In-process storage that records every write. Used as the test double and
/// for sessions that should not touch disk.
#[derive(Default)]
pub struct MemoryStorage {
    inner: Mutex<MemoryInner>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent `set`/`remove` fail, e.g. to mimic a full quota.
    pub fn fail_writes(&self, fail: bool) {
        self.lock().fail_writes = fail;
    }

    pub fn writes(&self) -> Vec<StorageWrite> {
        self.lock().writes.clone()
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.lock().entries.get(key).cloned()
    }

    /// Seeds a value without recording a write.
    pub fn insert_raw(&self, key: &str, value: &str) {
        self.lock().entries.insert(key.to_string(), value.to_string());
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MemoryInner> {
        // a poisoned lock only means a panicking test; the map is still usable
        self.inner.lock().unwrap_or_else(|p| p.into_inner())
    }
}

impl StorageClient for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.lock().entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut inner = self.lock();
        if inner.fail_writes {
            return Err(StorageError::Unavailable(format!("quota exceeded writing {key}")));
        }
        inner.entries.insert(key.to_string(), value.to_string());
        inner.writes.push(StorageWrite::Set {
            key: key.to_string(),
            value: value.to_string(),
        });
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut inner = self.lock();
        if inner.fail_writes {
            return Err(StorageError::Unavailable(format!("cannot remove {key}")));
        }
        inner.entries.remove(key);
        inner.writes.push(StorageWrite::Remove {
            key: key.to_string(),
        });
        Ok(())
    }
}

/// Stores each key as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| StorageError::Io {
            key: dir.display().to_string(),
            source,
        })?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        let safe: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        self.dir.join(format!("{safe}.json"))
    }
}

impl StorageClient for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(s) => Ok(Some(s)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Io {
                key: key.to_string(),
                source,
            }),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        let io = |source: std::io::Error| StorageError::Io {
            key: key.to_string(),
            source,
        };
        fs::write(&tmp, value).map_err(io)?;
        if let Err(source) = fs::rename(&tmp, &path) {
            let _ = fs::remove_file(&tmp);
            return Err(io(source));
        }
        debug!(key, path = %path.display(), bytes = value.len(), "storage set");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StorageError::Io {
                key: key.to_string(),
                source,
            }),
        }
    }
}

#[cfg(test)]
mod storage_tests {
    use super::*;

    #[test]
    fn memory_storage_records_writes() {
        let storage = MemoryStorage::new();
        storage.set("k", "v1").unwrap();
        storage.remove("k").unwrap();
        assert_eq!(storage.get("k").unwrap(), None);
        assert_eq!(
            storage.writes(),
            vec![
                StorageWrite::Set { key: "k".into(), value: "v1".into() },
                StorageWrite::Remove { key: "k".into() },
            ]
        );
    }

    #[test]
    fn memory_storage_can_fail_writes() {
        let storage = MemoryStorage::new();
        storage.fail_writes(true);
        let err = storage.set("k", "v").unwrap_err();
        assert!(matches!(err, StorageError::Unavailable(_)));
        assert!(storage.writes().is_empty());
        assert_eq!(storage.raw("k"), None);
    }

    #[test]
    fn file_storage_set_get_remove() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path()).unwrap();

        assert_eq!(storage.get("nutritrack-user").unwrap(), None);
        storage.set("nutritrack-user", r#"{"id":"user-1"}"#).unwrap();
        assert_eq!(
            storage.get("nutritrack-user").unwrap().as_deref(),
            Some(r#"{"id":"user-1"}"#)
        );
        assert!(dir.path().join("nutritrack-user.json").exists());

        storage.remove("nutritrack-user").unwrap();
        assert_eq!(storage.get("nutritrack-user").unwrap(), None);
        // removing a missing key is fine
        storage.remove("nutritrack-user").unwrap();
    }

    #[test]
    fn file_storage_sanitizes_keys() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path()).unwrap();
        storage.set("../escape", "x").unwrap();
        assert!(dir.path().join("___escape.json").exists());
    }

    #[test]
    fn failed_rename_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path()).unwrap();
        // a directory in the target's place makes the rename fail
        fs::create_dir(dir.path().join("blocked.json")).unwrap();

        let err = storage.set("blocked", "{}").unwrap_err();
        assert!(matches!(err, StorageError::Io { .. }));
        assert!(!dir.path().join("blocked.json.tmp").exists());
    }
}
