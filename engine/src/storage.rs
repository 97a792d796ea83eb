//! Key-value persistence for the selected theme.
//!
//! The store only ever uses one slot ([`SELECTED_THEME_KEY`]); backends are kept
//! generic so tests can inject failures.

use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use thiserror::Error;

/// Slot under which the selected registry key is persisted
pub const SELECTED_THEME_KEY: &str = "selectedTheme";

const APP_DIR: &str = "vitrine";
const STORAGE_FILE: &str = "storage.json";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Unable to determine a storage directory")]
    NoStorageDir,

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Storage file {path} is corrupt: {source}")]
    Corrupt {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Storage is unavailable: {0}")]
    Unavailable(String),
}

/// A single-namespace string key-value store.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// JSON object file on disk, one string value per key.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    // Serialises read-modify-write cycles within the process
    lock: Mutex<()>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// `<config_dir>/vitrine/storage.json`
    pub fn default_path() -> Result<PathBuf, StorageError> {
        dirs::config_dir()
            .map(|mut path| {
                path.push(APP_DIR);
                path.push(STORAGE_FILE);
                path
            })
            .ok_or(StorageError::NoStorageDir)
    }

    pub fn at_default_location() -> Result<Self, StorageError> {
        Ok(Self::new(Self::default_path()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> Result<Map<String, Value>, StorageError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(source) => {
                return Err(StorageError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        if content.trim().is_empty() {
            return Ok(Map::new());
        }

        serde_json::from_str(&content).map_err(|source| StorageError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    fn write_map(&self, map: &Map<String, Value>) -> Result<(), StorageError> {
        let write_err = |source| StorageError::Write {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(write_err)?;
            }
        }

        let content = serde_json::to_string_pretty(map).map_err(|source| StorageError::Corrupt {
            path: self.path.clone(),
            source,
        })?;
        fs::write(&self.path, content).map_err(write_err)
    }

    fn guard(&self) -> Result<std::sync::MutexGuard<'_, ()>, StorageError> {
        self.lock
            .lock()
            .map_err(|_| StorageError::Unavailable("storage lock poisoned".to_string()))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let _guard = self.guard()?;
        let map = self.read_map()?;
        Ok(map.get(key).and_then(Value::as_str).map(str::to_owned))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let _guard = self.guard()?;
        let mut map = self.read_map()?;
        map.insert(key.to_string(), Value::String(value.to_string()));
        self.write_map(&map)?;
        log::debug!("Persisted '{key}' to {}", self.path.display());
        Ok(())
    }
}

/// In-process store used for tests and sessions run without persistence.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::default();
        if let Ok(mut values) = store.values.lock() {
            values.insert(key.to_string(), value.to_string());
        }
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let values = self
            .values
            .lock()
            .map_err(|_| StorageError::Unavailable("memory store lock poisoned".to_string()))?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut values = self
            .values
            .lock()
            .map_err(|_| StorageError::Unavailable("memory store lock poisoned".to_string()))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_err, assert_none, assert_ok, assert_some_eq};

    #[test]
    fn test_file_store_missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("storage.json"));
        assert_none!(store.get(SELECTED_THEME_KEY).unwrap());
    }

    #[test]
    fn test_file_store_creates_parent_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("storage.json");
        let store = FileStore::new(&path);

        assert_ok!(store.set(SELECTED_THEME_KEY, "theme2"));
        assert!(path.exists());

        let reopened = FileStore::new(&path);
        assert_some_eq!(reopened.get(SELECTED_THEME_KEY).unwrap(), "theme2");
    }

    #[test]
    fn test_file_store_keeps_unrelated_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, r#"{"other": "value"}"#).unwrap();

        let store = FileStore::new(&path);
        store.set(SELECTED_THEME_KEY, "theme3").unwrap();

        assert_some_eq!(store.get("other").unwrap(), "value");
        assert_some_eq!(store.get(SELECTED_THEME_KEY).unwrap(), "theme3");
    }

    #[test]
    fn test_file_store_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, "not json").unwrap();

        let store = FileStore::new(&path);
        let result = store.get(SELECTED_THEME_KEY);
        assert!(matches!(result, Err(StorageError::Corrupt { .. })));
    }

    #[test]
    fn test_file_store_unwritable_location() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "file, not a directory").unwrap();

        let store = FileStore::new(blocker.join("storage.json"));
        assert_err!(store.set(SELECTED_THEME_KEY, "theme1"));
    }

    #[test]
    fn test_memory_store() {
        let store = MemoryStore::with_value(SELECTED_THEME_KEY, "theme3");
        assert_some_eq!(store.get(SELECTED_THEME_KEY).unwrap(), "theme3");
        store.set(SELECTED_THEME_KEY, "theme1").unwrap();
        assert_some_eq!(store.get(SELECTED_THEME_KEY).unwrap(), "theme1");
        assert_none!(store.get("missing").unwrap());
    }
}
