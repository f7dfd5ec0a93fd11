use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use serde_json::Error as SerdeError;

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "JapWorld";
const APP_NAME: &str = "JapWorldSite";

/// String key/value storage that survives reloads, shaped after the
/// browser's `localStorage`.
pub trait ClientStorage {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), PersistSaveError>;
}

#[derive(Debug, thiserror::Error)]
pub enum PersistSaveError {
    #[error("storage directory unavailable")]
    StorageUnavailable,
    #[error("browser storage rejected the write: {0}")]
    Browser(String),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] SerdeError),
}

/// Storage for the running target: `localStorage` in the browser, a JSON
/// file in the platform config directory everywhere else.
pub fn default_storage() -> Box<dyn ClientStorage> {
    #[cfg(all(feature = "web", target_arch = "wasm32"))]
    let storage: Box<dyn ClientStorage> = Box::new(BrowserStorage);

    #[cfg(not(all(feature = "web", target_arch = "wasm32")))]
    let storage: Box<dyn ClientStorage> = Box::new(FileStorage::in_config_dir());

    storage
}

/// On-disk layout: a flat JSON object of string pairs.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
struct StorageFile {
    entries: HashMap<String, String>,
}

/// Flat JSON object of string pairs on disk.
#[derive(Clone, Debug)]
pub struct FileStorage {
    path: Option<PathBuf>,
}

impl FileStorage {
    pub fn in_config_dir() -> Self {
        let path = ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
            .map(|dirs| dirs.config_dir().join("storage.json"));
        Self { path }
    }

    #[cfg(test)]
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    fn load(&self) -> Option<StorageFile> {
        let path = self.path.as_ref()?;
        let data = fs::read_to_string(path).ok()?;
        serde_json::from_str(&data).ok()
    }
}

impl ClientStorage for FileStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.load()?.entries.remove(key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), PersistSaveError> {
        let path = self.path.as_ref().ok_or(PersistSaveError::StorageUnavailable)?;
        let mut file = self.load().unwrap_or_default();
        file.entries.insert(key.to_string(), value.to_string());

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&file)?;
        fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub struct BrowserStorage;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
impl BrowserStorage {
    fn local_storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

#[cfg(all(feature = "web", target_arch = "wasm32"))]
impl ClientStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        Self::local_storage()?.get_item(key).ok().flatten()
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), PersistSaveError> {
        let storage = Self::local_storage().ok_or(PersistSaveError::StorageUnavailable)?;
        storage
            .set_item(key, value)
            .map_err(|err| PersistSaveError::Browser(format!("{err:?}")))
    }
}

#[cfg(test)]
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

#[cfg(test)]
impl ClientStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), PersistSaveError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn file_storage_round_trips_values() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = FileStorage::at(dir.path().join("nested").join("storage.json"));

        storage.set_item("japworld_unlocked", "true").unwrap();
        storage.set_item("other", "value").unwrap();

        let reopened = FileStorage::at(dir.path().join("nested").join("storage.json"));
        assert_eq!(reopened.get_item("japworld_unlocked").as_deref(), Some("true"));
        assert_eq!(reopened.get_item("other").as_deref(), Some("value"));
    }

    #[test]
    fn file_storage_writes_a_flat_json_object() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        let mut storage = FileStorage::at(&path);

        storage.set_item("japworld_unlocked", "true").unwrap();

        let on_disk: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(on_disk, serde_json::json!({ "japworld_unlocked": "true" }));
    }

    #[test]
    fn file_storage_missing_file_reads_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::at(dir.path().join("storage.json"));

        assert_eq!(storage.get_item("japworld_unlocked"), None);
    }

    #[test]
    fn file_storage_ignores_corrupt_file_on_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, "not json").unwrap();

        assert_eq!(FileStorage::at(&path).get_item("japworld_unlocked"), None);
    }

    #[test]
    fn file_storage_overwrites_corrupt_file_on_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, "not json").unwrap();
        let mut storage = FileStorage::at(&path);

        storage.set_item("japworld_unlocked", "true").unwrap();

        assert_eq!(storage.get_item("japworld_unlocked").as_deref(), Some("true"));
    }

    #[test]
    fn storage_without_path_refuses_writes() {
        let mut storage = FileStorage { path: None };

        assert!(matches!(
            storage.set_item("k", "v"),
            Err(PersistSaveError::StorageUnavailable)
        ));
        assert_eq!(storage.get_item("k"), None);
    }

    #[test]
    fn memory_storage_returns_last_write() {
        let mut storage = MemoryStorage::default();
        storage.set_item("k", "a").unwrap();
        storage.set_item("k", "b").unwrap();

        assert_eq!(storage.get_item("k").as_deref(), Some("b"));
    }
}
