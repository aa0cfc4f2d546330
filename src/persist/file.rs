//! File-backed settings store.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use log::warn;

use super::error::StoreError;
use super::SettingsStore;

/// Settings persisted as a flat JSON object, by default at
/// `<config-dir>/esigned/settings.json`.
///
/// The file is read once at open and rewritten in full on every mutation.
/// A missing file is an empty store; an unreadable or malformed one is
/// logged and treated as empty rather than blocking startup.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FileStore {
    /// Opens (or initializes) a store at an explicit path.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match load(&path) {
            Ok(values) => values,
            Err(err) => {
                warn!("ignoring unreadable settings file {}: {}", path.display(), err);
                BTreeMap::new()
            }
        };
        Self { path, values }
    }

    /// Opens the store at the platform default location.
    pub fn open_default() -> Result<Self, StoreError> {
        let dir = dirs_next::config_dir().ok_or(StoreError::NoConfigDir)?;
        Ok(Self::open(dir.join("esigned").join("settings.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|err| StoreError::Unavailable {
                message: err.to_string(),
            })?;
        }
        let contents =
            serde_json::to_string_pretty(&self.values).map_err(|err| StoreError::Unavailable {
                message: err.to_string(),
            })?;
        std::fs::write(&self.path, contents).map_err(|err| StoreError::Unavailable {
            message: err.to_string(),
        })
    }
}

fn load(path: &Path) -> Result<BTreeMap<String, String>, StoreError> {
    if !path.exists() {
        return Ok(BTreeMap::new());
    }
    let contents = std::fs::read_to_string(path).map_err(|err| StoreError::Unavailable {
        message: err.to_string(),
    })?;
    serde_json::from_str(&contents).map_err(|err| StoreError::Unavailable {
        message: err.to_string(),
    })
}

impl SettingsStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.values.remove(key);
        self.flush()
    }
}
