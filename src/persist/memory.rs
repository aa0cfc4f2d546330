//! In-memory settings store.

use std::collections::BTreeMap;

use super::error::StoreError;
use super::SettingsStore;

/// Settings store backed by a plain map. Used in tests and in embeddings
/// that manage persistence elsewhere.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    values: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-seeded with entries, e.g. to simulate a previous
    /// session.
    pub fn seeded(entries: &[(&str, &str)]) -> Self {
        let mut store = Self::new();
        for (key, value) in entries {
            store.values.insert((*key).to_string(), (*value).to_string());
        }
        store
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl SettingsStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.values.remove(key);
        Ok(())
    }
}
