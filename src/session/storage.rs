use std::collections::BTreeMap;

use thiserror::Error;

/// Persistence backend inaccessible. Always absorbed by the caller; the
/// session layer treats it as "no saved state".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Session storage unavailable")]
pub struct StorageUnavailable;

/// Key/value ephemeral store collaborator (browser session storage is one
/// example; any in-process map qualifies).
pub trait SessionStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageUnavailable>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageUnavailable>;
}

/// In-memory backend for hosts without a native session store, and for tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: BTreeMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        MemoryStorage::default()
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageUnavailable> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageUnavailable> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
