//! In-process key-value store.

use postcraft_error::{PostcraftResult, StorageError, StorageErrorKind};
use postcraft_interface::KeyValueStore;
use std::collections::HashMap;
use std::sync::RwLock;

/// Key-value store held in memory. Contents are lost on drop.
///
/// # Example
///
/// ```
/// use postcraft_interface::KeyValueStore;
/// use postcraft_storage::InMemoryStore;
///
/// let store = InMemoryStore::new();
/// store.set("theme", "dark").unwrap();
/// assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));
/// assert_eq!(store.get("missing").unwrap(), None);
/// ```
#[derive(Debug, Default)]
pub struct InMemoryStore {
    values: RwLock<HashMap<String, String>>,
}

impl InMemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> PostcraftResult<Option<String>> {
        let values = self
            .values
            .read()
            .map_err(|e| StorageError::new(StorageErrorKind::Poisoned(e.to_string())))?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> PostcraftResult<()> {
        let mut values = self
            .values
            .write()
            .map_err(|e| StorageError::new(StorageErrorKind::Poisoned(e.to_string())))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
