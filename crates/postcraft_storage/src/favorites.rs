//! Favorite case ids persisted as a JSON list under one key.

use postcraft_interface::KeyValueStore;
use std::sync::Arc;
use tracing::{debug, warn};

/// Ordered set of favorite ids.
///
/// Store failures and corrupt stored values are logged and treated as an empty list.
///
/// # Example
///
/// ```
/// use postcraft_storage::{Favorites, InMemoryStore};
/// use std::sync::Arc;
///
/// let store = Arc::new(InMemoryStore::new());
/// let mut favorites = Favorites::load(store.clone(), "case_favorites");
///
/// assert!(favorites.toggle("case-1"));
/// assert!(favorites.contains("case-1"));
///
/// let reloaded = Favorites::load(store, "case_favorites");
/// assert_eq!(reloaded.ids(), ["case-1".to_string()]);
/// ```
pub struct Favorites {
    store: Arc<dyn KeyValueStore>,
    key: String,
    ids: Vec<String>,
}

impl Favorites {
    /// Load favorites stored under `key`.
    #[tracing::instrument(skip(store))]
    pub fn load(store: Arc<dyn KeyValueStore>, key: &str) -> Self {
        let ids = match store.get(key) {
            Ok(Some(raw)) => serde_json::from_str::<Vec<String>>(&raw).unwrap_or_else(|e| {
                warn!(error = %e, "Stored favorites are not a JSON list, starting empty");
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(error = %e, "Failed to read favorites, starting empty");
                Vec::new()
            }
        };
        debug!(count = ids.len(), "Loaded favorites");

        Self {
            store,
            key: key.to_string(),
            ids,
        }
    }

    /// Add the id if absent, remove it if present. Returns whether it is now a favorite.
    pub fn toggle(&mut self, id: &str) -> bool {
        let now_favorite = match self.ids.iter().position(|existing| existing == id) {
            Some(position) => {
                self.ids.remove(position);
                false
            }
            None => {
                self.ids.push(id.to_string());
                true
            }
        };
        self.persist();
        now_favorite
    }

    /// Whether `id` is a favorite.
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|existing| existing == id)
    }

    /// Favorite ids in insertion order.
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    fn persist(&self) {
        let encoded = match serde_json::to_string(&self.ids) {
            Ok(encoded) => encoded,
            Err(e) => {
                warn!(error = %e, "Failed to encode favorites");
                return;
            }
        };
        if let Err(e) = self.store.set(&self.key, &encoded) {
            warn!(error = %e, "Failed to save favorites");
        }
    }
}
