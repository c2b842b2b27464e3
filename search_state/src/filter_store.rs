//! Persistent filter store: the last committed filter set under one fixed key.

use common::{filter_set::FilterSet, search_const::STORAGE_KEY};

use crate::storage::KeyValueStorage;

#[derive(Debug, Clone)]
pub struct FilterStore<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStorage> FilterStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage, key: STORAGE_KEY.to_string() }
    }

    /// Returns the stored filter set, or the defaults when nothing usable is stored.
    pub fn load(&self) -> FilterSet {
        let Some(raw) = self.storage.get_item(&self.key) else {
            return FilterSet::default();
        };
        match serde_json::from_str::<FilterSet>(&raw) {
            Ok(filters) => filters,
            Err(e) => {
                tracing::warn!("Ignoring unreadable stored filters under {:?}: {}", self.key, e);
                FilterSet::default()
            }
        }
    }

    /// Stores `filters`, or removes the entry when they are the defaults.
    pub fn save(&self, filters: &FilterSet) {
        if filters.is_default() {
            self.storage.remove_item(&self.key);
            return;
        }
        let json = match serde_json::to_string(filters) {
            Ok(json) => json,
            Err(e) => {
                tracing::error!("Failed to serialize filters: {:#?}", e);
                return;
            }
        };
        if let Err(e) = self.storage.set_item(&self.key, &json) {
            tracing::warn!("Failed to persist filters: {}", e);
        }
    }

    pub fn clear(&self) {
        self.storage.remove_item(&self.key);
    }

    pub fn has_entry(&self) -> bool {
        self.storage.get_item(&self.key).is_some()
    }
}

#[cfg(test)]
#[path = "filter_store_test.rs"]
mod tests;
