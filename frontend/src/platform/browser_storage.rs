//! `window.localStorage` as a key-value store.

use dioxus::logger::tracing;
use search_state::{KeyValueStorage, storage::StorageError};

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn local_storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl KeyValueStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        Self::local_storage()?.get_item(key).ok()?
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = Self::local_storage().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|e| StorageError::Write { key: key.to_string(), reason: format!("{:?}", e) })
    }

    fn remove_item(&self, key: &str) {
        if let Some(storage) = Self::local_storage() {
            if let Err(e) = storage.remove_item(key) {
                tracing::warn!("localStorage.removeItem({:?}) failed: {:?}", key, e);
            }
        }
    }
}
