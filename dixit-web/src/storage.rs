//! `localStorage` backend for the score store.
//!
//! Documents are stored as raw JSON strings under the keys defined in
//! [`dixit_score::constants`], so boards saved by earlier builds keep loading.
use dixit_score::{KeyValueStore, StorageError};

use crate::dom;

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageBackend;

impl LocalStorageBackend {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        dom::local_storage().map_err(|e| StorageError::Unavailable(dom::js_error_message(&e)))
    }
}

impl KeyValueStore for LocalStorageBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| StorageError::Backend(dom::js_error_message(&e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Backend(dom::js_error_message(&e)))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        Self::storage()?
            .remove_item(key)
            .map_err(|e| StorageError::Backend(dom::js_error_message(&e)))
    }
}

