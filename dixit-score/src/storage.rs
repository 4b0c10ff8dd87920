//! Backing-store abstraction and typed document access.
//!
//! The board persists three independent JSON documents. Platforms provide a
//! [`KeyValueStore`] (browser `localStorage`, a directory of files, ...);
//! [`MemoryStore`] is the in-process implementation used by tests.
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
    #[error("Storage error: {0}")]
    Backend(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Durable, synchronous, string-keyed storage.
///
/// Receivers take `&self`; implementations that need mutation use interior
/// mutability so a single backend can be shared between the store and its
/// host.
pub trait KeyValueStore {
    /// Read the raw document stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be reached.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous document.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete the document under `key`. Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the removal.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Rc<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

/// In-memory backend. Clones share the same map, so a test can keep a
/// handle and inspect what the store wrote.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<BTreeMap<String, String>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with raw documents.
    #[must_use]
    pub fn with_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let map = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            entries: Rc::new(RefCell::new(map)),
        }
    }

    #[must_use]
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// Outcome of reading one typed document.
#[derive(Debug)]
pub enum DocumentRead<T> {
    Found(T),
    Missing,
    Malformed(serde_json::Error),
    Unreadable(StorageError),
}

impl<T> DocumentRead<T> {
    #[must_use]
    pub fn found(self) -> Option<T> {
        match self {
            Self::Found(value) => Some(value),
            _ => None,
        }
    }
}

/// Read and decode the JSON document under `key`.
pub fn read_document<T, S>(store: &S, key: &str) -> DocumentRead<T>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    match store.get(key) {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(value) => DocumentRead::Found(value),
            Err(err) => DocumentRead::Malformed(err),
        },
        Ok(None) => DocumentRead::Missing,
        Err(err) => DocumentRead::Unreadable(err),
    }
}

/// Encode `value` as JSON and store it under `key`.
///
/// # Errors
///
/// Returns an error if the value cannot be serialized or the backend rejects
/// the write.
pub fn write_document<T, S>(store: &S, key: &str, value: &T) -> Result<(), PersistError>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let json = serde_json::to_string(value)?;
    store.set(key, &json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ScoringRules;

    #[test]
    fn memory_store_clones_share_entries() {
        let store = MemoryStore::new();
        let observer = store.clone();
        store.set("k", "v").unwrap();
        assert_eq!(observer.raw("k").as_deref(), Some("v"));
        observer.remove("k").unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn read_document_classifies_each_outcome() {
        let store = MemoryStore::with_entries([("good", "42"), ("bad", "{not json")]);
        assert!(matches!(
            read_document::<i64, _>(&store, "good"),
            DocumentRead::Found(42)
        ));
        assert!(matches!(
            read_document::<i64, _>(&store, "bad"),
            DocumentRead::Malformed(_)
        ));
        assert!(matches!(
            read_document::<i64, _>(&store, "absent"),
            DocumentRead::Missing
        ));
    }

    #[test]
    fn wrong_shape_is_malformed() {
        let store = MemoryStore::with_entries([("rules", r#"{"correctGuess":"three"}"#)]);
        assert!(matches!(
            read_document::<ScoringRules, _>(&store, "rules"),
            DocumentRead::Malformed(_)
        ));
    }

    #[test]
    fn write_then_read_restores_value() {
        let store = MemoryStore::new();
        let rules = ScoringRules {
            correct_guess: 15,
            partial_guess: 5,
            incorrect_guess: -5,
        };
        write_document(&store, "rules", &rules).unwrap();
        assert_eq!(
            read_document::<ScoringRules, _>(&store, "rules").found(),
            Some(rules)
        );
    }

    #[test]
    fn boxed_trait_objects_forward_calls() {
        let inner = MemoryStore::new();
        let boxed: Box<dyn KeyValueStore> = Box::new(inner.clone());
        boxed.set("k", "1").unwrap();
        assert_eq!(boxed.get("k").unwrap().as_deref(), Some("1"));
        assert_eq!(inner.len(), 1);
    }
}
