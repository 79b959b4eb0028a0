//! Key-value store backends and the typed serialization layer.

use crate::StorageError;
use serde::{de::DeserializeOwned, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

/// A durable string-valued key-value store.
///
/// The backend stores raw strings; JSON serialization is the [`Store`]
/// layer's responsibility, keeping the platform contract free of any
/// encoding dependency. Backends must tolerate an unavailable platform:
/// reads answer `None` and writes answer an error, never a panic.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`, overwriting any prior value.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key` from the store. Absent keys are a no-op.
    fn remove(&self, key: &str);
}

/// Browser `localStorage` backend.
///
/// Stateless handle: the storage object is looked up per call, so the
/// type stays `Send + Sync` and usable from server-rendered code, where
/// every operation reports the backend as unavailable.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

#[cfg(target_arch = "wasm32")]
impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = Self::storage()
            .ok_or_else(|| StorageError::Backend("localStorage unavailable".to_string()))?;
        storage
            .set_item(key, value)
            .map_err(|e| StorageError::Backend(format!("{e:?}")))
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

// Non-wasm fallback: there is no durable client store on the server
// side of a render, so reads see nothing and writes succeed quietly.
#[cfg(not(target_arch = "wasm32"))]
impl KeyValueStore for LocalStorage {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Ok(())
    }

    fn remove(&self, _key: &str) {}
}

/// In-memory backend for tests and non-browser targets.
#[derive(Debug, Default)]
pub struct MemoryStore {
    data: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.data.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.lock().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.lock().remove(key);
    }
}

/// Typed store with automatic JSON serialization over any backend.
///
/// Cheap to clone; clones share the backend.
#[derive(Clone)]
pub struct Store {
    backend: Arc<dyn KeyValueStore>,
}

impl Store {
    /// Wrap a backend in the typed layer.
    pub fn new(backend: impl KeyValueStore + 'static) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    /// The platform-default store: browser `localStorage`.
    pub fn local() -> Self {
        Self::new(LocalStorage)
    }

    /// Get a value, deserializing it from JSON.
    ///
    /// Returns `Ok(None)` if the key doesn't exist and an error if the
    /// stored value does not parse as `T`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        match self.backend.get(key) {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Set a value, serializing it as JSON and overwriting any prior
    /// value under the key.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let raw = serde_json::to_string(value)?;
        self.backend.set(key, &raw)
    }

    /// Remove a key from the store.
    pub fn remove(&self, key: &str) {
        self.backend.remove(key);
    }

    /// Read the raw stored string, bypassing deserialization.
    pub fn get_raw(&self, key: &str) -> Option<String> {
        self.backend.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Entry {
        id: u32,
        quantity: u32,
    }

    #[test]
    fn test_round_trip() {
        let store = Store::new(MemoryStore::new());
        let entries = vec![Entry { id: 1, quantity: 2 }, Entry { id: 7, quantity: 1 }];

        store.set("cart", &entries).unwrap();
        let restored: Option<Vec<Entry>> = store.get("cart").unwrap();
        assert_eq!(restored, Some(entries));
    }

    #[test]
    fn test_absent_key_is_none() {
        let store = Store::new(MemoryStore::new());
        let value: Option<Vec<Entry>> = store.get("cart").unwrap();
        assert_eq!(value, None);
    }

    #[test]
    fn test_corrupt_value_is_an_error() {
        let store = Store::new(MemoryStore::new());
        store.set("cart", &"not an entry list").unwrap();

        let result: Result<Option<Vec<Entry>>, _> = store.get("cart");
        assert!(matches!(result, Err(StorageError::Serialization(_))));
    }

    #[test]
    fn test_empty_list_persists_as_empty_array() {
        let store = Store::new(MemoryStore::new());
        store.set("cart", &Vec::<Entry>::new()).unwrap();
        assert_eq!(store.get_raw("cart").as_deref(), Some("[]"));
    }

    #[test]
    fn test_set_overwrites() {
        let store = Store::new(MemoryStore::new());
        store.set("cart", &vec![Entry { id: 1, quantity: 1 }]).unwrap();
        store.set("cart", &Vec::<Entry>::new()).unwrap();

        let restored: Option<Vec<Entry>> = store.get("cart").unwrap();
        assert_eq!(restored, Some(vec![]));
    }

    #[test]
    fn test_remove() {
        let store = Store::new(MemoryStore::new());
        store.set("theme", &"dark").unwrap();
        store.remove("theme");

        let value: Option<String> = store.get("theme").unwrap();
        assert_eq!(value, None);
    }

    #[test]
    fn test_backend_failure_propagates_from_set() {
        struct FailingStore;

        impl KeyValueStore for FailingStore {
            fn get(&self, _key: &str) -> Option<String> {
                None
            }

            fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
                Err(StorageError::Backend("quota exceeded".to_string()))
            }

            fn remove(&self, _key: &str) {}
        }

        let store = Store::new(FailingStore);
        let result = store.set("cart", &Vec::<Entry>::new());
        assert!(matches!(result, Err(StorageError::Backend(_))));
    }
}
