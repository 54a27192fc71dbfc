//! Storage Adapter
//!
//! The store persists through a plain string key-value interface so that the
//! same code runs over `window.localStorage` in the browser and over a map in
//! tests.

use std::collections::HashMap;

use crate::error::StoreResult;

/// Get/set of whole serialized values by key.
///
/// Writes always replace the full value.
pub trait KeyValueStorage {
    /// Read the value under `key`, `None` if it was never written
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Replace the value under `key`
    fn set(&mut self, key: &str, value: &str) -> StoreResult<()>;
}

/// In-memory storage, used by tests and as a fallback when no persistent
/// backend is available.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    values: HashMap<String, String>,
    writes: usize,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with a value, as if written by an earlier session
    pub fn with_value(key: &str, value: &str) -> Self {
        let mut storage = Self::new();
        storage.values.insert(key.to_string(), value.to_string());
        storage
    }

    /// Raw value under `key`
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Number of `set` calls so far
    pub fn write_count(&self) -> usize {
        self.writes
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.writes += 1;
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<S: KeyValueStorage + ?Sized> KeyValueStorage for Box<S> {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        (**self).set(key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_roundtrip() {
        let mut storage = MemoryStorage::new();
        assert_eq!(storage.get("todos").unwrap(), None);

        storage.set("todos", "[]").unwrap();
        storage.set("todos", "[1]").unwrap();

        assert_eq!(storage.get("todos").unwrap().as_deref(), Some("[1]"));
        assert_eq!(storage.write_count(), 2);
    }

    #[test]
    fn test_with_value() {
        let storage = MemoryStorage::with_value("todos", "[]");
        assert_eq!(storage.raw("todos"), Some("[]"));
        assert_eq!(storage.write_count(), 0);
    }
}
