//! # In-Memory Store
//!
//! A [`KvStore`] backed by a `HashMap`, for tests and throwaway sessions.
//! Substituting this for the file store is the whole point of the injected
//! persistence seam.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::StoreResult;
use crate::kv::KvStore;

/// A volatile key-value store. Nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Creates an empty in-memory store.
    pub fn new() -> Self {
        MemoryStore {
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Number of stored keys. Test convenience.
    pub fn len(&self) -> usize {
        self.entries.lock().expect("store mutex poisoned").len()
    }

    /// Checks whether the store holds no keys.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KvStore for MemoryStore {
    fn load(&self, key: &str) -> StoreResult<Option<String>> {
        let entries = self.entries.lock().expect("store mutex poisoned");
        Ok(entries.get(key).cloned())
    }

    fn save(&self, key: &str, json: &str) -> StoreResult<()> {
        let mut entries = self.entries.lock().expect("store mutex poisoned");
        entries.insert(key.to_string(), json.to_string());
        Ok(())
    }

    fn clear_all(&self) -> StoreResult<()> {
        let mut entries = self.entries.lock().expect("store mutex poisoned");
        entries.clear();
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_roundtrip() {
        let store = MemoryStore::new();
        assert!(store.load("k").unwrap().is_none());

        store.save("k", "[1]").unwrap();
        assert_eq!(store.load("k").unwrap().as_deref(), Some("[1]"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_clear_all() {
        let store = MemoryStore::new();
        store.save("a", "[]").unwrap();
        store.save("b", "[]").unwrap();

        store.clear_all().unwrap();
        assert!(store.is_empty());
        assert!(store.load("a").unwrap().is_none());
    }
}
