//! MemoryStore - In-process key/value backend

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use shared::{AclError, Result};

use crate::KeyValueStore;

/// In-memory store.
///
/// Clones share the same map, so a value written through one handle is
/// visible to every other handle for the lifetime of the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    pub fn len(&self) -> Result<usize> {
        let entries = self
            .entries
            .read()
            .map_err(|_| AclError::storage("*", "Failed to acquire read lock"))?;
        Ok(entries.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self
            .entries
            .read()
            .map_err(|_| AclError::storage(key, "Failed to acquire read lock"))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| AclError::storage(key, "Failed to acquire write lock"))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| AclError::storage(key, "Failed to acquire write lock"))?;
        entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let store = MemoryStore::new();
        assert_eq!(store.get("k").unwrap(), None);

        store.set("k", "v1").unwrap();
        store.set("k", "v2").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v2"));
        assert_eq!(store.len().unwrap(), 1);

        store.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
        assert!(store.is_empty().unwrap());
    }

    #[test]
    fn test_remove_missing_key() {
        let store = MemoryStore::new();
        assert!(store.remove("missing").is_ok());
    }

    #[test]
    fn test_poisoned_lock_is_an_error() {
        let store = MemoryStore::new();
        let entries = Arc::clone(&store.entries);
        let _ = std::thread::spawn(move || {
            let _guard = entries.write().unwrap();
            panic!("poison the lock");
        })
        .join();

        assert!(matches!(store.len(), Err(AclError::Storage { .. })));
        assert!(store.is_empty().is_err());
        assert!(store.get("k").is_err());
    }

    #[test]
    fn test_clones_share_entries() {
        let store = MemoryStore::new();
        let other = store.clone();

        store.set("AclService", "{}").unwrap();
        assert_eq!(other.get("AclService").unwrap().as_deref(), Some("{}"));
    }
}
