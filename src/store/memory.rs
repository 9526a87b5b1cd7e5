//! Memory Store Module
//!
//! In-process shared-memory backend with APCu-style counters.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use tracing::{trace, warn};

use super::{Store, StoreError, StoreInfo};

// == Memory Store ==
/// HashMap-backed store guarded by a mutex.
///
/// Records outlive any cache built on top of them; share the store through an
/// `Arc` to let several caches see the same records.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    records: HashMap<String, String>,
    info: StoreInfo,
}

impl MemoryStore {
    // == Constructor ==
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // == Clear ==
    /// Drops every record and resets the counters.
    pub fn clear(&self) -> Result<(), StoreError> {
        let mut inner = self.lock()?;
        inner.records.clear();
        inner.info = StoreInfo::default();
        Ok(())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner>, StoreError> {
        self.inner
            .lock()
            .map_err(|_| StoreError::Unavailable("memory store lock poisoned".to_string()))
    }
}

impl Store for MemoryStore {
    fn exists(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.lock()?.records.contains_key(key))
    }

    fn get(&self, key: &str) -> Result<String, StoreError> {
        let mut inner = self.lock()?;
        match inner.records.get(key).cloned() {
            Some(value) => {
                inner.info.hits += 1;
                Ok(value)
            }
            None => {
                inner.info.misses += 1;
                Err(StoreError::NotFound(key.to_string()))
            }
        }
    }

    fn put(&self, key: &str, value: String) -> Result<(), StoreError> {
        let mut inner = self.lock()?;
        inner.records.insert(key.to_string(), value);
        inner.info.inserts += 1;
        trace!(key, "memory store put");
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), StoreError> {
        let mut inner = self.lock()?;
        if inner.records.remove(key).is_some() {
            inner.info.deletes += 1;
        }
        Ok(())
    }

    fn info(&self) -> Option<StoreInfo> {
        let inner = match self.lock() {
            Ok(inner) => inner,
            Err(err) => {
                warn!("memory store stats unavailable: {}", err);
                return None;
            }
        };
        Some(StoreInfo {
            entries: inner.records.len(),
            ..inner.info.clone()
        })
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_put_and_get() {
        let store = MemoryStore::new();

        store.put("key1", "value1".to_string()).unwrap();

        assert!(store.exists("key1").unwrap());
        assert_eq!(store.get("key1").unwrap(), "value1");
    }

    #[test]
    fn test_memory_get_missing() {
        let store = MemoryStore::new();

        assert!(!store.exists("missing").unwrap());
        assert!(matches!(store.get("missing"), Err(StoreError::NotFound(_))));
    }

    #[test]
    fn test_memory_overwrite() {
        let store = MemoryStore::new();

        store.put("key1", "value1".to_string()).unwrap();
        store.put("key1", "value2".to_string()).unwrap();

        assert_eq!(store.get("key1").unwrap(), "value2");
        assert_eq!(store.info().unwrap().entries, 1);
    }

    #[test]
    fn test_memory_delete() {
        let store = MemoryStore::new();

        store.put("key1", "value1".to_string()).unwrap();
        store.delete("key1").unwrap();
        // Deleting again is fine
        store.delete("key1").unwrap();

        assert!(!store.exists("key1").unwrap());
        assert_eq!(store.info().unwrap().deletes, 1);
    }

    #[test]
    fn test_memory_info_counters() {
        let store = MemoryStore::new();

        store.put("a", "1".to_string()).unwrap();
        store.put("b", "2".to_string()).unwrap();
        store.get("a").unwrap();
        let _ = store.get("zzz");

        let info = store.info().unwrap();
        assert_eq!(info.entries, 2);
        assert_eq!(info.inserts, 2);
        assert_eq!(info.hits, 1);
        assert_eq!(info.misses, 1);
    }

    #[test]
    fn test_memory_poisoned_lock() {
        let store = std::sync::Arc::new(MemoryStore::new());
        let poisoner = std::sync::Arc::clone(&store);
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.inner.lock().unwrap();
            panic!("poison the lock");
        })
        .join();

        assert!(store.info().is_none());
        assert!(matches!(store.exists("a"), Err(StoreError::Unavailable(_))));
        assert!(matches!(
            store.put("a", "1".to_string()),
            Err(StoreError::Unavailable(_))
        ));
    }

    #[test]
    fn test_memory_clear() {
        let store = MemoryStore::new();

        store.put("a", "1".to_string()).unwrap();
        store.clear().unwrap();

        assert!(!store.exists("a").unwrap());
        assert_eq!(store.info().unwrap(), StoreInfo::default());
    }
}
