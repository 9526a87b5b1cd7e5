//! Store Module
//!
//! The key/value backend the LRU cache persists its values and its own
//! recency queue into. The cache depends on backends only through the
//! [`Store`] trait, so the backend's lifecycle belongs to whoever builds it.

mod file;
mod memory;

use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;

pub use file::FileStore;
pub use memory::MemoryStore;

// == Store Error ==
/// Failures reported by a backend.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Record does not exist
    #[error("Record not found: {0}")]
    NotFound(String),

    /// Backend cannot serve requests right now
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// Underlying filesystem failure
    #[error("Store I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// == Store Info ==
/// Backend-level counters, the equivalent of a shared-memory cache's info dump.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StoreInfo {
    /// Records currently held, queue record included
    pub entries: usize,
    /// Successful `get` calls
    pub hits: u64,
    /// `get` calls on absent records
    pub misses: u64,
    /// `put` calls
    pub inserts: u64,
    /// `delete` calls that removed a record
    pub deletes: u64,
}

// == Store Trait ==
/// Key/value backend addressed by arbitrary string keys.
///
/// Methods take `&self` so one backend can be shared between several caches;
/// implementations handle their own interior mutability.
pub trait Store {
    /// Returns whether a record exists under `key`.
    fn exists(&self, key: &str) -> Result<bool, StoreError>;

    /// Fetches the record under `key`, failing with [`StoreError::NotFound`] if absent.
    fn get(&self, key: &str) -> Result<String, StoreError>;

    /// Stores `value` under `key`, overwriting any previous record.
    fn put(&self, key: &str, value: String) -> Result<(), StoreError>;

    /// Removes the record under `key`. Removing an absent record is not an error.
    fn delete(&self, key: &str) -> Result<(), StoreError>;

    /// Backend statistics, if the backend keeps any.
    fn info(&self) -> Option<StoreInfo> {
        None
    }
}

impl<S: Store + ?Sized> Store for Arc<S> {
    fn exists(&self, key: &str) -> Result<bool, StoreError> {
        (**self).exists(key)
    }

    fn get(&self, key: &str) -> Result<String, StoreError> {
        (**self).get(key)
    }

    fn put(&self, key: &str, value: String) -> Result<(), StoreError> {
        (**self).put(key, value)
    }

    fn delete(&self, key: &str) -> Result<(), StoreError> {
        (**self).delete(key)
    }

    fn info(&self) -> Option<StoreInfo> {
        (**self).info()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arc_store_shares_records() {
        let store = Arc::new(MemoryStore::new());
        let other = Arc::clone(&store);

        store.put("key1", "value1".to_string()).unwrap();

        assert!(other.exists("key1").unwrap());
        assert_eq!(other.get("key1").unwrap(), "value1");
        assert_eq!(other.info().unwrap().entries, 1);
    }

    #[test]
    fn test_store_info_serialize() {
        let info = StoreInfo {
            entries: 2,
            hits: 3,
            ..StoreInfo::default()
        };
        let json = serde_json::to_string(&info).unwrap();
        assert!(json.contains("\"entries\":2"));
        assert!(json.contains("\"hits\":3"));
    }
}
