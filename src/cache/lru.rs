//! LRU Cache Module
//!
//! Bounded LRU cache that keeps its recency queue as a record in the same
//! store as the values.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::cache::{CacheStats, RecencyQueue, DEFAULT_MAX_ITEMS};
use crate::error::{CacheError, Result};
use crate::store::{Store, StoreInfo};

// == LRU Cache ==
/// LRU cache over an injected [`Store`].
///
/// Every operation updates the in-memory queue first, writes the queue record
/// back under `queue_name`, then touches the item record. Nothing here locks:
/// callers sharing a queue name must serialize `get`/`set` themselves.
///
/// A failing store call aborts the operation where it stands. Earlier steps
/// are not rolled back.
#[derive(Debug)]
pub struct LruCache<S: Store> {
    /// Backend holding items and the queue record
    store: S,
    /// Store key of the queue record
    queue_name: String,
    /// Capacity of the queue
    max_items: usize,
    /// In-memory copy of the queue
    queue: RecencyQueue,
    stats: CacheStats,
}

impl<S: Store> LruCache<S> {
    // == Constructor ==
    /// Opens the cache named `queue_name` on `store`.
    ///
    /// Loads the persisted queue, or creates and persists an empty one if the
    /// store has none yet.
    ///
    /// # Errors
    /// - [`CacheError::Configuration`] if `queue_name` is empty
    /// - [`CacheError::Store`] if the backend fails
    pub fn new(queue_name: impl Into<String>, max_items: usize, store: S) -> Result<Self> {
        let queue_name = queue_name.into();
        if queue_name.is_empty() {
            return Err(CacheError::Configuration(
                "queue name must not be empty".to_string(),
            ));
        }

        let mut cache = Self {
            store,
            queue_name,
            max_items,
            queue: RecencyQueue::new(),
            stats: CacheStats::new(),
        };
        cache.setup_queue()?;
        Ok(cache)
    }

    /// Opens the cache with a capacity of [`DEFAULT_MAX_ITEMS`].
    pub fn with_default_capacity(queue_name: impl Into<String>, store: S) -> Result<Self> {
        Self::new(queue_name, DEFAULT_MAX_ITEMS, store)
    }

    // == Get ==
    /// Reads `key`, promoting it to the front if the queue tracks it.
    ///
    /// Returns `Ok(None)` when the value is absent. A key the queue tracks but
    /// the store lost is also reported as absent and left in the queue.
    /// A key the store holds but the queue does not track is returned as is,
    /// without being added to the queue.
    pub fn get<V: DeserializeOwned>(&mut self, key: &str) -> Result<Option<V>> {
        self.check_key(key)?;

        if self.queue.contains(key) {
            if !self.store.exists(key)? {
                warn!(key, queue = %self.queue_name, "queued key missing from store");
                self.stats.record_inconsistency();
                return Ok(None);
            }

            self.queue.promote(key);
            self.persist_queue()?;
            debug!(key, "promoted on read");

            let value = self.fetch_item(key)?;
            self.stats.record_hit();
            return Ok(Some(value));
        }

        if self.store.exists(key)? {
            debug!(key, "untracked key read straight from store");
            let value = self.fetch_item(key)?;
            self.stats.record_passthrough();
            Ok(Some(value))
        } else {
            self.stats.record_miss();
            Ok(None)
        }
    }

    // == Set ==
    /// Stores `value` under `key` and moves `key` to the front.
    ///
    /// Inserting a new key past capacity evicts the key at the back of the
    /// queue and deletes its record. At most one key is evicted per call.
    pub fn set<V: Serialize + ?Sized>(&mut self, key: &str, value: &V) -> Result<()> {
        self.check_key(key)?;
        let payload = serde_json::to_string(value)?;

        if self.queue.promote(key) {
            self.persist_queue()?;
            self.store.put(key, payload)?;
            debug!(key, "overwrote tracked key");
        } else {
            self.queue.push_front(key);
            self.persist_queue()?;
            self.store.put(key, payload)?;
            debug!(key, len = self.queue.len(), "inserted key");

            if self.queue.len() > self.max_items {
                self.evict_back()?;
            }
        }

        self.stats.set_total_entries(self.queue.len());
        Ok(())
    }

    // == Reload ==
    /// Re-reads the queue record, picking up changes made by another writer.
    pub fn reload(&mut self) -> Result<()> {
        self.setup_queue()
    }

    // == Inspection ==
    /// In-memory queue, front = most recently used.
    pub fn queue(&self) -> &RecencyQueue {
        &self.queue
    }

    /// Queue as currently persisted in the store.
    pub fn persisted_queue(&self) -> Result<Vec<String>> {
        Ok(self.fetch_queue()?.keys())
    }

    /// Backend statistics, if the store keeps any.
    pub fn store_info(&self) -> Option<StoreInfo> {
        self.store.info()
    }

    /// Cache-level counters.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.queue.len());
        stats
    }

    pub fn queue_name(&self) -> &str {
        &self.queue_name
    }

    pub fn max_items(&self) -> usize {
        self.max_items
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    // == Internals ==
    fn setup_queue(&mut self) -> Result<()> {
        if !self.store.exists(&self.queue_name)? {
            info!(queue = %self.queue_name, "no persisted queue, creating an empty one");
            self.queue = RecencyQueue::new();
            self.persist_queue()?;
        }
        self.queue = self.fetch_queue()?;
        debug!(queue = %self.queue_name, len = self.queue.len(), "queue loaded");

        // A queue persisted under a larger capacity is cut down on load
        while self.queue.len() > self.max_items {
            if !self.evict_back()? {
                break;
            }
        }
        self.stats.set_total_entries(self.queue.len());
        Ok(())
    }

    /// Drops the back key, persists the queue, then deletes the key's record.
    /// Returns false if the queue was empty.
    fn evict_back(&mut self) -> Result<bool> {
        let Some(victim) = self.queue.pop_back() else {
            return Ok(false);
        };
        self.persist_queue()?;
        self.store.delete(&victim)?;
        self.stats.record_eviction();
        info!(key = %victim, queue = %self.queue_name, "evicted least recently used key");
        Ok(true)
    }

    fn check_key(&self, key: &str) -> Result<()> {
        if key == self.queue_name {
            return Err(CacheError::ReservedKey(key.to_string()));
        }
        Ok(())
    }

    fn persist_queue(&self) -> Result<()> {
        let record = self.queue.encode()?;
        self.store.put(&self.queue_name, record)?;
        Ok(())
    }

    fn fetch_queue(&self) -> Result<RecencyQueue> {
        let record = self.store.get(&self.queue_name)?;
        Ok(RecencyQueue::decode(&record)?)
    }

    fn fetch_item<V: DeserializeOwned>(&self, key: &str) -> Result<V> {
        let record = self.store.get(key)?;
        Ok(serde_json::from_str(&record)?)
    }
}
