//! Cache Statistics Module
//!
//! Cache-level counters, kept separately from whatever the backend counts.

use serde::Serialize;

// == Cache Stats ==
/// Hit/miss/eviction counters for one cache instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CacheStats {
    /// Reads that returned a value (tracked or pass-through)
    pub hits: u64,
    /// Reads that returned nothing
    pub misses: u64,
    /// Keys dropped from the back of the queue
    pub evictions: u64,
    /// Hits served for keys the queue does not track
    pub passthrough_reads: u64,
    /// Reads where the queue tracked a key the store no longer held
    pub inconsistencies: u64,
    /// Keys currently tracked by the queue
    pub total_entries: usize,
}

impl CacheStats {
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Returns hits / (hits + misses), or 0.0 if nothing was read yet.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    /// A hit on a key outside the queue counts as a hit too.
    pub fn record_passthrough(&mut self) {
        self.hits += 1;
        self.passthrough_reads += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    /// A queued key missing from the store is reported as a miss.
    pub fn record_inconsistency(&mut self) {
        self.misses += 1;
        self.inconsistencies += 1;
    }

    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    pub fn set_total_entries(&mut self, count: usize) {
        self.total_entries = count;
    }
}
