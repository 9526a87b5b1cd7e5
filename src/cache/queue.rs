//! Recency Queue Module
//!
//! Ordered key list tracking recency of access for LRU eviction.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

// == Recency Queue ==
/// Ordered, duplicate-free list of keys.
///
/// Keys are stored in a VecDeque where:
/// - Front = Most recently used
/// - Back = Least recently used
///
/// Serializes as a plain JSON array of keys, front first. Repositioning is
/// O(n), which is fine for the tens-to-thousands of keys an LRU queue holds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecencyQueue {
    order: VecDeque<String>,
}

impl RecencyQueue {
    // == Constructor ==
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    // == Decode ==
    /// Parses a persisted queue record.
    ///
    /// Duplicate keys in the record are dropped, keeping the occurrence
    /// nearest the front.
    pub fn decode(record: &str) -> Result<Self, serde_json::Error> {
        let keys: Vec<String> = serde_json::from_str(record)?;
        let mut queue = Self::new();
        for key in keys {
            if !queue.contains(&key) {
                queue.order.push_back(key);
            }
        }
        Ok(queue)
    }

    // == Encode ==
    /// Serializes the queue into its persisted record form.
    pub fn encode(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    // == Promote ==
    /// Moves a tracked key to the front without changing the length.
    ///
    /// Returns false and leaves the queue untouched if `key` is not tracked.
    pub fn promote(&mut self, key: &str) -> bool {
        match self.position(key) {
            Some(0) => true,
            Some(idx) => {
                if let Some(k) = self.order.remove(idx) {
                    self.order.push_front(k);
                }
                true
            }
            None => false,
        }
    }

    // == Push Front ==
    /// Inserts a key at the front, or promotes it if already tracked.
    pub fn push_front(&mut self, key: &str) {
        if !self.promote(key) {
            self.order.push_front(key.to_string());
        }
    }

    // == Pop Back ==
    /// Removes and returns the least recently used key.
    pub fn pop_back(&mut self) -> Option<String> {
        self.order.pop_back()
    }

    /// Most recently used key.
    pub fn front(&self) -> Option<&str> {
        self.order.front().map(String::as_str)
    }

    /// Least recently used key.
    pub fn back(&self) -> Option<&str> {
        self.order.back().map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Keys from most to least recently used.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Owned copy of the keys, front first.
    pub fn keys(&self) -> Vec<String> {
        self.iter().map(str::to_string).collect()
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.order.iter().position(|k| k == key)
    }
}
