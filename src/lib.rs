//! APC LRU - a bounded LRU cache persisted in a shared key/value store
//!
//! The recency queue lives in the store next to the values, under a reserved
//! queue name, so any cache opened on the same store and name picks it up.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod store;

pub use api::AppState;
pub use cache::{CacheStats, LruCache, RecencyQueue};
pub use config::Config;
pub use error::{CacheError, Result};
pub use store::{FileStore, MemoryStore, Store, StoreError, StoreInfo};
