//! Cache Module
//!
//! LRU cache whose recency queue and values both live in a [`Store`](crate::store::Store).

mod lru;
mod queue;
mod stats;


// Re-export public types
pub use lru::LruCache;
pub use queue::RecencyQueue;
pub use stats::CacheStats;

// == Public Constants ==
/// Capacity used when none is given
pub const DEFAULT_MAX_ITEMS: usize = 10;
