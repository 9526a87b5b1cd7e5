//! Configuration Module
//!
//! Handles loading server configuration from environment variables.

use std::env;

use crate::cache::DEFAULT_MAX_ITEMS;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Store key of the recency queue record
    pub queue_name: String,
    /// Maximum number of items the cache tracks
    pub max_items: usize,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `QUEUE_NAME` - Queue record name (default: "queue1")
    /// - `MAX_ITEMS` - Cache capacity (default: 10)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            queue_name: env::var("QUEUE_NAME")
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.queue_name),
            max_items: env::var("MAX_ITEMS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_items),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.server_port),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            queue_name: "queue1".to_string(),
            max_items: DEFAULT_MAX_ITEMS,
            server_port: 3000,
        }
    }
}
