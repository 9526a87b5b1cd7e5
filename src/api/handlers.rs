//! API Handlers
//!
//! HTTP request handlers for each endpoint.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::Value;

use crate::cache::LruCache;
use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::models::{GetResponse, HealthResponse, QueueResponse, SetRequest, SetResponse, StatsResponse};
use crate::store::MemoryStore;

/// Cache type served over HTTP.
pub type SharedCache = LruCache<MemoryStore>;

/// Application state shared across all handlers.
///
/// The cache itself does no locking, so every handler goes through this
/// lock. Reads take the write lock too, since a hit rewrites the queue.
#[derive(Clone)]
pub struct AppState {
    pub cache: Arc<RwLock<SharedCache>>,
}

impl AppState {
    /// Creates a new AppState with the given cache.
    pub fn new(cache: SharedCache) -> Self {
        Self {
            cache: Arc::new(RwLock::new(cache)),
        }
    }

    /// Builds the cache on a fresh in-memory store from configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        let cache = LruCache::new(config.queue_name.clone(), config.max_items, MemoryStore::new())?;
        Ok(Self::new(cache))
    }
}

/// Handler for PUT /set
pub async fn set_handler(
    State(state): State<AppState>,
    Json(req): Json<SetRequest>,
) -> Result<Json<SetResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    let mut cache = state.cache.write().await;
    cache.set(&req.key, &req.value)?;

    Ok(Json(SetResponse::new(req.key)))
}

/// Handler for GET /get/:key
pub async fn get_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<GetResponse>> {
    let mut cache = state.cache.write().await;
    match cache.get::<Value>(&key)? {
        Some(value) => Ok(Json(GetResponse::new(key, value))),
        None => Err(CacheError::NotFound(key)),
    }
}

/// Handler for GET /queue
pub async fn queue_handler(State(state): State<AppState>) -> Result<Json<QueueResponse>> {
    let cache = state.cache.read().await;

    Ok(Json(QueueResponse {
        queue_name: cache.queue_name().to_string(),
        max_items: cache.max_items(),
        keys: cache.persisted_queue()?,
    }))
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let cache = state.cache.read().await;
    Json(StatsResponse::new(cache.stats(), cache.store_info()))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
