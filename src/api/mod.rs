//! API Module
//!
//! HTTP handlers and routing that expose one shared cache.
//!
//! # Endpoints
//! - `PUT /set` - Store a key-value pair
//! - `GET /get/:key` - Retrieve a value by key
//! - `GET /queue` - Show the persisted recency queue
//! - `GET /stats` - Cache and store statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
