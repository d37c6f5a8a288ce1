//! LRU Cache Server - an in-memory key/value cache over HTTP
//!
//! A fixed-capacity cache with per-entry TTL, lazy expiration and
//! least-recently-used eviction, guarded by a single lock.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;

pub use api::{create_router, AppState};
pub use cache::{CacheStore, SharedCache};
pub use config::Config;
pub use error::CacheError;
pub use tasks::spawn_cleanup_task;
