//! Response DTOs for the cache server API
//!
//! Timestamps serialize as RFC 3339 strings in UTC.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::cache::{CacheStats, CachedValue};

/// Response body for `GET /cache/:key`
#[derive(Debug, Clone, Serialize)]
pub struct GetResponse {
    pub key: String,
    pub value: String,
    /// Absolute expiration time
    pub expiration: DateTime<Utc>,
    /// Whole seconds of life left
    pub ttl: i64,
}

impl GetResponse {
    pub fn new(key: impl Into<String>, found: CachedValue) -> Self {
        Self {
            key: key.into(),
            value: found.value,
            expiration: found.expires_at,
            ttl: found.ttl_remaining.num_seconds(),
        }
    }
}

/// Response body for `POST /cache`
#[derive(Debug, Clone, Serialize)]
pub struct SetResponse {
    /// Success message
    pub message: String,
    /// The key that was set
    pub key: String,
    pub expiration: DateTime<Utc>,
}

impl SetResponse {
    pub fn new(key: impl Into<String>, expiration: DateTime<Utc>) -> Self {
        let key = key.into();
        Self {
            message: format!("Key '{}' set successfully", key),
            key,
            expiration,
        }
    }
}

/// Response body for `GET /stats`
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    #[serde(flatten)]
    pub stats: CacheStats,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl From<CacheStats> for StatsResponse {
    fn from(stats: CacheStats) -> Self {
        Self {
            hit_rate: stats.hit_rate(),
            stats,
        }
    }
}

/// Response body for `GET /health`
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
