//! API Handlers
//!
//! HTTP request handlers translating requests into cache operations and cache
//! results into status codes.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use chrono::Duration;
use tracing::debug;

use crate::cache::SharedCache;
use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::models::{GetResponse, HealthResponse, SetResponse, StatsResponse, UpsertRequest};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Handle to the one cache instance owned by the server
    pub cache: SharedCache,
    /// TTL in seconds for upserts that omit `expiration`
    pub default_ttl: i64,
}

impl AppState {
    /// Creates a new AppState around an existing cache.
    pub fn new(cache: SharedCache, default_ttl: i64) -> Self {
        Self { cache, default_ttl }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(SharedCache::new(config.capacity), config.default_ttl)
    }
}

/// Handler for `GET /cache/:key`
///
/// 200 with key, value and expiration, or 404 when absent or expired.
pub async fn get_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<GetResponse>> {
    let found = state.cache.retrieve(&key).await?;

    Ok(Json(GetResponse::new(key, found)))
}

/// Handler for `POST /cache`
///
/// 201 on success. Malformed JSON, a bad key or a non-positive expiration
/// all answer 400.
pub async fn upsert_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<UpsertRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<SetResponse>)> {
    let Json(req) = payload.map_err(|rejection| {
        debug!(%rejection, "rejected upsert payload");
        CacheError::InvalidRequest(rejection.body_text())
    })?;

    if let Some(error_msg) = req.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    let secs = req.expiration.unwrap_or(state.default_ttl);
    let ttl = Duration::try_seconds(secs).ok_or(CacheError::InvalidTtl(secs))?;

    let upserted = state.cache.upsert(req.key.clone(), req.value, ttl).await?;

    Ok((
        StatusCode::CREATED,
        Json(SetResponse::new(req.key, upserted.expires_at)),
    ))
}

/// Handler for `DELETE /cache/:key`
///
/// 204 when removed, 404 when absent or already expired.
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<StatusCode> {
    state.cache.remove(&key).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Handler for `GET /stats`
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(state.cache.stats().await.into())
}

/// Handler for `GET /health`
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
