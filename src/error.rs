//! Error types for the cache server
//!
//! The engine reports `NotFound` and `InvalidTtl`; the HTTP layer adds
//! `InvalidRequest` for payloads it cannot turn into an engine call.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Cache Error Enum ==
/// Unified error type for the cache server.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Key absent or logically expired
    #[error("key '{0}' not found in cache")]
    NotFound(String),

    /// Non-positive (or unrepresentable) time-to-live on upsert
    #[error("invalid ttl: {0} seconds, expiration must be positive")]
    InvalidTtl(i64),

    /// Malformed or rejected request payload
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for CacheError {
    fn into_response(self) -> Response {
        let status = match &self {
            CacheError::NotFound(_) => StatusCode::NOT_FOUND,
            CacheError::InvalidTtl(_) | CacheError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        };

        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the cache server.
pub type Result<T> = std::result::Result<T, CacheError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        let cases = vec![
            (CacheError::NotFound("k".to_string()), StatusCode::NOT_FOUND),
            (CacheError::InvalidTtl(0), StatusCode::BAD_REQUEST),
            (
                CacheError::InvalidRequest("bad".to_string()),
                StatusCode::BAD_REQUEST,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.into_response().status(), expected);
        }
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CacheError::NotFound("abc".to_string()).to_string(),
            "key 'abc' not found in cache"
        );
        assert!(CacheError::InvalidTtl(-5).to_string().contains("-5"));
    }
}
