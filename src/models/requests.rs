//! Request DTOs for the cache server API

use serde::Deserialize;

use crate::cache::MAX_KEY_LENGTH;

/// Request body for `POST /cache`
///
/// # Fields
/// - `key`: The cache key to store the value under
/// - `value`: The value to store
/// - `expiration`: Lifetime in seconds, server default when omitted
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertRequest {
    pub key: String,
    pub value: String,
    #[serde(default)]
    pub expiration: Option<i64>,
}

impl UpsertRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid. The TTL
    /// is left to the cache, which rejects non-positive lifetimes itself.
    pub fn validate(&self) -> Option<String> {
        if self.key.is_empty() {
            return Some("Key cannot be empty".to_string());
        }
        if self.key.len() > MAX_KEY_LENGTH {
            return Some(format!(
                "Key exceeds maximum length of {} bytes",
                MAX_KEY_LENGTH
            ));
        }
        None
    }
}
