//! Configuration Module
//!
//! Handles loading server configuration from environment variables.

use std::env;
use std::str::FromStr;

const DEFAULT_CAPACITY: usize = 100;
const DEFAULT_TTL_SECS: i64 = 300;
const DEFAULT_PORT: u16 = 8080;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Maximum number of entries the cache can hold (always >= 1)
    pub capacity: usize,
    /// TTL in seconds applied when a request omits `expiration`
    pub default_ttl: i64,
    /// HTTP server port
    pub server_port: u16,
    /// Sweeper interval in seconds, 0 leaves expiration purely lazy
    pub cleanup_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_CAPACITY` - Maximum cache entries (default: 100, must be > 0)
    /// - `DEFAULT_TTL` - Default TTL in seconds (default: 300, must be > 0)
    /// - `SERVER_PORT` - HTTP server port (default: 8080)
    /// - `CLEANUP_INTERVAL` - Sweeper frequency in seconds (default: 0, disabled)
    pub fn from_env() -> Self {
        Self {
            capacity: parse_var("CACHE_CAPACITY")
                .filter(|&c: &usize| c > 0)
                .unwrap_or(DEFAULT_CAPACITY),
            default_ttl: parse_var("DEFAULT_TTL")
                .filter(|&t: &i64| t > 0)
                .unwrap_or(DEFAULT_TTL_SECS),
            server_port: parse_var("SERVER_PORT").unwrap_or(DEFAULT_PORT),
            cleanup_interval: parse_var("CLEANUP_INTERVAL").unwrap_or(0),
        }
    }
}

fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            default_ttl: DEFAULT_TTL_SECS,
            server_port: DEFAULT_PORT,
            cleanup_interval: 0,
        }
    }
}
