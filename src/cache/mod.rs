//! Cache Module
//!
//! In-memory cache engine with LRU eviction and lazy TTL expiration.

mod entry;
mod lru;
mod shared;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use lru::{LruTracker, NodeId};
pub use shared::SharedCache;
pub use stats::CacheStats;
pub use store::{CacheStore, CachedValue, Upserted};

// == Public Constants ==
/// Maximum key length accepted by the HTTP layer, in bytes
pub const MAX_KEY_LENGTH: usize = 256;
