//! Cache Entry Module
//!
//! Defines a stored value together with its absolute expiration time.

use chrono::{DateTime, Duration, Utc};

use crate::cache::lru::NodeId;

// == Cache Entry ==
/// A single stored value and its metadata.
///
/// The key itself lives in the store's map and in the recency node that
/// `node` points at, so it cannot change once the entry exists.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored value
    pub value: String,
    /// When the entry was first inserted or last refreshed
    pub updated_at: DateTime<Utc>,
    /// Instant from which the entry is logically absent
    pub expires_at: DateTime<Utc>,
    /// Position of this key in the recency list
    pub(crate) node: NodeId,
}

impl CacheEntry {
    // == Constructor ==
    pub(crate) fn new(value: String, now: DateTime<Utc>, expires_at: DateTime<Utc>, node: NodeId) -> Self {
        Self {
            value,
            updated_at: now,
            expires_at,
            node,
        }
    }

    // == Refresh ==
    /// Replaces value and expiration in place, keeping the recency node.
    pub(crate) fn refresh(&mut self, value: String, now: DateTime<Utc>, expires_at: DateTime<Utc>) {
        self.value = value;
        self.updated_at = now;
        self.expires_at = expires_at;
    }

    // == Is Expired ==
    /// Checks whether the entry is logically absent at `now`.
    ///
    /// The cutover is inclusive: once `now` reaches `expires_at` the entry is
    /// gone, so a TTL of N seconds never yields more than N seconds of life.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// Checks expiration against the wall clock.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    // == Time To Live ==
    /// Remaining lifetime at `now`, clamped to zero once expired.
    pub fn ttl_remaining_at(&self, now: DateTime<Utc>) -> Duration {
        (self.expires_at - now).max(Duration::zero())
    }
}
