//! Cache Store Module
//!
//! Single-threaded cache engine: a HashMap of entries plus the recency
//! tracker, with lazy TTL expiration. Thread safety is layered on top by
//! [`SharedCache`](crate::cache::SharedCache).

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};

use crate::cache::{CacheEntry, CacheStats, LruTracker};
use crate::error::{CacheError, Result};

// == Operation Results ==
/// A live value returned by [`CacheStore::retrieve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedValue {
    pub value: String,
    pub expires_at: DateTime<Utc>,
    /// Lifetime left at the moment of retrieval
    pub ttl_remaining: Duration,
}

/// Outcome of a successful [`CacheStore::upsert`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upserted {
    pub expires_at: DateTime<Utc>,
    /// True when an existing (live or stale) entry was updated in place
    pub refreshed: bool,
    /// Key pushed out to make room, if any
    pub evicted: Option<String>,
}

// == Cache Store ==
/// Cache storage with LRU eviction and lazy TTL expiration.
///
/// Every entry's `node` points at its own key in `lru`, and both structures
/// always hold the same key set.
#[derive(Debug)]
pub struct CacheStore {
    entries: HashMap<String, CacheEntry>,
    lru: LruTracker,
    stats: CacheStats,
    capacity: usize,
}

impl CacheStore {
    // == Constructor ==
    /// Creates a new CacheStore holding at most `capacity` entries.
    ///
    /// A capacity of zero is raised to one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: HashMap::with_capacity(capacity + 1),
            lru: LruTracker::with_capacity(capacity + 1),
            stats: CacheStats::new(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    // == Retrieve ==
    /// Looks up a live value and marks the key most recently used.
    ///
    /// An expired entry is dropped on the spot and reported as `NotFound`.
    pub fn retrieve(&mut self, key: &str) -> Result<CachedValue> {
        self.retrieve_at(key, Utc::now())
    }

    /// [`retrieve`](Self::retrieve) against an explicit clock reading.
    pub fn retrieve_at(&mut self, key: &str, now: DateTime<Utc>) -> Result<CachedValue> {
        let Some(entry) = self.entries.get(key) else {
            self.stats.record_miss();
            return Err(CacheError::NotFound(key.to_string()));
        };

        if entry.is_expired_at(now) {
            self.drop_entry(key);
            self.stats.record_expirations(1);
            self.stats.record_miss();
            return Err(CacheError::NotFound(key.to_string()));
        }

        let found = CachedValue {
            value: entry.value.clone(),
            expires_at: entry.expires_at,
            ttl_remaining: entry.ttl_remaining_at(now),
        };
        self.lru.touch(entry.node);
        self.stats.record_hit();
        Ok(found)
    }

    // == Upsert ==
    /// Stores `value` under `key` for `ttl`.
    ///
    /// An existing key is refreshed in place and never triggers eviction. A new
    /// key that pushes the store past capacity evicts exactly one least
    /// recently used key. A non-positive `ttl` is rejected before any change.
    pub fn upsert(&mut self, key: String, value: String, ttl: Duration) -> Result<Upserted> {
        self.upsert_at(key, value, ttl, Utc::now())
    }

    /// [`upsert`](Self::upsert) against an explicit clock reading.
    pub fn upsert_at(
        &mut self,
        key: String,
        value: String,
        ttl: Duration,
        now: DateTime<Utc>,
    ) -> Result<Upserted> {
        if ttl <= Duration::zero() {
            return Err(CacheError::InvalidTtl(ttl.num_seconds()));
        }
        let expires_at = now
            .checked_add_signed(ttl)
            .ok_or(CacheError::InvalidTtl(ttl.num_seconds()))?;

        if let Some(entry) = self.entries.get_mut(&key) {
            entry.refresh(value, now, expires_at);
            self.lru.touch(entry.node);
            return Ok(Upserted {
                expires_at,
                refreshed: true,
                evicted: None,
            });
        }

        let node = self.lru.insert(key.clone());
        self.entries
            .insert(key, CacheEntry::new(value, now, expires_at, node));

        let evicted = if self.entries.len() > self.capacity {
            self.evict_oldest()
        } else {
            None
        };

        Ok(Upserted {
            expires_at,
            refreshed: false,
            evicted,
        })
    }

    // == Remove ==
    /// Deletes a key. An already expired entry counts as absent.
    pub fn remove(&mut self, key: &str) -> Result<()> {
        self.remove_at(key, Utc::now())
    }

    /// [`remove`](Self::remove) against an explicit clock reading.
    pub fn remove_at(&mut self, key: &str, now: DateTime<Utc>) -> Result<()> {
        match self.drop_entry(key) {
            Some(entry) if entry.is_expired_at(now) => {
                self.stats.record_expirations(1);
                Err(CacheError::NotFound(key.to_string()))
            }
            Some(_) => Ok(()),
            None => Err(CacheError::NotFound(key.to_string())),
        }
    }

    // == Cleanup Expired ==
    /// Physically removes every expired entry and returns how many went.
    pub fn cleanup_expired(&mut self) -> usize {
        self.cleanup_expired_at(Utc::now())
    }

    /// [`cleanup_expired`](Self::cleanup_expired) against an explicit clock reading.
    pub fn cleanup_expired_at(&mut self, now: DateTime<Utc>) -> usize {
        let expired: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired_at(now))
            .map(|(key, _)| key.clone())
            .collect();

        for key in &expired {
            self.drop_entry(key);
        }

        self.stats.record_expirations(expired.len());
        expired.len()
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    /// Number of physically stored entries, including expired ones not yet observed.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `key` is physically stored, regardless of expiration.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    fn drop_entry(&mut self, key: &str) -> Option<CacheEntry> {
        let entry = self.entries.remove(key)?;
        self.lru.remove(entry.node);
        Some(entry)
    }

    fn evict_oldest(&mut self) -> Option<String> {
        let key = self.lru.pop_oldest()?;
        self.entries.remove(&key);
        self.stats.record_eviction();
        Some(key)
    }

    #[cfg(test)]
    pub(crate) fn assert_consistent(&self) {
        assert!(self.entries.len() <= self.capacity, "store over capacity");
        assert_eq!(self.entries.len(), self.lru.len(), "store and tracker disagree");
        for (key, entry) in &self.entries {
            assert_eq!(self.lru.key(entry.node), Some(key.as_str()));
        }
    }

    #[cfg(test)]
    pub(crate) fn recency_order(&self) -> Vec<String> {
        self.lru.iter_oldest_first().map(str::to_string).collect()
    }
}
