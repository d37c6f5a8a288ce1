//! Shared Cache Handle
//!
//! Wraps a [`CacheStore`] in a single async mutex so that retrieve, upsert and
//! remove run one at a time over the whole cache.

use std::sync::Arc;

use chrono::Duration;
use tokio::sync::Mutex;
use tracing::debug;

use crate::cache::{CacheStats, CacheStore, CachedValue, Upserted};
use crate::error::Result;

// == Shared Cache ==
/// Cloneable, thread-safe handle to one cache instance.
///
/// Clones share the same store. The lock is only held for the duration of a
/// single store operation.
#[derive(Debug, Clone)]
pub struct SharedCache {
    inner: Arc<Mutex<CacheStore>>,
}

impl SharedCache {
    /// Creates a handle to a fresh cache with the given capacity.
    pub fn new(capacity: usize) -> Self {
        Self::from_store(CacheStore::new(capacity))
    }

    pub fn from_store(store: CacheStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    /// See [`CacheStore::retrieve`].
    pub async fn retrieve(&self, key: &str) -> Result<CachedValue> {
        self.inner.lock().await.retrieve(key)
    }

    /// See [`CacheStore::upsert`].
    pub async fn upsert(&self, key: String, value: String, ttl: Duration) -> Result<Upserted> {
        let upserted = self.inner.lock().await.upsert(key, value, ttl)?;
        if let Some(evicted) = &upserted.evicted {
            debug!(key = %evicted, "evicted least recently used entry");
        }
        Ok(upserted)
    }

    /// See [`CacheStore::remove`].
    pub async fn remove(&self, key: &str) -> Result<()> {
        self.inner.lock().await.remove(key)
    }

    /// See [`CacheStore::cleanup_expired`].
    pub async fn cleanup_expired(&self) -> usize {
        self.inner.lock().await.cleanup_expired()
    }

    pub async fn stats(&self) -> CacheStats {
        self.inner.lock().await.stats()
    }

    pub async fn len(&self) -> usize {
        self.inner.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.lock().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CacheError;

    #[tokio::test]
    async fn test_clones_share_state() {
        let cache = SharedCache::new(10);
        let other = cache.clone();

        cache
            .upsert("k".to_string(), "v".to_string(), Duration::seconds(60))
            .await
            .unwrap();

        assert_eq!(other.retrieve("k").await.unwrap().value, "v");
        other.remove("k").await.unwrap();
        assert!(matches!(
            cache.retrieve("k").await,
            Err(CacheError::NotFound(_))
        ));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_upserts_respect_capacity() {
        let capacity = 16;
        let cache = SharedCache::new(capacity);

        let mut handles = Vec::new();
        for task in 0..8 {
            let cache = cache.clone();
            handles.push(tokio::spawn(async move {
                for i in 0..100 {
                    let key = format!("t{task}_k{}", i % 24);
                    cache
                        .upsert(key.clone(), format!("{task}:{i}"), Duration::seconds(60))
                        .await
                        .unwrap();
                    let _ = cache.retrieve(&key).await;
                    if i % 7 == 0 {
                        let _ = cache.remove(&key).await;
                    }
                }
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert!(cache.len().await <= capacity);
        let inner = cache.inner.lock().await;
        inner.assert_consistent();
    }

    #[tokio::test]
    async fn test_cleanup_expired_through_handle() {
        let cache = SharedCache::new(10);
        cache
            .upsert("short".to_string(), "v".to_string(), Duration::milliseconds(50))
            .await
            .unwrap();
        cache
            .upsert("long".to_string(), "v".to_string(), Duration::seconds(60))
            .await
            .unwrap();

        tokio::time::sleep(std::time::Duration::from_millis(100)).await;

        assert_eq!(cache.cleanup_expired().await, 1);
        assert_eq!(cache.len().await, 1);
        assert_eq!(cache.stats().await.expirations, 1);
    }
}
