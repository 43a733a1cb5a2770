use std::hash::Hash;
use std::num::NonZeroUsize;
use std::sync::Arc;

use lru::LruCache;
use tokio::sync::Mutex;

/// Bounded in-process cache with recency eviction.
///
/// One mutex guards each cache instance. Concurrent misses on the same key
/// may both compute and insert; the computed value for a given key is
/// deterministic, so last write wins and the duplicate work is bounded.
#[derive(Clone)]
pub struct MemoryCache<K, V> {
    inner: Arc<Mutex<LruCache<K, V>>>,
}

impl<K: Hash + Eq, V: Clone> MemoryCache<K, V> {
    /// Creates a cache holding at most `capacity` entries.
    ///
    /// A zero capacity is clamped to one entry.
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            inner: Arc::new(Mutex::new(LruCache::new(capacity))),
        }
    }

    /// Returns a clone of the cached value and marks the entry recently used.
    pub async fn get(&self, key: &K) -> Option<V> {
        self.inner.lock().await.get(key).cloned()
    }

    /// Inserts a value, evicting the least recently used entry when full.
    pub async fn put(&self, key: K, value: V) {
        self.inner.lock().await.put(key, value);
    }

    pub async fn len(&self) -> usize {
        self.inner.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.lock().await.is_empty()
    }
}
