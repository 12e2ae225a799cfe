// =============================================================================
// TTL Memory Cache
// =============================================================================
//
// Thread-safe in-memory key/value store with per-entry expiry. Injected into
// the request path by the caller — there is no global instance. Expired
// entries are dropped lazily on read; `purge_expired` exists for callers that
// want to sweep on a schedule.
// =============================================================================

use std::collections::HashMap;
use std::time::{Duration, Instant};

use parking_lot::RwLock;
use tracing::debug;

struct CacheEntry<V> {
    value: V,
    expires_at: Instant,
}

/// In-memory cache with a default time-to-live per entry.
pub struct MemoryCache<V> {
    entries: RwLock<HashMap<String, CacheEntry<V>>>,
    default_ttl: Duration,
}

impl<V: Clone> MemoryCache<V> {
    pub fn new(default_ttl: Duration) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            default_ttl,
        }
    }

    /// Fetch a value by key. Expired entries are removed and report a miss.
    pub fn get(&self, key: &str) -> Option<V> {
        {
            let entries = self.entries.read();
            match entries.get(key) {
                None => {
                    debug!(key, "cache miss");
                    return None;
                }
                Some(entry) if Instant::now() <= entry.expires_at => {
                    debug!(key, "cache hit");
                    return Some(entry.value.clone());
                }
                Some(_) => {} // expired: fall through to evict
            }
        }

        debug!(key, "cache expired");
        self.entries.write().remove(key);
        None
    }

    /// Store a value under the default TTL.
    pub fn set(&self, key: impl Into<String>, value: V) {
        self.set_with_ttl(key, value, self.default_ttl);
    }

    /// Store a value with an explicit TTL.
    pub fn set_with_ttl(&self, key: impl Into<String>, value: V, ttl: Duration) {
        let key = key.into();
        let expires_at = Instant::now() + ttl;
        debug!(key = %key, ttl_ms = ttl.as_millis() as u64, "cache set");
        self.entries.write().insert(key, CacheEntry { value, expires_at });
    }

    /// Remove a single entry; returns whether it existed.
    pub fn remove(&self, key: &str) -> bool {
        self.entries.write().remove(key).is_some()
    }

    pub fn clear(&self) {
        self.entries.write().clear();
    }

    /// Drop every expired entry, returning how many were removed.
    pub fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let mut entries = self.entries.write();
        let before = entries.len();
        entries.retain(|_, entry| now <= entry.expires_at);
        let purged = before - entries.len();
        if purged > 0 {
            debug!(purged, "purged expired cache entries");
        }
        purged
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}
