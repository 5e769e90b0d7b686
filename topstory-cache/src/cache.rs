//! In-memory TTL cache.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::trace;

use topstory_core::constants::DEFAULT_CACHE_TTL_SECS;

/// Cache entry with an absolute deadline.
#[derive(Clone)]
struct CacheEntry<V> {
    value: V,
    inserted_at: Instant,
    ttl: Duration,
}

impl<V> CacheEntry<V> {
    // Reads never move the deadline.
    fn is_expired(&self) -> bool {
        self.inserted_at.elapsed() >= self.ttl
    }
}

/// Cache configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CacheConfig {
    /// TTL applied to every insertion, in seconds
    pub default_ttl_seconds: u64,
    /// Whether to drop expired entries on insert
    pub auto_cleanup: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            default_ttl_seconds: DEFAULT_CACHE_TTL_SECS,
            auto_cleanup: true,
        }
    }
}

impl CacheConfig {
    /// Creates a config with the given TTL in seconds.
    pub fn with_ttl_seconds(seconds: u64) -> Self {
        Self {
            default_ttl_seconds: seconds,
            ..Default::default()
        }
    }
}

/// In-memory cache with absolute expiration.
///
/// Thread-safe. An entry inserted at `T` is served until `T + ttl` and never
/// after, no matter how often it is read. There is no capacity eviction.
pub struct TtlCache<V> {
    entries: RwLock<HashMap<String, CacheEntry<V>>>,
    ttl: Duration,
    auto_cleanup: bool,
}

impl<V: Clone> TtlCache<V> {
    /// Creates a new cache with default configuration.
    pub fn new() -> Self {
        Self::with_config(CacheConfig::default())
    }

    /// Creates a cache with custom configuration.
    pub fn with_config(config: CacheConfig) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl: Duration::from_secs(config.default_ttl_seconds),
            auto_cleanup: config.auto_cleanup,
        }
    }

    /// Creates a cache with a sub-second-precision TTL.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl,
            auto_cleanup: true,
        }
    }

    /// Returns the TTL applied on insert.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Gets a cached value by key.
    ///
    /// Returns None if not cached or expired.
    pub fn get(&self, key: &str) -> Option<V> {
        let entries = self.entries.read();
        entries.get(key).and_then(|e| {
            if e.is_expired() {
                trace!(key, "Entry expired");
                None
            } else {
                Some(e.value.clone())
            }
        })
    }

    /// Caches a value, replacing any previous entry and restarting its TTL.
    pub fn set(&self, key: &str, value: V) {
        let mut entries = self.entries.write();

        if self.auto_cleanup {
            entries.retain(|_, e| !e.is_expired());
        }

        entries.insert(
            key.to_string(),
            CacheEntry {
                value,
                inserted_at: Instant::now(),
                ttl: self.ttl,
            },
        );
    }

    /// Removes a cached entry.
    pub fn remove(&self, key: &str) {
        self.entries.write().remove(key);
    }

    /// Clears all cached entries.
    pub fn clear(&self) {
        self.entries.write().clear();
    }

    /// Removes all expired entries.
    pub fn cleanup_expired(&self) {
        self.entries.write().retain(|_, e| !e.is_expired());
    }

    /// Returns the number of stored entries, including expired ones not yet cleaned up.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Returns true if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl<V: Clone> Default for TtlCache<V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use topstory_core::Story;

    fn make_story() -> Story {
        Story::new("Example Headline", "alice")
    }

    #[test]
    fn test_cache_set_get() {
        let cache = TtlCache::new();
        cache.set("top-story", make_story());
        assert_eq!(cache.get("top-story"), Some(make_story()));
    }

    #[test]
    fn test_cache_miss() {
        let cache: TtlCache<Story> = TtlCache::new();
        assert!(cache.get("top-story").is_none());
    }

    #[test]
    fn test_default_ttl_is_ten_seconds() {
        let cache: TtlCache<Story> = TtlCache::default();
        assert_eq!(cache.ttl(), Duration::from_secs(10));
    }

    #[test]
    fn test_cache_ttl_expiration() {
        let cache = TtlCache::with_ttl(Duration::from_millis(1));
        cache.set("top-story", make_story());
        std::thread::sleep(Duration::from_millis(10));
        assert!(cache.get("top-story").is_none());
    }

    #[test]
    fn test_reads_do_not_extend_expiration() {
        let cache = TtlCache::with_ttl(Duration::from_millis(400));
        cache.set("top-story", make_story());

        std::thread::sleep(Duration::from_millis(100));
        assert!(cache.get("top-story").is_some());

        std::thread::sleep(Duration::from_millis(350));
        assert!(cache.get("top-story").is_none());
    }

    #[test]
    fn test_set_replaces_and_restarts_ttl() {
        let cache = TtlCache::with_ttl(Duration::from_millis(400));
        cache.set("top-story", make_story());
        std::thread::sleep(Duration::from_millis(450));
        assert!(cache.get("top-story").is_none());

        cache.set("top-story", Story::new("Newer", "bob"));
        assert_eq!(cache.get("top-story"), Some(Story::new("Newer", "bob")));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_cache_remove() {
        let cache = TtlCache::new();
        cache.set("top-story", make_story());
        cache.set("other", make_story());

        cache.remove("top-story");

        assert!(cache.get("top-story").is_none());
        assert!(cache.get("other").is_some());
    }

    #[test]
    fn test_cache_clear() {
        let cache = TtlCache::new();
        cache.set("top-story", make_story());
        cache.set("other", make_story());

        cache.clear();

        assert!(cache.is_empty());
    }

    #[test]
    fn test_cache_cleanup_expired() {
        let cache = TtlCache::with_ttl(Duration::from_millis(1));
        cache.set("top-story", make_story());
        std::thread::sleep(Duration::from_millis(10));

        assert_eq!(cache.len(), 1);
        cache.cleanup_expired();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_config_with_ttl_seconds() {
        let config = CacheConfig::with_ttl_seconds(3);
        assert!(config.auto_cleanup);

        let cache: TtlCache<Story> = TtlCache::with_config(config);
        assert_eq!(cache.ttl(), Duration::from_secs(3));
    }
}
