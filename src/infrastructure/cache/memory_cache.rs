//! In-process cache implementation using Moka.

use super::service::{CachePolicy, CacheResult, CacheService};
use async_trait::async_trait;
use moka::future::Cache;
use tracing::debug;

/// Default maximum number of entries held by each index.
pub const DEFAULT_CAPACITY: u64 = 10_000;

/// TTL-bounded cache kept in process memory.
///
/// Suitable for a single service instance (`CACHE_BACKEND=memory`) and for
/// tests. Forward (alias → url) and reverse (url → alias) entries live in two
/// separate Moka caches so each gets its own TTL from [`CachePolicy`]. Expired
/// and over-capacity entries are evicted by Moka's housekeeping whether or not
/// they are read again.
///
/// The key prefixes of the policy namespace Redis keys and are not needed here.
#[derive(Debug, Clone)]
pub struct MemoryCache {
    forward: Cache<String, String>,
    reverse: Cache<String, String>,
}

impl MemoryCache {
    pub fn new(policy: CachePolicy) -> Self {
        Self::with_capacity(policy, DEFAULT_CAPACITY)
    }

    /// Creates a cache holding at most `max_capacity` entries per index.
    pub fn with_capacity(policy: CachePolicy, max_capacity: u64) -> Self {
        debug!(
            max_capacity,
            ttl_secs = policy.ttl.as_secs(),
            reverse_ttl_secs = policy.reverse_ttl.as_secs(),
            "Using in-process MemoryCache"
        );

        let forward = Cache::builder()
            .max_capacity(max_capacity)
            .time_to_live(policy.ttl)
            .build();
        let reverse = Cache::builder()
            .max_capacity(max_capacity)
            .time_to_live(policy.reverse_ttl)
            .build();

        Self { forward, reverse }
    }

    /// Returns the live forward entry for `alias`.
    pub async fn forward_entry(&self, alias: &str) -> Option<String> {
        self.forward.get(alias).await
    }

    /// Returns the live reverse entry for `url`.
    pub async fn reverse_entry(&self, url: &str) -> Option<String> {
        self.reverse.get(url).await
    }

    /// Stores a forward entry only, bypassing the reverse index.
    ///
    /// Used to seed a cache with content that disagrees with the durable store.
    pub async fn insert_forward(&self, alias: &str, url: &str) {
        self.forward.insert(alias.to_string(), url.to_string()).await;
    }

    /// Number of live entries across both indexes, after pending evictions
    /// have run.
    pub async fn entry_count(&self) -> u64 {
        self.forward.run_pending_tasks().await;
        self.reverse.run_pending_tasks().await;
        self.forward.entry_count() + self.reverse.entry_count()
    }
}

impl Default for MemoryCache {
    fn default() -> Self {
        Self::new(CachePolicy::default())
    }
}

#[async_trait]
impl CacheService for MemoryCache {
    async fn set_url(&self, url: &str, alias: &str) -> CacheResult<()> {
        self.forward.insert(alias.to_string(), url.to_string()).await;
        self.reverse.insert(url.to_string(), alias.to_string()).await;
        Ok(())
    }

    async fn get_url(&self, alias: &str) -> CacheResult<Option<String>> {
        Ok(self.forward.get(alias).await)
    }

    async fn del_url(&self, url: &str, alias: &str) -> CacheResult<()> {
        self.forward.invalidate(alias).await;
        self.reverse.invalidate(url).await;
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }
}
