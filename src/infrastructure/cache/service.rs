//! Cache service trait, key policy and error types.

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur during cache operations.
///
/// These never leave the storage layer; the orchestrator logs them and falls
/// back to the durable store.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Cache connection error: {0}")]
    Connection(String),
    #[error("Cache operation error: {0}")]
    Operation(String),
}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Key prefixes and TTLs shared by every cache backend.
///
/// A forward entry maps `prefix_url + alias` to the origin URL. A reverse
/// entry maps `prefix_rev + url` to the alias. Each kind has its own TTL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachePolicy {
    pub ttl: Duration,
    pub reverse_ttl: Duration,
    pub prefix_url: String,
    pub prefix_rev: String,
}

impl CachePolicy {
    pub fn forward_key(&self, alias: &str) -> String {
        format!("{}{}", self.prefix_url, alias)
    }

    pub fn reverse_key(&self, url: &str) -> String {
        format!("{}{}", self.prefix_rev, url)
    }
}

impl Default for CachePolicy {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(1800),
            reverse_ttl: Duration::from_secs(1800),
            prefix_url: "url:".to_string(),
            prefix_rev: "rev:".to_string(),
        }
    }
}

/// Trait for caching alias → URL mappings together with the URL → alias
/// reverse index.
///
/// Implementations report failures through [`CacheResult`] instead of
/// swallowing them, so the caller decides how to log them.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::RedisCache`] - Redis-backed cache with TTL support
/// - [`crate::infrastructure::cache::MemoryCache`] - In-process cache for a single instance
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Stores the forward entry (alias → url) and the reverse entry
    /// (url → alias), each with its own TTL.
    async fn set_url(&self, url: &str, alias: &str) -> CacheResult<()>;

    /// Retrieves the URL for an alias.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(url))` on cache hit
    /// - `Ok(None)` on cache miss or expired entry
    async fn get_url(&self, alias: &str) -> CacheResult<Option<String>>;

    /// Removes both the forward and the reverse entry.
    ///
    /// Removing keys that are not present is not an error.
    async fn del_url(&self, url: &str, alias: &str) -> CacheResult<()>;

    /// Checks if the cache backend is healthy.
    async fn health_check(&self) -> bool;
}
