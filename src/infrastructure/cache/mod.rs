//! Caching layer for fast alias lookups.
//!
//! Provides a [`CacheService`] trait with two implementations:
//! - [`RedisCache`] - Production Redis-backed cache
//! - [`MemoryCache`] - In-process Moka cache for single-instance deployments and tests
//!
//! There is no no-op implementation: a disabled cache is represented by the
//! orchestrator holding `None`.

mod memory_cache;
mod redis_cache;
mod service;

pub use memory_cache::{DEFAULT_CAPACITY, MemoryCache};
pub use redis_cache::RedisCache;
pub use service::{CacheError, CachePolicy, CacheResult, CacheService};

#[cfg(test)]
pub use service::MockCacheService;
