//! Redis-backed cache implementation.

use super::service::{CacheError, CachePolicy, CacheResult, CacheService};
use crate::config::mask_connection_string;
use async_trait::async_trait;
use redis::{AsyncCommands, Client, Pipeline, RedisError, aio::ConnectionManager};
use tracing::{debug, info};

/// Redis cache for alias lookups and the URL → alias reverse index.
///
/// Uses `ConnectionManager` for connection reuse and automatic reconnects.
/// Errors are returned to the caller, which decides whether to log them.
pub struct RedisCache {
    client: ConnectionManager,
    policy: CachePolicy,
}

impl RedisCache {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Arguments
    ///
    /// - `redis_url` - Redis connection string (e.g., `"redis://localhost:6379/0"`)
    /// - `policy` - key prefixes and TTLs for forward and reverse entries
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::Connection`] if the URL is invalid, the connection cannot
    /// be established, or the PING health check fails.
    pub async fn connect(redis_url: &str, policy: CachePolicy) -> CacheResult<Self> {
        info!("Connecting to Redis at {}", mask_connection_string(redis_url));

        let client = Client::open(redis_url)
            .map_err(|e| CacheError::Connection(format!("Failed to create Redis client: {}", e)))?;

        let manager = ConnectionManager::new(client)
            .await
            .map_err(|e| CacheError::Connection(format!("Failed to connect to Redis: {}", e)))?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| CacheError::Connection(format!("Redis PING failed: {}", e)))?;

        info!("✓ Connected to Redis");

        Ok(Self {
            client: manager,
            policy,
        })
    }
}

/// Both entries of a mapping, written in one MULTI/EXEC transaction so a
/// failure cannot leave one without the other.
fn set_pipeline(policy: &CachePolicy, url: &str, alias: &str) -> Pipeline {
    let mut pipe = redis::pipe();
    pipe.atomic()
        .set_ex(policy.forward_key(alias), url, policy.ttl.as_secs())
        .ignore()
        .set_ex(policy.reverse_key(url), alias, policy.reverse_ttl.as_secs())
        .ignore();
    pipe
}

fn op_error(command: &str, e: RedisError) -> CacheError {
    CacheError::Operation(format!("Redis {} failed: {}", command, e))
}

#[async_trait]
impl CacheService for RedisCache {
    async fn set_url(&self, url: &str, alias: &str) -> CacheResult<()> {
        let mut conn = self.client.clone();

        set_pipeline(&self.policy, url, alias)
            .query_async::<()>(&mut conn)
            .await
            .map_err(|e| op_error("MULTI SETEX", e))?;

        debug!(
            "Cache SET: {} -> {} (TTL: {}s, reverse TTL: {}s)",
            alias,
            url,
            self.policy.ttl.as_secs(),
            self.policy.reverse_ttl.as_secs()
        );
        Ok(())
    }

    async fn get_url(&self, alias: &str) -> CacheResult<Option<String>> {
        let key = self.policy.forward_key(alias);
        let mut conn = self.client.clone();

        conn.get::<_, Option<String>>(&key)
            .await
            .map_err(|e| op_error("GET", e))
    }

    async fn del_url(&self, url: &str, alias: &str) -> CacheResult<()> {
        let keys = vec![self.policy.forward_key(alias), self.policy.reverse_key(url)];
        let mut conn = self.client.clone();

        let deleted = conn
            .del::<_, i32>(keys)
            .await
            .map_err(|e| op_error("DEL", e))?;

        if deleted > 0 {
            debug!("Cache INVALIDATE: {} ({} keys)", alias, deleted);
        }
        Ok(())
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }
}
