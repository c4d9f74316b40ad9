//! HTTP server initialization and runtime setup.
//!
//! Handles database connections, cache setup, and Axum server lifecycle.

use crate::application::services::{ShortenService, UrlStorage};
use crate::config::{CacheBackend, CacheConfig, Config};
use crate::infrastructure::cache::{CacheService, MemoryCache, RedisCache};
use crate::infrastructure::persistence::PgUrlRepository;
use crate::routes::app_router;
use crate::state::{AppState, BasicCredentials};

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Opens the PostgreSQL pool with the configured limits.
///
/// # Errors
///
/// Returns an error if the database is unreachable.
pub async fn connect_database(config: &Config) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;

    Ok(pool)
}

/// Builds the configured cache, if any.
///
/// Returns `None` when the cache is disabled, Redis is selected without a URL,
/// or Redis is unreachable. The service then runs against the database only.
pub async fn connect_cache(
    cache: &CacheConfig,
    redis_url: Option<&str>,
) -> Option<Arc<dyn CacheService>> {
    if !cache.enabled {
        tracing::info!("Cache disabled");
        return None;
    }

    match (cache.backend, redis_url) {
        (CacheBackend::Memory, _) => {
            tracing::info!("Cache enabled (in-process memory)");
            Some(Arc::new(MemoryCache::with_capacity(
                cache.policy(),
                cache.memory_capacity,
            )))
        }
        (CacheBackend::Redis, Some(url)) => match RedisCache::connect(url, cache.policy()).await {
            Ok(redis) => {
                tracing::info!("Cache enabled (Redis)");
                Some(Arc::new(redis))
            }
            Err(e) => {
                tracing::warn!("Failed to connect to Redis: {}. Running without cache.", e);
                None
            }
        },
        (CacheBackend::Redis, None) => {
            tracing::warn!("Redis cache selected but no REDIS_URL configured. Running without cache.");
            None
        }
    }
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Apply migrations
/// - Cache (Redis, in-memory, or none)
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - Database connection fails
/// - Migrations fail
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = connect_database(&config).await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;

    let cache = connect_cache(&config.cache, config.redis_url.as_deref()).await;

    let repository = Arc::new(PgUrlRepository::new(Arc::new(pool)));
    let storage = Arc::new(UrlStorage::new(repository, cache));
    if !storage.is_cache_enabled() {
        tracing::warn!("No cache attached, every read goes to the database");
    }
    let shorten_service = Arc::new(ShortenService::new(storage.clone()));

    let state = AppState::new(
        storage,
        shorten_service,
        BasicCredentials::new(&config.auth_user, &config.auth_password),
    );

    let app = app_router(state, config.request_timeout());

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_connect_cache_disabled() {
        let cache = CacheConfig {
            enabled: false,
            ..CacheConfig::default()
        };

        assert!(connect_cache(&cache, Some("redis://localhost:6379")).await.is_none());
    }

    #[tokio::test]
    async fn test_connect_cache_memory_backend() {
        let cache = CacheConfig {
            backend: CacheBackend::Memory,
            ..CacheConfig::default()
        };

        let cache = connect_cache(&cache, None).await.unwrap();
        assert!(cache.health_check().await);
    }

    #[tokio::test]
    async fn test_connect_cache_redis_without_url() {
        assert!(connect_cache(&CacheConfig::default(), None).await.is_none());
    }
}
