//! Storage orchestrator combining the durable store with an optional cache.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::errors::StorageError;
use crate::domain::repositories::UrlRepository;
use crate::infrastructure::cache::CacheService;

/// Health of a single storage backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentStatus {
    Ok,
    Disabled,
    Error(String),
}

impl ComponentStatus {
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

/// Combined health of the durable store and the cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageHealth {
    pub store: ComponentStatus,
    pub cache: ComponentStatus,
}

impl StorageHealth {
    pub fn is_healthy(&self) -> bool {
        !self.store.is_error() && !self.cache.is_error()
    }
}

/// Coordinates the durable store and the optional cache behind one interface.
///
/// # Consistency Rules
///
/// - The store is written and deleted first; its errors end the call and the
///   cache is left untouched.
/// - Reads try the cache first. A hit is trusted even if the store has since
///   changed; misses and cache errors fall through to the store.
/// - Every cache call after a store success is best effort: failures are
///   logged at `WARN` and never change the returned result.
///
/// When no cache is configured every method runs in pass-through mode
/// against the store. Presence is checked once per call.
pub struct UrlStorage {
    repository: Arc<dyn UrlRepository>,
    cache: Option<Arc<dyn CacheService>>,
}

impl UrlStorage {
    /// Creates a new orchestrator. Pass `None` to run without a cache.
    pub fn new(repository: Arc<dyn UrlRepository>, cache: Option<Arc<dyn CacheService>>) -> Self {
        Self { repository, cache }
    }

    /// Returns whether a cache is configured.
    pub fn is_cache_enabled(&self) -> bool {
        self.cache.is_some()
    }

    /// Stores `url` under a concrete `alias`, then populates the cache.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::AliasExists`] if the alias is already stored.
    /// Returns [`StorageError::StorageFailure`] on store errors.
    pub async fn save_url(&self, url: &str, alias: &str) -> Result<(), StorageError> {
        self.repository.save_url(url, alias).await?;

        if let Some(cache) = self.cache.as_deref() {
            populate(cache, url, alias).await;
        }

        Ok(())
    }

    /// Resolves an alias, cache first.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::UrlNotFound`] if the store has no record.
    /// Returns [`StorageError::StorageFailure`] on store errors.
    pub async fn get_url(&self, alias: &str) -> Result<String, StorageError> {
        let Some(cache) = self.cache.as_deref() else {
            return self.repository.get_url(alias).await;
        };

        match cache.get_url(alias).await {
            Ok(Some(url)) => {
                debug!(alias, "Cache HIT");
                return Ok(url);
            }
            Ok(None) => debug!(alias, "Cache MISS"),
            Err(e) => warn!(alias, error = %e, "Cache read failed, falling back to store"),
        }

        let url = self.repository.get_url(alias).await?;
        populate(cache, &url, alias).await;

        Ok(url)
    }

    /// Deletes an alias and returns the URL it pointed to.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::UrlNotFound`] if the store has no record.
    /// Returns [`StorageError::StorageFailure`] on store errors.
    pub async fn delete_url(&self, alias: &str) -> Result<String, StorageError> {
        let url = self.repository.delete_url(alias).await?;

        if let Some(cache) = self.cache.as_deref() {
            match cache.del_url(&url, alias).await {
                Ok(()) => debug!(alias, "Cache entries removed"),
                Err(e) => warn!(alias, error = %e, "Failed to remove URL from cache"),
            }
        }

        Ok(url)
    }

    /// Pings the store and, if configured, the cache.
    pub async fn health(&self) -> StorageHealth {
        let store = match self.repository.ping().await {
            Ok(()) => ComponentStatus::Ok,
            Err(e) => ComponentStatus::Error(e.to_string()),
        };

        let cache = match self.cache.as_deref() {
            None => ComponentStatus::Disabled,
            Some(cache) => {
                if cache.health_check().await {
                    ComponentStatus::Ok
                } else {
                    ComponentStatus::Error("Cache ping failed".to_string())
                }
            }
        };

        StorageHealth { store, cache }
    }
}

async fn populate(cache: &dyn CacheService, url: &str, alias: &str) {
    match cache.set_url(url, alias).await {
        Ok(()) => debug!(alias, "URL cached"),
        Err(e) => warn!(alias, error = %e, "Failed to cache URL"),
    }
}
