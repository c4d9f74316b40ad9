//! Repository trait for the durable alias store.

use crate::domain::errors::StorageError;
use async_trait::async_trait;

/// Authoritative alias → URL store.
///
/// Implementations translate their backend's error shapes into
/// [`StorageError`] at the call site: a uniqueness violation becomes
/// [`StorageError::AliasExists`], an absent row becomes
/// [`StorageError::UrlNotFound`], everything else is wrapped in
/// [`StorageError::StorageFailure`].
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryUrlRepository`] - Process-local map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Inserts a new record.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::AliasExists`] if the alias is already stored.
    /// Returns [`StorageError::StorageFailure`] on backend errors.
    async fn save_url(&self, url: &str, alias: &str) -> Result<(), StorageError>;

    /// Looks up the origin URL for an alias.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::UrlNotFound`] if the alias is not stored.
    /// Returns [`StorageError::StorageFailure`] on backend errors.
    async fn get_url(&self, alias: &str) -> Result<String, StorageError>;

    /// Removes the record for an alias and returns the origin URL it held.
    ///
    /// The returned URL is needed to remove the reverse cache entry, which is
    /// keyed by URL rather than alias.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::UrlNotFound`] if the alias is not stored.
    /// Returns [`StorageError::StorageFailure`] on backend errors.
    async fn delete_url(&self, alias: &str) -> Result<String, StorageError>;

    /// Checks that the backend is reachable.
    async fn ping(&self) -> Result<(), StorageError>;
}
