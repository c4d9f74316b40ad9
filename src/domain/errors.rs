//! Storage error taxonomy.

use thiserror::Error;

/// Boxed backend error carried by [`StorageError::StorageFailure`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors reported by the durable store, the storage orchestrator and the
/// shorten service.
///
/// Cache failures never appear here: they are logged and swallowed by
/// [`crate::application::services::UrlStorage`].
#[derive(Debug, Error)]
pub enum StorageError {
    /// The alias is already taken. Recoverable by retrying with a new alias.
    #[error("alias already exists")]
    AliasExists,

    /// No record exists for the requested alias.
    #[error("URL not found")]
    UrlNotFound,

    /// Every generated alias collided. The client should retry later.
    #[error("failed to generate a unique alias after {attempts} attempts")]
    AliasGenerationExhausted { attempts: usize },

    /// Opaque durable store failure. Not retried by the storage layer.
    #[error("storage failure: {0}")]
    StorageFailure(#[source] BoxError),
}

impl StorageError {
    /// Wraps any backend error as [`StorageError::StorageFailure`].
    pub fn failure(err: impl Into<BoxError>) -> Self {
        Self::StorageFailure(err.into())
    }
}
