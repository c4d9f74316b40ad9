//! Save path with alias auto-generation.

use std::sync::Arc;

use tracing::{info, warn};

use super::url_storage::UrlStorage;
use crate::domain::errors::StorageError;
use crate::utils::alias_generator::{AliasGenerator, RandomAliasGenerator};

/// Maximum number of generated aliases tried before giving up.
pub const MAX_ALIAS_ATTEMPTS: usize = 10;

/// Stores URLs under caller-supplied or generated aliases.
///
/// Generated aliases carry no uniqueness guarantee. Collisions are detected by
/// the durable store's atomic uniqueness check and answered by generating a
/// new alias, up to [`MAX_ALIAS_ATTEMPTS`] times.
pub struct ShortenService {
    storage: Arc<UrlStorage>,
    generator: Arc<dyn AliasGenerator>,
}

impl ShortenService {
    /// Creates a service using [`RandomAliasGenerator`].
    pub fn new(storage: Arc<UrlStorage>) -> Self {
        Self::with_generator(storage, Arc::new(RandomAliasGenerator::new()))
    }

    /// Creates a service with a custom alias generator.
    pub fn with_generator(storage: Arc<UrlStorage>, generator: Arc<dyn AliasGenerator>) -> Self {
        Self { storage, generator }
    }

    /// Stores `url` and returns the alias it was saved under.
    ///
    /// A non-empty `alias` is used as is. `None` or an empty string requests a
    /// generated alias.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::AliasExists`] if a caller-supplied alias is taken.
    /// Returns [`StorageError::AliasGenerationExhausted`] if every generated
    /// alias collided.
    /// Returns any other storage error unchanged, on its first occurrence.
    pub async fn shorten(&self, url: &str, alias: Option<&str>) -> Result<String, StorageError> {
        match alias.filter(|a| !a.is_empty()) {
            Some(alias) => {
                self.storage.save_url(url, alias).await?;
                info!(alias, "URL saved with custom alias");
                Ok(alias.to_string())
            }
            None => self.save_with_generated_alias(url).await,
        }
    }

    async fn save_with_generated_alias(&self, url: &str) -> Result<String, StorageError> {
        for attempt in 1..=MAX_ALIAS_ATTEMPTS {
            let alias = self.generator.generate();

            match self.storage.save_url(url, &alias).await {
                Ok(()) => {
                    info!(alias = %alias, attempt, "URL saved with generated alias");
                    return Ok(alias);
                }
                Err(StorageError::AliasExists) => {
                    warn!(alias = %alias, attempt, "Alias collision, regenerating");
                }
                Err(e) => return Err(e),
            }
        }

        Err(StorageError::AliasGenerationExhausted {
            attempts: MAX_ALIAS_ATTEMPTS,
        })
    }
}
