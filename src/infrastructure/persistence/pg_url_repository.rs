//! PostgreSQL implementation of the URL repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::errors::StorageError;
use crate::domain::repositories::UrlRepository;
use crate::utils::db_error::storage_error;

/// PostgreSQL repository for alias records.
///
/// Alias uniqueness is enforced by the `url.alias` primary key, so a single
/// `INSERT` either succeeds or fails the check atomically. Database errors
/// are translated into [`StorageError`] by [`storage_error`].
pub struct PgUrlRepository {
    pool: Arc<PgPool>,
}

impl PgUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Returns the number of stored records.
    pub async fn count(&self) -> Result<i64, StorageError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM url")
            .fetch_one(self.pool.as_ref())
            .await
            .map_err(storage_error)?;

        Ok(count)
    }
}

#[async_trait]
impl UrlRepository for PgUrlRepository {
    async fn save_url(&self, url: &str, alias: &str) -> Result<(), StorageError> {
        sqlx::query("INSERT INTO url (alias, origin) VALUES ($1, $2)")
            .bind(alias)
            .bind(url)
            .execute(self.pool.as_ref())
            .await
            .map_err(storage_error)?;

        Ok(())
    }

    async fn get_url(&self, alias: &str) -> Result<String, StorageError> {
        let origin = sqlx::query_scalar::<_, String>("SELECT origin FROM url WHERE alias = $1")
            .bind(alias)
            .fetch_one(self.pool.as_ref())
            .await
            .map_err(storage_error)?;

        Ok(origin)
    }

    async fn delete_url(&self, alias: &str) -> Result<String, StorageError> {
        let origin = sqlx::query_scalar::<_, String>(
            "DELETE FROM url WHERE alias = $1 RETURNING origin",
        )
        .bind(alias)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(storage_error)?;

        Ok(origin)
    }

    async fn ping(&self) -> Result<(), StorageError> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await
            .map_err(storage_error)?;

        Ok(())
    }
}
