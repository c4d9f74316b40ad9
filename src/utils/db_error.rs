use crate::domain::errors::StorageError;

/// Maps a `sqlx` error onto the storage taxonomy.
///
/// Unique violations on insert become [`StorageError::AliasExists`], a missing
/// row becomes [`StorageError::UrlNotFound`], anything else is wrapped as
/// [`StorageError::StorageFailure`].
pub fn storage_error(e: sqlx::Error) -> StorageError {
    if let Some(db) = e.as_database_error()
        && db.is_unique_violation()
    {
        return StorageError::AliasExists;
    }

    match e {
        sqlx::Error::RowNotFound => StorageError::UrlNotFound,
        other => StorageError::failure(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_not_found_maps_to_url_not_found() {
        let err = storage_error(sqlx::Error::RowNotFound);
        assert!(matches!(err, StorageError::UrlNotFound));
    }

    #[test]
    fn test_other_sqlx_errors_map_to_storage_failure() {
        let err = storage_error(sqlx::Error::PoolTimedOut);
        assert!(matches!(err, StorageError::StorageFailure(_)));
    }
}
