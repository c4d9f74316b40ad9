//! In-memory implementation of the URL repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::{Mutex, MutexGuard};

use crate::domain::entities::UrlRecord;
use crate::domain::errors::StorageError;
use crate::domain::repositories::UrlRepository;

/// Process-local durable store stand-in.
///
/// Insert-if-absent happens under one lock, which gives the same atomic
/// uniqueness check as the PostgreSQL primary key.
#[derive(Debug, Default)]
pub struct InMemoryUrlRepository {
    records: Mutex<HashMap<String, String>>,
}

impl InMemoryUrlRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-populated with records.
    pub fn with_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = UrlRecord>,
    {
        let records = records.into_iter().map(|r| (r.alias, r.origin)).collect();
        Self {
            records: Mutex::new(records),
        }
    }

    /// Returns all stored records ordered by alias.
    pub fn records(&self) -> Vec<UrlRecord> {
        let mut records: Vec<UrlRecord> = self
            .lock()
            .iter()
            .map(|(alias, origin)| UrlRecord::new(alias.as_str(), origin.as_str()))
            .collect();
        records.sort_by(|a, b| a.alias.cmp(&b.alias));
        records
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl UrlRepository for InMemoryUrlRepository {
    async fn save_url(&self, url: &str, alias: &str) -> Result<(), StorageError> {
        match self.lock().entry(alias.to_string()) {
            Entry::Occupied(_) => Err(StorageError::AliasExists),
            Entry::Vacant(slot) => {
                slot.insert(url.to_string());
                Ok(())
            }
        }
    }

    async fn get_url(&self, alias: &str) -> Result<String, StorageError> {
        self.lock()
            .get(alias)
            .cloned()
            .ok_or(StorageError::UrlNotFound)
    }

    async fn delete_url(&self, alias: &str) -> Result<String, StorageError> {
        self.lock().remove(alias).ok_or(StorageError::UrlNotFound)
    }

    async fn ping(&self) -> Result<(), StorageError> {
        Ok(())
    }
}
