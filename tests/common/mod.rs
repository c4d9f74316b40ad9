#![allow(dead_code)]

use aliaslink::application::services::{ShortenService, UrlStorage};
use aliaslink::domain::errors::StorageError;
use aliaslink::domain::repositories::UrlRepository;
use aliaslink::infrastructure::cache::{CacheError, CacheResult, CacheService, MemoryCache};
use aliaslink::infrastructure::persistence::InMemoryUrlRepository;
use aliaslink::state::{AppState, BasicCredentials};
use async_trait::async_trait;
use axum_test::TestServer;
use std::sync::Arc;
use std::time::Duration;

pub const AUTH_USER: &str = "admin";
pub const AUTH_PASSWORD: &str = "secret";

/// `Authorization` value for `admin:secret`.
pub const AUTH_HEADER: &str = "Basic YWRtaW46c2VjcmV0";

/// Backends behind a test state, kept for direct inspection.
pub struct TestBackends {
    pub repository: Arc<InMemoryUrlRepository>,
    pub cache: Option<Arc<MemoryCache>>,
}

pub fn create_test_state(with_cache: bool) -> (AppState, TestBackends) {
    let repository = Arc::new(InMemoryUrlRepository::new());
    let cache = with_cache.then(|| Arc::new(MemoryCache::default()));

    let state = state_from(
        repository.clone(),
        cache.clone().map(|c| c as Arc<dyn CacheService>),
    );

    (state, TestBackends { repository, cache })
}

pub fn state_from(
    repository: Arc<dyn UrlRepository>,
    cache: Option<Arc<dyn CacheService>>,
) -> AppState {
    let storage = Arc::new(UrlStorage::new(repository, cache));
    let shorten_service = Arc::new(ShortenService::new(storage.clone()));

    AppState::new(
        storage,
        shorten_service,
        BasicCredentials::new(AUTH_USER, AUTH_PASSWORD),
    )
}

pub fn create_test_server(state: AppState) -> TestServer {
    TestServer::new(aliaslink::routes::router(state, Duration::from_secs(4))).unwrap()
}

/// Cache whose every operation fails, as if the server were down.
pub struct FailingCache;

#[async_trait]
impl CacheService for FailingCache {
    async fn set_url(&self, _url: &str, _alias: &str) -> CacheResult<()> {
        Err(CacheError::Operation("connection refused".to_string()))
    }

    async fn get_url(&self, _alias: &str) -> CacheResult<Option<String>> {
        Err(CacheError::Operation("connection refused".to_string()))
    }

    async fn del_url(&self, _url: &str, _alias: &str) -> CacheResult<()> {
        Err(CacheError::Operation("connection refused".to_string()))
    }

    async fn health_check(&self) -> bool {
        false
    }
}

/// Durable store that is unreachable.
pub struct UnreachableRepository;

#[async_trait]
impl UrlRepository for UnreachableRepository {
    async fn save_url(&self, _url: &str, _alias: &str) -> Result<(), StorageError> {
        Err(StorageError::failure("database is down"))
    }

    async fn get_url(&self, _alias: &str) -> Result<String, StorageError> {
        Err(StorageError::failure("database is down"))
    }

    async fn delete_url(&self, _alias: &str) -> Result<String, StorageError> {
        Err(StorageError::failure("database is down"))
    }

    async fn ping(&self) -> Result<(), StorageError> {
        Err(StorageError::failure("database is down"))
    }
}
