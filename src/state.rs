//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{ShortenService, UrlStorage};

/// Credentials accepted by the Basic auth middleware.
#[derive(Debug, Clone)]
pub struct BasicCredentials {
    pub user: String,
    pub password: String,
}

impl BasicCredentials {
    pub fn new(user: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            password: password.into(),
        }
    }

    /// Compares without short-circuiting on the first differing byte.
    pub fn matches(&self, user: &str, password: &str) -> bool {
        constant_time_eq(self.user.as_bytes(), user.as_bytes())
            & constant_time_eq(self.password.as_bytes(), password.as_bytes())
    }
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<UrlStorage>,
    pub shorten_service: Arc<ShortenService>,
    pub credentials: Arc<BasicCredentials>,
}

impl AppState {
    pub fn new(
        storage: Arc<UrlStorage>,
        shorten_service: Arc<ShortenService>,
        credentials: BasicCredentials,
    ) -> Self {
        Self {
            storage,
            shorten_service,
            credentials: Arc::new(credentials),
        }
    }
}
