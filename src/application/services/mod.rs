//! Business logic services for the application layer.

pub mod shorten_service;
pub mod url_storage;

pub use shorten_service::{MAX_ALIAS_ATTEMPTS, ShortenService};
pub use url_storage::{ComponentStatus, StorageHealth, UrlStorage};
