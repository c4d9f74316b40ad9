//! Application layer services implementing business logic.
//!
//! This layer coordinates the durable store and the cache, and owns the
//! alias generation retry policy. HTTP handlers and the admin CLI call into
//! these services instead of touching backends directly.
//!
//! # Available Services
//!
//! - [`services::url_storage::UrlStorage`] - Store/cache orchestration with fallback rules
//! - [`services::shorten_service::ShortenService`] - Save path with alias generation and retry

pub mod services;
