//! Repository trait definitions for the domain layer.
//!
//! The durable store is abstracted behind [`UrlRepository`]. Implementations
//! live in `crate::infrastructure::persistence`; mock implementations are
//! auto-generated via `mockall` for unit tests.
//!
//! # Testing
//!
//! See integration tests in `tests/repository_url.rs` for usage examples.

pub mod url_repository;

pub use url_repository::UrlRepository;

#[cfg(test)]
pub use url_repository::MockUrlRepository;
