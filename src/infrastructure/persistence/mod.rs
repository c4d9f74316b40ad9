//! Durable store implementations.
//!
//! Concrete implementations of [`crate::domain::repositories::UrlRepository`].
//!
//! # Repositories
//!
//! - [`PgUrlRepository`] - PostgreSQL storage using SQLx
//! - [`InMemoryUrlRepository`] - Process-local map for tests and tooling

pub mod memory_url_repository;
pub mod pg_url_repository;

pub use memory_url_repository::InMemoryUrlRepository;
pub use pg_url_repository::PgUrlRepository;
