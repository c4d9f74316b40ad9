//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete implementations for data persistence and caching.
//!
//! # Modules
//!
//! - [`cache`] - Caching abstractions (Redis and in-process implementations)
//! - [`persistence`] - Durable store implementations (PostgreSQL and in-memory)

pub mod cache;
pub mod persistence;
