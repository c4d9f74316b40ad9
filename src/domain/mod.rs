//! Domain layer containing business entities, errors and storage contracts.
//!
//! This module is independent of infrastructure concerns. It defines what a
//! URL record is, which errors the storage layer may report, and the trait the
//! durable store must implement.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`errors`] - Storage error taxonomy shared by every layer above the backends
//! - [`repositories`] - Durable store trait definitions
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Repository traits define contracts implemented by infrastructure layer
//! - Backend-specific errors are translated into [`errors::StorageError`] where
//!   the backend is called, so nothing above the repository sees them

pub mod entities;
pub mod errors;
pub mod repositories;
