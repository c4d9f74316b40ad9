//! Utility functions shared across layers.
//!
//! - [`alias_generator`] - Random alias generation
//! - [`db_error`] - Translation of database errors into storage errors

pub mod alias_generator;
pub mod db_error;
