//! Core domain entities.
//!
//! - [`UrlRecord`] - An alias to origin URL mapping owned by the durable store

pub mod url_record;

pub use url_record::UrlRecord;
