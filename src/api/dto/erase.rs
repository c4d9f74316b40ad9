//! DTOs for the delete endpoint.

use serde::Serialize;

/// The removed mapping.
#[derive(Debug, Serialize)]
pub struct EraseResponse {
    pub alias: String,
    pub url: String,
}
