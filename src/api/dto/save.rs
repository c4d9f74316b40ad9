//! DTOs for the save endpoint.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::Validate;

/// Allowed characters for caller-chosen aliases. Empty is accepted and means
/// "generate one".
static ALIAS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]*$").expect("alias regex is valid"));

/// Request to store a URL.
#[derive(Debug, Deserialize, Validate)]
pub struct SaveRequest {
    /// The original URL (must be valid HTTP/HTTPS).
    #[validate(url(message = "Invalid URL format"))]
    pub url: String,

    /// Optional alias. Omitted or empty requests a generated one.
    #[serde(default)]
    #[validate(length(max = 64))]
    #[validate(regex(path = "*ALIAS_REGEX", message = "Alias may contain only letters, digits, '_' and '-'"))]
    pub alias: Option<String>,
}

/// Stored URL and the alias it is reachable under.
#[derive(Debug, Serialize)]
pub struct SaveResponse {
    pub url: String,
    pub alias: String,
}
