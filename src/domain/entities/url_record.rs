//! URL record entity.

/// A stored mapping from a short alias to its origin URL.
///
/// The durable store is the only owner of these records. Cache entries are
/// derived copies and carry no authority.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRecord {
    pub alias: String,
    pub origin: String,
}

impl UrlRecord {
    pub fn new(alias: impl Into<String>, origin: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            origin: origin.into(),
        }
    }
}
