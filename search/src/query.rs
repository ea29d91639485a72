//! Search query types.

/// Query type for search.
///
/// Currently supports substring search only. Designed to be extensible
/// for future query modes.
#[derive(Debug, Clone)]
pub enum SearchQuery {
    /// Case-insensitive substring matching; prefix matches rank first.
    Substring(String),
}

impl SearchQuery {
    /// The raw query text.
    pub fn text(&self) -> &str {
        let Self::Substring(text) = self;
        text
    }
}
