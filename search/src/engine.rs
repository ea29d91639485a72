use crate::config::SearchConfig;
use crate::query::SearchQuery;
use crate::results::Hits;
use symdex_core::Index;

/// Query engine over an immutable documentation index.
///
/// Queries take `&self`, so a loaded engine can be shared across threads
/// without locking.
pub struct SearchEngine {
    index: Index,
    config: SearchConfig,
}

impl SearchEngine {
    pub fn new(index: Index, config: SearchConfig) -> Self {
        Self { index, config }
    }

    /// The underlying index.
    pub fn index(&self) -> &Index {
        &self.index
    }

    /// Runs a query, returning a lazy sequence of matching entries.
    ///
    /// The empty query matches nothing. Every entry whose key contains the
    /// text appears exactly once, prefix matches first, ties in insertion
    /// order.
    pub fn query(&self, query: &SearchQuery) -> Hits<'_> {
        let SearchQuery::Substring(text) = query;
        let needle = text.to_lowercase();
        tracing::debug!(needle = %needle, "query");
        Hits::new(self.index.entries(), needle, self.config.result_limit)
    }
}
