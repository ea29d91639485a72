/// Configuration for query behavior.
#[derive(Debug, Clone, Default)]
pub struct SearchConfig {
    /// Caps the number of hits per query. `None` yields every match.
    pub result_limit: Option<usize>,
}
