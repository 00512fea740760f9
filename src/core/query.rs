//! Query normalization.

/// Minimum normalized length for a query to be searched.
pub const MIN_QUERY_CHARS: usize = 2;

/// A query as typed and as matched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub raw: String,
    pub normalized: String,
}

impl SearchQuery {
    /// Trim and lower-case the raw input
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let normalized = raw.trim().to_lowercase();
        Self { raw, normalized }
    }

    /// True when there is nothing left after trimming
    pub fn is_empty(&self) -> bool {
        self.normalized.is_empty()
    }

    /// True when the query is too short to search, counted in characters
    pub fn is_below_threshold(&self, min_chars: usize) -> bool {
        self.normalized.chars().count() < min_chars
    }
}
