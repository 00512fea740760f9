//! Search engine - the pure half of the search pipeline.
//!
//! `evaluate` is a function of the query and the collections passed in:
//! normalize, gate on length, match, de-duplicate, rank, limit. Nothing is
//! cached between calls; every evaluation rescans the current snapshot.

use std::sync::Arc;

use super::matcher::{Matcher, Navigator, SearchableItem};
use super::query::SearchQuery;
use super::ranking::{self, SearchResultSet};
use crate::config::SearchConfig;
use crate::sources::CollectionSource;

/// Search engine that aggregates results from every collection
#[derive(Clone)]
pub struct SearchEngine {
    matcher: Matcher,
    min_query_chars: usize,
    max_results: usize,
}

impl SearchEngine {
    pub fn new(config: &SearchConfig) -> Self {
        Self::build(config, None)
    }

    /// Engine whose results navigate through `navigator` on commit
    pub fn with_navigator(config: &SearchConfig, navigator: Arc<dyn Navigator>) -> Self {
        Self::build(config, Some(navigator))
    }

    fn build(config: &SearchConfig, navigator: Option<Arc<dyn Navigator>>) -> Self {
        Self {
            matcher: Matcher::new(navigator, config.include_builtin_destinations),
            min_query_chars: config.min_query_chars,
            max_results: config.max_results,
        }
    }

    pub fn min_query_chars(&self) -> usize {
        self.min_query_chars
    }

    /// Unranked, unlimited candidates for a query.
    ///
    /// Below-threshold queries yield nothing.
    pub fn candidates(&self, query: &SearchQuery, sources: &dyn CollectionSource) -> Vec<SearchableItem> {
        if query.is_below_threshold(self.min_query_chars) {
            return Vec::new();
        }
        let candidates = self.matcher.candidates(&query.normalized, sources);
        ranking::dedup_by_id(candidates)
    }

    /// Run the full pipeline for a query.
    ///
    /// Returns `None` for below-threshold queries, which never produce a
    /// result set.
    pub fn evaluate(&self, query: &SearchQuery, sources: &dyn CollectionSource) -> Option<SearchResultSet> {
        if query.is_below_threshold(self.min_query_chars) {
            return None;
        }

        let candidates = self.candidates(query, sources);
        let matched = candidates.len();
        let ranked = ranking::rank(candidates, &query.normalized);
        let set = SearchResultSet::limit(ranked, self.max_results);

        tracing::debug!(
            query = %query.normalized,
            matched,
            returned = set.len(),
            truncated = set.truncated,
            "Evaluated search"
        );

        Some(set)
    }
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new(&SearchConfig::default())
    }
}
