//! Result ranking and limiting.
//!
//! Ranking is bucketed by how the title relates to the query, and buckets are
//! impermeable:
//!
//! 1. **Exact** - the title equals the query
//! 2. **Prefix** - the title starts with the query
//! 3. **Contains** - everything else (including description-only matches)
//!
//! Inside a bucket, titles are ordered case-insensitively. The sort is stable,
//! so items with equal keys keep their collection order.

use std::collections::HashSet;

use super::matcher::SearchableItem;

/// Hard cap on the number of results handed to the picker.
pub const RESULT_LIMIT: usize = 10;

/// How an item's title relates to the query. Smaller ranks first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MatchTier {
    Exact,
    Prefix,
    Contains,
}

impl MatchTier {
    /// Classify a lower-cased title against a normalized query
    pub fn classify(title_lower: &str, needle: &str) -> Self {
        if title_lower == needle {
            MatchTier::Exact
        } else if title_lower.starts_with(needle) {
            MatchTier::Prefix
        } else {
            MatchTier::Contains
        }
    }
}

/// Drop later occurrences of an id already seen
pub fn dedup_by_id(items: Vec<SearchableItem>) -> Vec<SearchableItem> {
    let mut seen = HashSet::with_capacity(items.len());
    items
        .into_iter()
        .filter(|item| seen.insert(item.id.clone()))
        .collect()
}

/// Sort candidates most- to least-relevant.
///
/// The composite key is computed once per item rather than on every
/// comparison.
pub fn rank(items: Vec<SearchableItem>, needle: &str) -> Vec<SearchableItem> {
    let mut keyed: Vec<((MatchTier, String), SearchableItem)> = items
        .into_iter()
        .map(|item| {
            let title = item.title.to_lowercase();
            ((MatchTier::classify(&title, needle), title), item)
        })
        .collect();

    keyed.sort_by(|a, b| a.0.cmp(&b.0));
    keyed.into_iter().map(|(_, item)| item).collect()
}

/// The ranked, limited outcome of one evaluation.
#[derive(Debug, Clone, Default)]
pub struct SearchResultSet {
    pub items: Vec<SearchableItem>,
    /// True when more candidates matched than were kept
    pub truncated: bool,
}

impl SearchResultSet {
    /// Keep the first `limit` ranked candidates
    pub fn limit(mut ranked: Vec<SearchableItem>, limit: usize) -> Self {
        let truncated = ranked.len() > limit;
        ranked.truncate(limit);
        Self {
            items: ranked,
            truncated,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&SearchableItem> {
        self.items.get(index)
    }
}
