//! Core search pipeline - no I/O, no rendering.
//!
//! - [`query`] normalizes raw input
//! - [`debounce`] defers evaluation until typing stops
//! - [`matcher`] scans every collection for candidates
//! - [`ranking`] orders and caps candidates
//! - [`search`] composes the pure pipeline
//! - [`selection`] tracks the highlighted result

pub mod debounce;
pub mod matcher;
pub mod query;
pub mod ranking;
pub mod search;
pub mod selection;

pub use debounce::{DebounceHandle, Debouncer};
pub use matcher::{Matcher, NavigationAction, Navigator, PageKind, SearchableItem, Source};
pub use query::{SearchQuery, MIN_QUERY_CHARS};
pub use ranking::{MatchTier, SearchResultSet, RESULT_LIMIT};
pub use search::SearchEngine;
pub use selection::{KeyOutcome, NavKey, Phase, Selection};
