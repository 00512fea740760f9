//! Portal Search - federated search for the municipal portal.
//!
//! On every keystroke the search box looks across the portal's content
//! stores (pages, forms, services, secretariats, events, gallery albums)
//! and a fixed set of built-in destinations, ranks what matches and lets the
//! user pick a result with the keyboard or the mouse.
//!
//! # Architecture
//!
//! - [`sources`] - read-only record shapes and the [`CollectionSource`] trait
//! - [`core`] - the pipeline: normalize, debounce, match, rank, limit, select
//! - [`session`] - [`SearchSession`], the state the search box binds to
//! - [`presentation`] - grouping, icons and highlighting for the picker
//! - [`config`] - tunables loaded from TOML
//!
//! # Example
//!
//! ```ignore
//! use portal_search::{ContentSnapshot, NavKey, SearchConfig, SearchSession};
//!
//! let config = SearchConfig::load();
//! let mut session = SearchSession::new(&config);
//! let snapshot = ContentSnapshot::from_json(&export)?;
//!
//! session.set_query("iptu");
//! // ...later, from the event loop
//! session.tick(&snapshot);
//! session.on_key_down(NavKey::ArrowDown);
//! session.on_key_down(NavKey::Enter);
//! ```

pub mod config;
pub mod core;
pub mod logging;
pub mod presentation;
pub mod session;
pub mod sources;

mod error;

pub use crate::core::{
    KeyOutcome, NavKey, NavigationAction, Navigator, Phase, SearchEngine, SearchQuery,
    SearchResultSet, SearchableItem, Source,
};
pub use config::SearchConfig;
pub use error::{PortalError, PortalResult};
pub use presentation::{PointerEvent, ResultEntry, ResultGroup};
pub use session::SearchSession;
pub use sources::{CollectionSource, ContentSnapshot, SourceType};
