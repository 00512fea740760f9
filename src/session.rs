//! Search session: the stateful half of the search box.
//!
//! A [`SearchSession`] owns the query text, the single pending debounce, the
//! last result set and the picker selection. It exposes the contract the
//! rendering layer binds to (`query`, `set_query`, `results`,
//! `is_searching`, `show_results`, `selected_index`, `on_key_down`,
//! `clear_search`).
//!
//! The session never reads a clock or a store on its own. The host calls
//! [`SearchSession::tick`] from its event loop with the current collections;
//! that is the only place an evaluation runs. Because the debounce lives
//! inside the session, a dropped or closed session has nothing left that
//! could fire.

use std::time::Instant;

use crate::config::SearchConfig;
use crate::core::{
    Debouncer, KeyOutcome, NavKey, Phase, SearchEngine, SearchQuery, SearchResultSet,
    SearchableItem, Selection,
};
use crate::presentation::{self, PointerEvent, ResultGroup};
use crate::sources::CollectionSource;

pub struct SearchSession {
    engine: SearchEngine,
    debouncer: Debouncer,
    fallback_category: String,
    query: SearchQuery,
    /// Normalized query the current results were computed for
    evaluated: String,
    results: SearchResultSet,
    selection: Selection,
    is_searching: bool,
}

impl SearchSession {
    pub fn new(config: &SearchConfig) -> Self {
        Self::with_engine(SearchEngine::new(config), config)
    }

    /// Session around a pre-built engine (e.g. one with a navigator)
    pub fn with_engine(engine: SearchEngine, config: &SearchConfig) -> Self {
        Self {
            engine,
            debouncer: Debouncer::new(config.debounce_window()),
            fallback_category: config.fallback_category.clone(),
            query: SearchQuery::default(),
            evaluated: String::new(),
            results: SearchResultSet::default(),
            selection: Selection::new(),
            is_searching: false,
        }
    }

    /// Raw query text as typed
    pub fn query(&self) -> &str {
        &self.query.raw
    }

    pub fn search_query(&self) -> &SearchQuery {
        &self.query
    }

    pub fn set_query(&mut self, raw: impl Into<String>) {
        self.set_query_at(raw, Instant::now());
    }

    /// Record new query text and restart the debounce window from `now`
    pub fn set_query_at(&mut self, raw: impl Into<String>, now: Instant) {
        self.query = SearchQuery::new(raw);

        if self.query.is_empty() {
            self.debouncer.cancel();
            self.is_searching = false;
            self.reset_results();
            return;
        }

        // Too short to ever match; the previous result set must not linger
        if self.query.is_below_threshold(self.engine.min_query_chars()) {
            self.reset_results();
        }

        self.debouncer.schedule(now);
        self.is_searching = true;
        self.selection.begin_pending();
    }

    /// When the pending evaluation is due, if any
    pub fn deadline(&self) -> Option<Instant> {
        self.debouncer.deadline()
    }

    pub fn tick(&mut self, sources: &dyn CollectionSource) -> bool {
        self.tick_at(Instant::now(), sources)
    }

    /// Run the pending evaluation if its window has elapsed at `now`.
    ///
    /// Returns true when an evaluation ran.
    pub fn tick_at(&mut self, now: Instant, sources: &dyn CollectionSource) -> bool {
        if self.debouncer.poll(now).is_none() {
            return false;
        }

        self.is_searching = false;
        match self.engine.evaluate(&self.query, sources) {
            Some(set) => {
                self.selection.show(set.len());
                self.evaluated = self.query.normalized.clone();
                self.results = set;
            }
            None => self.reset_results(),
        }
        true
    }

    pub fn results(&self) -> &[SearchableItem] {
        &self.results.items
    }

    pub fn result_set(&self) -> &SearchResultSet {
        &self.results
    }

    pub fn is_searching(&self) -> bool {
        self.is_searching
    }

    pub fn show_results(&self) -> bool {
        self.selection.phase() == Phase::Shown
    }

    pub fn phase(&self) -> Phase {
        self.selection.phase()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selection.index()
    }

    /// Highlight an index directly; out-of-range values clamp to the last item
    pub fn set_selected_index(&mut self, index: Option<usize>) {
        self.selection.set_index(index);
    }

    pub fn on_key_down(&mut self, key: NavKey) -> KeyOutcome {
        let outcome = self.selection.handle_key(key);
        match outcome {
            KeyOutcome::Commit(index) => self.commit(index),
            KeyOutcome::Dismiss => self.clear_search(),
            KeyOutcome::Moved(_) | KeyOutcome::Ignored => {}
        }
        outcome
    }

    /// Handle hover and click callbacks from the rendered result list
    pub fn on_pointer(&mut self, event: PointerEvent) -> KeyOutcome {
        match event {
            PointerEvent::Hover(index) => self.selection.hover(index),
            PointerEvent::Click(index) => match self.selection.hover(index) {
                KeyOutcome::Moved(index) => {
                    self.commit(index);
                    KeyOutcome::Commit(index)
                }
                other => other,
            },
        }
    }

    /// Focus left the search surface
    pub fn blur(&mut self) {
        self.clear_search();
    }

    /// Hide the picker and empty the query, cancelling any pending evaluation
    pub fn clear_search(&mut self) {
        if self.debouncer.cancel() {
            tracing::trace!("Dropped pending evaluation on clear");
        }
        self.query = SearchQuery::default();
        self.is_searching = false;
        self.reset_results();
    }

    /// Tear the session down; later ticks never produce results
    pub fn close(&mut self) {
        self.clear_search();
    }

    /// Results grouped for display, highlighted against the evaluated query
    pub fn groups(&self) -> Vec<ResultGroup> {
        if !self.show_results() {
            return Vec::new();
        }
        presentation::group_results(
            &self.results.items,
            &self.evaluated,
            self.selection.index(),
            &self.fallback_category,
        )
    }

    fn commit(&mut self, index: usize) {
        if let Some(item) = self.results.get(index) {
            tracing::debug!(id = %item.id, route = %item.route, "Committed search result");
            if let Some(action) = &item.navigation {
                action.invoke();
            }
        }
        self.clear_search();
    }

    fn reset_results(&mut self) {
        self.results = SearchResultSet::default();
        self.evaluated.clear();
        self.selection.hide();
    }
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new(&SearchConfig::default())
    }
}

impl Drop for SearchSession {
    fn drop(&mut self) {
        self.close();
    }
}
