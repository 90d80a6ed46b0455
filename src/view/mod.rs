//! List-view controller
//!
//! [`ListView`] is the reusable core of every feature module: it owns the
//! fetched collection and the query state, translates user actions (typing
//! in the search box, clicking a sort header, paging) into state changes,
//! and recomputes the visible slice through the engine. The collection is
//! replaced wholesale after every successful create/update/delete round
//! trip; there is no fine-grained patching.

use crate::core::record::Record;
use crate::engine::{ListQueryEngine, PageView, QueryState};

/// In-memory list view over one resource's records
#[derive(Debug, Clone)]
pub struct ListView<R: Record> {
    records: Vec<R>,
    query: QueryState,
    engine: ListQueryEngine,
}

impl<R: Record> ListView<R> {
    /// Create an empty view with the given page size and searchable fields
    pub fn new<I, S>(page_size: usize, searchable_fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            records: Vec::new(),
            query: QueryState::new(page_size),
            engine: ListQueryEngine::new(searchable_fields),
        }
    }

    /// The full source collection, untouched by the query
    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn query(&self) -> &QueryState {
        &self.query
    }

    /// Replace the collection wholesale, as after a fetch or a mutation
    /// round trip
    ///
    /// The current page is clamped in case the new collection is smaller
    /// than where the view was pointing.
    pub fn set_records(&mut self, records: Vec<R>) {
        self.records = records;
        let total_pages = self.engine.total_pages(&self.records, &self.query);
        self.query.clamp_page(total_pages);
    }

    /// Update the search term; the view snaps back to page 1
    pub fn search(&mut self, term: impl Into<String>) {
        self.query.set_search(term);
    }

    /// Click the given column's sort header
    pub fn toggle_sort(&mut self, column: &str) {
        self.query.toggle_sort(column);
    }

    /// Jump to a page, clamped to the pages the filtered set actually has
    pub fn go_to_page(&mut self, page: usize) {
        self.query.set_page(page);
        let total_pages = self.engine.total_pages(&self.records, &self.query);
        self.query.clamp_page(total_pages);
    }

    pub fn next_page(&mut self) {
        self.go_to_page(self.query.current_page() + 1);
    }

    pub fn prev_page(&mut self) {
        self.go_to_page(self.query.current_page().saturating_sub(1));
    }

    /// Recompute the visible slice for the current state
    pub fn visible(&self) -> PageView<R> {
        self.engine.run(&self.records, &self.query)
    }
}
