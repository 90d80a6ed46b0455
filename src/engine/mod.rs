//! The list query engine: filter, sort, paginate
//!
//! A pure, side-effect-free transformation from (source records, query
//! state) to (visible page, pagination metadata). The three operations are
//! applied strictly in order — filter, then sort, then paginate — on every
//! recomputation, and the source collection is never mutated: each run
//! derives a fresh ordered sequence.

pub mod filter;
pub mod paginate;
pub mod sort;
pub mod state;

pub use filter::filter;
pub use paginate::{PageMeta, paginate};
pub use sort::sort;
pub use state::{QueryState, SortDirection};

use crate::core::record::Record;
use serde::Serialize;

/// One computed page of records plus its pagination metadata
#[derive(Debug, Clone, Serialize)]
pub struct PageView<R> {
    pub records: Vec<R>,
    pub meta: PageMeta,
}

/// The composed filter → sort → paginate pipeline with an injected
/// searchable-field whitelist
///
/// One engine is built per list view; which fields are eligible for
/// free-text matching is declared explicitly rather than derived from the
/// record shape, so behavior stays predictable across resources.
#[derive(Debug, Clone)]
pub struct ListQueryEngine {
    searchable_fields: Vec<String>,
}

impl ListQueryEngine {
    pub fn new<I, S>(searchable_fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            searchable_fields: searchable_fields.into_iter().map(Into::into).collect(),
        }
    }

    pub fn searchable_fields(&self) -> &[String] {
        &self.searchable_fields
    }

    /// Run the full pipeline for the given query state
    ///
    /// Deterministic: identical inputs produce an identical slice and
    /// identical metadata.
    pub fn run<R: Record>(&self, records: &[R], query: &QueryState) -> PageView<R> {
        let fields: Vec<&str> = self.searchable_fields.iter().map(String::as_str).collect();

        let matched = filter(records.to_vec(), query.search_term(), &fields);
        let ordered = sort(matched, query.sort_column(), query.sort_direction());
        let (visible, meta) = paginate(ordered, query.page_size(), query.current_page());

        PageView {
            records: visible,
            meta,
        }
    }

    /// Number of records surviving the filter, and the page count it implies
    ///
    /// Used by views to clamp the current page before running the pipeline.
    pub fn total_pages<R: Record>(&self, records: &[R], query: &QueryState) -> usize {
        let fields: Vec<&str> = self.searchable_fields.iter().map(String::as_str).collect();
        let matched = filter(records.to_vec(), query.search_term(), &fields);
        PageMeta::new(1, query.page_size(), matched.len()).total_pages
    }
}
