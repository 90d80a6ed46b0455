//! Query state for list views
//!
//! Holds the UI-owned search/sort/page configuration and the sort-header
//! state machine. The state is only ever mutated through the methods here,
//! which keep two invariants:
//!
//! - `sort_direction` is `Some` exactly when `sort_column` is `Some`
//! - any search change or sort-header click resets the page to 1

use serde::{Deserialize, Serialize};

/// Direction of an active column sort
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Search, sort, and pagination state for one list view
///
/// Created fresh per view, mutated only by explicit user actions, and read
/// by [`ListQueryEngine`](crate::engine::ListQueryEngine) on every
/// recomputation.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryState {
    search_term: String,
    sort_column: Option<String>,
    sort_direction: Option<SortDirection>,
    current_page: usize,
    page_size: usize,
}

impl QueryState {
    /// Create a fresh state: empty search, no sort, page 1
    pub fn new(page_size: usize) -> Self {
        Self {
            search_term: String::new(),
            sort_column: None,
            sort_direction: None,
            current_page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn sort_column(&self) -> Option<&str> {
        self.sort_column.as_deref()
    }

    pub fn sort_direction(&self) -> Option<SortDirection> {
        self.sort_direction
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Replace the search term
    ///
    /// Every change resets the page to 1, mirroring a search box that fires
    /// on each keystroke.
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.current_page = 1;
    }

    /// Apply a click on the given column's sort header
    ///
    /// A column that is not the active sort key becomes it, ascending. The
    /// active column cycles ascending, descending, then back to unsorted
    /// (insertion order). Any click resets the page to 1.
    pub fn toggle_sort(&mut self, column: &str) {
        if self.sort_column.as_deref() == Some(column) {
            match self.sort_direction {
                Some(SortDirection::Ascending) => {
                    self.sort_direction = Some(SortDirection::Descending);
                }
                Some(SortDirection::Descending) | None => {
                    self.sort_column = None;
                    self.sort_direction = None;
                }
            }
        } else {
            self.sort_column = Some(column.to_string());
            self.sort_direction = Some(SortDirection::Ascending);
        }
        self.current_page = 1;
    }

    /// Jump to a page, ensuring a minimum of 1
    ///
    /// Bounds against the filtered collection are the caller's concern (see
    /// [`ListView::go_to_page`](crate::view::ListView::go_to_page)); the
    /// engine tolerates an out-of-range page by producing an empty slice.
    pub fn set_page(&mut self, page: usize) {
        self.current_page = page.max(1);
    }

    /// Clamp the page into `[1, max(1, total_pages)]`
    ///
    /// Called after the filtered set shrinks so the view never points past
    /// the last page.
    pub fn clamp_page(&mut self, total_pages: usize) {
        self.current_page = self.current_page.clamp(1, total_pages.max(1));
    }
}

impl Default for QueryState {
    /// Page size 10, the value every observed list view uses
    fn default() -> Self {
        Self::new(10)
    }
}
