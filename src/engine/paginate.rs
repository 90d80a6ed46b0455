//! Page slicing and pagination metadata

use serde::Serialize;

/// Pagination metadata for one computed page
///
/// Carries everything a table footer needs: "Showing `range_start` to
/// `range_end` of `total_count`" plus the page controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    /// Current page number (starts at 1)
    pub page: usize,

    /// Number of records per page
    pub page_size: usize,

    /// Total number of records after filtering, before slicing
    pub total_count: usize,

    /// Total number of pages, never less than 1
    pub total_pages: usize,

    /// 1-based index of the first visible record, 0 when the slice is empty
    pub range_start: usize,

    /// 1-based index of the last visible record, 0 when the slice is empty
    pub range_end: usize,

    /// Whether there is a next page
    pub has_next: bool,

    /// Whether there is a previous page
    pub has_prev: bool,
}

impl PageMeta {
    /// Compute metadata for a page over `total_count` records
    pub fn new(page: usize, page_size: usize, total_count: usize) -> Self {
        let page = page.max(1);
        let page_size = page_size.max(1);
        // An empty collection still reports one page so the footer never
        // renders "page 1 of 0".
        let total_pages = total_count.div_ceil(page_size).max(1);

        let start = (page - 1) * page_size;
        let (range_start, range_end) = if start < total_count {
            (start + 1, (start + page_size).min(total_count))
        } else {
            (0, 0)
        };

        Self {
            page,
            page_size,
            total_count,
            total_pages,
            range_start,
            range_end,
            has_next: start + page_size < total_count,
            has_prev: page > 1,
        }
    }

    /// Whether the computed slice contains no records
    pub fn is_empty(&self) -> bool {
        self.range_start == 0
    }
}

/// Slice out the requested page and compute its metadata
///
/// An out-of-range `current_page` yields an empty slice rather than an
/// error; clamping the page proactively is the view's job.
pub fn paginate<T>(records: Vec<T>, page_size: usize, current_page: usize) -> (Vec<T>, PageMeta) {
    let meta = PageMeta::new(current_page, page_size, records.len());

    let visible = if meta.is_empty() {
        Vec::new()
    } else {
        records
            .into_iter()
            .skip(meta.range_start - 1)
            .take(meta.page_size)
            .collect()
    };

    (visible, meta)
}
