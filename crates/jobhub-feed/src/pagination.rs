//! Pagination over the sorted, filtered feed.
//!
//! Pages are 1-indexed. The current page is stored as given; a page past the
//! end simply yields an empty slice and navigation is expected to steer back.

use std::ops::Range;

/// Number of pages for `len` items, never less than one.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1)).max(1)
}

/// Index range of `page` within a list of `len` items, clipped to the list.
pub fn page_bounds(len: usize, page: usize, page_size: usize) -> Range<usize> {
    let page_size = page_size.max(1);
    let start = page.saturating_sub(1).saturating_mul(page_size).min(len);
    let end = page.saturating_mul(page_size).min(len);
    start..end.max(start)
}

/// The items on `page`.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    &items[page_bounds(items.len(), page, page_size)]
}
