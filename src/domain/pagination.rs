//! Pagination engine.
//!
//! Slices an ordered result into fixed-size pages. The engine never clamps the
//! requested page: a page past the end simply yields an empty slice. Keeping
//! the page in range is the controller's job.

use std::num::NonZeroUsize;

/// One page of an ordered result, borrowed from the full result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page<'a, T> {
    /// Items on the requested page.
    pub slice: &'a [T],
    /// Number of pages, never less than 1.
    pub total_pages: usize,
    /// Number of items across all pages.
    pub total: usize,
}

/// Returns page `page` (1-based) of `items`.
///
/// `total_pages` is `max(1, ceil(total / page_size))`, so an empty input is
/// still "page 1 of 1". Page `0` and pages past `total_pages` produce an empty
/// slice.
///
/// # Examples
///
/// ```
/// use std::num::NonZeroUsize;
/// use company_directory::paginate;
///
/// let items: Vec<u32> = (1..=25).collect();
/// let page = paginate(&items, 3, NonZeroUsize::new(10).unwrap());
/// assert_eq!(page.slice, &[21, 22, 23, 24, 25]);
/// assert_eq!(page.total_pages, 3);
/// assert_eq!(page.total, 25);
/// ```
#[must_use]
pub fn paginate<T>(items: &[T], page: usize, page_size: NonZeroUsize) -> Page<'_, T> {
    let size = page_size.get();
    let total = items.len();
    let total_pages = total.div_ceil(size).max(1);

    let start = page.saturating_sub(1).saturating_mul(size).min(total);
    let end = page.saturating_mul(size).min(total).max(start);

    tracing::trace!(page, page_size = size, total, total_pages, start, end, "page sliced");

    Page {
        slice: &items[start..end],
        total_pages,
        total,
    }
}

/// Total page count for `total` items, never less than 1.
#[must_use]
pub fn total_pages(total: usize, page_size: NonZeroUsize) -> usize {
    total.div_ceil(page_size.get()).max(1)
}
