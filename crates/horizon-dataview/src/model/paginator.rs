//! Paginator.
//!
//! Slices a collection into fixed-size, 1-based pages and computes the
//! bounded window of page numbers to expose as navigation buttons. The
//! paginator never clamps: a page past the end is simply empty. Clamping is
//! the controller's job.

/// Default number of page buttons in the navigation window.
pub const DEFAULT_PAGE_WINDOW: usize = 5;

/// One page of a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page<'a, T> {
    /// The items on this page.
    pub visible: &'a [T],
    /// Total number of pages, at least 1.
    pub total_pages: usize,
}

/// Number of pages needed for `len` items, never less than 1.
///
/// A `page_size` of zero is treated as one item per page.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1)).max(1)
}

/// Returns page `page` (1-based) of `items`.
///
/// # Example
///
/// ```
/// use horizon_dataview::model::paginate;
///
/// let items: Vec<u32> = (1..=12).collect();
/// let page = paginate(&items, 3, 5);
/// assert_eq!(page.visible, &[11, 12]);
/// assert_eq!(page.total_pages, 3);
/// assert!(paginate(&items, 4, 5).visible.is_empty());
/// ```
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> Page<'_, T> {
    Page {
        visible: &items[page_range(items.len(), page, page_size)],
        total_pages: total_pages(items.len(), page_size),
    }
}

/// The index range of page `page` (1-based) within `len` items, truncated to
/// the collection. Pages outside the collection yield an empty range.
pub fn page_range(len: usize, page: usize, page_size: usize) -> std::ops::Range<usize> {
    let page_size = page_size.max(1);
    let start = page.saturating_sub(1).saturating_mul(page_size).min(len);
    let end = start.saturating_add(page_size).min(len);
    if page == 0 { 0..0 } else { start..end }
}

/// Page numbers to show as buttons, at most [`DEFAULT_PAGE_WINDOW`] of them.
///
/// # Example
///
/// ```
/// use horizon_dataview::model::page_window;
///
/// assert_eq!(page_window(1, 10), vec![1, 2, 3, 4, 5]);
/// assert_eq!(page_window(5, 10), vec![3, 4, 5, 6, 7]);
/// assert_eq!(page_window(10, 10), vec![6, 7, 8, 9, 10]);
/// assert_eq!(page_window(2, 3), vec![1, 2, 3]);
/// ```
pub fn page_window(current: usize, total_pages: usize) -> Vec<usize> {
    page_window_with(current, total_pages, DEFAULT_PAGE_WINDOW)
}

/// Page numbers to show as buttons, at most `max_buttons` of them, centered
/// on `current` where possible.
pub fn page_window_with(current: usize, total_pages: usize, max_buttons: usize) -> Vec<usize> {
    let width = max_buttons.max(1);
    let half = width / 2;

    if total_pages <= width {
        return (1..=total_pages).collect();
    }
    if current <= half + 1 {
        return (1..=width).collect();
    }
    if current.saturating_add(half) >= total_pages {
        return (total_pages + 1 - width..=total_pages).collect();
    }
    (current - half..current - half + width).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(5, 0), 5);
    }

    #[test]
    fn test_paginate_slices() {
        let items: Vec<usize> = (0..23).collect();
        assert_eq!(paginate(&items, 1, 10).visible, &items[0..10]);
        assert_eq!(paginate(&items, 3, 10).visible, &items[20..23]);
        assert_eq!(paginate(&items, 3, 10).total_pages, 3);
    }

    #[test]
    fn test_page_past_end_is_empty() {
        let items: Vec<usize> = (0..5).collect();
        assert!(paginate(&items, 2, 10).visible.is_empty());
        assert!(paginate(&items, 0, 10).visible.is_empty());
        assert!(paginate(&items, usize::MAX, 10).visible.is_empty());
    }

    #[test]
    fn test_empty_collection() {
        let items: Vec<usize> = Vec::new();
        let page = paginate(&items, 1, 10);
        assert!(page.visible.is_empty());
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn test_window_literal_cases() {
        assert_eq!(page_window(1, 10), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(10, 10), vec![6, 7, 8, 9, 10]);
        assert_eq!(page_window(5, 10), vec![3, 4, 5, 6, 7]);
        for current in 1..=3 {
            assert_eq!(page_window(current, 3), vec![1, 2, 3]);
        }
    }

    #[test]
    fn test_window_boundaries() {
        assert_eq!(page_window(3, 10), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(4, 10), vec![2, 3, 4, 5, 6]);
        assert_eq!(page_window(7, 10), vec![5, 6, 7, 8, 9]);
        assert_eq!(page_window(8, 10), vec![6, 7, 8, 9, 10]);
        assert_eq!(page_window(1, 5), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(4, 6), vec![2, 3, 4, 5, 6]);
        assert_eq!(page_window(1, 1), vec![1]);
    }

    #[test]
    fn test_window_custom_width() {
        assert_eq!(page_window_with(6, 20, 7), vec![3, 4, 5, 6, 7, 8, 9]);
        assert_eq!(page_window_with(2, 20, 3), vec![1, 2, 3]);
        assert_eq!(page_window_with(20, 20, 3), vec![18, 19, 20]);
        assert_eq!(page_window_with(9, 20, 1), vec![9]);
    }

    #[test]
    fn test_window_current_past_end() {
        assert_eq!(page_window(usize::MAX, 10), vec![6, 7, 8, 9, 10]);
        assert_eq!(page_window_with(usize::MAX - 1, 20, 7), vec![14, 15, 16, 17, 18, 19, 20]);
    }
}
