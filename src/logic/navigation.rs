//! Selection and paging arithmetic
//!
//! Pure functions for moving the highlighted table row, keeping it valid
//! after a filter shrinks the list, and stepping through server-side pages.

/// Move the highlighted row down one, wrapping to the top
///
/// # Examples
/// ```
/// use rackdesk::logic::navigation::next_selection;
///
/// assert_eq!(next_selection(None, 0), None);
/// assert_eq!(next_selection(None, 3), Some(0));
/// assert_eq!(next_selection(Some(1), 3), Some(2));
/// assert_eq!(next_selection(Some(2), 3), Some(0));
/// ```
pub fn next_selection(current: Option<usize>, list_len: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }

    Some(match current {
        Some(i) if i + 1 >= list_len => 0,
        Some(i) => i + 1,
        None => 0,
    })
}

/// Move the highlighted row up one, wrapping to the bottom
///
/// # Examples
/// ```
/// use rackdesk::logic::navigation::prev_selection;
///
/// assert_eq!(prev_selection(None, 0), None);
/// assert_eq!(prev_selection(None, 3), Some(2));
/// assert_eq!(prev_selection(Some(0), 3), Some(2));
/// assert_eq!(prev_selection(Some(2), 3), Some(1));
/// ```
pub fn prev_selection(current: Option<usize>, list_len: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }

    Some(match current {
        Some(0) | None => list_len - 1,
        Some(i) if i >= list_len => list_len - 1,
        Some(i) => i - 1,
    })
}

/// Keep a selection inside a list whose length just changed
///
/// A filter keystroke can shrink the visible rows below the highlighted
/// index; the highlight then sticks to the last row. An empty list has no
/// selection, and a fresh non-empty list selects its first row.
pub fn clamp_selection(current: Option<usize>, list_len: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }

    Some(current.map_or(0, |i| i.min(list_len - 1)))
}

/// Number of pages needed for `total` rows at `limit` rows per page
///
/// Always at least one page so "page 1 of 1" renders for empty lists.
pub fn page_count(total: u64, limit: u32) -> u32 {
    if limit == 0 {
        return 1;
    }
    let pages = total.div_ceil(u64::from(limit)).max(1);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Next 1-based page, or `None` when already on the last known page
///
/// With an unknown total, paging forward is allowed while the current page
/// came back full.
pub fn next_page(page: u32, limit: u32, total: Option<u64>, rows_on_page: usize) -> Option<u32> {
    match total {
        Some(total) if page >= page_count(total, limit) => None,
        Some(_) => Some(page + 1),
        None if rows_on_page >= limit as usize && limit > 0 => Some(page + 1),
        None => None,
    }
}

/// Previous 1-based page, or `None` on the first page
pub fn prev_page(page: u32) -> Option<u32> {
    if page > 1 {
        Some(page - 1)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_selection_single_row_stays_put() {
        assert_eq!(next_selection(Some(0), 1), Some(0));
    }

    #[test]
    fn test_next_selection_past_end_wraps() {
        assert_eq!(next_selection(Some(10), 3), Some(0));
    }

    #[test]
    fn test_prev_selection_past_end_snaps_to_last() {
        assert_eq!(prev_selection(Some(10), 3), Some(2));
    }

    #[test]
    fn test_clamp_selection() {
        assert_eq!(clamp_selection(Some(5), 0), None);
        assert_eq!(clamp_selection(None, 4), Some(0));
        assert_eq!(clamp_selection(Some(5), 2), Some(1));
        assert_eq!(clamp_selection(Some(1), 2), Some(1));
    }

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0, 10), 1);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(11, 10), 2);
        assert_eq!(page_count(95, 10), 10);
        assert_eq!(page_count(5, 0), 1);
    }

    #[test]
    fn test_next_page_with_known_total() {
        assert_eq!(next_page(1, 10, Some(25), 10), Some(2));
        assert_eq!(next_page(3, 10, Some(25), 5), None);
    }

    #[test]
    fn test_next_page_with_unknown_total() {
        assert_eq!(next_page(1, 10, None, 10), Some(2));
        assert_eq!(next_page(2, 10, None, 4), None);
    }

    #[test]
    fn test_prev_page() {
        assert_eq!(prev_page(1), None);
        assert_eq!(prev_page(0), None);
        assert_eq!(prev_page(4), Some(3));
    }
}
