//! Shared navigation helpers for list-based Views
//!
//! Pure functions that compute new focus/scroll state without side effects.
//! [`ListState`](crate::ui::views::ListState) calls these and stores the result.

/// Index of the last row, or 0 for an empty list
pub fn last_index(len: usize) -> usize {
    len.saturating_sub(1)
}

/// Move focus down by one, clamped to the last row (no wrap).
pub fn step_down(focus: usize, len: usize) -> usize {
    if focus < last_index(len) {
        focus + 1
    } else {
        focus
    }
}

/// Move focus up by one, clamped to the first row (no wrap).
pub fn step_up(focus: usize) -> usize {
    focus.saturating_sub(1)
}

/// Calculate scroll offset to keep `focus` visible within `visible_count` rows.
///
/// If `visible_count` is 0, returns `scroll_offset` unchanged (no-op).
pub fn adjust_scroll(focus: usize, scroll_offset: usize, visible_count: usize) -> usize {
    if visible_count == 0 {
        return scroll_offset;
    }
    if focus < scroll_offset {
        focus
    } else if focus >= scroll_offset + visible_count {
        focus - visible_count + 1
    } else {
        scroll_offset
    }
}
