//! Focusable list of line records shared by the log and diff views

use crate::model::LineRecord;
use crate::ui::navigation;

/// Ordered line records with a single focused row
///
/// `focus` is the only state changed by navigation. `scroll_offset` is
/// derived at render time so that a view restored from the stack reappears
/// exactly where it was left.
#[derive(Debug, Default, Clone)]
pub struct ListState {
    lines: Vec<LineRecord>,
    focus: usize,
    scroll_offset: usize,
}

impl ListState {
    pub fn new(lines: Vec<LineRecord>) -> Self {
        Self {
            lines,
            focus: 0,
            scroll_offset: 0,
        }
    }

    /// Move focus down one row (clamps at the last row)
    pub fn move_down(&mut self) {
        self.focus = navigation::step_down(self.focus, self.lines.len());
    }

    /// Move focus up one row (clamps at the first row)
    pub fn move_up(&mut self) {
        self.focus = navigation::step_up(self.focus);
    }

    pub fn move_to_top(&mut self) {
        self.focus = 0;
    }

    pub fn move_to_bottom(&mut self) {
        self.focus = navigation::last_index(self.lines.len());
    }

    pub fn focus_index(&self) -> usize {
        self.focus
    }

    pub fn content_at(&self, index: usize) -> Option<&LineRecord> {
        self.lines.get(index)
    }

    /// Record under the cursor (`None` only for an empty list)
    pub fn focused(&self) -> Option<&LineRecord> {
        self.content_at(self.focus)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn lines(&self) -> &[LineRecord] {
        &self.lines
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Update and return the scroll offset that keeps focus visible
    pub(crate) fn scroll_to_focus(&mut self, visible_rows: usize) -> usize {
        self.scroll_offset =
            navigation::adjust_scroll(self.focus, self.scroll_offset, visible_rows);
        self.scroll_offset
    }
}
