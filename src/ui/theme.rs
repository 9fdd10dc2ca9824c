//! Color theme definitions
//!
//! Centralized color constants for consistent UI appearance.

use ratatui::style::{Color, Modifier, Style};

use crate::model::LineCategory;

/// Colors for line categories (shared by all views)
pub mod line {
    use super::*;

    /// Added line color
    pub const ADDED: Color = Color::Green;
    /// Removed line color
    pub const REMOVED: Color = Color::Red;
    /// Header line foreground
    pub const HEADER_FG: Color = Color::Black;
    /// Header line background
    pub const HEADER_BG: Color = Color::Green;
    /// Plain line color
    pub const PLAIN: Color = Color::Reset;
}

/// Colors for Log View
pub mod log_view {
    use super::*;

    /// Prompt bar foreground
    pub const PROMPT_FG: Color = Color::Black;
    /// Prompt bar background (nothing armed)
    pub const PROMPT_BG: Color = Color::Green;
    /// Prompt bar background while a commit is armed
    pub const PROMPT_ARMED_BG: Color = Color::Yellow;
    /// Gutter marker for lines of the armed commit
    pub const ARMED_MARKER: Color = Color::Yellow;
}

/// Colors for Diff View
pub mod diff_view {
    use super::*;

    /// Range (from..to) color in the title
    pub const RANGE: Color = Color::Yellow;
}

/// Focused row background
pub const SELECTED_BG: Color = Color::Blue;

/// Style for a line of the given category
pub fn category_style(category: LineCategory) -> Style {
    match category {
        LineCategory::Added => Style::default().fg(line::ADDED),
        LineCategory::Removed => Style::default().fg(line::REMOVED),
        LineCategory::Header => Style::default()
            .fg(line::HEADER_FG)
            .bg(line::HEADER_BG)
            .add_modifier(Modifier::BOLD),
        LineCategory::Plain => Style::default().fg(line::PLAIN),
    }
}

/// Style for the focused row (overrides the category background)
pub fn focused_style(category: LineCategory) -> Style {
    category_style(category)
        .bg(SELECTED_BG)
        .add_modifier(Modifier::BOLD)
}
