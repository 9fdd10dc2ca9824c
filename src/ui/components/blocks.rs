//! Block components for UI rendering

use ratatui::{
    text::Line,
    widgets::{Block, Borders},
};

/// Create a block with all borders and a title
pub fn bordered_block<'a>(title: Line<'a>) -> Block<'a> {
    Block::default().borders(Borders::ALL).title(title)
}
