//! View components
//!
//! Each view represents a screen in the application.

mod diff;
mod list;
mod log;

pub use diff::{DiffAction, DiffView};
pub use list::ListState;
pub use log::{LogAction, LogView, SelectionState};

use ratatui::{Frame, layout::Rect};

/// A displayable view
///
/// The log view is the root of the stack; diff views are pushed on top of it.
#[derive(Debug)]
pub enum View {
    Log(LogView),
    Diff(DiffView),
}

impl View {
    /// Ordered lines for rendering
    pub fn list(&self) -> &ListState {
        match self {
            View::Log(view) => &view.list,
            View::Diff(view) => &view.list,
        }
    }

    pub fn focus_index(&self) -> usize {
        self.list().focus_index()
    }

    pub fn as_log(&self) -> Option<&LogView> {
        match self {
            View::Log(view) => Some(view),
            View::Diff(_) => None,
        }
    }

    pub fn as_diff(&self) -> Option<&DiffView> {
        match self {
            View::Diff(view) => Some(view),
            View::Log(_) => None,
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        match self {
            View::Log(view) => view.render(frame, area),
            View::Diff(view) => view.render(frame, area),
        }
    }
}
