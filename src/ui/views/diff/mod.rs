//! Diff View
//!
//! Displays the diff between two commits picked in the log view.

mod input;
mod render;

use crate::git::parser::Parser;
use crate::model::{DiffRange, LineRecord};

use super::ListState;

/// Action returned by DiffView key handling
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffAction {
    /// No action needed
    None,
    /// Return to the previous view
    Back,
}

pub mod empty_text {
    pub const TITLE: &str = "No differences.";
    pub const HINT: &str = "Press q to go back";
}

/// Diff view state
#[derive(Debug)]
pub struct DiffView {
    /// Revisions being compared, in selection order
    pub range: DiffRange,
    /// Classified diff lines (no owning commit)
    pub list: ListState,
}

impl DiffView {
    pub fn new(range: DiffRange, lines: Vec<LineRecord>) -> Self {
        Self {
            range,
            list: ListState::new(lines),
        }
    }

    /// Create a DiffView from raw `git diff` output
    pub fn from_output(range: DiffRange, output: &str) -> Self {
        Self::new(range, Parser::parse_diff(output))
    }

    /// Check if there is anything to show
    pub fn has_changes(&self) -> bool {
        !self.list.is_empty()
    }
}
