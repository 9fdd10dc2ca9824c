//! Log View - displays git log output
//!
//! The root view of Vew. Lists every line of the history and lets the user
//! pick two commits (or one commit and HEAD) to diff.

mod input;
mod render;

use crate::git::parser::Parser;
use crate::model::{CommitId, DiffRange, LineRecord};

use super::ListState;

/// Two-step commit selection state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SelectionState {
    /// Nothing armed
    #[default]
    Unset,
    /// First commit armed, waiting for the second
    Pending(CommitId),
}

/// Actions that LogView can request from App
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogAction {
    /// No action needed
    None,
    /// Fetch the diff for the range and push a diff view
    OpenDiff(DiffRange),
}

pub mod prompt_text {
    pub const IDLE: &str = "Enter: select a commit | h: compare with HEAD";
    /// Follows the armed commit's short id
    pub const ARMED: &str = "Enter on another commit, or here again for HEAD";
}

pub mod empty_text {
    pub const TITLE: &str = "No commits found.";
    pub const HINT: &str = "Hint: is this a git repository with at least one commit?";
}

/// Log View state
#[derive(Debug, Default)]
pub struct LogView {
    /// Log lines with their owning commits
    pub list: ListState,
    /// Commit armed by the first Select press
    selection: SelectionState,
}

impl LogView {
    /// Create a LogView over already-parsed records
    pub fn new(lines: Vec<LineRecord>) -> Self {
        Self {
            list: ListState::new(lines),
            selection: SelectionState::Unset,
        }
    }

    /// Create a LogView from raw `git log` output
    pub fn from_output(output: &str) -> Self {
        Self::new(Parser::parse_log(output))
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Commit owning the focused line, if any
    pub fn focused_commit(&self) -> Option<&CommitId> {
        self.list.focused().and_then(|record| record.owner.as_ref())
    }

    /// Prompt shown to the user; always reflects the selection state
    ///
    /// The armed commit comes first so it survives truncation on narrow
    /// terminals.
    pub fn prompt(&self) -> String {
        match &self.selection {
            SelectionState::Unset => prompt_text::IDLE.to_string(),
            SelectionState::Pending(commit) => {
                format!("Commit {} armed: {}", commit.short(), prompt_text::ARMED)
            }
        }
    }

    /// Select the focused commit
    ///
    /// The first press arms the commit; the second resolves the range in
    /// selection order, or against HEAD when the same commit is confirmed
    /// twice. Lines without an owning commit are ignored and the state is
    /// left untouched.
    pub fn select(&mut self) -> LogAction {
        let Some(focused) = self.focused_commit().cloned() else {
            return LogAction::None;
        };

        match std::mem::take(&mut self.selection) {
            SelectionState::Unset => {
                self.selection = SelectionState::Pending(focused);
                LogAction::None
            }
            SelectionState::Pending(first) => {
                let range = if first == focused {
                    DiffRange::against_head(first)
                } else {
                    DiffRange::new(first, focused)
                };
                LogAction::OpenDiff(range)
            }
        }
    }

    /// Diff the focused commit against HEAD without touching the selection
    pub fn diff_against_head(&self) -> LogAction {
        match self.focused_commit() {
            Some(commit) => LogAction::OpenDiff(DiffRange::against_head(commit.clone())),
            None => LogAction::None,
        }
    }

    /// Disarm a pending selection (no-op when nothing is armed)
    pub fn cancel_selection(&mut self) {
        self.selection = SelectionState::Unset;
    }
}
