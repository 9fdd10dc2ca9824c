//! View history
//!
//! The active view plus the views it replaced, most recent last. The root
//! log view sits at the bottom and is never popped.

use std::mem;

use thiserror::Error;
use tracing::debug;

use crate::ui::views::View;

/// Errors from view stack operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    #[error("No previous view to return to")]
    EmptyStack,
}

/// Active view and the history of views beneath it
///
/// The active view is never stored in `history` at the same time.
#[derive(Debug)]
pub struct ViewStack {
    active: View,
    history: Vec<View>,
    redraw_requested: bool,
}

impl ViewStack {
    /// Create a stack with `root` as the only (active) view
    pub fn new(root: View) -> Self {
        Self {
            active: root,
            history: Vec::new(),
            redraw_requested: true,
        }
    }

    pub fn active(&self) -> &View {
        &self.active
    }

    pub fn active_mut(&mut self) -> &mut View {
        &mut self.active
    }

    /// Number of views beneath the active one
    pub fn depth(&self) -> usize {
        self.history.len()
    }

    /// Check if the active view is the root
    pub fn is_root(&self) -> bool {
        self.history.is_empty()
    }

    /// Make `view` active, keeping the current one underneath
    pub fn push(&mut self, view: View) {
        let previous = mem::replace(&mut self.active, view);
        self.history.push(previous);
        debug!(depth = self.history.len(), "pushed view");
        self.request_redraw();
    }

    /// Drop the active view and restore the one beneath it
    ///
    /// Fails with [`ViewError::EmptyStack`] on the root view, leaving it active.
    pub fn pop(&mut self) -> Result<(), ViewError> {
        let previous = self.history.pop().ok_or(ViewError::EmptyStack)?;
        self.active = previous;
        debug!(depth = self.history.len(), "popped view");
        self.request_redraw();
        Ok(())
    }

    pub fn request_redraw(&mut self) {
        self.redraw_requested = true;
    }

    /// Return and clear the pending redraw request
    pub fn take_redraw_request(&mut self) -> bool {
        mem::take(&mut self.redraw_requested)
    }
}
