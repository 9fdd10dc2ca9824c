//! Application state

use tracing::{info, warn};

use crate::git::{Backend, GitExecutor};
use crate::ui::views::{LogView, View};

use super::stack::ViewStack;

/// The main application state
pub struct App {
    /// Is the application running?
    pub running: bool,
    /// Active view and view history
    pub views: ViewStack,
    /// Error message to display (cleared on next key press)
    pub error_message: Option<String>,
    /// Source of log and diff text
    pub(crate) backend: Box<dyn Backend>,
    /// File that log and diff queries are scoped to
    pub(crate) path_filter: Option<String>,
}

impl App {
    /// Construct an [`App`] backed by git in the current directory
    pub fn new(path_filter: Option<String>) -> Self {
        Self::with_backend(Box::new(GitExecutor::new()), path_filter)
    }

    /// Construct an [`App`] with a specific backend and load the log
    ///
    /// A failing backend yields an empty log view plus an error banner.
    pub fn with_backend(backend: Box<dyn Backend>, path_filter: Option<String>) -> Self {
        let (output, error_message) = match backend.fetch_log(path_filter.as_deref()) {
            Ok(output) => (output, None),
            Err(e) => {
                warn!(error = %e, "failed to load log, showing empty view");
                (String::new(), Some(format!("Failed to load log: {}", e)))
            }
        };

        let log_view = LogView::from_output(&output);
        info!(
            lines = log_view.list.len(),
            path = path_filter.as_deref().unwrap_or(""),
            "log loaded"
        );

        Self {
            running: true,
            views: ViewStack::new(View::Log(log_view)),
            error_message,
            backend,
            path_filter,
        }
    }

    /// Set running to false to quit the application.
    pub(crate) fn quit(&mut self) {
        info!("quitting");
        self.running = false;
    }
}
