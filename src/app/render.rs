//! Rendering logic for the application

use ratatui::{Frame, prelude::*};

use super::state::App;
use crate::ui::views::View;
use crate::ui::widgets::{render_diff_status_bar, render_error_banner, render_log_status_bar};

impl App {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let chunks =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(frame.area());

        self.views.active_mut().render(frame, chunks[0]);

        match self.views.active() {
            View::Log(log_view) => render_log_status_bar(frame, log_view),
            View::Diff(diff_view) => render_diff_status_bar(frame, diff_view),
        }

        // Render error banner above status bar (errors are always shown prominently)
        if let Some(ref error) = self.error_message {
            render_error_banner(frame, error);
        }
    }
}
