//! Input handling for the application

use crossterm::event::KeyEvent;

use super::state::App;
use crate::keys::Key;
use crate::ui::views::{DiffAction, LogAction, View};

impl App {
    /// Handle a terminal key event
    pub fn on_key_event(&mut self, event: KeyEvent) {
        if let Some(key) = Key::from_event(event) {
            self.on_key(key);
        }
    }

    /// Handle a translated key, running all of its effects before returning
    pub fn on_key(&mut self, key: Key) {
        // Clear error message on any key press
        self.error_message = None;
        self.views.request_redraw();

        if self.handle_global_key(key) {
            return;
        }

        match self.views.active_mut() {
            View::Log(log_view) => {
                let action = log_view.handle_key(key);
                self.handle_log_action(action);
            }
            View::Diff(diff_view) => {
                let action = diff_view.handle_key(key);
                self.handle_diff_action(action);
            }
        }
    }

    fn handle_global_key(&mut self, key: Key) -> bool {
        match key {
            Key::Quit => {
                self.quit();
                true
            }
            // Closing the root view exits
            Key::Close if self.views.is_root() => {
                self.quit();
                true
            }
            _ => false,
        }
    }

    fn handle_log_action(&mut self, action: LogAction) {
        match action {
            LogAction::None => {}
            LogAction::OpenDiff(range) => self.open_diff(range),
        }
    }

    fn handle_diff_action(&mut self, action: DiffAction) {
        match action {
            DiffAction::None => {}
            DiffAction::Back => self.close_view(),
        }
    }
}
