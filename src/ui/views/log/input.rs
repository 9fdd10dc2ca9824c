//! Input handling for LogView

use crate::keys::Key;

use super::{LogAction, LogView};

impl LogView {
    /// Handle key event and return action
    pub fn handle_key(&mut self, key: Key) -> LogAction {
        match key {
            Key::Down => {
                self.list.move_down();
                LogAction::None
            }
            Key::Up => {
                self.list.move_up();
                LogAction::None
            }
            Key::Top => {
                self.list.move_to_top();
                LogAction::None
            }
            Key::Bottom => {
                self.list.move_to_bottom();
                LogAction::None
            }
            Key::Select => self.select(),
            Key::Shortcut => self.diff_against_head(),
            Key::Cancel => {
                self.cancel_selection();
                LogAction::None
            }
            // Close and Quit are handled by App
            Key::Close | Key::Quit => LogAction::None,
        }
    }
}
