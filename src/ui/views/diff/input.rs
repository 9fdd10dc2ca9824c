//! Key handling for DiffView

use crate::keys::Key;

use super::{DiffAction, DiffView};

impl DiffView {
    /// Handle key input
    pub fn handle_key(&mut self, key: Key) -> DiffAction {
        match key {
            Key::Down => {
                self.list.move_down();
                DiffAction::None
            }
            Key::Up => {
                self.list.move_up();
                DiffAction::None
            }
            Key::Top => {
                self.list.move_to_top();
                DiffAction::None
            }
            Key::Bottom => {
                self.list.move_to_bottom();
                DiffAction::None
            }
            Key::Close | Key::Cancel => DiffAction::Back,
            Key::Select | Key::Shortcut | Key::Quit => DiffAction::None,
        }
    }
}
