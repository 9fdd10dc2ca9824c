//! Keybinding definitions for Vew
//!
//! Raw terminal keys are translated into a small set of discrete [`Key`]
//! events here; views never see crossterm key codes.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::style::Color;

// =============================================================================
// Global keys
// =============================================================================

/// Quit the application from any view
pub const QUIT: KeyCode = KeyCode::Char('Q');

/// Close the current view (quits from the root view)
pub const CLOSE: KeyCode = KeyCode::Char('q');

/// Alternative cancel/close
pub const ESC: KeyCode = KeyCode::Esc;

// =============================================================================
// Navigation keys
// =============================================================================

/// Move cursor up (vim style)
pub const MOVE_UP: KeyCode = KeyCode::Char('k');

/// Move cursor up (arrow key)
pub const MOVE_UP_ARROW: KeyCode = KeyCode::Up;

/// Move cursor down (vim style)
pub const MOVE_DOWN: KeyCode = KeyCode::Char('j');

/// Move cursor down (arrow key)
pub const MOVE_DOWN_ARROW: KeyCode = KeyCode::Down;

/// Go to top
pub const GO_TOP: KeyCode = KeyCode::Char('g');

/// Go to bottom
pub const GO_BOTTOM: KeyCode = KeyCode::Char('G');

// =============================================================================
// Log View keys
// =============================================================================

/// Select the focused commit (first press arms it, second press opens the diff)
pub const SELECT: KeyCode = KeyCode::Enter;

/// Diff the focused commit against HEAD immediately
pub const DIFF_HEAD: KeyCode = KeyCode::Char('h');

/// Clear the armed commit
pub const CANCEL: KeyCode = KeyCode::Char('c');

/// Discrete key events understood by the views
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Top,
    Bottom,
    /// Primary action key
    Select,
    /// Diff focused commit against HEAD
    Shortcut,
    Cancel,
    Close,
    Quit,
}

impl Key {
    /// Translate a terminal key event
    ///
    /// Returns `None` for releases, repeats and unbound keys.
    pub fn from_event(event: KeyEvent) -> Option<Self> {
        if event.kind != KeyEventKind::Press {
            return None;
        }

        if event.modifiers.contains(KeyModifiers::CONTROL) {
            return match event.code {
                KeyCode::Char('c') | KeyCode::Char('C') => Some(Key::Quit),
                _ => None,
            };
        }

        match event.code {
            MOVE_UP | MOVE_UP_ARROW => Some(Key::Up),
            MOVE_DOWN | MOVE_DOWN_ARROW => Some(Key::Down),
            GO_TOP => Some(Key::Top),
            GO_BOTTOM => Some(Key::Bottom),
            SELECT => Some(Key::Select),
            DIFF_HEAD => Some(Key::Shortcut),
            CANCEL | ESC => Some(Key::Cancel),
            CLOSE => Some(Key::Close),
            QUIT => Some(Key::Quit),
            _ => None,
        }
    }
}

// =============================================================================
// Key hints (status bar)
// =============================================================================

/// A key hint shown in the status bar
#[derive(Debug, Clone, Copy)]
pub struct KeyHint {
    pub key: &'static str,
    pub label: &'static str,
    pub color: Color,
}

pub const LOG_VIEW_HINTS: &[KeyHint] = &[
    KeyHint {
        key: "j/k",
        label: "Move",
        color: Color::Cyan,
    },
    KeyHint {
        key: "Enter",
        label: "Select",
        color: Color::Green,
    },
    KeyHint {
        key: "h",
        label: "vs HEAD",
        color: Color::Magenta,
    },
    KeyHint {
        key: "c",
        label: "Clear",
        color: Color::Yellow,
    },
    KeyHint {
        key: "q",
        label: "Quit",
        color: Color::Red,
    },
];

pub const DIFF_VIEW_HINTS: &[KeyHint] = &[
    KeyHint {
        key: "j/k",
        label: "Scroll",
        color: Color::Cyan,
    },
    KeyHint {
        key: "g/G",
        label: "Top/Bottom",
        color: Color::Cyan,
    },
    KeyHint {
        key: "q",
        label: "Back",
        color: Color::Yellow,
    },
    KeyHint {
        key: "Q",
        label: "Quit",
        color: Color::Red,
    },
];
