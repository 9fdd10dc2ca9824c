//! Application module
//!
//! Contains the main application state and logic, split into:
//! - `state`: App struct and backend access
//! - `stack`: View history (push/pop)
//! - `input`: Key event handling
//! - `navigation`: Opening and closing views
//! - `render`: UI rendering

mod input;
mod navigation;
mod render;
mod stack;
mod state;

pub use stack::{ViewError, ViewStack};
pub use state::App;
