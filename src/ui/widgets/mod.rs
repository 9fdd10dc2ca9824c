//! Reusable UI widgets

mod error_banner;
mod status_bar;

pub use error_banner::render_error_banner;
pub use status_bar::{render_diff_status_bar, render_log_status_bar};
