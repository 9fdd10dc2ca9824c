//! Vew - terminal viewer for git history
//!
//! A TUI that lists commits and shows the diff between any two of them.
//!
//! This library provides:
//! - [`app`]: Application state, view stack and key dispatch
//! - [`git`]: git command execution and output parsing
//! - [`keys`]: Key binding definitions
//! - [`logging`]: File-based tracing setup
//! - [`model`]: Domain models
//! - [`ui`]: User interface components

pub mod app;
pub mod git;
pub mod keys;
pub mod logging;
pub mod model;
pub mod ui;
