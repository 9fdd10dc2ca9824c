//! Data models for Vew
//!
//! UI-independent data structures: commit identifiers, diff ranges and the
//! line records every view displays.

mod commit;
mod line;

pub use commit::{CommitId, DiffRange};
pub use line::{LineCategory, LineRecord};
