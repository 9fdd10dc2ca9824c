//! Line records shown by every view
//!
//! A view's content is an ordered sequence of these records. Records are
//! immutable once built by the parsers in [`crate::git::parser`].

use super::CommitId;

/// Display category of a line (determines color)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineCategory {
    /// Line starting with `+`
    Added,
    /// Line starting with `-`
    Removed,
    /// Section header (`diff ...` in diffs, `commit ...` in logs)
    Header,
    /// Anything else
    #[default]
    Plain,
}

/// A single line of view content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineRecord {
    /// Raw text as produced by git
    pub text: String,
    /// Display category
    pub category: LineCategory,
    /// Commit this line belongs to (log lines only; `None` for diff lines
    /// and for log lines before the first commit header)
    pub owner: Option<CommitId>,
}

impl LineRecord {
    pub fn new(text: impl Into<String>, category: LineCategory, owner: Option<CommitId>) -> Self {
        Self {
            text: text.into(),
            category,
            owner,
        }
    }

    /// Create a record with no owning commit
    pub fn unowned(text: impl Into<String>, category: LineCategory) -> Self {
        Self::new(text, category, None)
    }
}
