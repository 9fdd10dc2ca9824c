//! Commit identifiers and diff ranges

use std::fmt;

/// Symbolic ref for the tip of history
const HEAD: &str = "HEAD";

/// Length of abbreviated commit hashes in titles
const SHORT_ID_LEN: usize = 8;

/// Opaque revision identifier (a hash or a symbolic ref such as `HEAD`)
///
/// Only compared by equality; no ordering is implied.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CommitId(String);

impl CommitId {
    /// Create a commit ID from any revision string
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The symbolic tip of history
    pub fn head() -> Self {
        Self::new(HEAD)
    }

    /// Check if this is the symbolic `HEAD` ref
    pub fn is_head(&self) -> bool {
        self.0 == HEAD
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Short form for display (first 8 characters of a hash)
    pub fn short(&self) -> &str {
        match self.0.char_indices().nth(SHORT_ID_LEN) {
            Some((end, _)) => &self.0[..end],
            None => &self.0,
        }
    }
}

impl fmt::Display for CommitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CommitId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A resolved pair of revisions to diff
///
/// The order is the order the user selected them in, not chronological order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffRange {
    pub from: CommitId,
    pub to: CommitId,
}

impl DiffRange {
    pub fn new(from: CommitId, to: CommitId) -> Self {
        Self { from, to }
    }

    /// Diff a single commit against the tip
    pub fn against_head(from: CommitId) -> Self {
        Self::new(from, CommitId::head())
    }

    /// Label for titles and status bars (`abc12345..HEAD`)
    pub fn label(&self) -> String {
        format!("{}..{}", self.from.short(), self.to.short())
    }
}
