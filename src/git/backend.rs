//! Backend seam between the views and the version-control tool

use super::{GitError, GitExecutor};
use crate::model::CommitId;

/// Source of raw log and diff text
///
/// Implementations return the complete text of a command; callers decide how
/// to degrade on error.
pub trait Backend {
    /// Commit history, optionally narrowed to one file
    fn fetch_log(&self, path: Option<&str>) -> Result<String, GitError>;

    /// Textual diff between two revisions, optionally narrowed to one file
    fn fetch_diff(
        &self,
        from: &CommitId,
        to: &CommitId,
        path: Option<&str>,
    ) -> Result<String, GitError>;
}

impl Backend for GitExecutor {
    fn fetch_log(&self, path: Option<&str>) -> Result<String, GitError> {
        self.log_raw(path)
    }

    fn fetch_diff(
        &self,
        from: &CommitId,
        to: &CommitId,
        path: Option<&str>,
    ) -> Result<String, GitError> {
        self.diff_raw(from.as_str(), to.as_str(), path)
    }
}
