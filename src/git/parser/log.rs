//! Log output parser (git log)

use super::{COMMIT_HEADER_REGEX, Parser, ViewKind, classify};
use crate::model::{CommitId, LineRecord};

impl Parser {
    /// Parse `git log` output into line records tagged with their commit
    ///
    /// Each `commit <id>` header sets the owner for itself and every line
    /// after it until the next header. Lines before the first header have
    /// no owner. One record is emitted per input line.
    ///
    /// The current commit is a local accumulator threaded through the scan,
    /// so separate calls never share state.
    pub fn parse_log(output: &str) -> Vec<LineRecord> {
        output
            .lines()
            .scan(None, |current: &mut Option<CommitId>, line| {
                if let Some(id) = Self::parse_commit_header(line) {
                    *current = Some(id);
                }
                Some(LineRecord::new(
                    line,
                    classify(line, ViewKind::Log),
                    current.clone(),
                ))
            })
            .collect()
    }

    /// Extract the commit id from a `commit <id>` header line
    pub(crate) fn parse_commit_header(line: &str) -> Option<CommitId> {
        COMMIT_HEADER_REGEX
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map(|m| CommitId::new(m.as_str()))
    }
}
