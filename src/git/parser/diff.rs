//! Diff output parser (git diff)

use super::{Parser, ViewKind, classify};
use crate::model::LineRecord;

impl Parser {
    /// Parse `git diff` output into classified line records
    ///
    /// Diff records never carry an owning commit.
    pub fn parse_diff(output: &str) -> Vec<LineRecord> {
        output
            .lines()
            .map(|line| LineRecord::unowned(line, classify(line, ViewKind::Diff)))
            .collect()
    }
}
