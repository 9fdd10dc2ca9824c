//! git output parser
//!
//! Turns raw `git log` / `git diff` text into classified line records.

mod classify;
mod diff;
mod log;

pub use classify::{ViewKind, classify};


use regex::Regex;
use std::sync::LazyLock;

/// Regex for a commit header line in `git log` output
/// Example: `commit 3f2a9c1d0b...`
///
/// Groups:
/// 1. commit id (first word-character token after `commit`)
static COMMIT_HEADER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^commit\s+(\w+)").expect("Invalid commit header regex"));

/// Parser for git command output
pub struct Parser;
