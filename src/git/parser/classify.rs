//! Line classification shared by log and diff parsing

use crate::model::LineCategory;

/// Kind of view a line is classified for
///
/// Only the header keywords differ between kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Log,
    Diff,
}

impl ViewKind {
    fn header_keywords(self) -> &'static [&'static str] {
        match self {
            ViewKind::Log => &["log", "commit"],
            ViewKind::Diff => &["diff"],
        }
    }
}

/// Classify one line of raw text (first match wins)
///
/// `-` beats `+`, which beats the view's header keywords; everything else,
/// including the empty line, is plain.
pub fn classify(text: &str, kind: ViewKind) -> LineCategory {
    if text.starts_with('-') {
        LineCategory::Removed
    } else if text.starts_with('+') {
        LineCategory::Added
    } else if kind
        .header_keywords()
        .iter()
        .any(|keyword| text.starts_with(keyword))
    {
        LineCategory::Header
    } else {
        LineCategory::Plain
    }
}
