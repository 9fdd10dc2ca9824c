//! Status bar widget

use ratatui::{Frame, prelude::*, text::Line, widgets::Paragraph};

use crate::keys::{self, KeyHint};
use crate::ui::views::{DiffView, LogView};

/// Build a status bar line with a prefix and key hints
pub fn build_status_bar(prefix: Vec<Span<'static>>, hints: &[KeyHint]) -> Line<'static> {
    let mut spans = prefix;

    for (i, hint) in hints.iter().enumerate() {
        if i > 0 || !spans.is_empty() {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(
            format!(" [{}] {} ", hint.key, hint.label),
            Style::default().fg(Color::Black).bg(hint.color),
        ));
    }

    Line::from(spans)
}

/// Calculate status bar area at bottom of screen
fn status_bar_area(frame: &Frame) -> Option<Rect> {
    let area = frame.area();
    if area.height < 2 {
        return None;
    }

    Some(Rect {
        x: area.x,
        y: area.y + area.height - 1,
        width: area.width,
        height: 1,
    })
}

/// Render the status bar for log view
pub fn render_log_status_bar(frame: &mut Frame, log_view: &LogView) {
    let Some(status_area) = status_bar_area(frame) else {
        return;
    };

    let prefix = match log_view.focused_commit() {
        Some(commit) => vec![Span::styled(
            format!(" {} ", commit.short()),
            Style::default().fg(Color::Black).bg(Color::Yellow),
        )],
        None => Vec::new(),
    };

    let status = build_status_bar(prefix, keys::LOG_VIEW_HINTS);
    frame.render_widget(Paragraph::new(status), status_area);
}

/// Render the status bar for diff view
pub fn render_diff_status_bar(frame: &mut Frame, diff_view: &DiffView) {
    let Some(status_area) = status_bar_area(frame) else {
        return;
    };

    let position = if diff_view.list.is_empty() {
        "(empty)".to_string()
    } else {
        format!(
            "{}/{}",
            diff_view.list.focus_index() + 1,
            diff_view.list.len()
        )
    };

    let prefix = vec![
        Span::styled(
            format!(" {} ", diff_view.range.label()),
            Style::default().fg(Color::Black).bg(Color::Yellow),
        ),
        Span::raw(" "),
        Span::styled(format!(" {} ", position), Style::default().fg(Color::Cyan)),
    ];

    let status = build_status_bar(prefix, keys::DIFF_VIEW_HINTS);
    frame.render_widget(Paragraph::new(status), status_area);
}
