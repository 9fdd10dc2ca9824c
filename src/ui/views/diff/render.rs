//! Rendering for DiffView

use ratatui::{
    prelude::*,
    style::Stylize,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::ui::{components, theme};

use super::{DiffView, empty_text};

impl DiffView {
    /// Render the diff view (without status bar - rendered by App)
    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title = Line::from(vec![
            Span::raw(" Vew - Diff ").bold(),
            Span::raw("["),
            Span::styled(
                self.range.label(),
                Style::default().fg(theme::diff_view::RANGE),
            ),
            Span::raw("] "),
        ])
        .centered();
        let block = components::bordered_block(title);

        if !self.has_changes() {
            let paragraph =
                components::empty_state(empty_text::TITLE, Some(empty_text::HINT)).block(block);
            frame.render_widget(paragraph, area);
            return;
        }

        let inner_height = area.height.saturating_sub(2) as usize;
        if inner_height == 0 {
            return;
        }

        let scroll_offset = self.list.scroll_to_focus(inner_height);
        let focus = self.list.focus_index();

        let lines: Vec<Line> = self
            .list
            .lines()
            .iter()
            .enumerate()
            .skip(scroll_offset)
            .take(inner_height)
            .map(|(idx, record)| {
                let style = if idx == focus {
                    theme::focused_style(record.category)
                } else {
                    theme::category_style(record.category)
                };
                Line::from(Span::styled(record.text.clone(), style))
            })
            .collect();

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}
