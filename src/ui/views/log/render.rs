//! Rendering for LogView

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::model::{CommitId, LineRecord};
use crate::ui::{components, symbols, theme};

use super::{LogView, SelectionState, empty_text};

impl LogView {
    /// Render the prompt bar and the log list
    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::vertical([Constraint::Length(1), Constraint::Min(1)]).split(area);

        self.render_prompt(frame, chunks[0]);
        self.render_log_list(frame, chunks[1]);
    }

    fn render_prompt(&self, frame: &mut Frame, area: Rect) {
        let bg = match self.selection {
            SelectionState::Unset => theme::log_view::PROMPT_BG,
            SelectionState::Pending(_) => theme::log_view::PROMPT_ARMED_BG,
        };
        let prompt = Paragraph::new(Line::from(format!(" {}", self.prompt())))
            .style(Style::default().fg(theme::log_view::PROMPT_FG).bg(bg));

        frame.render_widget(prompt, area);
    }

    fn render_log_list(&mut self, frame: &mut Frame, area: Rect) {
        let title = Line::from(format!(" Vew - Log [{} lines] ", self.list.len()))
            .bold()
            .cyan()
            .centered();
        let block = components::bordered_block(title);

        if self.list.is_empty() {
            let paragraph =
                components::empty_state(empty_text::TITLE, Some(empty_text::HINT)).block(block);
            frame.render_widget(paragraph, area);
            return;
        }

        let inner_height = area.height.saturating_sub(2) as usize; // borders
        if inner_height == 0 {
            return;
        }

        let scroll_offset = self.list.scroll_to_focus(inner_height);
        let focus = self.list.focus_index();
        let armed = match &self.selection {
            SelectionState::Pending(commit) => Some(commit),
            SelectionState::Unset => None,
        };

        let lines: Vec<Line> = self
            .list
            .lines()
            .iter()
            .enumerate()
            .skip(scroll_offset)
            .take(inner_height)
            .map(|(idx, record)| build_log_line(record, idx == focus, armed))
            .collect();

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

fn build_log_line(
    record: &LineRecord,
    is_focused: bool,
    armed: Option<&CommitId>,
) -> Line<'static> {
    let is_armed = armed.is_some_and(|commit| record.owner.as_ref() == Some(commit));
    let gutter = if is_armed {
        Span::styled(
            symbols::markers::ARMED.to_string(),
            Style::default().fg(theme::log_view::ARMED_MARKER),
        )
    } else {
        Span::raw(" ")
    };

    let style = if is_focused {
        theme::focused_style(record.category)
    } else {
        theme::category_style(record.category)
    };

    Line::from(vec![gutter, Span::styled(record.text.clone(), style)])
}
