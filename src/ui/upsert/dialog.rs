use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::ui::layout::centered_rect;
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, HEADER_TEXT, MUTED_TEXT, POPUP_BORDER};
use crate::ui::upsert::state::FormState;

const DIALOG_WIDTH: u16 = 50;

pub fn render_form_dialog(frame: &mut Frame<'_>, state: &FormState, collection_name: &str) {
    let FormState::Visible {
        fields,
        focused,
        inserting,
    } = state
    else {
        return;
    };

    let title = if *inserting {
        format!(" Add to {collection_name} ")
    } else {
        format!(" Edit {collection_name} element ")
    };

    let mut lines: Vec<Line> = Vec::with_capacity(fields.len() + 2);
    for (index, field) in fields.iter().enumerate() {
        let is_focused = index == *focused;
        let mut spans = vec![
            Span::styled(
                format!(" {:<12}", field.label),
                Style::default().fg(ACCENT),
            ),
            Span::styled(field.value.clone(), Style::default().fg(HEADER_TEXT)),
        ];
        if is_focused {
            spans.push(Span::styled("▏", Style::default().fg(ACCENT)));
        }
        let mut line = Line::from(spans);
        if is_focused {
            line = line.style(Style::default().bg(ACTIVE_HIGHLIGHT));
        }
        lines.push(line);
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " Enter: Save │ Tab: Next │ Esc: Cancel",
        Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM),
    )));

    let area = centered_rect(DIALOG_WIDTH, dialog_height(state), frame.area());
    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(Style::default().fg(POPUP_BORDER)),
        ),
        area,
    );
}

/// Dialog height: one row per field, a spacer, the hint line and borders.
fn dialog_height(state: &FormState) -> u16 {
    match state {
        FormState::Hidden => 0,
        FormState::Visible { fields, .. } => fields.len() as u16 + 4,
    }
}
