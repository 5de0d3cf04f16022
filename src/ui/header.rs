use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::ui::app::App;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR};

pub fn render(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let view = app.view();
    let count = view.elements().len();
    let status = if view.is_fetching() {
        "fetching".to_string()
    } else {
        format!("{count} elements")
    };

    let mut spans = vec![
        Span::styled(
            " recordesk ",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
        Span::styled("│ ", Style::default().fg(MUTED_TEXT)),
        Span::styled(app.collection().to_string(), Style::default().fg(HEADER_TEXT)),
        Span::styled(format!(" ({status})"), Style::default().fg(MUTED_TEXT)),
    ];

    if let Some(error) = app.last_source_error() {
        spans.push(Span::styled("  ", Style::default()));
        spans.push(Span::styled(
            error.to_string(),
            Style::default().fg(STATUS_ERROR),
        ));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        ),
        area,
    );
}
