use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::router::RouteMode;
use crate::ui::app::App;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn render(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let hints = hints_for(app.mode());
    let version = format!("v{VERSION} ");

    // Pad with char counts, not byte counts (the hints contain │).
    let content_width = area.width.saturating_sub(2) as usize;
    let padding = content_width
        .saturating_sub(hints.chars().count())
        .saturating_sub(version.chars().count());

    let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
    let line = Line::from(vec![
        Span::styled(hints, text_style),
        Span::styled(" ".repeat(padding.max(1)), text_style),
        Span::styled(version, text_style),
    ]);

    frame.render_widget(
        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            ),
        area,
    );
}

fn hints_for(mode: RouteMode) -> &'static str {
    match mode {
        RouteMode::List => {
            " a: Add │ e: Edit │ d: Remove │ /: Search │ s: Sort │ S: Reverse │ q: Quit"
        }
        RouteMode::Insert | RouteMode::Update => " Enter: Save │ Tab: Next field │ Esc: Cancel",
        RouteMode::Remove => " Enter: Remove │ Esc: Cancel",
    }
}
