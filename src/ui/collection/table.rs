//! Table widget: selection, sort order and rendering.
//!
//! Sort state belongs here, not to `CollectionView` — the view only derives
//! which rows exist; the widget decides how they are ordered and which one
//! the cursor is on.

use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState};
use ratatui::Frame;

use crate::store::Record;
use crate::ui::collection::view::{BodyContent, CollectionView};
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT};

const THROBBER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Active sort: column index into the derived columns, plus direction.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SortSpec {
    pub column: usize,
    pub ascending: bool,
}

/// Widget-owned UI state: cursor row and sort order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableUiState {
    pub selected: usize,
    pub sort: Option<SortSpec>,
}

impl TableUiState {
    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn move_down(&mut self, row_count: usize) {
        self.selected = (self.selected + 1).min(row_count.saturating_sub(1));
    }

    pub fn clamp(&mut self, row_count: usize) {
        self.selected = self.selected.min(row_count.saturating_sub(1));
    }

    /// Cycle the sort column: unsorted → column 0 → column 1 → … → unsorted.
    pub fn cycle_sort(&mut self, column_count: usize) {
        self.sort = match self.sort {
            None if column_count > 0 => Some(SortSpec {
                column: 0,
                ascending: true,
            }),
            Some(spec) if spec.column + 1 < column_count => Some(SortSpec {
                column: spec.column + 1,
                ascending: true,
            }),
            _ => None,
        };
    }

    pub fn toggle_direction(&mut self) {
        if let Some(spec) = self.sort.as_mut() {
            spec.ascending = !spec.ascending;
        }
    }
}

/// Order rows by the sort spec, or by id when unsorted (hash-map iteration
/// order is not stable, the table must be).
pub fn sorted_rows<'a>(
    mut rows: Vec<&'a Record>,
    columns: &[String],
    sort: Option<&SortSpec>,
) -> Vec<&'a Record> {
    let column = sort.and_then(|spec| columns.get(spec.column));
    match (sort, column) {
        (Some(spec), Some(column)) => {
            rows.sort_by(|a, b| {
                let value_a = a.display_value(column).to_lowercase();
                let value_b = b.display_value(column).to_lowercase();
                // Missing values sort last regardless of direction.
                value_a
                    .is_empty()
                    .cmp(&value_b.is_empty())
                    .then_with(|| {
                        if spec.ascending {
                            value_a.cmp(&value_b)
                        } else {
                            value_b.cmp(&value_a)
                        }
                    })
                    .then_with(|| a.id().cmp(&b.id()))
            });
        }
        _ => rows.sort_by(|a, b| a.id().cmp(&b.id())),
    }
    rows
}

/// Render the body region: spinner while fetching, otherwise the table.
pub fn render_table(
    frame: &mut Frame<'_>,
    area: Rect,
    view: &CollectionView<'_>,
    ui_state: &TableUiState,
    tick: u64,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));

    if view.body() == BodyContent::Spinner {
        let throbber = THROBBER[(tick as usize) % THROBBER.len()];
        let spinner = Paragraph::new(Line::from(vec![
            Span::styled(throbber, Style::default().fg(ACCENT)),
            Span::styled(
                format!(" Fetching {}...", view.props().collection_name),
                Style::default().fg(MUTED_TEXT),
            ),
        ]))
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(spinner, area);
        return;
    }

    let metadata = view.columns_metadata();
    let columns = view.columns();
    let rows = sorted_rows(view.elements(), &columns, ui_state.sort.as_ref());

    if rows.is_empty() {
        let message = Paragraph::new(Line::from(Span::styled(
            format!(
                "Collection {} has no elements",
                view.props().collection_name
            ),
            Style::default().fg(MUTED_TEXT),
        )))
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(message, area);
        return;
    }

    let header = Row::new(metadata.iter().enumerate().map(|(index, column)| {
        let mut label = column.display_name.clone();
        if let Some(spec) = ui_state.sort {
            if spec.column == index && !column.actions {
                label.push_str(if spec.ascending { " ▲" } else { " ▼" });
            }
        }
        Cell::from(Span::styled(
            label,
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ))
    }));

    let body_rows = rows.iter().map(|record| {
        Row::new(metadata.iter().map(|column| {
            if column.actions {
                Cell::from(Span::styled(
                    "e edit · d remove",
                    Style::default().fg(MUTED_TEXT),
                ))
            } else {
                Cell::from(Span::styled(
                    record.display_value(&column.name),
                    Style::default().fg(HEADER_TEXT),
                ))
            }
        }))
    });

    let widths = metadata.iter().map(|_| Constraint::Fill(1));
    let table = Table::new(body_rows, widths)
        .header(header)
        .block(block)
        .row_highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT));

    let mut table_state = TableState::default().with_selected(Some(ui_state.selected));
    frame.render_stateful_widget(table, area, &mut table_state);
}

/// Render the always-visible search input.
pub fn render_search(frame: &mut Frame<'_>, area: Rect, filter: &str, focused: bool) {
    let border = if focused { ACCENT } else { GLOBAL_BORDER };
    let content = if focused {
        Line::from(vec![
            Span::styled(filter.to_string(), Style::default().fg(HEADER_TEXT)),
            Span::styled("▏", Style::default().fg(ACCENT)),
        ])
    } else if filter.is_empty() {
        Line::from(Span::styled(
            "press / to search",
            Style::default().fg(MUTED_TEXT),
        ))
    } else {
        Line::from(Span::styled(
            filter.to_string(),
            Style::default().fg(HEADER_TEXT),
        ))
    };

    let input = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Search ")
            .border_style(Style::default().fg(border)),
    );
    frame.render_widget(input, area);
}
