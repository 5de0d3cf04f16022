//! Remove confirmation modal.
//!
//! Shown iff the active route mode is Remove; the caller gates on the mode
//! and this module renders from the looked-up element alone.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::ui::collection::CollectionView;
use crate::ui::layout::centered_rect;
use crate::ui::theme::{HEADER_TEXT, MUTED_TEXT, POPUP_BORDER, STATUS_ERROR};

const DIALOG_WIDTH: u16 = 50;
const DIALOG_HEIGHT: u16 = 7;

pub fn render_remove_dialog(frame: &mut Frame<'_>, view: &CollectionView<'_>) {
    let question = removal_question(view.props().collection_name, view.element_id());

    let mut lines = vec![Line::from(Span::styled(
        format!(" {question}"),
        Style::default().fg(HEADER_TEXT),
    ))];

    // Show the element's leading display property so the user confirms the
    // right record, not just an opaque id.
    if let Some(element) = view.current_element() {
        if let Some(property) = view
            .props()
            .table_properties
            .iter()
            .find(|p| p.as_str() != crate::store::ID_FIELD)
        {
            let value = element.display_value(property);
            if !value.is_empty() {
                lines.push(Line::from(Span::styled(
                    format!("   {value}"),
                    Style::default().fg(MUTED_TEXT),
                )));
            }
        }
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " Enter: Remove │ Esc: Cancel",
        Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM),
    )));

    let area = centered_rect(DIALOG_WIDTH, DIALOG_HEIGHT, frame.area());
    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Confirm removal ")
                .border_style(Style::default().fg(POPUP_BORDER))
                .title_style(Style::default().fg(STATUS_ERROR)),
        ),
        area,
    );
}

/// The confirmation line. A missing id still renders a sensible question
/// rather than failing.
pub fn removal_question(collection_name: &str, element_id: Option<&str>) -> String {
    match element_id {
        Some(id) => format!("Remove element {id} from {collection_name}?"),
        None => format!("Remove element from {collection_name}?"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_names_the_element_and_collection() {
        assert_eq!(
            removal_question("books", Some("a1")),
            "Remove element a1 from books?"
        );
    }

    #[test]
    fn question_survives_a_missing_id() {
        assert_eq!(
            removal_question("books", None),
            "Remove element from books?"
        );
    }
}
