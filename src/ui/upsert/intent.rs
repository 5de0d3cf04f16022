use crate::ui::mvi::Intent;
use crate::ui::upsert::state::FormField;

#[derive(Debug, Clone)]
pub enum FormIntent {
    /// Entering an insert/update route loads the field buffers.
    Load {
        fields: Vec<FormField>,
        inserting: bool,
    },
    Input(char),
    Backspace,
    FocusNext,
    FocusPrev,
    Close,
}

impl Intent for FormIntent {}
