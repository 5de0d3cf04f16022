use crate::ui::mvi::Reducer;
use crate::ui::upsert::intent::FormIntent;
use crate::ui::upsert::state::FormState;

pub struct FormReducer;

impl Reducer for FormReducer {
    type State = FormState;
    type Intent = FormIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FormIntent::Load { fields, inserting } => FormState::Visible {
                fields,
                focused: 0,
                inserting,
            },
            FormIntent::Close => FormState::Hidden,
            FormIntent::Input(ch) => match state {
                FormState::Visible {
                    mut fields,
                    focused,
                    inserting,
                } => {
                    if let Some(field) = fields.get_mut(focused) {
                        field.value.push(ch);
                    }
                    FormState::Visible {
                        fields,
                        focused,
                        inserting,
                    }
                }
                other => other,
            },
            FormIntent::Backspace => match state {
                FormState::Visible {
                    mut fields,
                    focused,
                    inserting,
                } => {
                    if let Some(field) = fields.get_mut(focused) {
                        field.value.pop();
                    }
                    FormState::Visible {
                        fields,
                        focused,
                        inserting,
                    }
                }
                other => other,
            },
            FormIntent::FocusNext => match state {
                FormState::Visible {
                    fields,
                    focused,
                    inserting,
                } => {
                    let focused = if focused + 1 >= fields.len() { 0 } else { focused + 1 };
                    FormState::Visible {
                        fields,
                        focused,
                        inserting,
                    }
                }
                other => other,
            },
            FormIntent::FocusPrev => match state {
                FormState::Visible {
                    fields,
                    focused,
                    inserting,
                } => {
                    let focused = if focused == 0 {
                        fields.len().saturating_sub(1)
                    } else {
                        focused - 1
                    };
                    FormState::Visible {
                        fields,
                        focused,
                        inserting,
                    }
                }
                other => other,
            },
        }
    }
}
