use std::collections::HashSet;

use serde_json::Value;

use crate::store::{Record, ID_FIELD};
use crate::ui::collection::title_case;
use crate::ui::mvi::UiState;

/// One editable field of the form.
#[derive(Debug, Clone, PartialEq)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum FormState {
    #[default]
    Hidden,
    Visible {
        fields: Vec<FormField>,
        focused: usize,
        /// True on the insert route; pre-populated values mean update.
        inserting: bool,
    },
}

impl UiState for FormState {}

impl FormState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn fields(&self) -> Option<&[FormField]> {
        match self {
            Self::Hidden => None,
            Self::Visible { fields, .. } => Some(fields),
        }
    }
}

/// Build the form's fields from the configured display properties,
/// pre-populated from `initial` on the update route. The id field is never
/// editable.
pub fn form_fields(table_properties: &[String], initial: Option<&Record>) -> Vec<FormField> {
    let mut seen = HashSet::new();
    table_properties
        .iter()
        .filter(|property| property.as_str() != ID_FIELD && seen.insert(property.as_str()))
        .map(|property| FormField {
            name: property.clone(),
            label: title_case(property),
            value: initial
                .map(|record| record.display_value(property))
                .unwrap_or_default(),
        })
        .collect()
}

/// Assemble the submitted record. Blank fields are omitted; text that
/// parses as a bare JSON scalar keeps its type so numbers survive an edit
/// round-trip.
pub fn assemble_record(fields: &[FormField]) -> Record {
    fields
        .iter()
        .filter(|field| !field.value.trim().is_empty())
        .map(|field| (field.name.clone(), scalar_value(&field.value)))
        .collect()
}

fn scalar_value(text: &str) -> Value {
    match serde_json::from_str::<Value>(text) {
        Ok(value) if value.is_number() || value.is_boolean() || value.is_null() => value,
        _ => Value::String(text.to_string()),
    }
}
