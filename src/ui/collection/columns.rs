//! Table columns derived from the configured display properties.

use std::collections::HashSet;

use crate::store::ID_FIELD;

/// Display metadata for one table column.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub display_name: String,
    /// The trailing id column renders the edit/remove action cell.
    pub actions: bool,
}

/// Column names: the configured properties followed by `_id`, deduplicated.
///
/// A configured `_id` is folded into the trailing column rather than
/// repeated.
pub fn columns(table_properties: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut names: Vec<String> = table_properties
        .iter()
        .filter(|property| property.as_str() != ID_FIELD && seen.insert(property.as_str()))
        .cloned()
        .collect();
    names.push(ID_FIELD.to_string());
    names
}

/// Column metadata: Title Case headers, plus the unlabeled action column.
pub fn columns_metadata(table_properties: &[String]) -> Vec<Column> {
    columns(table_properties)
        .into_iter()
        .map(|name| {
            if name == ID_FIELD {
                Column {
                    name,
                    display_name: String::new(),
                    actions: true,
                }
            } else {
                let display_name = title_case(&name);
                Column {
                    name,
                    display_name,
                    actions: false,
                }
            }
        })
        .collect()
}

/// `publication_year` → `Publication Year`, `publicationYear` → the same.
pub fn title_case(property: &str) -> String {
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut prev_was_lower = false;
    for ch in property.chars() {
        if matches!(ch, '_' | '-' | ' ') {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev_was_lower = false;
            continue;
        }
        if ch.is_uppercase() && prev_was_lower {
            words.push(std::mem::take(&mut current));
        }
        prev_was_lower = ch.is_lowercase() || ch.is_ascii_digit();
        current.push(ch);
    }
    if !current.is_empty() {
        words.push(current);
    }

    words
        .iter()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
