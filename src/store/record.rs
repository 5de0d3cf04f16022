use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Reserved identifying field on every record.
pub const ID_FIELD: &str = "_id";

/// Element identifier. Freshly generated ids are uuid v4 strings.
pub type ElementId = String;

/// Generate a fresh element id for an insert.
pub fn new_element_id() -> ElementId {
    Uuid::new_v4().to_string()
}

/// An opaque key-value record within a collection.
///
/// Records carry whatever fields the collection's documents have; the store
/// never interprets them beyond the reserved [`ID_FIELD`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(serde_json::Map<String, Value>);

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// The record's `_id`, if present and a string.
    pub fn id(&self) -> Option<&str> {
        self.0.get(ID_FIELD).and_then(Value::as_str)
    }

    pub fn set_id(&mut self, id: &str) {
        self.0
            .insert(ID_FIELD.to_string(), Value::String(id.to_string()));
    }

    pub fn get(&self, property: &str) -> Option<&Value> {
        self.0.get(property)
    }

    pub fn insert(&mut self, property: &str, value: Value) {
        self.0.insert(property.to_string(), value);
    }

    /// Value of a property rendered for display. Missing properties render
    /// as an empty string; string values are shown without quotes.
    pub fn display_value(&self, property: &str) -> String {
        match self.0.get(property) {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }
}

impl FromIterator<(String, Value)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn id_reads_reserved_field() {
        let mut record = Record::new();
        assert_eq!(record.id(), None);
        record.set_id("a1");
        assert_eq!(record.id(), Some("a1"));
    }

    #[test]
    fn display_value_formats_scalars() {
        let record: Record = [
            ("title".to_string(), json!("Dune")),
            ("year".to_string(), json!(1965)),
            ("in_print".to_string(), json!(true)),
        ]
        .into_iter()
        .collect();
        assert_eq!(record.display_value("title"), "Dune");
        assert_eq!(record.display_value("year"), "1965");
        assert_eq!(record.display_value("in_print"), "true");
        assert_eq!(record.display_value("missing"), "");
    }

    #[test]
    fn fresh_ids_are_unique() {
        assert_ne!(new_element_id(), new_element_id());
    }
}
