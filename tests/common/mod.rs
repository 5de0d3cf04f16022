//! Shared test fixtures.

#![allow(dead_code)]

use std::collections::HashMap;

use serde_json::json;

use recordesk::store::{CollectionsState, ElementId, Record, StoreIntent, StoreReducer};
use recordesk::ui::mvi::Reducer;

/// A book record with the given id, title and author.
pub fn book(id: &str, title: &str, author: &str) -> Record {
    [
        ("_id".to_string(), json!(id)),
        ("title".to_string(), json!(title)),
        ("author".to_string(), json!(author)),
    ]
    .into_iter()
    .collect()
}

pub fn book_properties() -> Vec<String> {
    vec!["title".to_string(), "author".to_string()]
}

/// A store holding the given records under the "books" collection.
pub fn books_store(records: &[Record]) -> CollectionsState {
    let mut elements = HashMap::new();
    for record in records {
        let id: ElementId = record.id().expect("fixture record has an id").to_string();
        elements.insert(id, record.clone());
    }
    StoreReducer::reduce(
        CollectionsState::default(),
        StoreIntent::FetchLoaded {
            collection: "books".to_string(),
            elements,
        },
    )
}

/// A store where "books" is mid-fetch with no elements yet.
pub fn fetching_books_store() -> CollectionsState {
    StoreReducer::reduce(
        CollectionsState::default(),
        StoreIntent::FetchStarted {
            collection: "books".to_string(),
        },
    )
}
