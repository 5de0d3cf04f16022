//! Reducer for the collection store.

use crate::store::intent::StoreIntent;
use crate::store::state::CollectionsState;
use crate::ui::mvi::Reducer;

/// Pure state transitions for the collection store.
///
/// Persistence and navigation are side effects handled by the caller around
/// the dispatch call; the reducer only shapes state.
pub struct StoreReducer;

impl Reducer for StoreReducer {
    type State = CollectionsState;
    type Intent = StoreIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            StoreIntent::FetchStarted { collection } => {
                state.slice_mut(&collection).fetching = true;
                state
            }
            StoreIntent::FetchLoaded {
                collection,
                elements,
            } => {
                let slice = state.slice_mut(&collection);
                slice.elements = elements;
                slice.fetching = false;
                state
            }
            StoreIntent::FetchFailed { collection } => {
                state.slice_mut(&collection).fetching = false;
                state
            }
            StoreIntent::Upserted {
                collection,
                id,
                mut record,
            } => {
                // The map key is authoritative; keep the record's own id in sync.
                if record.id() != Some(id.as_str()) {
                    record.set_id(&id);
                }
                state.slice_mut(&collection).elements.insert(id, record);
                state
            }
            StoreIntent::Removed { collection, id } => {
                state.slice_mut(&collection).elements.remove(&id);
                state
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Record;
    use std::collections::HashMap;

    #[test]
    fn fetch_started_marks_fetching() {
        let state = StoreReducer::reduce(
            CollectionsState::default(),
            StoreIntent::FetchStarted {
                collection: "books".into(),
            },
        );
        assert!(state.is_fetching("books"));
    }

    #[test]
    fn fetch_loaded_replaces_elements_and_clears_flag() {
        let mut elements = HashMap::new();
        let mut record = Record::new();
        record.set_id("a1");
        elements.insert("a1".to_string(), record);

        let state = StoreReducer::reduce(
            CollectionsState::default(),
            StoreIntent::FetchStarted {
                collection: "books".into(),
            },
        );
        let state = StoreReducer::reduce(
            state,
            StoreIntent::FetchLoaded {
                collection: "books".into(),
                elements,
            },
        );
        assert!(!state.is_fetching("books"));
        assert!(state.element("books", "a1").is_some());
    }

    #[test]
    fn upserted_backfills_record_id() {
        let state = StoreReducer::reduce(
            CollectionsState::default(),
            StoreIntent::Upserted {
                collection: "books".into(),
                id: "a1".into(),
                record: Record::new(),
            },
        );
        let element = state.element("books", "a1").unwrap();
        assert_eq!(element.id(), Some("a1"));
    }

    #[test]
    fn removed_deletes_element() {
        let state = StoreReducer::reduce(
            CollectionsState::default(),
            StoreIntent::Upserted {
                collection: "books".into(),
                id: "a1".into(),
                record: Record::new(),
            },
        );
        let state = StoreReducer::reduce(
            state,
            StoreIntent::Removed {
                collection: "books".into(),
                id: "a1".into(),
            },
        );
        assert!(state.element("books", "a1").is_none());
    }
}
