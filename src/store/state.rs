//! State for the normalized collection store.

use std::collections::HashMap;

use crate::store::record::{ElementId, Record};
use crate::ui::mvi::UiState;

/// One collection's slice of the store.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CollectionSlice {
    pub elements: HashMap<ElementId, Record>,
    pub fetching: bool,
}

/// Mapping from collection name to its slice.
///
/// Unknown collections read as absent; lookups never fail loudly. Slices are
/// created lazily by the reducer on the first intent that touches them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CollectionsState {
    slices: HashMap<String, CollectionSlice>,
}

impl UiState for CollectionsState {}

impl CollectionsState {
    pub fn slice(&self, collection: &str) -> Option<&CollectionSlice> {
        self.slices.get(collection)
    }

    pub(crate) fn slice_mut(&mut self, collection: &str) -> &mut CollectionSlice {
        self.slices.entry(collection.to_string()).or_default()
    }

    /// Record by id in the named collection; `None` when either is missing.
    pub fn element(&self, collection: &str, id: &str) -> Option<&Record> {
        self.slices.get(collection)?.elements.get(id)
    }

    pub fn is_fetching(&self, collection: &str) -> bool {
        self.slices
            .get(collection)
            .map(|slice| slice.fetching)
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_collection_reads_as_absent() {
        let state = CollectionsState::default();
        assert!(state.slice("books").is_none());
        assert!(state.element("books", "a1").is_none());
        assert!(!state.is_fetching("books"));
    }

    #[test]
    fn slice_mut_creates_lazily() {
        let mut state = CollectionsState::default();
        state.slice_mut("books").fetching = true;
        assert!(state.is_fetching("books"));
    }
}
