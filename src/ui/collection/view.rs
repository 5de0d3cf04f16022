//! The CollectionView component.
//!
//! A per-frame value constructed from borrowed props. Everything it shows
//! is derived: the element id comes from the router params, the element
//! from the store, the visible rows from the store plus the fuzzy filter,
//! and the active overlay from the route mode alone. No field here
//! duplicates routing state.

use crate::dispatch::{CollectionDispatch, Navigator};
use crate::filter::fuzzy_filter;
use crate::router::{RouteMode, Router};
use crate::store::{new_element_id, CollectionsState, ElementId, Record};
use crate::ui::collection::columns::{self, Column};

/// Collection shown when the caller does not name one.
pub const DEFAULT_COLLECTION: &str = "books";

/// The component's prop contract, checked at compile time.
#[derive(Clone, Copy)]
pub struct CollectionViewProps<'a> {
    pub collection_name: &'a str,
    pub collections: &'a CollectionsState,
    pub filter: &'a str,
    pub table_properties: &'a [String],
    pub router: &'a Router,
}

impl<'a> CollectionViewProps<'a> {
    /// Props with defaults: collection "books", empty filter, no configured
    /// properties (the table then shows only the id column).
    pub fn new(collections: &'a CollectionsState, router: &'a Router) -> Self {
        Self {
            collection_name: DEFAULT_COLLECTION,
            collections,
            filter: "",
            table_properties: &[],
            router,
        }
    }

    pub fn with_collection_name(mut self, collection_name: &'a str) -> Self {
        self.collection_name = collection_name;
        self
    }

    pub fn with_filter(mut self, filter: &'a str) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_table_properties(mut self, table_properties: &'a [String]) -> Self {
        self.table_properties = table_properties;
        self
    }
}

/// What the body region shows.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BodyContent {
    Spinner,
    Table,
}

pub struct CollectionView<'a> {
    props: CollectionViewProps<'a>,
}

impl<'a> CollectionView<'a> {
    pub fn new(props: CollectionViewProps<'a>) -> Self {
        Self { props }
    }

    pub fn props(&self) -> &CollectionViewProps<'a> {
        &self.props
    }

    /// Called once when the view is first shown. Nothing re-invokes this on
    /// later prop changes; the fetch is a mount-time effect only.
    pub fn on_mount(&self, dispatch: &mut dyn CollectionDispatch) {
        dispatch.fetch(self.props.collection_name);
    }

    /// `_id` from the router params; absent off detail routes.
    pub fn element_id(&self) -> Option<&'a str> {
        self.props.router.params.id.as_deref()
    }

    /// Record by id in the active collection.
    pub fn element(&self, id: &str) -> Option<&'a Record> {
        self.props
            .collections
            .element(self.props.collection_name, id)
    }

    /// The record addressed by the current route, when there is one.
    pub fn current_element(&self) -> Option<&'a Record> {
        self.element(self.element_id()?)
    }

    /// All records of the active collection, passed through the fuzzy
    /// filter over the configured display properties.
    pub fn elements(&self) -> Vec<&'a Record> {
        let all: Vec<&Record> = self
            .props
            .collections
            .slice(self.props.collection_name)
            .map(|slice| slice.elements.values().collect())
            .unwrap_or_default();
        fuzzy_filter(all, self.props.filter, self.props.table_properties)
    }

    pub fn is_fetching(&self) -> bool {
        self.props.collections.is_fetching(self.props.collection_name)
    }

    /// Active mode, derived from the route name once per call site.
    pub fn mode(&self) -> RouteMode {
        self.props.router.mode()
    }

    pub fn columns(&self) -> Vec<String> {
        columns::columns(self.props.table_properties)
    }

    pub fn columns_metadata(&self) -> Vec<Column> {
        columns::columns_metadata(self.props.table_properties)
    }

    pub fn body(&self) -> BodyContent {
        if self.is_fetching() {
            BodyContent::Spinner
        } else {
            BodyContent::Table
        }
    }

    /// The id an upsert would use: a fresh one on the insert route, the
    /// routed element's id otherwise. `None` when a detail route carries no
    /// id, in which case the handlers below no-op.
    pub fn upsert_id(&self) -> Option<ElementId> {
        match self.mode() {
            RouteMode::Insert => Some(new_element_id()),
            _ => self.element_id().map(str::to_string),
        }
    }

    pub fn handle_upsert(&self, dispatch: &mut dyn CollectionDispatch, record: Record) {
        let Some(id) = self.upsert_id() else {
            return;
        };
        dispatch.upsert(self.props.collection_name, id, record);
    }

    pub fn handle_remove(&self, dispatch: &mut dyn CollectionDispatch) {
        let Some(id) = self.element_id() else {
            return;
        };
        dispatch.remove(self.props.collection_name, id);
    }

    /// Search input binding.
    pub fn handle_filter_change(&self, dispatch: &mut dyn CollectionDispatch, filter: &str) {
        dispatch.set_filter(self.props.collection_name, filter);
    }

    /// Add-button binding.
    pub fn open_insert(&self, nav: &mut dyn Navigator) {
        nav.go_to_element_insert(self.props.collection_name);
    }

    /// Edit action of the id column's action cell.
    pub fn edit_element(&self, nav: &mut dyn Navigator, id: &str) {
        nav.go_to_element_update(self.props.collection_name, id);
    }

    /// Remove action of the id column's action cell.
    pub fn remove_element(&self, nav: &mut dyn Navigator, id: &str) {
        nav.go_to_element_remove(self.props.collection_name, id);
    }

    /// Cancel binding shared by both overlays.
    pub fn close(&self, nav: &mut dyn Navigator) {
        nav.go_to_list(self.props.collection_name);
    }
}
