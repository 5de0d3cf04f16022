//! The component's callback contract.
//!
//! `CollectionView` never mutates the store or the router itself; it calls
//! these traits with positional arguments and the parent decides what they
//! mean. The app loop hands the view an [`ActionQueue`], drains it, and
//! applies the recorded actions; tests hand it the same queue as a spy.

use crate::router::RouteMode;
use crate::store::{ElementId, Record};

/// Data-facing callbacks: fetch/upsert/remove plus the filter setter.
pub trait CollectionDispatch {
    fn fetch(&mut self, collection: &str);
    fn upsert(&mut self, collection: &str, id: ElementId, record: Record);
    fn remove(&mut self, collection: &str, id: &str);
    fn set_filter(&mut self, collection: &str, filter: &str);
}

/// Navigation callbacks, one per route mode.
pub trait Navigator {
    fn go_to_list(&mut self, collection: &str);
    fn go_to_element_insert(&mut self, collection: &str);
    fn go_to_element_update(&mut self, collection: &str, id: &str);
    fn go_to_element_remove(&mut self, collection: &str, id: &str);
}

/// One recorded callback invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Fetch {
        collection: String,
    },
    Upsert {
        collection: String,
        id: ElementId,
        record: Record,
    },
    Remove {
        collection: String,
        id: ElementId,
    },
    SetFilter {
        collection: String,
        filter: String,
    },
    Navigate {
        collection: String,
        mode: RouteMode,
        id: Option<ElementId>,
    },
}

/// Queue-backed implementation of both callback traits.
#[derive(Debug, Default)]
pub struct ActionQueue {
    actions: Vec<Action>,
}

impl ActionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn drain(&mut self) -> Vec<Action> {
        std::mem::take(&mut self.actions)
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }
}

impl CollectionDispatch for ActionQueue {
    fn fetch(&mut self, collection: &str) {
        self.actions.push(Action::Fetch {
            collection: collection.to_string(),
        });
    }

    fn upsert(&mut self, collection: &str, id: ElementId, record: Record) {
        self.actions.push(Action::Upsert {
            collection: collection.to_string(),
            id,
            record,
        });
    }

    fn remove(&mut self, collection: &str, id: &str) {
        self.actions.push(Action::Remove {
            collection: collection.to_string(),
            id: id.to_string(),
        });
    }

    fn set_filter(&mut self, collection: &str, filter: &str) {
        self.actions.push(Action::SetFilter {
            collection: collection.to_string(),
            filter: filter.to_string(),
        });
    }
}

impl Navigator for ActionQueue {
    fn go_to_list(&mut self, collection: &str) {
        self.actions.push(Action::Navigate {
            collection: collection.to_string(),
            mode: RouteMode::List,
            id: None,
        });
    }

    fn go_to_element_insert(&mut self, collection: &str) {
        self.actions.push(Action::Navigate {
            collection: collection.to_string(),
            mode: RouteMode::Insert,
            id: None,
        });
    }

    fn go_to_element_update(&mut self, collection: &str, id: &str) {
        self.actions.push(Action::Navigate {
            collection: collection.to_string(),
            mode: RouteMode::Update,
            id: Some(id.to_string()),
        });
    }

    fn go_to_element_remove(&mut self, collection: &str, id: &str) {
        self.actions.push(Action::Navigate {
            collection: collection.to_string(),
            mode: RouteMode::Remove,
            id: Some(id.to_string()),
        });
    }
}
