use std::collections::HashMap;

use crate::store::record::{ElementId, Record};
use crate::ui::mvi::Intent;

/// Store transitions. Dispatched by the app loop when the view's callbacks
/// fire or when the data source replies.
#[derive(Debug, Clone)]
pub enum StoreIntent {
    /// A fetch was dispatched; mark the slice as fetching.
    FetchStarted { collection: String },
    /// The source delivered the collection's elements.
    FetchLoaded {
        collection: String,
        elements: HashMap<ElementId, Record>,
    },
    /// The source failed; clear the fetching flag, keep whatever we had.
    FetchFailed { collection: String },
    Upserted {
        collection: String,
        id: ElementId,
        record: Record,
    },
    Removed { collection: String, id: ElementId },
}

impl Intent for StoreIntent {}
