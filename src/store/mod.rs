//! Normalized collection store.
//!
//! Collections are keyed by name; each slice holds its elements keyed by
//! `_id` plus a `fetching` flag. All transitions go through [`StoreReducer`].

mod intent;
mod record;
mod reducer;
mod state;

pub use intent::StoreIntent;
pub use record::{new_element_id, ElementId, Record, ID_FIELD};
pub use reducer::StoreReducer;
pub use state::{CollectionSlice, CollectionsState};
