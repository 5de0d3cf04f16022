//! The generic CRUD collection view.
//!
//! `CollectionView` derives everything it shows from the router and the
//! normalized store; user actions go out through the dispatcher traits.
//! Selection and sort order belong to the table widget, not the view.

mod columns;
mod table;
mod view;

pub use columns::{columns, columns_metadata, title_case, Column};
pub use table::{render_search, render_table, sorted_rows, SortSpec, TableUiState};
pub use view::{BodyContent, CollectionView, CollectionViewProps, DEFAULT_COLLECTION};
