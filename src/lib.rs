//! recordesk — a terminal admin panel for JSON record collections.
//!
//! The core is a generic CRUD collection view: a filterable, sortable
//! table with add/edit/remove overlays driven by client-side routing
//! state. See `ui::collection` for the component and `dispatch` for the
//! callback contract it talks through.

pub mod args;
pub mod config;
pub mod dispatch;
pub mod filter;
pub mod logging;
pub mod router;
pub mod source;
pub mod store;
pub mod ui;
