//! Upsert form overlay.
//!
//! The field editor shown on the insert and update routes. Whether it is
//! shown at all is decided by the route mode at render time; this module
//! only owns the field buffers and focus.

mod dialog;
mod intent;
mod reducer;
mod state;

pub use dialog::render_form_dialog;
pub use intent::FormIntent;
pub use reducer::FormReducer;
pub use state::{assemble_record, form_fields, FormField, FormState};
