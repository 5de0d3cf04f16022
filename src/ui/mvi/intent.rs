//! Base trait for intents (user/system actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent user actions (key presses), system events (source
/// replies) and navigation. They are processed by reducers to produce new
/// states.
pub trait Intent: Send + 'static {}
