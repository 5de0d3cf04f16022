//! Application configuration.
//!
//! Loaded from `config.toml` in the platform config directory (or a path
//! given on the command line). A missing file is not an error; defaults
//! apply.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{CollectionConfig, Config, Defaults};
