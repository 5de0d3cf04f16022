use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::store::ID_FIELD;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub defaults: Defaults,
    #[serde(default)]
    pub collections: Vec<CollectionConfig>,
}

/// Default settings for the application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Defaults {
    /// Collection opened at startup.
    pub collection: String,
    /// Directory holding `<collection>.json` data files.
    /// Defaults to the platform data dir when absent.
    pub data_dir: Option<PathBuf>,
}

/// Per-collection display configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionConfig {
    /// Collection name (e.g. "books").
    pub name: String,
    /// Property names shown as table columns, in order.
    pub table_properties: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            defaults: Defaults {
                collection: "books".to_string(),
                data_dir: None,
            },
            collections: vec![CollectionConfig {
                name: "books".to_string(),
                table_properties: vec![
                    "title".to_string(),
                    "author".to_string(),
                    "year".to_string(),
                ],
            }],
        }
    }
}

impl Config {
    pub fn collection_config(&self, name: &str) -> Option<&CollectionConfig> {
        self.collections.iter().find(|c| c.name == name)
    }

    /// Display properties for a collection. Unconfigured collections fall
    /// back to the bare id column.
    pub fn table_properties(&self, name: &str) -> Vec<String> {
        self.collection_config(name)
            .map(|c| c.table_properties.clone())
            .unwrap_or_else(|| vec![ID_FIELD.to_string()])
    }

    /// Resolved data directory, honoring the configured override.
    pub fn data_dir(&self) -> PathBuf {
        self.defaults.data_dir.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("recordesk")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unconfigured_collection_falls_back_to_id_column() {
        let config = Config::default();
        assert_eq!(config.table_properties("records"), vec!["_id".to_string()]);
    }

    #[test]
    fn configured_collection_uses_its_properties() {
        let config = Config::default();
        assert_eq!(
            config.table_properties("books"),
            vec!["title", "author", "year"]
        );
    }
}
