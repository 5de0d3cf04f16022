use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use recordesk::config::{Config, ConfigError};

fn write_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, content).expect("Failed to write config");
    (temp_dir, path)
}

#[test]
fn loads_a_full_config() {
    let (_dir, path) = write_config(
        r#"[defaults]
collection = "albums"
data_dir = "/tmp/recordesk-data"

[[collections]]
name = "albums"
table_properties = ["title", "artist", "year"]

[[collections]]
name = "artists"
table_properties = ["name"]
"#,
    );
    let config = Config::load_from(&path).expect("config should load");
    assert_eq!(config.defaults.collection, "albums");
    assert_eq!(config.data_dir(), PathBuf::from("/tmp/recordesk-data"));
    assert_eq!(
        config.table_properties("albums"),
        vec!["title", "artist", "year"]
    );
    assert_eq!(config.table_properties("artists"), vec!["name"]);
}

#[test]
fn unconfigured_collections_fall_back_to_the_id_column() {
    let (_dir, path) = write_config(
        r#"[defaults]
collection = "albums"
"#,
    );
    let config = Config::load_from(&path).expect("config should load");
    assert_eq!(config.table_properties("albums"), vec!["_id"]);
}

#[test]
fn parse_errors_name_the_file() {
    let (_dir, path) = write_config("defaults = not toml at all [");
    match Config::load_from(&path) {
        Err(ConfigError::ParseError { path: err_path, .. }) => assert_eq!(err_path, path),
        other => panic!("expected a parse error, got {other:?}"),
    }
}

#[test]
fn duplicate_collection_names_fail_validation() {
    let (_dir, path) = write_config(
        r#"[defaults]
collection = "albums"

[[collections]]
name = "albums"
table_properties = ["title"]

[[collections]]
name = "albums"
table_properties = ["artist"]
"#,
    );
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn missing_file_is_a_read_error_with_explicit_path() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("nope.toml");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ReadError { .. })
    ));
}
