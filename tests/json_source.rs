mod common;

use std::collections::HashMap;

use common::book;
use tempfile::TempDir;

use recordesk::source::JsonStore;
use recordesk::store::{ElementId, Record};

fn elements(records: &[Record]) -> HashMap<ElementId, Record> {
    records
        .iter()
        .map(|r| (r.id().expect("fixture record has an id").to_string(), r.clone()))
        .collect()
}

#[tokio::test]
async fn missing_data_file_reads_as_an_empty_collection() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = JsonStore::new(temp_dir.path().to_path_buf());
    let loaded = store.load("books").await.expect("load should succeed");
    assert!(loaded.is_empty());
}

#[tokio::test]
async fn save_then_load_round_trips_the_collection() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = JsonStore::new(temp_dir.path().join("data"));

    let records = elements(&[
        book("a1", "Dune", "Herbert"),
        book("b2", "Solaris", "Lem"),
    ]);
    store
        .save("books", &records)
        .await
        .expect("save should create the data dir and file");

    let loaded = store.load("books").await.expect("load should succeed");
    assert_eq!(loaded, records);
}

#[tokio::test]
async fn load_backfills_ids_from_the_map_keys() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = JsonStore::new(temp_dir.path().to_path_buf());
    tokio::fs::write(
        store.data_path("books"),
        r#"{"a1": {"title": "Dune"}}"#,
    )
    .await
    .expect("Failed to seed data file");

    let loaded = store.load("books").await.expect("load should succeed");
    assert_eq!(loaded["a1"].id(), Some("a1"));
}

#[tokio::test]
async fn malformed_data_file_is_a_parse_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = JsonStore::new(temp_dir.path().to_path_buf());
    tokio::fs::write(store.data_path("books"), "[1, 2")
        .await
        .expect("Failed to seed data file");

    assert!(store.load("books").await.is_err());
}

#[tokio::test]
async fn collections_save_to_separate_files() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = JsonStore::new(temp_dir.path().to_path_buf());
    store
        .save("books", &elements(&[book("a1", "Dune", "Herbert")]))
        .await
        .expect("save books");
    store
        .save("authors", &elements(&[book("h1", "", "Frank Herbert")]))
        .await
        .expect("save authors");

    assert!(store.data_path("books").exists());
    assert!(store.data_path("authors").exists());
    let books = store.load("books").await.expect("load books");
    assert!(books.contains_key("a1"));
    assert!(!books.contains_key("h1"));
}
