mod common;

use common::{book, book_properties, books_store, fetching_books_store};

use recordesk::dispatch::{Action, ActionQueue};
use recordesk::router::{RouteMode, Router};
use recordesk::store::CollectionsState;
use recordesk::ui::collection::{BodyContent, CollectionView, CollectionViewProps};

fn props<'a>(
    collections: &'a CollectionsState,
    router: &'a Router,
    filter: &'a str,
    table_properties: &'a [String],
) -> CollectionViewProps<'a> {
    CollectionViewProps::new(collections, router)
        .with_collection_name("books")
        .with_filter(filter)
        .with_table_properties(table_properties)
}

#[test]
fn empty_filter_returns_all_records() {
    let records = vec![
        book("a1", "Dune", "Herbert"),
        book("b2", "Solaris", "Lem"),
        book("c3", "Neuromancer", "Gibson"),
    ];
    let collections = books_store(&records);
    let router = Router::new();
    let properties = book_properties();
    let view = CollectionView::new(props(&collections, &router, "", &properties));
    assert_eq!(view.elements().len(), 3);
}

#[test]
fn filter_returns_exactly_the_matching_subset() {
    let records = vec![
        book("a1", "Dune", "Herbert"),
        book("b2", "Dune Messiah", "Herbert"),
        book("c3", "Solaris", "Lem"),
    ];
    let collections = books_store(&records);
    let router = Router::new();
    let properties = book_properties();
    let view = CollectionView::new(props(&collections, &router, "dune", &properties));
    let elements = view.elements();
    assert_eq!(elements.len(), 2);
    assert!(elements.iter().all(|r| r.display_value("title").contains("Dune")));
}

#[test]
fn filter_does_not_search_unconfigured_properties() {
    let records = vec![book("a1", "Dune", "Herbert")];
    let collections = books_store(&records);
    let router = Router::new();
    let properties = vec!["author".to_string()];
    let view = CollectionView::new(props(&collections, &router, "dune", &properties));
    assert!(view.elements().is_empty());
}

#[test]
fn columns_end_with_id_without_duplicates() {
    let collections = CollectionsState::default();
    let router = Router::new();
    let properties = vec!["title".to_string(), "_id".to_string(), "title".to_string()];
    let view = CollectionView::new(props(&collections, &router, "", &properties));
    assert_eq!(view.columns(), vec!["title", "_id"]);

    let metadata = view.columns_metadata();
    assert!(metadata.last().unwrap().actions);
    assert_eq!(metadata.last().unwrap().name, "_id");
}

#[test]
fn fetching_store_renders_spinner_not_table() {
    let collections = fetching_books_store();
    let router = Router::new();
    let properties = book_properties();
    let view = CollectionView::new(props(&collections, &router, "", &properties));
    assert_eq!(view.body(), BodyContent::Spinner);
}

#[test]
fn loaded_store_shows_the_single_row() {
    let records = vec![book("a1", "X", "Y")];
    let collections = books_store(&records);
    let router = Router::new();
    let properties = book_properties();
    let view = CollectionView::new(props(&collections, &router, "", &properties));
    assert_eq!(view.body(), BodyContent::Table);
    let elements = view.elements();
    assert_eq!(elements.len(), 1);
    assert_eq!(elements[0].id(), Some("a1"));
}

#[test]
fn upsert_on_insert_route_generates_a_fresh_id() {
    let records = vec![book("a1", "Dune", "Herbert")];
    let collections = books_store(&records);
    let mut router = Router::new();
    router.navigate(RouteMode::Insert, None);
    let properties = book_properties();
    let view = CollectionView::new(props(&collections, &router, "", &properties));

    let mut queue = ActionQueue::new();
    view.handle_upsert(&mut queue, book("ignored", "New", "Author"));
    let actions = queue.drain();
    let Action::Upsert { collection, id, .. } = &actions[0] else {
        panic!("expected an upsert action");
    };
    assert_eq!(collection, "books");
    assert_ne!(id, "a1");
    assert!(view.element(id).is_none());
}

#[test]
fn upsert_on_update_route_reuses_the_routed_id() {
    let records = vec![book("a1", "Dune", "Herbert")];
    let collections = books_store(&records);
    let mut router = Router::new();
    router.navigate(RouteMode::Update, Some("a1".to_string()));
    let properties = book_properties();
    let view = CollectionView::new(props(&collections, &router, "", &properties));

    let mut queue = ActionQueue::new();
    view.handle_upsert(&mut queue, book("a1", "Dune (revised)", "Herbert"));
    assert!(matches!(
        &queue.drain()[0],
        Action::Upsert { collection, id, .. } if collection == "books" && id == "a1"
    ));
}

#[test]
fn upsert_without_a_routed_id_is_a_noop() {
    let collections = books_store(&[]);
    let mut router = Router::new();
    router.navigate(RouteMode::Update, None);
    let properties = book_properties();
    let view = CollectionView::new(props(&collections, &router, "", &properties));

    let mut queue = ActionQueue::new();
    view.handle_upsert(&mut queue, book("x", "X", "Y"));
    assert!(queue.actions().is_empty());
}

#[test]
fn remove_route_confirms_against_the_routed_element() {
    let records = vec![book("a1", "X", "Y")];
    let collections = books_store(&records);
    let mut router = Router::new();
    router.navigate(RouteMode::Remove, Some("a1".to_string()));
    let properties = book_properties();
    let view = CollectionView::new(props(&collections, &router, "", &properties));

    assert_eq!(view.mode(), RouteMode::Remove);
    assert_eq!(view.current_element().and_then(|r| r.id()), Some("a1"));

    let mut queue = ActionQueue::new();
    view.handle_remove(&mut queue);
    assert_eq!(
        queue.drain(),
        vec![Action::Remove {
            collection: "books".to_string(),
            id: "a1".to_string(),
        }]
    );
}

#[test]
fn mount_fetches_the_configured_collection_once() {
    let collections = CollectionsState::default();
    let router = Router::new();
    let view = CollectionView::new(
        CollectionViewProps::new(&collections, &router).with_collection_name("authors"),
    );
    let mut queue = ActionQueue::new();
    view.on_mount(&mut queue);
    assert_eq!(
        queue.drain(),
        vec![Action::Fetch {
            collection: "authors".to_string(),
        }]
    );
}
