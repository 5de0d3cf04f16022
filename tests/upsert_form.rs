mod common;

use common::{book, book_properties};

use recordesk::ui::mvi::Reducer;
use recordesk::ui::upsert::{
    assemble_record, form_fields, FormIntent, FormReducer, FormState,
};
use serde_json::json;

fn loaded(inserting: bool, initial: Option<&recordesk::store::Record>) -> FormState {
    FormReducer::reduce(
        FormState::Hidden,
        FormIntent::Load {
            fields: form_fields(&book_properties(), initial),
            inserting,
        },
    )
}

#[test]
fn insert_form_starts_blank() {
    let state = loaded(true, None);
    let fields = state.fields().unwrap();
    assert_eq!(fields.len(), 2);
    assert!(fields.iter().all(|f| f.value.is_empty()));
}

#[test]
fn update_form_is_prepopulated_with_the_element() {
    let element = book("a1", "Dune", "Herbert");
    let state = loaded(false, Some(&element));
    let fields = state.fields().unwrap();
    assert_eq!(fields[0].value, "Dune");
    assert_eq!(fields[1].value, "Herbert");
}

#[test]
fn typing_edits_only_the_focused_field() {
    let state = loaded(true, None);
    let state = FormReducer::reduce(state, FormIntent::FocusNext);
    let state = FormReducer::reduce(state, FormIntent::Input('L'));
    let fields = state.fields().unwrap().to_vec();
    assert_eq!(fields[0].value, "");
    assert_eq!(fields[1].value, "L");
}

#[test]
fn submitted_record_omits_blank_fields_and_types_scalars() {
    let properties = vec![
        "title".to_string(),
        "year".to_string(),
        "notes".to_string(),
    ];
    let state = FormReducer::reduce(
        FormState::Hidden,
        FormIntent::Load {
            fields: form_fields(&properties, None),
            inserting: true,
        },
    );
    let state = "Dune"
        .chars()
        .fold(state, |s, ch| FormReducer::reduce(s, FormIntent::Input(ch)));
    let state = FormReducer::reduce(state, FormIntent::FocusNext);
    let state = "1965"
        .chars()
        .fold(state, |s, ch| FormReducer::reduce(s, FormIntent::Input(ch)));

    let record = assemble_record(state.fields().unwrap());
    assert_eq!(record.get("title"), Some(&json!("Dune")));
    assert_eq!(record.get("year"), Some(&json!(1965)));
    assert!(record.get("notes").is_none());
    assert!(record.get("_id").is_none());
}

#[test]
fn close_hides_the_form() {
    let state = loaded(true, None);
    let state = FormReducer::reduce(state, FormIntent::Close);
    assert!(!state.is_visible());
}
