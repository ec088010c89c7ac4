use docmap::{Document, MemoryDocument, Value};
use pretty_assertions::assert_eq;
use tests::prelude::*;

#[test]
fn null_entries_become_empty_text() {
    let test = DocTest::new();
    let registry = test.registry::<Task>();

    let doc = test.document_from(MemoryDocument::new().with_raw_item(
        "Assignees",
        vec![Value::from("Test1"), Value::Null, Value::from("Test2")],
    ));
    let task = assert_ok!(registry.load(&doc));

    assert_eq!(task.assignees, ["Test1", "", "Test2"]);
}

#[test]
fn list_of_only_nulls_becomes_empty_texts() {
    let test = DocTest::new();
    let registry = test.registry::<Person>();

    let doc = test.document_from(
        MemoryDocument::new().with_raw_item("Nicknames", vec![Value::Null, Value::Null]),
    );
    let person = assert_ok!(registry.load(&doc));

    assert_eq!(person.nicknames, ["", ""]);
}

#[test]
fn repaired_list_can_be_written_back() {
    let test = DocTest::new();
    let registry = test.registry::<Task>();

    let source = test.document_from(MemoryDocument::new().with_raw_item(
        "Assignees",
        vec![Value::Null, Value::from("Ann")],
    ));
    let task = assert_ok!(registry.load(&source));

    let mut target = test.document();
    assert_ok!(registry.map_to_document(&task, &mut target));
    assert_eq!(
        assert_ok!(target.item_value("Assignees")),
        [Value::from(""), Value::from("Ann")]
    );
}

#[test]
fn single_value_item_reads_as_one_entry_list() {
    let test = DocTest::new();
    let registry = test.registry::<Task>();

    let doc = test.document_from(MemoryDocument::new().with_item("Assignees", "Bob"));
    let task = assert_ok!(registry.load(&doc));

    assert_eq!(task.assignees, ["Bob"]);
}
