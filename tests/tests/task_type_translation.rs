use docmap::{DocumentExt, MemoryDocument, Value};
use tests::prelude::*;

#[test]
fn code_text_maps_to_the_enum_member() {
    let test = DocTest::new();
    let registry = test.registry::<Task>();

    let doc = test.document_from(MemoryDocument::new().with_item("Type", "4"));
    let task = assert_ok!(registry.load(&doc));

    assert_eq!(task.task_type, Some(TaskType::FollowUp));
}

#[test]
fn unknown_code_raises_a_translation_error() {
    let test = DocTest::new();
    let registry = test.registry::<Task>();

    let doc = test.document_from(
        MemoryDocument::new()
            .with_item("Subject", "Call back")
            .with_item("Type", "99"),
    );
    let err = assert_err!(registry.load(&doc));

    assert!(err.is_mapping());
    assert!(err.root().is_translation());
    assert_eq!(
        err.to_string(),
        "mapping document <new> to Task: cannot translate \"99\" to `TaskType`"
    );
}

#[test]
fn missing_code_leaves_the_type_unset() {
    let test = DocTest::new();
    let registry = test.registry::<Task>();

    let task = assert_ok!(registry.load(&test.document()));
    assert_none!(task.task_type);
}

#[test]
fn enum_member_is_written_as_its_code() {
    let mut test = DocTest::new();
    let registry = test.registry::<Task>();

    let task = Task {
        task_type: Some(TaskType::Meeting),
        ..Task::default()
    };
    let mut doc = test.document();
    assert_ok!(registry.map_to_document(&task, &mut doc));

    assert_eq!(assert_ok!(doc.read_string("Type")), "2");
    assert!(test
        .log()
        .writes()
        .contains(&("Type".to_string(), Value::from("2"))));
}
