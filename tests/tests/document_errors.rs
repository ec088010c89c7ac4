use docmap::{DocumentExt, MemoryDocument};
use tests::prelude::*;

#[test]
fn store_failure_on_read_names_the_item() {
    let test = DocTest::new();
    let registry = test.registry::<Person>();

    let mut doc = test.document_from(MemoryDocument::new().with_item("FirstName", "Ada"));
    doc.inner_mut().set_offline(true);

    let err = assert_err!(registry.load(&doc));
    assert!(err.is_mapping());
    assert_eq!(err.item_name(), Some("FirstName"));
    assert_eq!(
        err.to_string(),
        "mapping document <new> to Person: failed to read item `FirstName`: document store is \
         unavailable"
    );
}

#[test]
fn store_failure_on_write_carries_the_value() {
    let test = DocTest::new();
    let registry = test.registry::<Person>();

    let person = Person {
        first_name: "Ada".to_string(),
        ..Person::default()
    };
    let mut doc = test.document();
    doc.inner_mut().set_offline(true);

    let err = assert_err!(registry.map_to_document(&person, &mut doc));
    assert_eq!(
        err.to_string(),
        "mapping Person to document <new>: failed to write item `FirstName` with value \"Ada\": \
         document store is unavailable"
    );
    assert!(std::error::Error::source(err.root()).is_some());
}

#[test]
fn saved_document_is_named_by_its_id() {
    let test = DocTest::new();
    let registry = test.registry::<Person>();

    let mut inner = MemoryDocument::new().with_item("Age", "unknown");
    let unid = inner.save().to_string();
    let doc = test.document_from(inner);

    let err = assert_err!(registry.load(&doc));
    assert_eq!(
        err.to_string(),
        format!(
            "mapping document {unid} to Person: reading item `Age`: cannot convert text \
             \"unknown\" to i32"
        )
    );
}

#[test]
fn registry_stays_usable_after_a_failure() {
    let test = DocTest::new();
    let registry = test.registry::<Person>();

    let bad = test.document_from(MemoryDocument::new().with_item("Height", "tall"));
    assert_err!(registry.load(&bad));

    let good = test.document_from(MemoryDocument::new().with_item("Height", 1.8));
    assert_eq!(assert_ok!(registry.load(&good)).height, 1.8);
}

#[test]
fn invalid_item_name_is_reported_by_the_store() {
    let test = DocTest::new();

    let mut doc = test.document();
    let err = assert_err!(doc.write_item("Bad\nName", "x".into()));
    assert!(err.is_item_access());
    assert!(err.is_mapping());
}
