use docmap::{DocumentExt, MemoryDocument, Value};
use pretty_assertions::assert_eq;
use tests::prelude::*;

fn ada() -> Person {
    Person {
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        age: 36,
        height: 1.65,
        nicknames: vec!["Enchantress of Numbers".to_string()],
        full_name: String::new(),
    }
}

#[test]
fn person_survives_a_round_trip() {
    let test = DocTest::new();
    let registry = test.registry::<Person>();

    let mut doc = test.document();
    assert_ok!(registry.map_to_document(&ada(), &mut doc));

    let loaded = assert_ok!(registry.load(&doc));
    assert_eq!(
        loaded,
        Person {
            full_name: "Ada Lovelace".to_string(),
            ..ada()
        }
    );
}

#[test]
fn items_are_written_in_declaration_order() {
    let mut test = DocTest::new();
    let registry = test.registry::<Person>();

    let mut doc = test.document();
    assert_ok!(registry.map_to_document(&ada(), &mut doc));

    let names: Vec<_> = test.log().writes().into_iter().map(|(name, _)| name).collect();
    assert_eq!(
        names,
        ["FirstName", "LastName", "Age", "Height", "Nicknames", "Form", "FullName"]
    );
}

#[test]
fn constant_item_is_written_but_never_read() {
    let mut test = DocTest::new();
    let registry = test.registry::<Person>();

    let mut doc = test.document();
    assert_ok!(registry.map_to_document(&Person::default(), &mut doc));
    assert_eq!(assert_ok!(doc.read_string("Form")), "Person");

    let mut log = test.log();
    log.clear();
    assert_ok!(registry.load(&doc));
    assert!(!log.reads().iter().any(|name| name == "Form"));
}

#[test]
fn double_item_is_truncated_into_an_integer_attribute() {
    let test = DocTest::new();
    let registry = test.registry::<Person>();

    let doc = test.document_from(MemoryDocument::new().with_item("Age", 41.9));
    assert_eq!(assert_ok!(registry.load(&doc)).age, 41);
}

#[test]
fn wider_setter_receives_a_widened_value() {
    let test = DocTest::new();
    let registry = test.registry::<Person>();

    let doc = test.document_from(MemoryDocument::new().with_item("Age", 29));
    assert_eq!(assert_ok!(registry.load(&doc)).age, 29);
}

#[test]
fn typed_readers_see_what_the_mapper_wrote() {
    let test = DocTest::new();
    let registry = test.registry::<Person>();

    let mut doc = test.document();
    assert_ok!(registry.map_to_document(&ada(), &mut doc));

    assert_eq!(assert_ok!(doc.read_string("firstname")), "Ada");
    assert_eq!(assert_ok!(doc.read_integer("Age")), 36);
    assert_eq!(assert_ok!(doc.read_double("Height")), 1.65);
    assert_eq!(assert_ok!(doc.read_string("FullName")), "Ada Lovelace");
    assert_eq!(
        assert_ok!(doc.read_item("Nicknames")),
        [Value::from("Enchantress of Numbers")]
    );
}
