use docmap::{Builder, Class, Direct, Entity, Mapped, Options, Type, Value};
use tests::prelude::*;

/// Exposes a getter for its subject but no setter.
#[derive(Debug, Default)]
struct Memo {
    subject: String,
}

impl Entity for Memo {
    fn class() -> Class<Self> {
        Class::builder("Memo")
            .getter("getSubject", Type::String, |m: &Memo| Value::from(&m.subject))
            .build()
    }
}

impl Mapped for Memo {
    type Digest = Memo;

    fn mappings(builder: &mut Builder<Self>) {
        builder.direct(Direct::new("Subject", Type::String));
    }
}

/// Only declares its accessors on a package-private class.
#[derive(Debug, Default)]
struct Draft {
    subject: String,
}

impl Entity for Draft {
    fn class() -> Class<Self> {
        Class::builder("Draft")
            .package_private()
            .getter("getSubject", Type::String, |d: &Draft| Value::from(&d.subject))
            .setter("setSubject", Type::String, |d: &mut Draft, v| {
                d.subject = v.try_into()?;
                Ok(())
            })
            .build()
    }
}

impl Mapped for Draft {
    type Digest = Draft;

    fn mappings(builder: &mut Builder<Self>) {
        builder.direct(Direct::new("Subject", Type::String));
    }
}

#[test]
fn missing_setter_fails_at_construction() {
    let test = DocTest::new();

    let err = assert_err!(test.try_registry::<Memo>());
    assert!(err.is_setup());
    assert!(err.root().is_method_not_found());
    assert_eq!(
        err.to_string(),
        "building mapper for `Memo`: method not found: `Memo.setSubject(String)`"
    );
}

#[test]
fn failed_construction_is_retried_not_cached() {
    let test = DocTest::new();

    assert_err!(test.try_registry::<Memo>());
    assert!(!test.mappers().contains::<Memo>());
    assert_err!(test.try_registry::<Memo>());
}

#[test]
fn non_public_class_is_skipped_by_default() {
    let test = DocTest::new();

    let err = assert_err!(test.try_registry::<Draft>());
    assert_eq!(
        err.to_string(),
        "building mapper for `Draft`: method not found: `Draft.getSubject()`"
    );
}

#[test]
fn relaxed_accessibility_binds_non_public_accessors() {
    let options = Options {
        strict_accessibility: false,
        ..Options::default()
    };
    let test = DocTest::with_options(options);

    let registry = test.registry::<Draft>();
    let doc = test.document_from(docmap::MemoryDocument::new().with_item("Subject", "wip"));
    assert_eq!(assert_ok!(registry.load(&doc)).subject, "wip");
}
