use docmap::{
    Builder, Class, CustomMapper, Direct, Document, DocumentExt, Entity, Mapped, Type, Value,
};

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Person {
    pub first_name: String,
    pub last_name: String,
    pub age: i64,
    pub height: f64,
    pub nicknames: Vec<String>,

    /// Derived from the names by a custom mapper.
    pub full_name: String,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct PersonDigest {
    pub last_name: String,
}

impl Entity for Person {
    fn class() -> Class<Self> {
        Class::builder("Person")
            .getter("getFirstName", Type::String, |p: &Person| {
                Value::from(&p.first_name)
            })
            .setter("setFirstName", Type::String, |p: &mut Person, v| {
                p.first_name = v.try_into()?;
                Ok(())
            })
            .getter("getLastName", Type::String, |p: &Person| {
                Value::from(&p.last_name)
            })
            .setter("setLastName", Type::String, |p: &mut Person, v| {
                p.last_name = v.try_into()?;
                Ok(())
            })
            // Declared wider than the item it is mapped from.
            .getter("getAge", Type::I64, |p: &Person| Value::from(p.age))
            .setter("setAge", Type::I64, |p: &mut Person, v| {
                p.age = v.try_into()?;
                Ok(())
            })
            .getter("getHeight", Type::F64, |p: &Person| Value::from(p.height))
            .setter("setHeight", Type::F64, |p: &mut Person, v| {
                p.height = v.try_into()?;
                Ok(())
            })
            .getter("getNicknames", Type::list(Type::String), |p: &Person| {
                Value::from(p.nicknames.clone())
            })
            .setter("setNicknames", Type::list(Type::String), |p: &mut Person, v| {
                p.nicknames = v.to_vec()?;
                Ok(())
            })
            .build()
    }
}

impl Entity for PersonDigest {
    fn class() -> Class<Self> {
        Class::builder("PersonDigest")
            .getter("getLastName", Type::String, |p: &PersonDigest| {
                Value::from(&p.last_name)
            })
            .setter("setLastName", Type::String, |p: &mut PersonDigest, v| {
                p.last_name = v.try_into()?;
                Ok(())
            })
            .build()
    }
}

impl Mapped for Person {
    type Digest = PersonDigest;

    fn mappings(builder: &mut Builder<Self>) {
        builder
            .direct(Direct::new("FirstName", Type::String).attribute("first_name"))
            .direct(Direct::new("LastName", Type::String).attribute("last_name"))
            .direct(Direct::new("Age", Type::I32))
            .direct(Direct::new("Height", Type::F64))
            .direct(Direct::new("Nicknames", Type::list(Type::String)))
            .constant("Form", "Person")
            .mapper(CustomMapper::new(
                "full name",
                |_: &dyn Document, p: &mut Person| {
                    p.full_name = format!("{} {}", p.first_name, p.last_name)
                        .trim()
                        .to_string();
                    Ok(())
                },
                |p: &Person, doc: &mut dyn Document| {
                    doc.write_item(
                        "FullName",
                        Value::from(format!("{} {}", p.first_name, p.last_name)),
                    )
                },
            ));

        builder.digest_direct(Direct::new("LastName", Type::String).attribute("last_name"));
    }
}
