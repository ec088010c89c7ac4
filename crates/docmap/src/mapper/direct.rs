use super::FieldMapper;
use crate::{
    coerce, compatible, err, Accessor, AccessorResolver, Class, Document, DocumentExt, Error,
    RepairPolicy, Result, Type, Value,
};
use heck::ToUpperCamelCase;

/// Declares a one-to-one mapping between a document item and an attribute.
///
/// The attribute defaults to the item name. Accessor names are derived from
/// the attribute: `getName`/`setName`, or `isName` for boolean getters.
///
/// ```
/// # use docmap::{Direct, Type};
/// let direct = Direct::new("Subject", Type::String).attribute("title");
/// assert_eq!(direct.getter_name(), "getTitle");
/// assert_eq!(direct.setter_name(), "setTitle");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Direct {
    item: String,
    attribute: String,
    ty: Type,
    getter: Option<String>,
    setter: Option<String>,
}

/// A [`Direct`] declaration bound to the accessors of one class.
pub struct DirectMapper<T> {
    item: String,
    ty: Type,
    getter: Accessor<T>,
    setter: Accessor<T>,
    repair: RepairPolicy,
}

impl Direct {
    pub fn new(item: impl Into<String>, ty: Type) -> Self {
        let item = item.into();
        Self {
            attribute: item.clone(),
            item,
            ty,
            getter: None,
            setter: None,
        }
    }

    /// Maps the item to an attribute with a different name.
    pub fn attribute(mut self, name: impl Into<String>) -> Self {
        self.attribute = name.into();
        self
    }

    /// Overrides the derived getter name.
    pub fn getter(mut self, name: impl Into<String>) -> Self {
        self.getter = Some(name.into());
        self
    }

    /// Overrides the derived setter name.
    pub fn setter(mut self, name: impl Into<String>) -> Self {
        self.setter = Some(name.into());
        self
    }

    pub fn item(&self) -> &str {
        &self.item
    }

    pub fn ty(&self) -> &Type {
        &self.ty
    }

    pub fn getter_name(&self) -> String {
        match &self.getter {
            Some(name) => name.clone(),
            None if self.ty.is_bool() => format!("is{}", self.attribute.to_upper_camel_case()),
            None => format!("get{}", self.attribute.to_upper_camel_case()),
        }
    }

    pub fn setter_name(&self) -> String {
        match &self.setter {
            Some(name) => name.clone(),
            None => format!("set{}", self.attribute.to_upper_camel_case()),
        }
    }

    /// Binds the declaration to the accessors of `class`.
    ///
    /// The getter's return type must be convertible to the item type in one
    /// direction or the other; numeric types may narrow.
    pub fn resolve<T>(
        self,
        class: &Class<T>,
        resolver: &AccessorResolver,
        repair: RepairPolicy,
    ) -> Result<DirectMapper<T>> {
        if self.item.trim().is_empty() {
            return Err(Error::invalid_mapping(format!(
                "direct mapping of `{}` has an empty item name",
                self.attribute
            )));
        }

        let getter = resolver.getter(class, &self.getter_name())?;
        if let Some(ret) = getter.ret() {
            if !compatible(&self.ty, Some(ret)) && !compatible(ret, Some(&self.ty)) {
                return Err(Error::invalid_mapping(format!(
                    "getter `{}.{}` returns {ret}, which cannot be stored in item `{}` of type {}",
                    getter.declaring_class(),
                    getter.name(),
                    self.item,
                    self.ty
                )));
            }
        }

        let setter = resolver.setter(class, &self.setter_name(), &self.ty)?;

        Ok(DirectMapper {
            item: self.item,
            ty: self.ty,
            getter,
            setter,
            repair,
        })
    }
}

impl<T> DirectMapper<T> {
    pub fn item(&self) -> &str {
        &self.item
    }

    pub fn ty(&self) -> &Type {
        &self.ty
    }

    pub fn getter(&self) -> &Accessor<T> {
        &self.getter
    }

    pub fn setter(&self) -> &Accessor<T> {
        &self.setter
    }
}

impl<T> FieldMapper<T> for DirectMapper<T> {
    fn item_names(&self) -> Vec<&str> {
        vec![&self.item]
    }

    fn map_to_object(&self, doc: &dyn Document, target: &mut T) -> Result<()> {
        let values = doc.read_item(&self.item)?;

        let value = coerce::cast(Value::List(values), &self.ty)
            .map_err(|e| e.context(err!("reading item `{}`", self.item)))?;
        let value = self.repair.repair_value(value);

        self.setter.set(target, value)
    }

    fn map_to_document(&self, source: &T, doc: &mut dyn Document) -> Result<()> {
        let value = self.getter.get(source)?;

        // An unset attribute leaves the item untouched.
        if value.is_null() {
            return Ok(());
        }

        doc.write_item(&self.item, self.repair.repair_value(value))
    }
}

impl<T> core::fmt::Debug for DirectMapper<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("DirectMapper")
            .field("item", &self.item)
            .field("ty", &self.ty)
            .field("getter", &self.getter.name())
            .field("setter", &self.setter.name())
            .finish()
    }
}
