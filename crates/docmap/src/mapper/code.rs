use super::FieldMapper;
use crate::{Document, DocumentExt, Error, Result, Value};
use std::sync::Arc;

/// An enumeration stored in documents as a numeric code.
pub trait Coded: Sized + Send + Sync + 'static {
    /// Name used when reporting an unknown code.
    const NAME: &'static str;

    fn code(&self) -> i32;

    fn from_code(code: i32) -> Option<Self>;
}

/// Maps an item holding a numeric code to a [`Coded`] attribute.
///
/// Codes are stored as text. Reading accepts text or numbers; an empty or
/// missing item clears the attribute. A code that is not a whole `i32` or
/// has no matching member is a translation error. Writing a cleared attribute leaves the item untouched.
pub struct CodeMapper<T, E> {
    item: String,
    get: Arc<dyn Fn(&T) -> Option<E> + Send + Sync>,
    set: Arc<dyn Fn(&mut T, Option<E>) + Send + Sync>,
}

impl<T, E: Coded> CodeMapper<T, E> {
    pub fn new<G, S>(item: impl Into<String>, get: G, set: S) -> Self
    where
        G: Fn(&T) -> Option<E> + Send + Sync + 'static,
        S: Fn(&mut T, Option<E>) + Send + Sync + 'static,
    {
        Self {
            item: item.into(),
            get: Arc::new(get),
            set: Arc::new(set),
        }
    }

    pub fn item(&self) -> &str {
        &self.item
    }

    fn translate(value: Value) -> Result<Option<E>> {
        let code = match &value {
            Value::Null => return Ok(None),
            Value::String(text) if text.trim().is_empty() => return Ok(None),
            Value::String(text) => text.trim().parse::<i32>().ok(),
            Value::I8(v) => Some(i32::from(*v)),
            Value::I16(v) => Some(i32::from(*v)),
            Value::I32(v) => Some(*v),
            Value::I64(v) => i32::try_from(*v).ok(),
            Value::F32(v) => whole_code(f64::from(*v)),
            Value::F64(v) => whole_code(*v),
            _ => None,
        };

        match code.and_then(E::from_code) {
            Some(decoded) => Ok(Some(decoded)),
            None => Err(Error::translation(value, E::NAME)),
        }
    }
}

/// A floating point code must be a whole number within `i32`.
fn whole_code(v: f64) -> Option<i32> {
    if v.fract() == 0.0 && v >= f64::from(i32::MIN) && v <= f64::from(i32::MAX) {
        Some(v as i32)
    } else {
        None
    }
}

impl<T, E: Coded> FieldMapper<T> for CodeMapper<T, E> {
    fn item_names(&self) -> Vec<&str> {
        vec![&self.item]
    }

    fn map_to_object(&self, doc: &dyn Document, target: &mut T) -> Result<()> {
        let value = doc
            .read_item(&self.item)?
            .into_iter()
            .find(|value| !value.is_null())
            .unwrap_or_default();

        (self.set)(target, Self::translate(value)?);
        Ok(())
    }

    fn map_to_document(&self, source: &T, doc: &mut dyn Document) -> Result<()> {
        match (self.get)(source) {
            Some(value) => doc.write_item(&self.item, Value::String(value.code().to_string())),
            None => Ok(()),
        }
    }
}

impl<T, E: Coded> core::fmt::Debug for CodeMapper<T, E> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("CodeMapper")
            .field("item", &self.item)
            .field("enum", &E::NAME)
            .finish()
    }
}
