//! The document store collaborator.
//!
//! A document is a set of named items, each holding a scalar or a list of
//! scalars. The store itself is external; this module defines the surface the
//! mapping engine consumes ([`Document`]) and the error boundary wrapped
//! around it ([`DocumentExt`]).

mod memory;
pub use memory::{MemoryDocument, MemoryStoreError};

use crate::error::ItemOp;
use crate::{coerce, DateRange, Error, Result, Type, Value};
use chrono::NaiveDateTime;

/// A failure reported by the document store.
pub type StoreError = Box<dyn std::error::Error + Send + Sync>;

/// A document record of a multi-valued, loosely typed store.
///
/// Item names are looked up case-insensitively by most stores. Reading an
/// item that does not exist is not an error: the raw reader returns no
/// values and the typed readers return the type's empty value.
pub trait Document {
    /// The store-assigned unique id, `None` until the document is first saved.
    fn universal_id(&self) -> Option<&str>;

    /// Returns `true` if the document holds an item named `name`.
    fn has_item(&self, name: &str) -> bool;

    /// Reads the raw values of an item. Entries may be null for documents
    /// written with fewer values than their schema expects.
    fn item_value(&self, name: &str) -> core::result::Result<Vec<Value>, StoreError>;

    /// Replaces an item with a scalar or a list value.
    fn replace_item_value(
        &mut self,
        name: &str,
        value: Value,
    ) -> core::result::Result<(), StoreError>;

    /// Removes an item. Removing a missing item is a no-op.
    fn remove_item(&mut self, name: &str) -> core::result::Result<(), StoreError>;

    /// Reads the first value of an item as text, `""` when missing.
    fn item_value_string(&self, name: &str) -> core::result::Result<String, StoreError> {
        Ok(first(self.item_value(name)?, &Type::String)?.into_string()?)
    }

    /// Reads the first value of an item as an integer, `0` when missing.
    ///
    /// Floating point values are truncated.
    fn item_value_integer(&self, name: &str) -> core::result::Result<i32, StoreError> {
        Ok(i32::try_from(first(self.item_value(name)?, &Type::I32)?)?)
    }

    /// Reads the first value of an item as a double, `0.0` when missing.
    fn item_value_double(&self, name: &str) -> core::result::Result<f64, StoreError> {
        Ok(f64::try_from(first(self.item_value(name)?, &Type::F64)?)?)
    }

    /// Reads the first value of an item as a date/time.
    fn item_value_date_time(
        &self,
        name: &str,
    ) -> core::result::Result<Option<NaiveDateTime>, StoreError> {
        Ok(first(self.item_value(name)?, &Type::DateTime)?.to_option()?)
    }

    /// Reads the first value of an item as a date/time range.
    fn item_value_date_range(
        &self,
        name: &str,
    ) -> core::result::Result<Option<DateRange>, StoreError> {
        Ok(first(self.item_value(name)?, &Type::DateRange)?.to_option()?)
    }
}

fn first(values: Vec<Value>, ty: &Type) -> Result<Value> {
    let value = values.into_iter().find(|value| !value.is_null());
    match value {
        Some(value) => coerce::cast(value, ty),
        None => Ok(coerce::default_for(ty)),
    }
}

/// Error boundary around a [`Document`].
///
/// Every method wraps the store's failure into an item access [`Error`]
/// carrying the item name and, for writes, the value being written.
pub trait DocumentExt: Document {
    fn read_item(&self, name: &str) -> Result<Vec<Value>> {
        self.item_value(name)
            .map_err(|cause| Error::item_access(ItemOp::Read, name, None, cause))
    }

    fn read_string(&self, name: &str) -> Result<String> {
        self.item_value_string(name)
            .map_err(|cause| Error::item_access(ItemOp::Read, name, None, cause))
    }

    fn read_integer(&self, name: &str) -> Result<i32> {
        self.item_value_integer(name)
            .map_err(|cause| Error::item_access(ItemOp::Read, name, None, cause))
    }

    fn read_double(&self, name: &str) -> Result<f64> {
        self.item_value_double(name)
            .map_err(|cause| Error::item_access(ItemOp::Read, name, None, cause))
    }

    fn read_date_time(&self, name: &str) -> Result<Option<NaiveDateTime>> {
        self.item_value_date_time(name)
            .map_err(|cause| Error::item_access(ItemOp::Read, name, None, cause))
    }

    fn read_date_range(&self, name: &str) -> Result<Option<DateRange>> {
        self.item_value_date_range(name)
            .map_err(|cause| Error::item_access(ItemOp::Read, name, None, cause))
    }

    fn write_item(&mut self, name: &str, value: Value) -> Result<()> {
        // Keep a copy for the error report; the store consumes the value.
        let attempted = value.clone();
        self.replace_item_value(name, value)
            .map_err(|cause| Error::item_access(ItemOp::Write, name, Some(attempted), cause))
    }

    fn remove(&mut self, name: &str) -> Result<()> {
        self.remove_item(name)
            .map_err(|cause| Error::item_access(ItemOp::Remove, name, None, cause))
    }
}

impl<D: Document + ?Sized> DocumentExt for D {}
