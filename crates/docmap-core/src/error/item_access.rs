use super::Error;
use crate::document::StoreError;
use crate::Value;

/// The kind of item access that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemOp {
    Read,
    Write,
    Remove,
}

/// Error raised by the document store while reading or writing an item.
///
/// The store's own error is kept as the source and never surfaces as the
/// top-level error.
#[derive(Debug)]
pub(super) struct ItemAccessError {
    op: ItemOp,
    item: Box<str>,
    value: Option<Value>,
    cause: StoreError,
}

impl std::error::Error for ItemAccessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.cause.as_ref())
    }
}

impl core::fmt::Display for ItemAccessError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let op = match self.op {
            ItemOp::Read => "read",
            ItemOp::Write => "write",
            ItemOp::Remove => "remove",
        };
        write!(f, "failed to {op} item `{}`", self.item)?;
        if let Some(value) = &self.value {
            write!(f, " with value {value}")?;
        }
        write!(f, ": {}", self.cause)?;

        let mut source = self.cause.source();
        while let Some(err) = source {
            write!(f, ": {err}")?;
            source = err.source();
        }
        Ok(())
    }
}

impl Error {
    /// Wraps a document store failure.
    ///
    /// `value` is the value that was being written, if any.
    pub fn item_access(
        op: ItemOp,
        item: impl Into<String>,
        value: Option<Value>,
        cause: StoreError,
    ) -> Error {
        Error::from(super::ErrorKind::ItemAccess(ItemAccessError {
            op,
            item: item.into().into(),
            value,
            cause,
        }))
    }

    /// Returns `true` if this error is a document store failure.
    pub fn is_item_access(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::ItemAccess(_))
    }

    /// Returns the item name of a document store failure.
    pub fn item_name(&self) -> Option<&str> {
        self.chain().find_map(|err| match err.kind() {
            super::ErrorKind::ItemAccess(err) => Some(&*err.item),
            _ => None,
        })
    }
}
