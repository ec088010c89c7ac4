use super::FieldMapper;
use crate::{Document, Result};
use std::sync::Arc;

type ToObjectFn<T> = Arc<dyn Fn(&dyn Document, &mut T) -> Result<()> + Send + Sync>;
type ToDocumentFn<T> = Arc<dyn Fn(&T, &mut dyn Document) -> Result<()> + Send + Sync>;

/// A field mapper built from a pair of closures.
///
/// Custom mappers run in declaration order with the others, so they may rely
/// on attributes set by earlier mappers. They do not claim any item.
///
/// Closures should go through [`DocumentExt`](crate::DocumentExt) to access
/// items so store failures are reported like any other mapper's.
pub struct CustomMapper<T> {
    name: String,
    to_object: ToObjectFn<T>,
    to_document: ToDocumentFn<T>,
}

impl<T> CustomMapper<T> {
    pub fn new<O, D>(name: impl Into<String>, to_object: O, to_document: D) -> Self
    where
        O: Fn(&dyn Document, &mut T) -> Result<()> + Send + Sync + 'static,
        D: Fn(&T, &mut dyn Document) -> Result<()> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            to_object: Arc::new(to_object),
            to_document: Arc::new(to_document),
        }
    }

    /// A mapper that only reads from documents.
    pub fn reader<O>(name: impl Into<String>, to_object: O) -> Self
    where
        O: Fn(&dyn Document, &mut T) -> Result<()> + Send + Sync + 'static,
    {
        Self::new(name, to_object, |_, _| Ok(()))
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<T> FieldMapper<T> for CustomMapper<T> {
    fn map_to_object(&self, doc: &dyn Document, target: &mut T) -> Result<()> {
        (self.to_object)(doc, target)
    }

    fn map_to_document(&self, source: &T, doc: &mut dyn Document) -> Result<()> {
        (self.to_document)(source, doc)
    }
}

impl<T> Clone for CustomMapper<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            to_object: self.to_object.clone(),
            to_document: self.to_document.clone(),
        }
    }
}

impl<T> core::fmt::Debug for CustomMapper<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("CustomMapper")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
