use docmap::document::StoreError;
use docmap::{Document, MemoryDocument, Value};
use std::sync::{Arc, Mutex};

/// A document operation recorded by [`LoggingDocument`].
#[derive(Debug, Clone, PartialEq)]
pub enum DocOp {
    Read(String),
    Write(String, Value),
    Remove(String),
}

/// A document wrapper that logs every item access for testing purposes
#[derive(Debug)]
pub struct LoggingDocument {
    /// The underlying document that actually stores items
    inner: MemoryDocument,

    /// Log of all operations executed through this document
    /// Using Arc<Mutex> so the test can keep a handle while a mapper holds
    /// the document
    ops_log: Arc<Mutex<Vec<DocOp>>>,
}

impl LoggingDocument {
    pub fn new(inner: MemoryDocument, ops_log: Arc<Mutex<Vec<DocOp>>>) -> Self {
        Self { inner, ops_log }
    }

    pub fn inner(&self) -> &MemoryDocument {
        &self.inner
    }

    pub fn inner_mut(&mut self) -> &mut MemoryDocument {
        &mut self.inner
    }

    fn record(&self, op: DocOp) {
        self.ops_log.lock().unwrap().push(op);
    }
}

impl Document for LoggingDocument {
    fn universal_id(&self) -> Option<&str> {
        self.inner.universal_id()
    }

    fn has_item(&self, name: &str) -> bool {
        self.inner.has_item(name)
    }

    fn item_value(&self, name: &str) -> Result<Vec<Value>, StoreError> {
        self.record(DocOp::Read(name.to_string()));
        self.inner.item_value(name)
    }

    fn replace_item_value(&mut self, name: &str, value: Value) -> Result<(), StoreError> {
        self.record(DocOp::Write(name.to_string(), value.clone()));
        self.inner.replace_item_value(name, value)
    }

    fn remove_item(&mut self, name: &str) -> Result<(), StoreError> {
        self.record(DocOp::Remove(name.to_string()));
        self.inner.remove_item(name)
    }
}
