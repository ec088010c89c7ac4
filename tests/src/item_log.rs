use crate::DocOp;
use docmap::Value;
use std::sync::{Arc, Mutex};

/// A wrapper around the operations log that provides a clean API for tests
pub struct ItemLog {
    ops: Arc<Mutex<Vec<DocOp>>>,
}

impl ItemLog {
    pub(crate) fn new(ops: Arc<Mutex<Vec<DocOp>>>) -> Self {
        Self { ops }
    }

    /// Get the number of logged operations
    pub fn len(&self) -> usize {
        self.ops.lock().unwrap().len()
    }

    /// Check if the log is empty
    pub fn is_empty(&self) -> bool {
        self.ops.lock().unwrap().is_empty()
    }

    /// Count operations matching the given predicate
    pub fn count<F>(&self, predicate: F) -> usize
    where
        F: Fn(&DocOp) -> bool,
    {
        self.ops.lock().unwrap().iter().filter(|op| predicate(op)).count()
    }

    /// Names of the items read, in order
    pub fn reads(&self) -> Vec<String> {
        self.ops
            .lock()
            .unwrap()
            .iter()
            .filter_map(|op| match op {
                DocOp::Read(name) => Some(name.clone()),
                _ => None,
            })
            .collect()
    }

    /// Items written and their values, in order
    pub fn writes(&self) -> Vec<(String, Value)> {
        self.ops
            .lock()
            .unwrap()
            .iter()
            .filter_map(|op| match op {
                DocOp::Write(name, value) => Some((name.clone(), value.clone())),
                _ => None,
            })
            .collect()
    }

    /// Check if any item was written
    pub fn has_write(&self) -> bool {
        self.count(|op| matches!(op, DocOp::Write(..))) > 0
    }

    /// Clear the log
    pub fn clear(&mut self) {
        self.ops.lock().unwrap().clear();
    }
}
