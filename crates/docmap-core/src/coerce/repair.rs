use crate::Value;
use chrono::NaiveDateTime;
use tracing::trace;

/// Replaces null entries of multi-value lists.
///
/// The document store cannot hold null inside a list, yet historical
/// documents often have fewer populated values than the attribute expects.
/// Every list is repaired before it reaches a setter or a document item.
///
/// The replacement is chosen from the first non-null entry: zero of the same
/// numeric kind, the sentinel date/time for date/times, empty text otherwise
/// (including lists holding only nulls).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepairPolicy {
    /// Replacement for null entries of date/time lists.
    pub default_date_time: NaiveDateTime,
}

impl RepairPolicy {
    pub fn new(default_date_time: NaiveDateTime) -> Self {
        Self { default_date_time }
    }

    /// The value null entries of `items` are replaced with.
    pub fn default_for(&self, items: &[Value]) -> Value {
        match items.iter().find(|item| !item.is_null()) {
            Some(Value::DateTime(_)) => Value::DateTime(self.default_date_time),
            Some(item) if item.is_numeric() => match item.primitive() {
                Some(primitive) => primitive.zero(),
                None => Value::String(String::new()),
            },
            _ => Value::String(String::new()),
        }
    }

    /// Returns a copy of `items` with every null entry replaced.
    pub fn repair(&self, items: &[Value]) -> Vec<Value> {
        let nulls = items.iter().filter(|item| item.is_null()).count();
        if nulls == 0 {
            return items.to_vec();
        }

        let default = self.default_for(items);
        trace!(len = items.len(), nulls, replacement = %default, "repairing list");

        items
            .iter()
            .map(|item| match item {
                Value::Null => default.clone(),
                item => item.clone(),
            })
            .collect()
    }

    /// Repairs a list value. Any other value is returned unchanged.
    pub fn repair_value(&self, value: Value) -> Value {
        match value {
            Value::List(items) => Value::List(self.repair(&items)),
            value => value,
        }
    }
}

impl Default for RepairPolicy {
    fn default() -> Self {
        // 1970-01-01T00:00:00
        Self::new(NaiveDateTime::default())
    }
}
