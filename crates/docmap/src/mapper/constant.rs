use super::FieldMapper;
use crate::{Document, DocumentExt, Result, Value};

/// Writes a fixed value to an item every time an object is mapped to a
/// document. The reverse direction does nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstantMapper {
    item: String,
    value: Value,
}

impl ConstantMapper {
    pub fn new(item: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            item: item.into(),
            value: value.into(),
        }
    }

    pub fn item(&self) -> &str {
        &self.item
    }

    pub fn value(&self) -> &Value {
        &self.value
    }
}

impl<T> FieldMapper<T> for ConstantMapper {
    fn item_names(&self) -> Vec<&str> {
        vec![&self.item]
    }

    fn map_to_object(&self, _doc: &dyn Document, _target: &mut T) -> Result<()> {
        Ok(())
    }

    fn map_to_document(&self, _source: &T, doc: &mut dyn Document) -> Result<()> {
        doc.write_item(&self.item, self.value.clone())
    }
}
