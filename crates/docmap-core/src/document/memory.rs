use super::{Document, StoreError};
use crate::Value;
use indexmap::IndexMap;

const MAX_ITEM_NAME_LEN: usize = 250;

/// An in-memory document.
///
/// Behaves like a store-backed document: item names are case-insensitive and
/// validated, lists cannot hold null or nested entries and must hold a single
/// kind of value. Documents read from a real store may still carry null list
/// entries; [`MemoryDocument::with_raw_item`] seeds such values.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    universal_id: Option<String>,

    /// Items keyed by lower-cased name, in insertion order.
    items: IndexMap<String, Item>,

    /// Simulates an unreachable store: every access fails.
    offline: bool,
}

#[derive(Debug, Clone)]
struct Item {
    name: String,
    values: Vec<Value>,
}

/// Failures reported by [`MemoryDocument`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemoryStoreError {
    InvalidItemName(String),
    NullValue,
    NullInList { index: usize },
    NestedList,
    MixedList,
    Unavailable,
}

impl std::error::Error for MemoryStoreError {}

impl core::fmt::Display for MemoryStoreError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            Self::InvalidItemName(name) => write!(f, "invalid item name {name:?}"),
            Self::NullValue => f.write_str("item value cannot be null"),
            Self::NullInList { index } => write!(f, "list entry {index} is null"),
            Self::NestedList => f.write_str("list entries cannot be lists"),
            Self::MixedList => f.write_str("list entries must be of one kind"),
            Self::Unavailable => f.write_str("document store is unavailable"),
        }
    }
}

#[derive(Clone, Copy, PartialEq)]
enum Kind {
    Text,
    Number,
    DateTime,
    DateRange,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an item through the store's write path.
    ///
    /// # Panics
    ///
    /// Panics if the store rejects the item.
    #[track_caller]
    pub fn with_item(mut self, name: &str, value: impl Into<Value>) -> Self {
        if let Err(err) = self.replace_item_value(name, value.into()) {
            panic!("cannot add item `{name}`: {err}");
        }
        self
    }

    /// Adds an item exactly as given, bypassing the store's checks.
    ///
    /// Used to reproduce documents written by older versions of an
    /// application, whose lists may hold nulls.
    pub fn with_raw_item(mut self, name: &str, values: Vec<Value>) -> Self {
        self.items.insert(
            name.to_lowercase(),
            Item {
                name: name.to_string(),
                values,
            },
        );
        self
    }

    /// Assigns a universal id on first save and returns it.
    pub fn save(&mut self) -> &str {
        self.universal_id
            .get_or_insert_with(|| uuid::Uuid::new_v4().simple().to_string().to_uppercase())
    }

    pub fn set_offline(&mut self, offline: bool) {
        self.offline = offline;
    }

    /// Names of the items in insertion order, as first written.
    pub fn item_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.items.values().map(|item| &*item.name)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn check(&self, name: &str) -> Result<String, MemoryStoreError> {
        if self.offline {
            return Err(MemoryStoreError::Unavailable);
        }

        if name.trim().is_empty()
            || name.len() > MAX_ITEM_NAME_LEN
            || name.chars().any(char::is_control)
        {
            return Err(MemoryStoreError::InvalidItemName(name.to_string()));
        }

        Ok(name.to_lowercase())
    }

    fn kind_of(value: &Value) -> Result<Kind, MemoryStoreError> {
        Ok(match value {
            Value::Null => return Err(MemoryStoreError::NullValue),
            Value::List(_) => return Err(MemoryStoreError::NestedList),
            Value::String(_) | Value::Char(_) => Kind::Text,
            Value::DateTime(_) => Kind::DateTime,
            Value::DateRange(_) => Kind::DateRange,
            _ => Kind::Number,
        })
    }

    fn check_value(value: Value) -> Result<Vec<Value>, MemoryStoreError> {
        match value {
            Value::List(items) => {
                let mut kind = None;
                for (index, item) in items.iter().enumerate() {
                    let item_kind = match Self::kind_of(item) {
                        Err(MemoryStoreError::NullValue) => {
                            return Err(MemoryStoreError::NullInList { index })
                        }
                        other => other?,
                    };
                    if *kind.get_or_insert(item_kind) != item_kind {
                        return Err(MemoryStoreError::MixedList);
                    }
                }
                Ok(items)
            }
            value => {
                Self::kind_of(&value)?;
                Ok(vec![value])
            }
        }
    }
}

impl Document for MemoryDocument {
    fn universal_id(&self) -> Option<&str> {
        self.universal_id.as_deref()
    }

    fn has_item(&self, name: &str) -> bool {
        self.items.contains_key(&name.to_lowercase())
    }

    fn item_value(&self, name: &str) -> Result<Vec<Value>, StoreError> {
        let key = self.check(name)?;
        Ok(self
            .items
            .get(&key)
            .map(|item| item.values.clone())
            .unwrap_or_default())
    }

    fn replace_item_value(&mut self, name: &str, value: Value) -> Result<(), StoreError> {
        let key = self.check(name)?;
        let values = Self::check_value(value)?;

        match self.items.get_mut(&key) {
            Some(item) => item.values = values,
            None => {
                self.items.insert(
                    key,
                    Item {
                        name: name.to_string(),
                        values,
                    },
                );
            }
        }
        Ok(())
    }

    fn remove_item(&mut self, name: &str) -> Result<(), StoreError> {
        let key = self.check(name)?;
        self.items.shift_remove(&key);
        Ok(())
    }
}
