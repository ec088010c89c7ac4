use crate::{AccessorResolver, Error, RepairPolicy, Result};
use chrono::NaiveDateTime;
use serde::Deserialize;

/// Options applied when mapper registries are built.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Replacement for null entries of date/time lists.
    pub default_date_time: NaiveDateTime,

    /// Only bind accessors declared on public types and methods.
    pub strict_accessibility: bool,
}

impl Options {
    /// Parses options from JSON. Missing fields keep their defaults.
    pub fn from_json(src: &str) -> Result<Self> {
        serde_json::from_str(src).map_err(|err| Error::from(anyhow::Error::from(err)))
    }

    pub fn repair_policy(&self) -> RepairPolicy {
        RepairPolicy::new(self.default_date_time)
    }

    pub fn resolver(&self) -> AccessorResolver {
        if self.strict_accessibility {
            AccessorResolver::new()
        } else {
            AccessorResolver::relaxed()
        }
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            default_date_time: RepairPolicy::default().default_date_time,
            strict_accessibility: true,
        }
    }
}
