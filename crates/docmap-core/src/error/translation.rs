use super::Error;
use crate::Value;

/// Error when a stored value has no counterpart in a closed set of values.
#[derive(Debug)]
pub(super) struct TranslationError {
    value: Value,
    target: Box<str>,
}

impl std::error::Error for TranslationError {}

impl core::fmt::Display for TranslationError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "cannot translate {} to `{}`", self.value, self.target)
    }
}

impl Error {
    /// Creates a translation error.
    ///
    /// Custom mappers raise this when a stored code does not match any member
    /// of the target enumeration.
    pub fn translation(value: Value, target: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Translation(TranslationError {
            value,
            target: target.into().into(),
        }))
    }

    /// Returns `true` if this error is a translation error.
    pub fn is_translation(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Translation(_))
    }
}
