use super::Error;
use crate::Type;

/// Error when no accessible method matches a member name and signature.
///
/// Raised while a mapper is being built, never while mapping a document.
#[derive(Debug)]
pub(super) struct MethodNotFoundError {
    class: Box<str>,
    member: Box<str>,
    signature: Box<[Type]>,
}

impl std::error::Error for MethodNotFoundError {}

impl core::fmt::Display for MethodNotFoundError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "method not found: `{}.{}(", self.class, self.member)?;
        for (i, ty) in self.signature.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{ty}")?;
        }
        f.write_str(")`")
    }
}

impl Error {
    /// Creates a method-not-found error.
    ///
    /// `class` is the class the lookup started from, `signature` the expected
    /// parameter types.
    pub fn method_not_found(
        class: impl Into<String>,
        member: impl Into<String>,
        signature: &[Type],
    ) -> Error {
        Error::from(super::ErrorKind::MethodNotFound(MethodNotFoundError {
            class: class.into().into(),
            member: member.into().into(),
            signature: signature.into(),
        }))
    }

    /// Returns `true` if this error is a method-not-found error.
    pub fn is_method_not_found(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::MethodNotFound(_))
    }
}
