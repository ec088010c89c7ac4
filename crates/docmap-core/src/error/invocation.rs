use super::Error;
use crate::Type;

/// Error when invoking a bound accessor fails.
///
/// The failure itself (bad argument, error returned by the accessor) is
/// carried as the cause.
#[derive(Debug)]
pub(super) struct InvocationError {
    class: Box<str>,
    member: Box<str>,
    param: Option<Type>,
}

impl std::error::Error for InvocationError {}

impl core::fmt::Display for InvocationError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "failed to invoke `{}.{}(", self.class, self.member)?;
        if let Some(param) = &self.param {
            write!(f, "{param}")?;
        }
        f.write_str(")`")
    }
}

impl Error {
    /// Creates an invocation error for `class.member(param)`.
    ///
    /// Attach the underlying failure with [`Error::context`]:
    /// `cause.context(Error::invocation(..))`.
    pub fn invocation(
        class: impl Into<String>,
        member: impl Into<String>,
        param: Option<&Type>,
    ) -> Error {
        Error::from(super::ErrorKind::Invocation(InvocationError {
            class: class.into().into(),
            member: member.into().into(),
            param: param.cloned(),
        }))
    }

    /// Returns `true` if this error is an invocation error.
    pub fn is_invocation(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Invocation(_))
    }
}
