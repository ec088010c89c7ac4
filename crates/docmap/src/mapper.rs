//! Field mappers.
//!
//! A field mapper moves one piece of state between a document and a business
//! object, in both directions. Registries hold an ordered list of them and
//! apply each in turn.

mod code;
pub use code::{CodeMapper, Coded};

mod constant;
pub use constant::ConstantMapper;

mod custom;
pub use custom::CustomMapper;

mod date_time;
pub use date_time::DateTimeMapper;

mod direct;
pub use direct::{Direct, DirectMapper};

use crate::{Document, Result};

/// Moves state between a document and an object of type `T`.
///
/// Implementations are built once and shared by every mapping call, so they
/// must not keep per-call state.
pub trait FieldMapper<T>: core::fmt::Debug + Send + Sync {
    /// Names of the document items this mapper owns. Two mappers of one
    /// registry may not own the same item.
    fn item_names(&self) -> Vec<&str> {
        vec![]
    }

    /// Copies state from `doc` into `target`.
    fn map_to_object(&self, doc: &dyn Document, target: &mut T) -> Result<()>;

    /// Copies state from `source` into `doc`.
    fn map_to_document(&self, source: &T, doc: &mut dyn Document) -> Result<()>;
}
