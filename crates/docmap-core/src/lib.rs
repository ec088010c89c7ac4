pub mod coerce;
pub use coerce::RepairPolicy;

pub mod document;
pub use document::{Document, DocumentExt, MemoryDocument};

mod error;
pub use error::{Error, IntoError, ItemOp};

pub mod reflect;
pub use reflect::{Accessor, AccessorResolver, Class};

mod ty;
pub use ty::{compatible, Primitive, Type};

mod value;
pub use value::{DateRange, Value};

/// A Result type alias that uses docmap's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
