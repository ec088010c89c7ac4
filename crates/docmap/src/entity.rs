use crate::{Builder, Class};

/// A business type the mapping engine can read and write.
///
/// The accessor table returned by [`Entity::class`] replaces runtime
/// reflection: it lists the getters and setters mappers may bind to.
pub trait Entity: Default + Send + Sync + 'static {
    /// The registered accessor table of this type.
    fn class() -> Class<Self>;
}

/// A business type with a registered set of field mappers.
pub trait Mapped: Entity {
    /// Lightweight summary projection of this type, populated by the
    /// registry's digest mappers.
    type Digest: Entity;

    /// Declares the field mappers, in the order they are applied.
    fn mappings(builder: &mut Builder<Self>);
}
