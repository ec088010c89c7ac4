mod config;
pub use config::Options;

mod entity;
pub use entity::{Entity, Mapped};

pub mod mapper;
pub use mapper::{
    CodeMapper, Coded, ConstantMapper, CustomMapper, DateTimeMapper, Direct, DirectMapper,
    FieldMapper,
};

pub mod registry;
pub use registry::{mapper_for, Builder, Mappers, Registry};

pub use docmap_core::{
    bail, coerce, compatible, document, err, reflect, Accessor, AccessorResolver, Class, DateRange,
    Document, DocumentExt, Error, MemoryDocument, Primitive, RepairPolicy, Result, Type, Value,
};
