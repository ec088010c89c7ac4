use super::Registry;
use crate::{
    err, AccessorResolver, Class, ConstantMapper, Direct, Entity, Error, FieldMapper, Mapped,
    Options, RepairPolicy, Result, Value,
};
use indexmap::IndexMap;
use tracing::debug;

/// Collects the mapping declarations of a business type.
///
/// Declarations are resolved and verified by [`Builder::build`]. Any
/// mismatch with the type's accessor table fails the whole build.
pub struct Builder<T: Mapped> {
    fields: Vec<Declaration<T>>,
    digest_fields: Vec<Declaration<T::Digest>>,
}

enum Declaration<U> {
    Direct(Direct),
    Constant(ConstantMapper),
    Mapper(Box<dyn FieldMapper<U>>),
}

/// Used to track state while resolving the declarations of one class
struct BuildMappers<'a, U> {
    class: &'a Class<U>,

    resolver: AccessorResolver,

    repair: &'a RepairPolicy,

    /// Owned item names, lowercased, and the position of the owning mapper
    items: IndexMap<String, usize>,

    mappers: Vec<Box<dyn FieldMapper<U>>>,
}

impl<T: Mapped> Builder<T> {
    pub fn new() -> Self {
        Self {
            fields: vec![],
            digest_fields: vec![],
        }
    }

    /// Maps an item to an attribute through its getter and setter.
    pub fn direct(&mut self, direct: Direct) -> &mut Self {
        self.fields.push(Declaration::Direct(direct));
        self
    }

    /// Writes a fixed value to an item.
    pub fn constant(&mut self, item: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.fields
            .push(Declaration::Constant(ConstantMapper::new(item, value)));
        self
    }

    /// Adds a prebuilt field mapper.
    pub fn mapper(&mut self, mapper: impl FieldMapper<T> + 'static) -> &mut Self {
        self.fields.push(Declaration::Mapper(Box::new(mapper)));
        self
    }

    /// Maps an item to an attribute of the digest.
    pub fn digest_direct(&mut self, direct: Direct) -> &mut Self {
        self.digest_fields.push(Declaration::Direct(direct));
        self
    }

    /// Adds a prebuilt field mapper to the digest.
    pub fn digest_mapper(&mut self, mapper: impl FieldMapper<T::Digest> + 'static) -> &mut Self {
        self.digest_fields.push(Declaration::Mapper(Box::new(mapper)));
        self
    }

    pub fn build(self, options: &Options) -> Result<Registry<T>> {
        let class = T::class();
        let digest_class = <T::Digest as Entity>::class();
        let repair = options.repair_policy();
        let resolver = options.resolver();

        let mappers = BuildMappers::new(&class, resolver, &repair)
            .build(self.fields)
            .map_err(|e| e.context(err!("building mapper for `{}`", class.name())))?;

        let digest_mappers = BuildMappers::new(&digest_class, resolver, &repair)
            .build(self.digest_fields)
            .map_err(|e| e.context(err!("building digest mapper for `{}`", class.name())))?;

        debug!(
            class = class.name(),
            digest = digest_class.name(),
            mappers = mappers.len(),
            digest_mappers = digest_mappers.len(),
            "built mapper registry"
        );

        Ok(Registry {
            class,
            mappers,
            digest_class,
            digest_mappers,
        })
    }
}

impl<T: Mapped> Default for Builder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, U: 'static> BuildMappers<'a, U> {
    fn new(class: &'a Class<U>, resolver: AccessorResolver, repair: &'a RepairPolicy) -> Self {
        Self {
            class,
            resolver,
            repair,
            items: IndexMap::new(),
            mappers: vec![],
        }
    }

    fn build(mut self, fields: Vec<Declaration<U>>) -> Result<Vec<Box<dyn FieldMapper<U>>>> {
        for field in fields {
            let mapper: Box<dyn FieldMapper<U>> = match field {
                Declaration::Direct(direct) => {
                    Box::new(direct.resolve(self.class, &self.resolver, self.repair.clone())?)
                }
                Declaration::Constant(constant) => Box::new(self.build_constant(constant)?),
                Declaration::Mapper(mapper) => mapper,
            };
            self.claim_items(&*mapper)?;
            self.mappers.push(mapper);
        }

        Ok(self.mappers)
    }

    fn build_constant(&self, constant: ConstantMapper) -> Result<ConstantMapper> {
        if constant.item().trim().is_empty() {
            return Err(Error::invalid_mapping("constant mapping has an empty item name"));
        }

        if constant.value().is_null() {
            return Err(Error::invalid_mapping(format!(
                "constant mapping of `{}` has a null value",
                constant.item()
            )));
        }

        let value = self.repair.repair_value(constant.value().clone());
        Ok(ConstantMapper::new(constant.item(), value))
    }

    fn claim_items(&mut self, mapper: &dyn FieldMapper<U>) -> Result<()> {
        let position = self.mappers.len();
        for item in mapper.item_names() {
            if let Some(prev) = self.items.insert(item.to_lowercase(), position) {
                return Err(Error::invalid_mapping(format!(
                    "item `{item}` is mapped by both mapper {prev} and mapper {position}"
                )));
            }
        }
        Ok(())
    }
}
