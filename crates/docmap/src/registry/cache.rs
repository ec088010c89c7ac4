use super::Registry;
use crate::{Mapped, Options, Result};
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};
use tracing::debug;

/// A process-wide cache of registries, one per business type.
///
/// A registry is built the first time its type is requested. Concurrent
/// first requests may each build one; the first stored wins and every caller
/// receives that instance. A failed build is not cached.
#[derive(Debug, Default)]
pub struct Mappers {
    options: Options,
    registries: RwLock<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>,
}

/// Returns the registry of `T` from the global cache, built with default
/// [`Options`].
pub fn mapper_for<T: Mapped>() -> Result<Arc<Registry<T>>> {
    static MAPPERS: OnceLock<Mappers> = OnceLock::new();
    MAPPERS.get_or_init(Mappers::default).get::<T>()
}

impl Mappers {
    pub fn new(options: Options) -> Self {
        Self {
            options,
            registries: RwLock::default(),
        }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn get<T: Mapped>(&self) -> Result<Arc<Registry<T>>> {
        if let Some(registry) = self.cached::<T>() {
            return Ok(registry);
        }

        let registry: Arc<dyn Any + Send + Sync> = Arc::new(Registry::<T>::new(&self.options)?);

        let registry = self
            .registries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(TypeId::of::<T>())
            .or_insert(registry)
            .clone();

        debug!(ty = std::any::type_name::<T>(), "cached mapper registry");
        Ok(downcast(registry))
    }

    /// Returns `true` if the registry of `T` has been built.
    pub fn contains<T: Mapped>(&self) -> bool {
        self.registries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(&TypeId::of::<T>())
    }

    pub fn len(&self) -> usize {
        self.registries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn cached<T: Mapped>(&self) -> Option<Arc<Registry<T>>> {
        self.registries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&TypeId::of::<T>())
            .cloned()
            .map(downcast)
    }
}

fn downcast<T: Mapped>(registry: Arc<dyn Any + Send + Sync>) -> Arc<Registry<T>> {
    match registry.downcast::<Registry<T>>() {
        Ok(registry) => registry,
        Err(_) => unreachable!("registries are keyed by their own type id"),
    }
}
