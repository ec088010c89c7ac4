mod builder;
pub use builder::Builder;

mod cache;
pub use cache::{mapper_for, Mappers};

use crate::{err, Class, Document, FieldMapper, Mapped, Options, Result};
use tracing::trace;

/// The ordered field mappers of a business type and its digest.
///
/// A registry is built once per type, verified against the type's accessor
/// table, and then shared. Mapping calls never mutate it.
pub struct Registry<T: Mapped> {
    class: Class<T>,
    mappers: Vec<Box<dyn FieldMapper<T>>>,
    digest_class: Class<T::Digest>,
    digest_mappers: Vec<Box<dyn FieldMapper<T::Digest>>>,
}

impl<T: Mapped> Registry<T> {
    /// Builds the registry declared by [`Mapped::mappings`].
    pub fn new(options: &Options) -> Result<Self> {
        let mut builder = Builder::new();
        T::mappings(&mut builder);
        builder.build(options)
    }

    pub fn builder() -> Builder<T> {
        Builder::new()
    }

    pub fn class(&self) -> &Class<T> {
        &self.class
    }

    pub fn class_name(&self) -> &str {
        self.class.name()
    }

    pub fn digest_class_name(&self) -> &str {
        self.digest_class.name()
    }

    /// Number of field mappers of the full type.
    pub fn len(&self) -> usize {
        self.mappers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappers.is_empty()
    }

    pub fn mappers(&self) -> impl ExactSizeIterator<Item = &dyn FieldMapper<T>> + '_ {
        self.mappers.iter().map(|mapper| &**mapper)
    }

    /// Names of the items owned by the full type's mappers, in declaration
    /// order.
    pub fn item_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.mappers.iter().flat_map(|mapper| mapper.item_names())
    }

    pub fn new_instance(&self) -> T {
        T::default()
    }

    pub fn new_digest(&self) -> T::Digest {
        T::Digest::default()
    }

    /// Applies every mapper's document-to-object direction, in order.
    pub fn map_to_object(&self, doc: &dyn Document, target: &mut T) -> Result<()> {
        trace!(class = self.class_name(), unid = ?doc.universal_id(), "mapping document to object");
        apply_to_object(&self.mappers, doc, target)
            .map_err(|e| e.context(err!("mapping document {} to {}", unid(doc), self.class_name())))
    }

    /// Applies every mapper's object-to-document direction, in order.
    pub fn map_to_document(&self, source: &T, doc: &mut dyn Document) -> Result<()> {
        trace!(class = self.class_name(), unid = ?doc.universal_id(), "mapping object to document");
        for mapper in &self.mappers {
            if let Err(e) = mapper.map_to_document(source, doc) {
                return Err(e.context(err!(
                    "mapping {} to document {}",
                    self.class_name(),
                    unid(doc)
                )));
            }
        }
        Ok(())
    }

    /// Populates a digest using the digest mappers.
    pub fn map_to_digest(&self, doc: &dyn Document, digest: &mut T::Digest) -> Result<()> {
        trace!(class = self.digest_class_name(), unid = ?doc.universal_id(), "mapping document to digest");
        apply_to_object(&self.digest_mappers, doc, digest).map_err(|e| {
            e.context(err!(
                "mapping document {} to {}",
                unid(doc),
                self.digest_class_name()
            ))
        })
    }

    /// Creates a new instance populated from `doc`.
    pub fn load(&self, doc: &dyn Document) -> Result<T> {
        let mut target = self.new_instance();
        self.map_to_object(doc, &mut target)?;
        Ok(target)
    }

    /// Creates a new digest populated from `doc`.
    pub fn load_digest(&self, doc: &dyn Document) -> Result<T::Digest> {
        let mut digest = self.new_digest();
        self.map_to_digest(doc, &mut digest)?;
        Ok(digest)
    }
}

fn apply_to_object<U>(
    mappers: &[Box<dyn FieldMapper<U>>],
    doc: &dyn Document,
    target: &mut U,
) -> Result<()> {
    for mapper in mappers {
        mapper.map_to_object(doc, target)?;
    }
    Ok(())
}

fn unid(doc: &dyn Document) -> &str {
    doc.universal_id().unwrap_or("<new>")
}

impl<T: Mapped> core::fmt::Debug for Registry<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("Registry")
            .field("class", &self.class.name())
            .field("mappers", &self.mappers)
            .field("digest_class", &self.digest_class.name())
            .field("digest_mappers", &self.digest_mappers)
            .finish()
    }
}
