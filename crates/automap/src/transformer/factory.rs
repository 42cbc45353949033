use super::{array, builtin, date_time, enumeration, multiple, nullable, object, uid, unique_type, Transformer};
use crate::{metadata::MetadataRegistry, MapperMetadata, UnionPolicy};
use automap_core::{stmt::Type, Result, Schema};
use std::rc::Rc;

/// A caller-supplied provider, tried at its own priority.
///
/// It returns a transformer from the closed [`Transformer`] set, or `None` to
/// let lower priority providers try.
pub trait CustomTransformerFactory {
    fn priority(&self) -> i32;

    fn resolve(&self, source: &Type, target: &Type, cx: &ResolveCx<'_>) -> Result<Option<Transformer>>;
}

/// A transformer provider.
#[derive(Clone)]
pub enum TransformerFactory {
    /// Source unions, and target unions with a non-object member
    Multiple,

    /// Nullable source or target
    Nullable,

    /// Target union of object types
    UniqueType,

    DateTime,

    /// Scalars, arrays and mixed
    Builtin,

    /// Collections
    Array,

    /// Nested mappers
    Object,

    Uid,

    Enum,

    Custom(Rc<dyn CustomTransformerFactory>),
}

impl TransformerFactory {
    pub fn custom(factory: impl CustomTransformerFactory + 'static) -> TransformerFactory {
        TransformerFactory::Custom(Rc::new(factory))
    }

    /// Providers with a higher priority are tried first.
    pub fn priority(&self) -> i32 {
        match self {
            TransformerFactory::Multiple => 128,
            TransformerFactory::Nullable => 64,
            TransformerFactory::UniqueType => 32,
            TransformerFactory::DateTime => 16,
            TransformerFactory::Builtin => 8,
            TransformerFactory::Array => 4,
            TransformerFactory::Object => 2,
            TransformerFactory::Uid => 1,
            TransformerFactory::Enum => 0,
            TransformerFactory::Custom(factory) => factory.priority(),
        }
    }

    pub fn resolve(&self, source: &Type, target: &Type, cx: &ResolveCx<'_>) -> Result<Option<Transformer>> {
        match self {
            TransformerFactory::Multiple => multiple::resolve(source, target, cx),
            TransformerFactory::Nullable => nullable::resolve(source, target, cx),
            TransformerFactory::UniqueType => unique_type::resolve(source, target, cx),
            TransformerFactory::DateTime => Ok(date_time::resolve(source, target, cx)),
            TransformerFactory::Builtin => Ok(builtin::resolve(source, target)),
            TransformerFactory::Array => array::resolve(source, target, cx),
            TransformerFactory::Object => object::resolve(source, target, cx),
            TransformerFactory::Uid => Ok(uid::resolve(source, target)),
            TransformerFactory::Enum => enumeration::resolve(source, target, cx),
            TransformerFactory::Custom(factory) => factory.resolve(source, target, cx),
        }
    }

    fn is_same(&self, other: &TransformerFactory) -> bool {
        match (self, other) {
            (TransformerFactory::Custom(a), TransformerFactory::Custom(b)) => {
                Rc::as_ptr(a) as *const () == Rc::as_ptr(b) as *const ()
            }
            (a, b) => core::mem::discriminant(a) == core::mem::discriminant(b),
        }
    }
}

impl core::fmt::Debug for TransformerFactory {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            TransformerFactory::Multiple => f.write_str("Multiple"),
            TransformerFactory::Nullable => f.write_str("Nullable"),
            TransformerFactory::UniqueType => f.write_str("UniqueType"),
            TransformerFactory::DateTime => f.write_str("DateTime"),
            TransformerFactory::Builtin => f.write_str("Builtin"),
            TransformerFactory::Array => f.write_str("Array"),
            TransformerFactory::Object => f.write_str("Object"),
            TransformerFactory::Uid => f.write_str("Uid"),
            TransformerFactory::Enum => f.write_str("Enum"),
            TransformerFactory::Custom(factory) => write!(f, "Custom(priority={})", factory.priority()),
        }
    }
}

/// Providers ordered by descending priority. The first provider returning a
/// transformer wins.
#[derive(Debug, Clone, Default)]
pub struct ChainTransformerFactory {
    factories: Vec<TransformerFactory>,
}

impl ChainTransformerFactory {
    /// A chain with no providers.
    pub fn new() -> ChainTransformerFactory {
        ChainTransformerFactory::default()
    }

    /// A chain with every builtin provider.
    pub fn with_defaults() -> ChainTransformerFactory {
        let mut chain = ChainTransformerFactory::new();

        for factory in [
            TransformerFactory::Multiple,
            TransformerFactory::Nullable,
            TransformerFactory::UniqueType,
            TransformerFactory::DateTime,
            TransformerFactory::Builtin,
            TransformerFactory::Array,
            TransformerFactory::Object,
            TransformerFactory::Uid,
            TransformerFactory::Enum,
        ] {
            chain.add(factory);
        }

        chain
    }

    pub fn has(&self, factory: &TransformerFactory) -> bool {
        self.factories.iter().any(|f| f.is_same(factory))
    }

    /// Inserts `factory` after every provider of equal or higher priority.
    pub fn add(&mut self, factory: TransformerFactory) {
        let priority = factory.priority();
        let index = self
            .factories
            .iter()
            .position(|f| f.priority() < priority)
            .unwrap_or(self.factories.len());

        self.factories.insert(index, factory);
    }

    pub fn factories(&self) -> &[TransformerFactory] {
        &self.factories
    }

    pub fn resolve(&self, source: &Type, target: &Type, cx: &ResolveCx<'_>) -> Result<Option<Transformer>> {
        for factory in &self.factories {
            if let Some(transformer) = factory.resolve(source, target, cx)? {
                tracing::trace!(
                    mapper = cx.metadata.identity(),
                    property = cx.property,
                    source = %source,
                    target = %target,
                    provider = ?factory,
                    ?transformer,
                    "resolved transformer"
                );
                return Ok(Some(transformer));
            }
        }

        Ok(None)
    }
}

/// What a provider can see while resolving one property.
pub struct ResolveCx<'a> {
    pub chain: &'a ChainTransformerFactory,
    pub schema: &'a Schema,
    pub registry: &'a dyn MetadataRegistry,
    pub metadata: &'a MapperMetadata,
    pub union_policy: UnionPolicy,

    /// Target property being resolved.
    pub property: &'a str,
}

impl ResolveCx<'_> {
    /// Resolves a (source, target) pair through the whole chain. Providers
    /// use this to resolve inner types.
    pub fn resolve(&self, source: &Type, target: &Type) -> Result<Option<Transformer>> {
        self.chain.resolve(source, target, self)
    }
}
