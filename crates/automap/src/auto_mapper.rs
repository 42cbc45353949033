mod builder;
pub use builder::Builder;

use crate::{
    loader::Loader,
    metadata::{CompileCx, MetadataRegistry, ARRAY},
    name_converter::NameConverter,
    transformer::{ChainTransformerFactory, TransformerFactory},
    Config, Context, Mapper, MapperMetadata, MetadataFactory,
};
use automap_core::{
    stmt::{Object, Value, ValueMap},
    Error, Result, Schema,
};
use indexmap::IndexMap;
use std::{cell::RefCell, collections::HashMap, rc::Rc};

/// The mapper registry.
///
/// Looks mappers up by (source, target) type key, creating metadata and
/// compiling procedures on first use. A type key is a class name, or
/// `"array"` for associative arrays.
///
/// The registry is single threaded; build one per thread.
#[derive(Clone)]
pub struct AutoMapper {
    shared: Rc<Shared>,
}

pub(crate) struct Shared {
    schema: Rc<Schema>,

    config: Config,

    transformers: RefCell<ChainTransformerFactory>,

    loader: Box<dyn Loader>,

    factory: MetadataFactory,

    name_converter: Rc<dyn NameConverter>,

    metadata: RefCell<IndexMap<(String, String), Rc<MapperMetadata>>>,

    /// Materialized mappers, by (source, target) pair
    mappers: RefCell<HashMap<(String, String), Rc<Mapper>>>,
}

/// What to map into.
#[derive(Debug, Clone)]
pub enum Target {
    /// A new instance of the type
    Type(String),

    /// An existing instance, populated in place
    Value(Value),
}

impl AutoMapper {
    /// A registry with the default configuration.
    pub fn new(schema: Schema) -> AutoMapper {
        AutoMapper::builder().schema(schema).build()
    }

    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn schema(&self) -> &Schema {
        &self.shared.schema
    }

    pub fn config(&self) -> &Config {
        &self.shared.config
    }

    /// Returns the mapper for a pair, compiling it on first request.
    ///
    /// Later requests for the same pair return the same mapper.
    pub fn get_mapper(&self, source: &str, target: &str) -> Result<Rc<Mapper>> {
        self.shared.get_mapper(source, target)
    }

    /// Returns `true` if metadata for the pair is registered or can be
    /// created.
    pub fn has_mapper(&self, source: &str, target: &str) -> Result<bool> {
        self.shared.has_mapper(source, target)
    }

    /// Registers `metadata` for its pair, replacing any earlier entry.
    ///
    /// Mappers already materialized for the pair are kept.
    pub fn register(&self, metadata: MapperMetadata) {
        let key = (metadata.source().to_string(), metadata.target().to_string());

        tracing::debug!(mapper = metadata.identity(), "registered metadata");

        self.shared
            .metadata
            .borrow_mut()
            .insert(key, Rc::new(metadata));
    }

    /// Creates metadata for the pair with the registry's settings, without
    /// registering it. Customize it, then pass it to
    /// [`register`](AutoMapper::register).
    pub fn create_metadata(&self, source: &str, target: &str) -> Result<MapperMetadata> {
        self.shared.factory.create(&self.shared.schema, source, target)
    }

    /// Adds a transformer provider, unless it is already in the chain.
    ///
    /// Affects mappers compiled afterwards.
    pub fn bind_transformer_factory(&self, factory: TransformerFactory) {
        let mut transformers = self.shared.transformers.borrow_mut();

        if !transformers.has(&factory) {
            transformers.add(factory);
        }
    }

    /// Maps `source` into `target`.
    ///
    /// A `null` source maps to `null`. Passing an instance as the target
    /// populates it in place.
    pub fn map(&self, source: impl Into<Value>, target: impl Into<Target>, context: &Context) -> Result<Value> {
        let source = source.into();

        if source.is_null() {
            return Ok(Value::Null);
        }

        let (target_key, context) = match target.into() {
            Target::Type(name) => (name, context.clone()),
            Target::Value(value) => {
                let key = type_key(&value)
                    .ok_or_else(|| Error::no_mapping_found(&source_key_name(&source), value.kind_name()))?;
                (key, context.clone().with_target_to_populate(value))
            }
        };

        let Some(source_key) = type_key(&source) else {
            return Err(Error::no_mapping_found(source.kind_name(), &target_key));
        };

        let mapper = self.get_mapper(&source_key, &target_key)?;
        mapper.map(source, &context)
    }
}

impl core::fmt::Debug for AutoMapper {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("AutoMapper")
            .field("config", &self.shared.config)
            .field("transformers", &self.shared.transformers.borrow())
            .field("mappers", &self.shared.mappers.borrow().len())
            .finish()
    }
}

impl Shared {
    pub(crate) fn get_mapper(self: &Rc<Self>, source: &str, target: &str) -> Result<Rc<Mapper>> {
        if source == ARRAY && target == ARRAY {
            return Err(Error::no_mapping_found(source, target));
        }

        let Some(metadata) = self.metadata(source, target)? else {
            return Err(Error::no_mapping_found(source, target));
        };

        let key = (source.to_string(), target.to_string());

        if let Some(mapper) = self.mappers.borrow().get(&key) {
            return Ok(mapper.clone());
        }

        let procedure = {
            let transformers = self.transformers.borrow();
            let cx = CompileCx {
                schema: &self.schema,
                config: &self.config,
                transformers: &transformers,
                registry: &**self,
                name_converter: &*self.name_converter,
            };

            self.loader.load(&metadata, &cx)?
        };

        let mapper = Rc::new(Mapper::new(procedure, self.schema.clone()));
        mapper.inject_registry(Rc::downgrade(self));

        for (property, callback) in metadata.callbacks() {
            mapper.add_callback(property, callback.clone());
        }

        self.mappers.borrow_mut().insert(key, mapper.clone());

        Ok(mapper)
    }

    /// The metadata of a pair, created when auto registration is on.
    fn metadata(&self, source: &str, target: &str) -> Result<Option<Rc<MapperMetadata>>> {
        let key = (source.to_string(), target.to_string());

        if let Some(metadata) = self.metadata.borrow().get(&key) {
            return Ok(Some(metadata.clone()));
        }

        if !self.config.auto_register {
            return Ok(None);
        }

        let metadata = Rc::new(self.factory.create(&self.schema, source, target)?);

        tracing::debug!(
            mapper = metadata.identity(),
            source,
            target,
            extractor = ?metadata.extractor(),
            "created metadata"
        );

        self.metadata.borrow_mut().insert(key, metadata.clone());
        Ok(Some(metadata))
    }
}

impl MetadataRegistry for Shared {
    fn has_mapper(&self, source: &str, target: &str) -> Result<bool> {
        if source == ARRAY && target == ARRAY {
            return Ok(false);
        }

        Ok(self.metadata(source, target)?.is_some())
    }
}

/// Class name of an object, `"array"` for an associative array.
fn type_key(value: &Value) -> Option<String> {
    match value {
        Value::Object(object) => Some(object.class().to_string()),
        Value::Map(_) => Some(ARRAY.to_string()),
        _ => None,
    }
}

fn source_key_name(source: &Value) -> String {
    type_key(source).unwrap_or_else(|| source.kind_name().to_string())
}

impl From<&str> for Target {
    fn from(src: &str) -> Target {
        Target::Type(src.to_string())
    }
}

impl From<String> for Target {
    fn from(src: String) -> Target {
        Target::Type(src)
    }
}

impl From<Value> for Target {
    fn from(src: Value) -> Target {
        Target::Value(src)
    }
}

impl From<Object> for Target {
    fn from(src: Object) -> Target {
        Target::Value(src.into())
    }
}

impl From<ValueMap> for Target {
    fn from(src: ValueMap) -> Target {
        Target::Value(src.into())
    }
}
