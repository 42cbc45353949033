mod dependency;
pub use dependency::MapperDependency;

mod extractor;
pub use extractor::MappingExtractor;

mod factory;
pub use factory::MetadataFactory;

mod property_mapping;
pub use property_mapping::{PropertyMapping, ReadAccessor};

use crate::{
    name_converter::NameConverter, transformer::ChainTransformerFactory, Config, Context,
};
use automap_core::{stmt::Value, Result, Schema};
use indexmap::IndexMap;
use std::{cell::OnceCell, rc::Rc};

/// Type key of the associative array side of a mapping.
pub const ARRAY: &str = "array";

/// Custom logic for one target property.
///
/// Receives the whole source value, the current value of the target property
/// (`null` when constructing) and the context.
pub type Callback = Rc<dyn Fn(&Value, &Value, &Context) -> Result<Value>>;

/// Answers whether a mapper exists, or can be created, for a pair of type
/// keys.
pub trait MetadataRegistry {
    fn has_mapper(&self, source: &str, target: &str) -> Result<bool>;
}

/// Everything compiling a mapper needs besides its metadata.
pub struct CompileCx<'a> {
    pub schema: &'a Schema,
    pub config: &'a Config,
    pub transformers: &'a ChainTransformerFactory,
    pub registry: &'a dyn MetadataRegistry,
    pub name_converter: &'a dyn NameConverter,
}

/// Describes the mapper of one (source, target) pair.
///
/// The property mappings are compiled on first request and kept.
pub struct MapperMetadata {
    source: String,
    target: String,
    identity: String,
    extractor: MappingExtractor,
    target_readonly: bool,
    attribute_checking: bool,
    date_time_format: String,
    callbacks: IndexMap<String, Callback>,
    properties: OnceCell<Vec<PropertyMapping>>,
}

impl MapperMetadata {
    pub fn new(source: impl Into<String>, target: impl Into<String>, class_prefix: &str) -> MapperMetadata {
        let source = source.into();
        let target = target.into();
        let config = Config::default();

        MapperMetadata {
            identity: mapper_identity(class_prefix, &source, &target),
            extractor: MappingExtractor::for_pair(&source, &target),
            source,
            target,
            target_readonly: false,
            attribute_checking: config.attribute_checking,
            date_time_format: config.date_time_format,
            callbacks: IndexMap::new(),
            properties: OnceCell::new(),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// Deterministic name of the mapper, e.g. `Mapper_User_array`.
    pub fn identity(&self) -> &str {
        &self.identity
    }

    pub fn extractor(&self) -> MappingExtractor {
        self.extractor
    }

    pub fn source_is_array(&self) -> bool {
        self.source == ARRAY
    }

    pub fn target_is_array(&self) -> bool {
        self.target == ARRAY
    }

    pub fn is_target_readonly(&self) -> bool {
        self.target_readonly
    }

    pub fn set_target_readonly(&mut self, readonly: bool) -> &mut Self {
        self.target_readonly = readonly;
        self
    }

    pub fn attribute_checking(&self) -> bool {
        self.attribute_checking
    }

    pub fn set_attribute_checking(&mut self, attribute_checking: bool) -> &mut Self {
        self.attribute_checking = attribute_checking;
        self
    }

    pub fn date_time_format(&self) -> &str {
        &self.date_time_format
    }

    pub fn set_date_time_format(&mut self, format: impl Into<String>) -> &mut Self {
        self.date_time_format = format.into();
        self
    }

    /// Maps `property` with `callback` instead of a structural transformer.
    pub fn for_member<F>(&mut self, property: impl Into<String>, callback: F) -> &mut Self
    where
        F: Fn(&Value, &Value, &Context) -> Result<Value> + 'static,
    {
        self.callbacks.insert(property.into(), Rc::new(callback));
        self
    }

    pub fn callbacks(&self) -> &IndexMap<String, Callback> {
        &self.callbacks
    }

    /// Resolves a transformer for every mappable property.
    ///
    /// Runs the extraction once; later calls return the same mappings.
    pub fn compile(&self, cx: &CompileCx<'_>) -> Result<&[PropertyMapping]> {
        if let Some(properties) = self.properties.get() {
            return Ok(properties);
        }

        let properties = self.extractor.extract(self, cx)?;
        Ok(self.properties.get_or_init(|| properties))
    }

    /// Mappers the compiled properties call, deduplicated.
    pub fn dependencies(&self, cx: &CompileCx<'_>) -> Result<Vec<MapperDependency>> {
        let mut dependencies: Vec<MapperDependency> = vec![];

        for property in self.compile(cx)? {
            for dependency in property.transformer.dependencies() {
                if !dependencies.contains(&dependency) {
                    dependencies.push(dependency);
                }
            }
        }

        Ok(dependencies)
    }
}

impl core::fmt::Debug for MapperMetadata {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("MapperMetadata")
            .field("source", &self.source)
            .field("target", &self.target)
            .field("identity", &self.identity)
            .field("extractor", &self.extractor)
            .field("target_readonly", &self.target_readonly)
            .field("attribute_checking", &self.attribute_checking)
            .field("date_time_format", &self.date_time_format)
            .field("callbacks", &self.callbacks.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// `<prefix><source>_<target>`, e.g. `Mapper_User_array`.
///
/// Names that are not plain ASCII alphanumeric are sanitized to `_` and the
/// hex encoding of both names is appended, so distinct pairs never share an
/// identity.
pub fn mapper_identity(prefix: &str, source: &str, target: &str) -> String {
    if is_plain(source) && is_plain(target) {
        return format!("{prefix}{source}_{target}");
    }

    format!(
        "{prefix}{}_{}_{}_{}",
        sanitize(source),
        sanitize(target),
        hex(source),
        hex(target)
    )
}

fn is_plain(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric())
}

fn sanitize(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

fn hex(name: &str) -> String {
    name.bytes().map(|b| format!("{b:02x}")).collect()
}
