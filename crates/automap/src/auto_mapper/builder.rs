use super::{AutoMapper, Shared};
use crate::{
    loader::{EvalLoader, Loader},
    name_converter::{IdentityNameConverter, NameConverter},
    transformer::{ChainTransformerFactory, TransformerFactory},
    Config, MetadataFactory, UnionPolicy,
};
use automap_core::Schema;
use std::{cell::RefCell, rc::Rc};

#[derive(Default)]
pub struct Builder {
    schema: Schema,

    config: Config,

    name_converter: Option<Rc<dyn NameConverter>>,

    loader: Option<Box<dyn Loader>>,

    /// Providers added on top of the builtin ones
    transformer_factories: Vec<TransformerFactory>,
}

impl Builder {
    /// Classes and enums the registry maps between.
    pub fn schema(&mut self, schema: Schema) -> &mut Self {
        self.schema = schema;
        self
    }

    /// Prefix of mapper identities. Defaults to `Mapper_`.
    pub fn class_prefix(&mut self, prefix: &str) -> &mut Self {
        self.config.class_prefix = prefix.to_string();
        self
    }

    pub fn attribute_checking(&mut self, attribute_checking: bool) -> &mut Self {
        self.config.attribute_checking = attribute_checking;
        self
    }

    /// Create metadata for unknown pairs on first use. On by default.
    pub fn auto_register(&mut self, auto_register: bool) -> &mut Self {
        self.config.auto_register = auto_register;
        self
    }

    pub fn date_time_format(&mut self, format: &str) -> &mut Self {
        self.config.date_time_format = format.to_string();
        self
    }

    pub fn allow_readonly_target_to_populate(&mut self, allow: bool) -> &mut Self {
        self.config.allow_readonly_target_to_populate = allow;
        self
    }

    pub fn union_policy(&mut self, policy: UnionPolicy) -> &mut Self {
        self.config.union_policy = policy;
        self
    }

    /// Converts property names to array keys. Keys are the property names
    /// by default.
    pub fn name_converter(&mut self, name_converter: impl NameConverter + 'static) -> &mut Self {
        self.name_converter = Some(Rc::new(name_converter));
        self
    }

    pub fn loader(&mut self, loader: impl Loader + 'static) -> &mut Self {
        self.loader = Some(Box::new(loader));
        self
    }

    pub fn transformer_factory(&mut self, factory: TransformerFactory) -> &mut Self {
        self.transformer_factories.push(factory);
        self
    }

    pub fn build(&mut self) -> AutoMapper {
        let config = std::mem::take(&mut self.config);

        let mut transformers = ChainTransformerFactory::with_defaults();
        for factory in self.transformer_factories.drain(..) {
            if !transformers.has(&factory) {
                transformers.add(factory);
            }
        }

        let shared = Shared {
            schema: Rc::new(std::mem::take(&mut self.schema)),
            factory: MetadataFactory::new(&config),
            config,
            transformers: RefCell::new(transformers),
            loader: self
                .loader
                .take()
                .unwrap_or_else(|| Box::new(EvalLoader::new())),
            name_converter: self
                .name_converter
                .take()
                .unwrap_or_else(|| Rc::new(IdentityNameConverter)),
            metadata: RefCell::default(),
            mappers: RefCell::default(),
        };

        AutoMapper {
            shared: Rc::new(shared),
        }
    }
}
