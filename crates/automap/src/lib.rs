mod auto_mapper;
pub use auto_mapper::{AutoMapper, Builder, Target};

mod config;
pub use config::{Config, UnionPolicy};

mod context;
pub use context::Context;

mod generator;

pub mod loader;
pub use loader::{EvalLoader, Loader};

mod mapper;
pub use mapper::Mapper;

pub mod metadata;
pub use metadata::{Callback, CompileCx, MapperMetadata, MetadataFactory, MetadataRegistry};

pub mod name_converter;
pub use name_converter::NameConverter;

pub mod procedure;
pub use procedure::Procedure;

pub mod transformer;
pub use transformer::{Transformer, TransformerFactory};

pub use automap_core::{bail, err, schema, stmt, Error, Result, Schema};
