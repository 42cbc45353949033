use crate::transformer::Transformer;
use automap_core::stmt::Type;

/// How one target property is computed.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyMapping {
    /// Target property name, or array key when the target is an array.
    pub property: String,

    pub read_accessor: ReadAccessor,

    pub source_type: Type,

    pub target_type: Type,

    pub transformer: Transformer,

    /// Skip the property when the source array has no such key.
    pub check_exists: bool,

    /// Pass the current value of the target property to the transformer.
    pub read_target: bool,

    pub target_readonly: bool,

    /// The property is bound through the target's constructor.
    pub in_constructor: bool,

    pub max_depth: Option<usize>,

    pub groups: Vec<String>,
}

/// Where the input of a property mapping is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadAccessor {
    /// A field of the source object, or a key of the source array.
    Field(String),

    /// The whole source value.
    Source,
}
