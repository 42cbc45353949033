use crate::stmt::{Type, Value};

/// A property of a class.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub name: String,

    /// Declared type
    pub ty: Type,

    /// The property can only be set by the constructor.
    pub readonly: bool,

    /// Serialization groups the property belongs to. Empty means the property
    /// is mapped whatever groups the context asks for.
    pub groups: Vec<String>,

    /// Map the property only while the nesting depth is at most this value.
    pub max_depth: Option<usize>,

    /// Name of the source property to read from, when it differs.
    pub source_name: Option<String>,

    /// Never map this property.
    pub ignore: bool,

    /// Initial value of the property on a freshly constructed instance.
    pub default: Option<Value>,
}

impl Property {
    pub fn new(name: impl Into<String>, ty: impl Into<Type>) -> Property {
        Property {
            name: name.into(),
            ty: ty.into(),
            readonly: false,
            groups: vec![],
            max_depth: None,
            source_name: None,
            ignore: false,
            default: None,
        }
    }

    pub fn readonly(mut self) -> Property {
        self.readonly = true;
        self
    }

    pub fn groups(mut self, groups: impl IntoIterator<Item = impl Into<String>>) -> Property {
        self.groups = groups.into_iter().map(Into::into).collect();
        self
    }

    pub fn max_depth(mut self, max_depth: usize) -> Property {
        self.max_depth = Some(max_depth);
        self
    }

    pub fn source_name(mut self, name: impl Into<String>) -> Property {
        self.source_name = Some(name.into());
        self
    }

    pub fn ignore(mut self) -> Property {
        self.ignore = true;
        self
    }

    pub fn default_value(mut self, value: impl Into<Value>) -> Property {
        self.default = Some(value.into());
        self
    }
}
