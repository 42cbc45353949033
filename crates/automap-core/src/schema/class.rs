use super::{Param, Property};

/// A class: named properties, an optional parent, an optional constructor.
#[derive(Debug, Clone, PartialEq)]
pub struct Class {
    pub name: String,

    /// The class this one inherits properties from.
    pub parent: Option<String>,

    /// Instances cannot be modified after construction. An existing instance
    /// can not be used as a target to populate.
    pub readonly: bool,

    /// Properties declared by this class, in declaration order.
    pub properties: Vec<Property>,

    /// Constructor parameters, in order. `None` means the class can be
    /// instantiated without arguments.
    pub constructor: Option<Vec<Param>>,
}

impl Class {
    pub fn new(name: impl Into<String>) -> Class {
        Class {
            name: name.into(),
            parent: None,
            readonly: false,
            properties: vec![],
            constructor: None,
        }
    }

    pub fn extends(mut self, parent: impl Into<String>) -> Class {
        self.parent = Some(parent.into());
        self
    }

    pub fn readonly(mut self) -> Class {
        self.readonly = true;
        self
    }

    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|property| property.name == name)
    }

    pub fn with_property(mut self, property: Property) -> Class {
        self.properties.push(property);
        self
    }

    pub fn with_constructor(mut self, params: impl IntoIterator<Item = impl Into<Param>>) -> Class {
        self.constructor = Some(params.into_iter().map(Into::into).collect());
        self
    }
}
