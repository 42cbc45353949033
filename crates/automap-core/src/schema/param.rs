use crate::stmt::Value;

/// A constructor parameter. It binds the property with the same name.
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub name: String,

    /// Used when the source provides no value for the parameter.
    pub default: Option<Value>,
}

impl Param {
    pub fn new(name: impl Into<String>) -> Param {
        Param {
            name: name.into(),
            default: None,
        }
    }

    pub fn with_default(mut self, default: impl Into<Value>) -> Param {
        self.default = Some(default.into());
        self
    }
}

impl From<&str> for Param {
    fn from(value: &str) -> Self {
        Param::new(value)
    }
}
