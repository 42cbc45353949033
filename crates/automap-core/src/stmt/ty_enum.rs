use super::{Value, ValueEnum};
use crate::{Error, Result};

/// An enumerated type: a closed set of named cases, optionally backed by a
/// scalar value.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeEnum {
    pub name: String,

    pub cases: Vec<EnumCase>,

    /// Case used when a source value matches no case.
    pub default: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnumCase {
    pub name: String,

    /// Backing value (a string or an integer) of a backed enum.
    pub backing: Option<Value>,
}

impl TypeEnum {
    pub fn new(name: impl Into<String>) -> TypeEnum {
        TypeEnum {
            name: name.into(),
            cases: vec![],
            default: None,
        }
    }

    /// Adds a pure (unbacked) case.
    pub fn case(mut self, name: impl Into<String>) -> TypeEnum {
        self.cases.push(EnumCase {
            name: name.into(),
            backing: None,
        });
        self
    }

    /// Adds a case backed by `value`.
    pub fn backed_case(mut self, name: impl Into<String>, value: impl Into<Value>) -> TypeEnum {
        self.cases.push(EnumCase {
            name: name.into(),
            backing: Some(value.into()),
        });
        self
    }

    pub fn default_case(mut self, name: impl Into<String>) -> TypeEnum {
        self.default = Some(name.into());
        self
    }

    pub fn get_case(&self, name: &str) -> Option<&EnumCase> {
        self.cases.iter().find(|case| case.name == name)
    }

    /// Finds the case matching `value`.
    ///
    /// Backing values are compared first, then case names. An enum value
    /// (of any enum type) matches the case with the same name.
    pub fn find_case(&self, value: &Value) -> Option<&EnumCase> {
        match value {
            Value::Enum(value) => self.get_case(&value.case),
            value => self
                .cases
                .iter()
                .find(|case| case.backing.as_ref() == Some(value))
                .or_else(|| {
                    let name = value.as_str()?;
                    self.get_case(name)
                }),
        }
    }

    /// Converts `value` into a case of this enum.
    ///
    /// `null` passes through. Falls back to the default case, and fails with
    /// an unmatched enum value error when there is none.
    pub fn cast(&self, value: Value) -> Result<Value> {
        if value.is_null() {
            return Ok(value);
        }

        let case = match self.find_case(&value) {
            Some(case) => case,
            None => match self.default.as_deref().and_then(|name| self.get_case(name)) {
                Some(case) => case,
                None => return Err(Error::unmatched_enum_value(&self.name, value)),
            },
        };

        Ok(Value::Enum(ValueEnum::new(&self.name, &case.name)))
    }

    /// Converts a case of this enum to its scalar form: the backing value for
    /// backed cases, the case name otherwise.
    pub fn to_scalar(&self, value: Value) -> Result<Value> {
        let Value::Enum(value) = value else {
            return match value {
                Value::Null => Ok(Value::Null),
                value => Err(Error::type_conversion(value, "Enum")),
            };
        };

        match self.get_case(&value.case) {
            Some(EnumCase {
                backing: Some(backing),
                ..
            }) => Ok(backing.clone()),
            _ => Ok(Value::String(value.case)),
        }
    }
}
