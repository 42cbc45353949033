use uuid::Uuid;

use crate::{stmt::Value, Error, Result};

impl From<Uuid> for Value {
    fn from(value: Uuid) -> Self {
        Self::Uid(value)
    }
}

impl TryFrom<Value> for Uuid {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Uid(value) => Ok(value),
            value => Err(Error::type_conversion(value, "Uid")),
        }
    }
}

/// Canonical (hyphenated, lowercase) string form of a uid.
pub(crate) fn uid_to_string(value: Value) -> Result<Value> {
    match value {
        Value::Null => Ok(Value::Null),
        Value::Uid(value) => Ok(Value::String(value.hyphenated().to_string())),
        value => Err(Error::type_conversion(value, "Uid")),
    }
}

/// Rebuilds a uid from any of its accepted string forms.
pub(crate) fn uid_from_string(value: Value) -> Result<Value> {
    match value {
        Value::Null | Value::Uid(_) => Ok(value),
        Value::String(value) => Ok(Value::Uid(Uuid::parse_str(&value)?)),
        value => Err(Error::type_conversion(value, "Uid")),
    }
}
