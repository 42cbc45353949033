use super::Error;
use crate::stmt::Value;

/// Error when a source value matches no case of the target enum and the enum
/// has no default case.
#[derive(Debug)]
pub(super) struct UnmatchedEnumValue {
    ty: Box<str>,
    value: Box<str>,
}

impl std::error::Error for UnmatchedEnumValue {}

impl core::fmt::Display for UnmatchedEnumValue {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "unmatched enum value: no case of {} matches {}",
            self.ty, self.value
        )
    }
}

impl Error {
    /// Creates an unmatched enum value error.
    pub fn unmatched_enum_value(ty: impl Into<String>, value: Value) -> Error {
        Error::from(super::ErrorKind::UnmatchedEnumValue(UnmatchedEnumValue {
            ty: ty.into().into(),
            value: describe(&value).into(),
        }))
    }

    /// Returns `true` if this error is an unmatched enum value error.
    pub fn is_unmatched_enum_value(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnmatchedEnumValue(_))
    }
}

fn describe(value: &Value) -> String {
    match value {
        Value::String(value) => format!("{value:?}"),
        Value::I64(value) => value.to_string(),
        value => value.kind_name().to_string(),
    }
}
