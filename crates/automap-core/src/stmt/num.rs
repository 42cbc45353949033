use super::{Type, TypeKind, Value};
use crate::{Error, Result};

impl Type {
    /// Coerces `value` to this type using the builtin conversion rules.
    ///
    /// Null values are passed through. Casting to `mixed` copies the value.
    pub fn cast(&self, value: Value) -> Result<Value> {
        if value.is_null() {
            return Ok(value);
        }

        Ok(match (&self.kind, value) {
            (TypeKind::Mixed, value) => value,
            (TypeKind::Bool, value) => Value::Bool(to_bool(value)?),
            (TypeKind::I64, value) => Value::I64(to_i64(value)?),
            (TypeKind::F64, value) => Value::F64(to_f64(value)?),
            (TypeKind::String, value) => Value::String(to_string(value)?),
            (TypeKind::Map, value @ Value::Map(_)) => value,
            (_, value) => return Err(Error::type_conversion(value, self.name())),
        })
    }
}

fn to_bool(value: Value) -> Result<bool> {
    match value {
        Value::Bool(v) => Ok(v),
        Value::I64(v) => Ok(v != 0),
        Value::F64(v) => Ok(v != 0.0),
        Value::String(ref v) => match v.trim().to_ascii_lowercase().as_str() {
            "true" | "1" => Ok(true),
            "false" | "0" | "" => Ok(false),
            _ => Err(Error::type_conversion(value, "Bool")),
        },
        value => Err(Error::type_conversion(value, "Bool")),
    }
}

fn to_i64(value: Value) -> Result<i64> {
    match value {
        Value::I64(v) => Ok(v),
        Value::Bool(v) => Ok(v as i64),
        Value::F64(v) => {
            // `as` saturates; reject what would not round-trip.
            if v.is_finite() && v >= i64::MIN as f64 && v < i64::MAX as f64 {
                Ok(v.trunc() as i64)
            } else {
                Err(Error::type_conversion(value, "I64"))
            }
        }
        Value::String(ref v) => match v.trim().parse::<i64>() {
            Ok(v) => Ok(v),
            Err(_) => Err(Error::type_conversion(value, "I64")),
        },
        value => Err(Error::type_conversion(value, "I64")),
    }
}

fn to_f64(value: Value) -> Result<f64> {
    match value {
        Value::F64(v) => Ok(v),
        Value::I64(v) => Ok(v as f64),
        Value::Bool(v) => Ok(if v { 1.0 } else { 0.0 }),
        Value::String(ref v) => match v.trim().parse::<f64>() {
            Ok(v) => Ok(v),
            Err(_) => Err(Error::type_conversion(value, "F64")),
        },
        value => Err(Error::type_conversion(value, "F64")),
    }
}

fn to_string(value: Value) -> Result<String> {
    match value {
        Value::String(v) => Ok(v),
        Value::I64(v) => Ok(v.to_string()),
        Value::F64(v) => Ok(format_f64(v)),
        Value::Bool(v) => Ok(v.to_string()),
        value => Err(Error::type_conversion(value, "String")),
    }
}

fn format_f64(v: f64) -> String {
    if v.is_finite() && v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        v.to_string()
    }
}
