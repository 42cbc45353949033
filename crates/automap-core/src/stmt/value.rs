use super::{Object, Type, TypeUnion, ValueEnum};
use chrono::{DateTime, FixedOffset};
use indexmap::IndexMap;
use uuid::Uuid;

/// An associative array: string keys in insertion order.
pub type ValueMap = IndexMap<String, Value>;

#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    /// Boolean value
    Bool(bool),

    /// Point in time with a UTC offset
    DateTime(DateTime<FixedOffset>),

    /// Value of an enumerated type
    Enum(ValueEnum),

    /// 64-bit floating point number
    F64(f64),

    /// Signed 64-bit integer
    I64(i64),

    /// A list of values
    List(Vec<Value>),

    /// An associative array
    Map(ValueMap),

    /// Null value
    #[default]
    Null,

    /// A class instance, shared by reference
    Object(Object),

    /// String value
    String(String),

    /// Unique identifier
    Uid(Uuid),
}

impl Value {
    pub const fn null() -> Self {
        Self::Null
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub const fn is_object(&self) -> bool {
        matches!(self, Self::Object(_))
    }

    pub const fn is_map(&self) -> bool {
        matches!(self, Self::Map(_))
    }

    pub const fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    pub fn list_from_vec(items: Vec<Self>) -> Self {
        Self::List(items)
    }

    /// Builds an associative array from key/value pairs.
    pub fn map_from<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        Self::Map(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::I64(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::F64(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_date_time(&self) -> Option<&DateTime<FixedOffset>> {
        match self {
            Self::DateTime(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_uid(&self) -> Option<&Uuid> {
        match self {
            Self::Uid(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_enum(&self) -> Option<&ValueEnum> {
        match self {
            Self::Enum(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&ValueMap> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Self::Object(object) => Some(object),
            _ => None,
        }
    }

    #[track_caller]
    pub fn expect_object(&self) -> &Object {
        match self {
            Self::Object(object) => object,
            _ => panic!("expected Value::Object; actual={self:#?}"),
        }
    }

    #[track_caller]
    pub fn expect_map(&self) -> &ValueMap {
        match self {
            Self::Map(map) => map,
            _ => panic!("expected Value::Map; actual={self:#?}"),
        }
    }

    #[track_caller]
    pub fn expect_list(&self) -> &[Value] {
        match self {
            Self::List(items) => items,
            _ => panic!("expected Value::List; actual={self:#?}"),
        }
    }

    /// Reads a field of an object or a key of an associative array.
    ///
    /// Missing fields and `null` bases read as `null`; `None` is returned
    /// when the value has no fields at all.
    pub fn field(&self, name: &str) -> Option<Value> {
        match self {
            Self::Object(object) => Some(object.get(name).unwrap_or_default()),
            Self::Map(map) => Some(map.get(name).cloned().unwrap_or_default()),
            Self::Null => Some(Value::Null),
            _ => None,
        }
    }

    /// Returns `true` if the object field or array key is present.
    pub fn has_field(&self, name: &str) -> bool {
        match self {
            Self::Object(object) => object.has(name),
            Self::Map(map) => map.contains_key(name),
            _ => false,
        }
    }

    /// The variant name, used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "Bool",
            Self::DateTime(_) => "DateTime",
            Self::Enum(_) => "Enum",
            Self::F64(_) => "F64",
            Self::I64(_) => "I64",
            Self::List(_) => "List",
            Self::Map(_) => "Map",
            Self::Null => "Null",
            Self::Object(_) => "Object",
            Self::String(_) => "String",
            Self::Uid(_) => "Uid",
        }
    }

    /// Infers the type of the value.
    pub fn infer_ty(&self) -> Type {
        match self {
            Self::Bool(_) => Type::bool(),
            Self::DateTime(_) => Type::date_time(),
            Self::Enum(value) => Type::enumeration(&value.ty),
            Self::F64(_) => Type::f64(),
            Self::I64(_) => Type::i64(),
            Self::List(items) => {
                let mut union = TypeUnion::new();
                let mut nullable = false;
                for item in items {
                    let ty = item.infer_ty();
                    nullable |= ty.nullable;
                    if !ty.is_null() {
                        union.insert(ty.into_non_null());
                    }
                }
                if union.is_empty() {
                    Type::list(Type::mixed())
                } else {
                    Type::list(union.simplify().with_nullable(nullable))
                }
            }
            Self::Map(_) => Type::map(),
            Self::Null => Type::null(),
            Self::Object(object) => Type::object(object.class()),
            Self::String(_) => Type::string(),
            Self::Uid(_) => Type::uid(),
        }
    }
}

impl From<bool> for Value {
    fn from(src: bool) -> Self {
        Self::Bool(src)
    }
}

impl From<i64> for Value {
    fn from(src: i64) -> Self {
        Self::I64(src)
    }
}

impl From<i32> for Value {
    fn from(src: i32) -> Self {
        Self::I64(src.into())
    }
}

impl From<f64> for Value {
    fn from(src: f64) -> Self {
        Self::F64(src)
    }
}

impl From<String> for Value {
    fn from(src: String) -> Self {
        Self::String(src)
    }
}

impl From<&String> for Value {
    fn from(src: &String) -> Self {
        Self::String(src.clone())
    }
}

impl From<&str> for Value {
    fn from(src: &str) -> Self {
        Self::String(src.to_string())
    }
}

impl From<ValueEnum> for Value {
    fn from(src: ValueEnum) -> Self {
        Self::Enum(src)
    }
}

impl From<Object> for Value {
    fn from(src: Object) -> Self {
        Self::Object(src)
    }
}

impl From<ValueMap> for Value {
    fn from(src: ValueMap) -> Self {
        Self::Map(src)
    }
}

impl From<Vec<Value>> for Value {
    fn from(src: Vec<Value>) -> Self {
        Self::List(src)
    }
}

impl<T> From<Option<T>> for Value
where
    Value: From<T>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Value::from(value),
            None => Value::Null,
        }
    }
}
