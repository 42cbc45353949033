use super::{TypeUnion, Value};

/// The shape of a value, as seen by the transformer catalogue.
///
/// A `Type` is a [`TypeKind`] plus a nullability flag. Unions are normalized
/// on construction (see [`Type::union`]), so a `Type` never holds a
/// single-member union or a `null` union member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Type {
    pub kind: TypeKind,
    pub nullable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeKind {
    /// The null type. Only `null` inhabits it.
    Null,

    /// Boolean value
    Bool,

    /// Signed 64-bit integer
    I64,

    /// 64-bit floating point number
    F64,

    /// String value
    String,

    /// A point in time with a UTC offset
    DateTime,

    /// An opaque unique identifier
    Uid,

    /// A generic associative array (string keys, values of any type).
    ///
    /// This is the "array" side of object <-> array mappings.
    Map,

    /// Any value
    Mixed,

    /// A collection of values of a single type
    List(Box<Type>),

    /// An instance of the named class
    Object(String),

    /// A case of the named enum
    Enum(String),

    /// One of several types, in declaration order
    Union(TypeUnion),
}

impl Type {
    pub const fn new(kind: TypeKind) -> Type {
        Type {
            kind,
            nullable: false,
        }
    }

    pub const fn null() -> Type {
        Type {
            kind: TypeKind::Null,
            nullable: true,
        }
    }

    pub const fn bool() -> Type {
        Type::new(TypeKind::Bool)
    }

    pub const fn i64() -> Type {
        Type::new(TypeKind::I64)
    }

    pub const fn f64() -> Type {
        Type::new(TypeKind::F64)
    }

    pub const fn string() -> Type {
        Type::new(TypeKind::String)
    }

    pub const fn date_time() -> Type {
        Type::new(TypeKind::DateTime)
    }

    pub const fn uid() -> Type {
        Type::new(TypeKind::Uid)
    }

    pub const fn map() -> Type {
        Type::new(TypeKind::Map)
    }

    pub const fn mixed() -> Type {
        Type::new(TypeKind::Mixed)
    }

    pub fn list(item: impl Into<Type>) -> Type {
        Type::new(TypeKind::List(Box::new(item.into())))
    }

    pub fn object(class: impl Into<String>) -> Type {
        Type::new(TypeKind::Object(class.into()))
    }

    pub fn enumeration(name: impl Into<String>) -> Type {
        Type::new(TypeKind::Enum(name.into()))
    }

    /// Builds a normalized union.
    ///
    /// Nested unions are flattened, duplicates dropped, `null` members (and
    /// nullable members) fold into the nullability flag of the result, and a
    /// union left with a single member collapses into that member.
    pub fn union(members: impl IntoIterator<Item = impl Into<Type>>) -> Type {
        let mut union = TypeUnion::new();
        let mut nullable = false;

        for member in members {
            collect_union_member(&mut union, &mut nullable, member.into());
        }

        let mut ty = union.simplify();
        ty.nullable |= nullable;
        ty
    }

    /// Returns this type with the nullability flag set.
    pub fn into_nullable(mut self) -> Type {
        self.nullable = true;
        self
    }

    /// Returns this type with the nullability flag cleared.
    ///
    /// The null type itself is left untouched.
    pub fn into_non_null(mut self) -> Type {
        if !self.is_null() {
            self.nullable = false;
        }
        self
    }

    pub fn with_nullable(mut self, nullable: bool) -> Type {
        if !self.is_null() {
            self.nullable = nullable;
        }
        self
    }

    pub fn is_null(&self) -> bool {
        matches!(self.kind, TypeKind::Null)
    }

    pub fn is_mixed(&self) -> bool {
        matches!(self.kind, TypeKind::Mixed)
    }

    pub fn is_string(&self) -> bool {
        matches!(self.kind, TypeKind::String)
    }

    pub fn is_map(&self) -> bool {
        matches!(self.kind, TypeKind::Map)
    }

    pub fn is_list(&self) -> bool {
        matches!(self.kind, TypeKind::List(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self.kind, TypeKind::Object(_))
    }

    pub fn is_union(&self) -> bool {
        matches!(self.kind, TypeKind::Union(_))
    }

    pub fn is_date_time(&self) -> bool {
        matches!(self.kind, TypeKind::DateTime)
    }

    pub fn is_uid(&self) -> bool {
        matches!(self.kind, TypeKind::Uid)
    }

    pub fn is_enum(&self) -> bool {
        matches!(self.kind, TypeKind::Enum(_))
    }

    /// Returns `true` for the kinds the builtin coercion rules understand:
    /// null, scalars, associative arrays and mixed.
    pub fn is_builtin(&self) -> bool {
        matches!(
            self.kind,
            TypeKind::Null
                | TypeKind::Bool
                | TypeKind::I64
                | TypeKind::F64
                | TypeKind::String
                | TypeKind::Map
                | TypeKind::Mixed
        )
    }

    /// The class name of an object type.
    pub fn class_name(&self) -> Option<&str> {
        match &self.kind {
            TypeKind::Object(class) => Some(class),
            _ => None,
        }
    }

    /// The enum name of an enum type.
    pub fn enum_name(&self) -> Option<&str> {
        match &self.kind {
            TypeKind::Enum(name) => Some(name),
            _ => None,
        }
    }

    /// The item type of a list type.
    pub fn list_item(&self) -> Option<&Type> {
        match &self.kind {
            TypeKind::List(item) => Some(item),
            _ => None,
        }
    }

    /// The members of a union type.
    pub fn union_members(&self) -> Option<&TypeUnion> {
        match &self.kind {
            TypeKind::Union(members) => Some(members),
            _ => None,
        }
    }

    /// The name used in diagnostics and by the cast function.
    pub fn name(&self) -> &'static str {
        match &self.kind {
            TypeKind::Null => "Null",
            TypeKind::Bool => "Bool",
            TypeKind::I64 => "I64",
            TypeKind::F64 => "F64",
            TypeKind::String => "String",
            TypeKind::DateTime => "DateTime",
            TypeKind::Uid => "Uid",
            TypeKind::Map => "Map",
            TypeKind::Mixed => "Mixed",
            TypeKind::List(_) => "List",
            TypeKind::Object(_) => "Object",
            TypeKind::Enum(_) => "Enum",
            TypeKind::Union(_) => "Union",
        }
    }

    /// Checks whether `value` has this type's runtime shape.
    ///
    /// `instance_of(class, parent)` answers class-hierarchy questions for
    /// object values. Integers are accepted where floats are expected.
    pub fn is_instance(&self, value: &Value, instance_of: &dyn Fn(&str, &str) -> bool) -> bool {
        if value.is_null() {
            return self.nullable || matches!(self.kind, TypeKind::Null | TypeKind::Mixed);
        }

        match (&self.kind, value) {
            (TypeKind::Mixed, _) => true,
            (TypeKind::Bool, Value::Bool(_)) => true,
            (TypeKind::I64, Value::I64(_)) => true,
            (TypeKind::F64, Value::F64(_) | Value::I64(_)) => true,
            (TypeKind::String, Value::String(_)) => true,
            (TypeKind::DateTime, Value::DateTime(_)) => true,
            (TypeKind::Uid, Value::Uid(_)) => true,
            (TypeKind::Map, Value::Map(_)) => true,
            (TypeKind::Enum(name), Value::Enum(value)) => value.ty == *name,
            (TypeKind::Object(class), Value::Object(object)) => {
                instance_of(object.class(), class)
            }
            (TypeKind::List(item), Value::List(items)) => {
                items.iter().all(|value| item.is_instance(value, instance_of))
            }
            (TypeKind::Union(members), value) => members
                .iter()
                .any(|member| member.is_instance(value, instance_of)),
            _ => false,
        }
    }
}

fn collect_union_member(union: &mut TypeUnion, nullable: &mut bool, ty: Type) {
    match ty.kind {
        TypeKind::Null => *nullable = true,
        TypeKind::Union(members) => {
            *nullable |= ty.nullable;
            for member in members {
                collect_union_member(union, nullable, member);
            }
        }
        kind => {
            *nullable |= ty.nullable;
            union.insert(Type::new(kind));
        }
    }
}

impl From<TypeKind> for Type {
    fn from(kind: TypeKind) -> Type {
        match kind {
            TypeKind::Null => Type::null(),
            kind => Type::new(kind),
        }
    }
}

impl From<&Type> for Type {
    fn from(value: &Type) -> Type {
        value.clone()
    }
}

impl core::fmt::Display for Type {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if self.nullable && !self.is_null() {
            f.write_str("?")?;
        }

        match &self.kind {
            TypeKind::Null => f.write_str("null"),
            TypeKind::Bool => f.write_str("bool"),
            TypeKind::I64 => f.write_str("int"),
            TypeKind::F64 => f.write_str("float"),
            TypeKind::String => f.write_str("string"),
            TypeKind::DateTime => f.write_str("datetime"),
            TypeKind::Uid => f.write_str("uid"),
            TypeKind::Map => f.write_str("array"),
            TypeKind::Mixed => f.write_str("mixed"),
            TypeKind::List(item) => write!(f, "list<{item}>"),
            TypeKind::Object(class) => f.write_str(class),
            TypeKind::Enum(name) => f.write_str(name),
            TypeKind::Union(members) => {
                f.write_str("(")?;
                for (i, member) in members.iter().enumerate() {
                    if i > 0 {
                        f.write_str("|")?;
                    }
                    write!(f, "{member}")?;
                }
                f.write_str(")")
            }
        }
    }
}
