use super::{Expr, Type, TypeEnum};

/// A function call.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprCall {
    pub func: Func,
    pub args: Vec<Expr>,
}

/// Functions a procedure can call.
#[derive(Debug, Clone, PartialEq)]
pub enum Func {
    /// Coerce the argument to a builtin type
    Cast(Type),

    /// Format a date/time as a string with the given format
    FormatDateTime(String),

    /// Parse a string into a date/time with the given format
    ParseDateTime(String),

    /// Canonical (hyphenated) string form of an identifier
    UidToString,

    /// Parse a string into an identifier
    UidFromString,

    /// Convert a scalar (or another enum case) into a case of the enum
    EnumFrom(TypeEnum),

    /// Convert a case of the enum into its backing value or name
    EnumTo(TypeEnum),

    /// Run a dependency mapper. Arguments: source value, current target value.
    Mapper(FuncMapper),

    /// Run a named callback. Arguments: source value, current target value.
    Callback(String),
}

/// Call of a dependency mapper for one property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuncMapper {
    /// Name of the dependency, unique within the calling mapper.
    pub name: String,

    /// Source type key of the dependency.
    pub source: String,

    /// Target type key of the dependency.
    pub target: String,

    /// Property being mapped; the nested context is narrowed by it.
    pub property: String,
}

impl Expr {
    pub fn call(func: Func, args: impl IntoIterator<Item = Expr>) -> Self {
        ExprCall {
            func,
            args: args.into_iter().collect(),
        }
        .into()
    }

    pub fn cast(expr: impl Into<Self>, ty: impl Into<Type>) -> Self {
        Self::call(Func::Cast(ty.into()), [expr.into()])
    }

    pub fn call_mapper(func: FuncMapper, source: impl Into<Self>, target: impl Into<Self>) -> Self {
        Self::call(Func::Mapper(func), [source.into(), target.into()])
    }

    pub fn call_callback(name: impl Into<String>, source: impl Into<Self>, target: impl Into<Self>) -> Self {
        Self::call(Func::Callback(name.into()), [source.into(), target.into()])
    }
}

impl Func {
    /// The number of arguments the function takes.
    pub fn arity(&self) -> usize {
        match self {
            Func::Mapper(_) | Func::Callback(_) => 2,
            _ => 1,
        }
    }
}

impl From<ExprCall> for Expr {
    fn from(value: ExprCall) -> Self {
        Self::Call(value)
    }
}
