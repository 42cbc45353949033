use super::*;

/// A node of the procedure tree a mapper is compiled into.
///
/// Transformers build these trees; evaluation is done by
/// [`Expr::eval`](Expr::eval) against a [`Host`] that knows how to run nested
/// mappers and callbacks.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// An argument when the expression is the body of a `Map`
    Arg(ExprArg),

    /// Run statements, then evaluate an expression
    Block(ExprBlock),

    /// Function call: casts, conversion helpers, nested mappers and callbacks
    Call(ExprCall),

    /// Conditional expression
    Cond(ExprCond),

    /// Read a field of an object or a key of an associative array
    Field(ExprField),

    /// Whether a value has the runtime shape of a type
    Is(ExprIs),

    /// Whether an expression is (or is not) null
    IsNull(ExprIsNull),

    /// Apply an expression to each item in a list
    Map(ExprMap),

    /// Evaluates to a constant value
    Value(Value),

    /// Reference a variable declared by a `Let` statement
    Var(ExprVar),
}

impl Expr {
    pub fn null() -> Self {
        Self::Value(Value::Null)
    }

    pub fn is_value_null(&self) -> bool {
        matches!(self, Self::Value(Value::Null))
    }

    /// Returns `true` if evaluating the expression has no effect and costs
    /// nothing, so it can be duplicated freely.
    pub fn is_trivial(&self) -> bool {
        matches!(self, Self::Arg(_) | Self::Var(_) | Self::Value(_))
    }

    pub fn is_arg(&self) -> bool {
        matches!(self, Self::Arg(_))
    }
}

impl Default for Expr {
    fn default() -> Self {
        Self::Value(Value::default())
    }
}

impl From<Value> for Expr {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<bool> for Expr {
    fn from(value: bool) -> Self {
        Self::Value(value.into())
    }
}

impl From<i64> for Expr {
    fn from(value: i64) -> Self {
        Self::Value(value.into())
    }
}

impl From<&str> for Expr {
    fn from(value: &str) -> Self {
        Self::Value(value.into())
    }
}

impl From<String> for Expr {
    fn from(value: String) -> Self {
        Self::Value(value.into())
    }
}
