use super::Expr;

/// A positional argument placeholder.
///
/// Inside the body of a `Map`, `arg(0)` is the current list item. `nesting`
/// selects an enclosing `Map`: `0` is the innermost one.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct ExprArg {
    /// The zero-based position of the argument.
    pub position: usize,

    /// How many `Map` scopes to walk up before resolving the argument.
    pub nesting: usize,
}

impl Expr {
    pub fn arg(expr_arg: impl Into<ExprArg>) -> Self {
        Self::Arg(expr_arg.into())
    }
}

impl ExprArg {
    pub fn new(position: usize) -> ExprArg {
        ExprArg {
            position,
            nesting: 0,
        }
    }
}

impl From<usize> for ExprArg {
    fn from(value: usize) -> Self {
        ExprArg::new(value)
    }
}

impl From<ExprArg> for Expr {
    fn from(value: ExprArg) -> Self {
        Self::Arg(value)
    }
}
