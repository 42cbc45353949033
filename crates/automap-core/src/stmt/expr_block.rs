use super::{Expr, Statement};

/// Executes `statements` in order, then evaluates `expr`.
///
/// Variables declared by the statements are visible to `expr` only.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprBlock {
    pub statements: Vec<Statement>,
    pub expr: Box<Expr>,
}

impl Expr {
    /// Wraps `expr` in a block. Returns `expr` unchanged when there are no
    /// statements.
    pub fn block(statements: Vec<Statement>, expr: impl Into<Self>) -> Self {
        let expr = expr.into();

        if statements.is_empty() {
            return expr;
        }

        ExprBlock {
            statements,
            expr: Box::new(expr),
        }
        .into()
    }
}

impl From<ExprBlock> for Expr {
    fn from(value: ExprBlock) -> Self {
        Self::Block(value)
    }
}
