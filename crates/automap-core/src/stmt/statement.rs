use super::{Expr, ExprVar};

/// A statement of a procedure.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// Evaluate an expression and bind the result to a variable
    Let(Let),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Let {
    pub var: ExprVar,
    pub expr: Expr,
}

impl Statement {
    pub fn let_(var: impl Into<ExprVar>, expr: impl Into<Expr>) -> Statement {
        Let {
            var: var.into(),
            expr: expr.into(),
        }
        .into()
    }
}

impl From<Let> for Statement {
    fn from(value: Let) -> Self {
        Statement::Let(value)
    }
}

impl From<&str> for ExprVar {
    fn from(value: &str) -> Self {
        ExprVar::new(value)
    }
}

impl From<String> for ExprVar {
    fn from(value: String) -> Self {
        ExprVar::new(value)
    }
}
