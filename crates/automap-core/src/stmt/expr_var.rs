use super::Expr;

/// A reference to a variable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExprVar {
    pub name: String,
}

impl Expr {
    pub fn var(name: impl Into<String>) -> Self {
        ExprVar::new(name).into()
    }
}

impl ExprVar {
    pub fn new(name: impl Into<String>) -> ExprVar {
        ExprVar { name: name.into() }
    }
}

impl From<ExprVar> for Expr {
    fn from(value: ExprVar) -> Self {
        Self::Var(value)
    }
}

impl From<&ExprVar> for Expr {
    fn from(value: &ExprVar) -> Self {
        Self::Var(value.clone())
    }
}
