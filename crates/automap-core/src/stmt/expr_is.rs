use super::{Expr, Type};

/// Tests whether a value has the runtime shape of `ty`.
///
/// Object values are checked against the class hierarchy, so an instance of
/// a subclass is an instance of its parent.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprIs {
    pub expr: Box<Expr>,
    pub ty: Type,
}

impl Expr {
    pub fn is(expr: impl Into<Self>, ty: impl Into<Type>) -> Self {
        ExprIs {
            expr: Box::new(expr.into()),
            ty: ty.into(),
        }
        .into()
    }
}

impl From<ExprIs> for Expr {
    fn from(value: ExprIs) -> Self {
        Self::Is(value)
    }
}
