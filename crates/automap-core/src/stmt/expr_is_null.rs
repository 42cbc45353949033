use super::Expr;

/// Null test on a value.
///
/// Nullable transformers guard the conversion of a value with
/// `is_not_null(value)` so `null` never reaches the inner conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprIsNull {
    /// Evaluates to `true` for non-null values instead.
    pub negate: bool,

    pub expr: Box<Expr>,
}

impl Expr {
    pub fn is_null(expr: impl Into<Self>) -> Self {
        Self::IsNull(ExprIsNull {
            negate: false,
            expr: Box::new(expr.into()),
        })
    }

    pub fn is_not_null(expr: impl Into<Self>) -> Self {
        Self::IsNull(ExprIsNull {
            negate: true,
            expr: Box::new(expr.into()),
        })
    }
}

impl From<ExprIsNull> for Expr {
    fn from(value: ExprIsNull) -> Self {
        Self::IsNull(value)
    }
}
