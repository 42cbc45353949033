use super::Expr;

/// Builds a fresh list by evaluating `map` for each item of `base`, in
/// order. Within `map`, `arg(0)` is the current item.
///
/// A `null` base maps to `null`.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprMap {
    /// Expression to map
    pub base: Box<Expr>,

    /// How to map each item
    pub map: Box<Expr>,
}

impl Expr {
    pub fn map(base: impl Into<Self>, map: impl Into<Self>) -> Self {
        ExprMap {
            base: Box::new(base.into()),
            map: Box::new(map.into()),
        }
        .into()
    }
}

impl From<ExprMap> for Expr {
    fn from(value: ExprMap) -> Self {
        Self::Map(value)
    }
}
