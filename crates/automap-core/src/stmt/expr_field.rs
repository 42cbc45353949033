use super::Expr;

/// Reads a field of an object, or a key of an associative array.
///
/// A missing field, or a `null` base, reads as `null`.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprField {
    pub base: Box<Expr>,
    pub field: String,
}

impl Expr {
    pub fn field(base: impl Into<Self>, field: impl Into<String>) -> Self {
        ExprField {
            base: Box::new(base.into()),
            field: field.into(),
        }
        .into()
    }
}

impl From<ExprField> for Expr {
    fn from(value: ExprField) -> Self {
        Self::Field(value)
    }
}
