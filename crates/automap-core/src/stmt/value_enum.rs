/// A case of an enum type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValueEnum {
    /// Name of the enum type
    pub ty: String,

    /// Name of the case
    pub case: String,
}

impl ValueEnum {
    pub fn new(ty: impl Into<String>, case: impl Into<String>) -> ValueEnum {
        ValueEnum {
            ty: ty.into(),
            case: case.into(),
        }
    }
}
