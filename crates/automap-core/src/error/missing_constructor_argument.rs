use super::Error;

/// Error when a target cannot be constructed because a required constructor
/// argument has no mapped value, no default and is not nullable.
#[derive(Debug)]
pub(super) struct MissingConstructorArgument {
    class: Box<str>,
    param: Box<str>,
}

impl std::error::Error for MissingConstructorArgument {}

impl core::fmt::Display for MissingConstructorArgument {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "cannot create an instance of {}: constructor argument `{}` is missing",
            self.class, self.param
        )
    }
}

impl Error {
    /// Creates a missing constructor argument error.
    pub fn missing_constructor_argument(
        class: impl Into<String>,
        param: impl Into<String>,
    ) -> Error {
        Error::from(super::ErrorKind::MissingConstructorArgument(
            MissingConstructorArgument {
                class: class.into().into(),
                param: param.into().into(),
            },
        ))
    }

    /// Returns `true` if this error is a missing constructor argument error.
    pub fn is_missing_constructor_argument(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::MissingConstructorArgument(_))
    }
}
