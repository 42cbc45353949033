use super::Error;

/// Error when a read-only target property could only be written after
/// construction.
#[derive(Debug)]
pub(super) struct InvalidTargetBinding {
    mapper: Box<str>,
    property: Box<str>,
}

impl std::error::Error for InvalidTargetBinding {}

impl core::fmt::Display for InvalidTargetBinding {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "invalid target binding: {} cannot write read-only property `{}` outside its constructor",
            self.mapper, self.property
        )
    }
}

impl Error {
    /// Creates an invalid target binding error.
    pub fn invalid_target_binding(
        mapper: impl Into<String>,
        property: impl Into<String>,
    ) -> Error {
        Error::from(super::ErrorKind::InvalidTargetBinding(InvalidTargetBinding {
            mapper: mapper.into().into(),
            property: property.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid target binding error.
    pub fn is_invalid_target_binding(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidTargetBinding(_))
    }
}
