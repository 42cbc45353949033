use super::Error;

/// Error when a union target resolves to more than one viable transformer.
///
/// This is raised while compiling a mapper, never while mapping. The pair
/// being compiled is not cached, so a later attempt with more configuration
/// (for example a callback for the property) may succeed.
#[derive(Debug)]
pub(super) struct AmbiguousMapping {
    mapper: Box<str>,
    property: Box<str>,
    candidates: Vec<String>,
}

impl std::error::Error for AmbiguousMapping {}

impl core::fmt::Display for AmbiguousMapping {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "ambiguous mapping: {} property `{}` can be mapped to any of [{}]",
            self.mapper,
            self.property,
            self.candidates.join(", ")
        )
    }
}

impl Error {
    /// Creates an ambiguous mapping error.
    pub fn ambiguous_mapping(
        mapper: impl Into<String>,
        property: impl Into<String>,
        candidates: Vec<String>,
    ) -> Error {
        Error::from(super::ErrorKind::AmbiguousMapping(AmbiguousMapping {
            mapper: mapper.into().into(),
            property: property.into().into(),
            candidates,
        }))
    }

    /// Returns `true` if this error is an ambiguous mapping error.
    pub fn is_ambiguous_mapping(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::AmbiguousMapping(_))
    }
}
