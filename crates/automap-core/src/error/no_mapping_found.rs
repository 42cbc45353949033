use super::Error;

/// Error when no mapper exists, or can be derived, for a (source, target)
/// pair.
///
/// This occurs when:
/// - Both the source and the target are associative arrays
/// - The source is neither an object nor an array
/// - The pair was never registered and automatic registration is disabled
#[derive(Debug)]
pub(super) struct NoMappingFound {
    message: Box<str>,
}

impl std::error::Error for NoMappingFound {}

impl core::fmt::Display for NoMappingFound {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error {
    /// Creates a no mapping found error for a (source, target) pair.
    pub fn no_mapping_found(source: &str, target: &str) -> Error {
        Error::no_mapping_found_with_message(format!(
            "no mapping found for source {source} and target {target}"
        ))
    }

    /// Creates a no mapping found error with a custom message.
    pub fn no_mapping_found_with_message(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::NoMappingFound(NoMappingFound {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is a no mapping found error.
    pub fn is_no_mapping_found(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::NoMappingFound(_))
    }
}
