use super::Error;

/// Error when an existing instance of a read-only class is given as the
/// target to populate.
#[derive(Debug)]
pub(super) struct ReadOnlyTarget {
    class: Box<str>,
}

impl std::error::Error for ReadOnlyTarget {}

impl core::fmt::Display for ReadOnlyTarget {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "cannot populate read-only target {}", self.class)
    }
}

impl Error {
    /// Creates a read-only target error.
    pub fn read_only_target(class: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::ReadOnlyTarget(ReadOnlyTarget {
            class: class.into().into(),
        }))
    }

    /// Returns `true` if this error is a read-only target error.
    pub fn is_read_only_target(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::ReadOnlyTarget(_))
    }
}
