use thiserror::Error;

/// Error returned when building a [`Vector`][crate::Vector] or [`Matrix`][crate::Matrix] from
/// data whose size is only known at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ShapeError {
    /// The number of supplied elements does not match the number of elements in the target type.
    #[error("expected {expected} elements, found {found}")]
    LengthMismatch { expected: usize, found: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let err = ShapeError::LengthMismatch {
            expected: 9,
            found: 4,
        };
        assert_eq!(err.to_string(), "expected 9 elements, found 4");
    }
}
