//! Buffer Errors
//!
//! Every failure is raised synchronously and leaves the buffer untouched:
//! argument checks and bounds checks run before any byte is consumed or
//! any field is updated.

/// Errors returned by buffer and codec operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// Argument rejected before any state was mutated
    InvalidArgument(String),
    /// A fixed-width read would pass the logical length
    OutOfBounds {
        /// Bytes the read needed
        requested: usize,
        /// Cursor position when the read was attempted
        position: usize,
        /// Logical length of the buffer
        length: usize,
    },
}

impl BufferError {
    /// Shorthand for building an `InvalidArgument`
    pub fn invalid(message: impl Into<String>) -> Self {
        BufferError::InvalidArgument(message.into())
    }

    /// Check if this is a bounds failure
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, BufferError::OutOfBounds { .. })
    }
}

impl std::fmt::Display for BufferError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BufferError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            BufferError::OutOfBounds {
                requested,
                position,
                length,
            } => write!(
                f,
                "attempted to read {} bytes past offset({}) would exceed length({})",
                requested, position, length
            ),
        }
    }
}

impl std::error::Error for BufferError {}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, BufferError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_out_of_bounds() {
        let err = BufferError::OutOfBounds {
            requested: 4,
            position: 2,
            length: 3,
        };
        assert_eq!(
            err.to_string(),
            "attempted to read 4 bytes past offset(2) would exceed length(3)"
        );
        assert!(err.is_out_of_bounds());
    }

    #[test]
    fn test_display_invalid_argument() {
        let err = BufferError::invalid("value is not a uint8: 0x0100");
        assert!(err.to_string().contains("uint8"));
        assert!(!err.is_out_of_bounds());
    }
}
