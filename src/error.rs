//! Error handling for the linear-collections library
//!
//! Every fallible container operation reports one of a small set of
//! conditions: an index outside the operation's valid range, or a
//! pop/peek/dequeue on a container with no elements. Configuration loading
//! adds its own validation and I/O failures.

use thiserror::Error;

/// Main error type for the linear-collections library
#[derive(Error, Debug)]
pub enum CollectionError {
    /// Indexed access outside the valid range
    #[error("Out of range: index {index}, length {len}")]
    OutOfRange {
        /// The rejected index
        index: usize,
        /// Logical length of the container at the time of the call
        len: usize,
    },

    /// Removal or inspection of the front/top of an empty container
    #[error("Empty container: cannot {operation} an empty {container}")]
    EmptyContainer {
        /// Container type name
        container: &'static str,
        /// The operation that was attempted
        operation: &'static str,
    },

    /// A capacity that cannot back a container
    #[error("Invalid capacity {capacity}: {reason}")]
    InvalidCapacity {
        /// The rejected capacity
        capacity: usize,
        /// Why it was rejected
        reason: &'static str,
    },

    /// Configuration or parameter errors
    #[error("Invalid configuration: {message}")]
    Configuration {
        /// Configuration error message
        message: String,
    },

    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CollectionError {
    /// Create an out of range error
    pub fn out_of_range(index: usize, len: usize) -> Self {
        Self::OutOfRange { index, len }
    }

    /// Create an empty container error
    pub fn empty_container(container: &'static str, operation: &'static str) -> Self {
        Self::EmptyContainer {
            container,
            operation,
        }
    }

    /// Create an invalid capacity error
    pub fn invalid_capacity(capacity: usize, reason: &'static str) -> Self {
        Self::InvalidCapacity { capacity, reason }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Check if the caller can reasonably retry with different input
    ///
    /// Bounds and emptiness failures leave the container untouched, so a
    /// caller can retry with a corrected index or after refilling it.
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::OutOfRange { .. } => true,
            Self::EmptyContainer { .. } => true,
            Self::Io(_) => true,
            Self::InvalidCapacity { .. } => false,
            Self::Configuration { .. } => false,
        }
    }

    /// Get the error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            Self::OutOfRange { .. } => "bounds",
            Self::EmptyContainer { .. } => "empty",
            Self::InvalidCapacity { .. } => "capacity",
            Self::Configuration { .. } => "config",
            Self::Io(_) => "io",
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, CollectionError>;

/// Assert that an index addresses a live element (`index < len`)
#[inline]
pub fn check_bounds(index: usize, len: usize) -> Result<()> {
    if index >= len {
        Err(CollectionError::out_of_range(index, len))
    } else {
        Ok(())
    }
}

/// Assert that an index is a valid insertion point (`index <= len`)
#[inline]
pub fn check_insert_bounds(index: usize, len: usize) -> Result<()> {
    if index > len {
        Err(CollectionError::out_of_range(index, len))
    } else {
        Ok(())
    }
}

/// Reject the zero capacity, which cannot hold even the reserved queue slot
#[inline]
pub fn check_capacity(capacity: usize) -> Result<()> {
    if capacity == 0 {
        Err(CollectionError::invalid_capacity(
            capacity,
            "capacity must be at least 1",
        ))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_checking() {
        assert!(check_bounds(5, 10).is_ok());
        assert!(check_bounds(10, 10).is_err());
        assert!(check_bounds(15, 10).is_err());
        assert!(check_bounds(0, 0).is_err());
    }

    #[test]
    fn test_insert_bounds_checking() {
        assert!(check_insert_bounds(0, 0).is_ok());
        assert!(check_insert_bounds(10, 10).is_ok());
        assert!(check_insert_bounds(11, 10).is_err());
        assert!(check_insert_bounds(usize::MAX, 10).is_err());
    }

    #[test]
    fn test_capacity_checking() {
        assert!(check_capacity(1).is_ok());
        assert!(check_capacity(0).is_err());
        assert_eq!(check_capacity(0).unwrap_err().category(), "capacity");
    }

    #[test]
    fn test_error_categories() {
        assert_eq!(CollectionError::out_of_range(3, 2).category(), "bounds");
        assert_eq!(
            CollectionError::empty_container("CircularQueue", "dequeue").category(),
            "empty"
        );
        assert_eq!(CollectionError::configuration("bad").category(), "config");

        let io_err: CollectionError =
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing").into();
        assert_eq!(io_err.category(), "io");
    }

    #[test]
    fn test_recoverable_errors() {
        assert!(CollectionError::out_of_range(1, 0).is_recoverable());
        assert!(CollectionError::empty_container("NodeStack", "pop").is_recoverable());
        assert!(!CollectionError::invalid_capacity(0, "zero").is_recoverable());
        assert!(!CollectionError::configuration("test").is_recoverable());
    }

    #[test]
    fn test_error_display() {
        let bounds_err = CollectionError::out_of_range(10, 5);
        let display = format!("{}", bounds_err);
        assert!(display.contains("Out of range"));
        assert!(display.contains("10"));
        assert!(display.contains("5"));

        let empty_err = CollectionError::empty_container("ArrayStack", "pop");
        let display = format!("{}", empty_err);
        assert_eq!(display, "Empty container: cannot pop an empty ArrayStack");
    }

    #[test]
    fn test_error_debug() {
        let err = CollectionError::configuration("debug test");
        let debug_str = format!("{:?}", err);
        assert!(debug_str.contains("Configuration"));
        assert!(debug_str.contains("debug test"));
    }
}
