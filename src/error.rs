//! Error handling for the advanced-vector library
//!
//! Resource failures (allocation) and contract failures (checked positions,
//! empty slot access, bad configuration) are reported through [`VectorError`].
//! Failures raised by element code itself (`Clone`, `Default`, constructor
//! closures) are panics; the containers roll back on unwind instead.

use thiserror::Error;

/// Main error type for the advanced-vector library
#[derive(Error, Debug)]
pub enum VectorError {
    /// Memory allocation failures, including capacity overflow
    #[error("Memory allocation failed: requested {size} bytes")]
    OutOfMemory {
        /// Number of bytes requested
        size: usize,
    },

    /// Index or position outside the live range
    #[error("Out of bounds: index {index}, size {size}")]
    OutOfBounds {
        /// The invalid index
        index: usize,
        /// The valid size/length
        size: usize,
    },

    /// Checked access to an empty [`SingleSlot`](crate::SingleSlot)
    #[error("Bad optional access")]
    BadOptionalAccess,

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

impl VectorError {
    /// Create an out of memory error
    pub fn out_of_memory(size: usize) -> Self {
        Self::OutOfMemory { size }
    }

    /// Create an out of bounds error
    pub fn out_of_bounds(index: usize, size: usize) -> Self {
        Self::OutOfBounds { index, size }
    }

    /// Create a bad optional access error
    pub fn bad_optional_access() -> Self {
        Self::BadOptionalAccess
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Short category tag used in log messages
    pub fn category(&self) -> &'static str {
        match self {
            Self::OutOfMemory { .. } => "memory",
            Self::OutOfBounds { .. } => "bounds",
            Self::BadOptionalAccess => "access",
            Self::Configuration { .. } => "config",
            Self::Io(_) => "io",
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, VectorError>;

/// Assert that an index addresses a live element
#[inline]
pub fn check_bounds(index: usize, size: usize) -> Result<()> {
    if index >= size {
        Err(VectorError::out_of_bounds(index, size))
    } else {
        Ok(())
    }
}

/// Assert that a position is a valid insertion point, `end` included
#[inline]
pub fn check_position(index: usize, size: usize) -> Result<()> {
    if index > size {
        Err(VectorError::out_of_bounds(index, size))
    } else {
        Ok(())
    }
}
