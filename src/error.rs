//! Error types for the Vesper library.
//!
//! All errors are represented by the [`VesperError`] enum, which provides
//! detailed information about what went wrong.
//!
//! # Examples
//!
//! ```
//! use vesper::error::{Result, VesperError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(VesperError::other("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Vesper operations.
#[derive(Error, Debug)]
pub enum VesperError {
    /// I/O errors (corpus files, terminal, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Dispatch-related errors (command execution)
    #[error("Dispatch error: {0}")]
    Dispatch(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with VesperError.
pub type Result<T> = std::result::Result<T, VesperError>;

impl VesperError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        VesperError::Analysis(msg.into())
    }

    /// Create a new dispatch error.
    pub fn dispatch<S: Into<String>>(msg: S) -> Self {
        VesperError::Dispatch(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        VesperError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = VesperError::analysis("Test analysis error");
        assert_eq!(error.to_string(), "Analysis error: Test analysis error");

        let error = VesperError::dispatch("Test dispatch error");
        assert_eq!(error.to_string(), "Dispatch error: Test dispatch error");

        let error = VesperError::other("Test other error");
        assert_eq!(error.to_string(), "Error: Test other error");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let vesper_error = VesperError::from(io_error);

        match vesper_error {
            VesperError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
