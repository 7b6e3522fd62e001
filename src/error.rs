//! Error types for the Xyston library.
//!
//! All fallible operations return [`Result`], with [`XystonError`] carrying
//! the failure kind. Errors are local and synchronous: they are reported at
//! the call that triggered them and nothing is retried automatically.

use std::io;

use thiserror::Error;

/// The main error type for Xyston operations.
#[derive(Error, Debug)]
pub enum XystonError {
    /// I/O errors (document files, console input).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A document id was negative, already present, or unknown.
    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    /// A document or stop word contained a control character.
    #[error("Invalid word: {0}")]
    InvalidWord(String),

    /// A query token was empty after stripping its minus marker, doubled
    /// the marker, or contained a control character.
    #[error("Invalid query word: {0}")]
    InvalidQueryWord(String),

    /// An nth-id lookup went past the number of indexed documents.
    #[error("Index out of range: {0}")]
    IndexOutOfRange(String),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic anyhow error.
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with [`XystonError`].
pub type Result<T> = std::result::Result<T, XystonError>;

impl XystonError {
    /// Create a new invalid document error.
    pub fn invalid_document<S: Into<String>>(msg: S) -> Self {
        XystonError::InvalidDocument(msg.into())
    }

    /// Create a new invalid word error.
    pub fn invalid_word<S: Into<String>>(msg: S) -> Self {
        XystonError::InvalidWord(msg.into())
    }

    /// Create a new invalid query word error.
    pub fn invalid_query_word<S: Into<String>>(msg: S) -> Self {
        XystonError::InvalidQueryWord(msg.into())
    }

    /// Create a new index out of range error.
    pub fn index_out_of_range<S: Into<String>>(msg: S) -> Self {
        XystonError::IndexOutOfRange(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = XystonError::invalid_document("document id -1 is negative");
        assert_eq!(
            error.to_string(),
            "Invalid document: document id -1 is negative"
        );

        let error = XystonError::invalid_query_word("query word \"-\" is malformed");
        assert_eq!(
            error.to_string(),
            "Invalid query word: query word \"-\" is malformed"
        );

        let error = XystonError::index_out_of_range("document index 3 is out of range");
        assert_eq!(
            error.to_string(),
            "Index out of range: document index 3 is out of range"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = XystonError::from(io_error);

        match error {
            XystonError::Io(_) => {}
            _ => panic!("Expected IO error variant"),
        }
    }
}
