//! Error types for the comment generation pipeline.
//!
//! Every failure carries the path it happened on so that a single message
//! is enough to locate the offending workbook or output file.

use std::path::Path;
use thiserror::Error;

/// Main error type for colcomment operations.
#[derive(Debug, Error)]
pub enum ColCommentError {
    /// Configuration or validation error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Input discovery pattern could not be compiled
    #[error("Invalid input pattern '{pattern}'")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    /// Workbook could not be opened or its first sheet could not be read
    #[error("Failed to read workbook: {context}")]
    Workbook {
        context: String,
        #[source]
        source: calamine::XlsxError,
    },

    /// Workbook has no worksheet or the first worksheet is empty
    #[error("Workbook {path} has no data in its first worksheet")]
    EmptyWorkbook { path: String },

    /// Required header is missing from the first worksheet
    #[error("Workbook {path} is missing the required '{field}' column")]
    MissingField { path: String, field: String },

    /// I/O operation failed
    #[error("I/O operation failed: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience type alias for Results with ColCommentError
pub type Result<T> = std::result::Result<T, ColCommentError>;

impl ColCommentError {
    /// Creates a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Creates an I/O error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Creates a workbook error for the given file
    pub fn workbook(path: &Path, source: calamine::XlsxError) -> Self {
        Self::Workbook {
            context: path.display().to_string(),
            source,
        }
    }

    /// Creates an empty workbook error
    pub fn empty_workbook(path: &Path) -> Self {
        Self::EmptyWorkbook {
            path: path.display().to_string(),
        }
    }

    /// Creates a missing header error
    pub fn missing_field(path: &Path, field: impl Into<String>) -> Self {
        Self::MissingField {
            path: path.display().to_string(),
            field: field.into(),
        }
    }
}
