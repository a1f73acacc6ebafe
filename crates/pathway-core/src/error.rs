//! Error types for the pathway library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all pathway operations.
#[derive(Error, Debug)]
pub enum PathwayError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Plan not found for the given ID
    #[error("Plan with ID {id} not found")]
    PlanNotFound { id: u64 },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
    /// Text generation endpoint errors
    #[error("Text generation error: {message}")]
    Generation { message: String },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> PathwayError {
        PathwayError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl PathwayError {
    /// Creates a new database error with a context message.
    pub fn database(message: impl Into<String>, source: rusqlite::Error) -> Self {
        Self::Database {
            message: message.into(),
            source,
        }
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a text generation error.
    pub fn generation(message: impl Into<String>) -> Self {
        Self::Generation {
            message: message.into(),
        }
    }

    /// Wraps a blocking task join failure.
    pub(crate) fn join(error: tokio::task::JoinError) -> Self {
        Self::Configuration {
            message: format!("Task join error: {error}"),
        }
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| PathwayError::database(message, e))
    }
}

/// Extension trait mapping HTTP client failures onto generation errors.
pub trait GenerationResultExt<T> {
    /// Map request errors with a message.
    fn generation_context(self, message: &str) -> Result<T>;
}

impl<T> GenerationResultExt<T> for std::result::Result<T, reqwest::Error> {
    fn generation_context(self, message: &str) -> Result<T> {
        self.map_err(|e| PathwayError::generation(format!("{message}: {e}")))
    }
}

/// Result type alias for pathway operations
pub type Result<T> = std::result::Result<T, PathwayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_builder() {
        let err = PathwayError::invalid_input("steps").with_reason("must not be empty");
        assert_eq!(
            err.to_string(),
            "Invalid input for field 'steps': must not be empty"
        );
    }

    #[test]
    fn test_db_context_wraps_source() {
        let result: std::result::Result<(), rusqlite::Error> =
            Err(rusqlite::Error::QueryReturnedNoRows);
        let err = result.db_context("Failed to load plan").unwrap_err();
        assert!(matches!(err, PathwayError::Database { .. }));
        assert!(err.to_string().contains("Failed to load plan"));
    }
}
