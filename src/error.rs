//! Error types and handling for the SDK logger
//!
//! This module defines the error types used throughout the crate, providing
//! consistent error handling and reporting. The logging calls themselves never
//! surface these errors to the host application; they exist for construction,
//! configuration, and the internally-swallowed file-write path.

use thiserror::Error;

/// Result type alias for logger operations
pub type Result<T> = std::result::Result<T, CioError>;

/// Main error type for the SDK logger
#[derive(Debug, Error)]
pub enum CioError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// File I/O errors
    #[error("I/O error: {message}")]
    Io { message: String },

    /// Log directory resolution errors
    #[error("Storage error: {message}")]
    Storage { message: String },

    /// Serialization/deserialization errors
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// Validation errors
    #[error("Validation error: {field} - {message}")]
    Validation { field: String, message: String },

    /// Generic errors with context
    #[error("Error: {message}")]
    Generic { message: String },
}

impl CioError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        CioError::Config {
            message: message.into(),
        }
    }

    /// Create a new I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        CioError::Io {
            message: message.into(),
        }
    }

    /// Create a new storage error
    pub fn storage<S: Into<String>>(message: S) -> Self {
        CioError::Storage {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(field: S, message: S) -> Self {
        CioError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a new generic error
    pub fn generic<S: Into<String>>(message: S) -> Self {
        CioError::Generic {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for CioError {
    fn from(err: std::io::Error) -> Self {
        CioError::io(err.to_string())
    }
}

impl From<serde_yaml::Error> for CioError {
    fn from(err: serde_yaml::Error) -> Self {
        CioError::Serialization {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = CioError::config("test config error");
        assert!(matches!(err, CioError::Config { .. }));

        let err = CioError::storage("test storage error");
        assert!(matches!(err, CioError::Storage { .. }));

        let err = CioError::validation("field", "test validation error");
        assert!(matches!(err, CioError::Validation { .. }));
    }

    #[test]
    fn test_error_display() {
        let err = CioError::config("test error");
        let error_string = format!("{}", err);
        assert_eq!(error_string, "Configuration error: test error");

        let err = CioError::validation("test_field", "invalid value");
        let error_string = format!("{}", err);
        assert_eq!(error_string, "Validation error: test_field - invalid value");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: CioError = io_err.into();
        assert!(matches!(err, CioError::Io { .. }));
    }
}
