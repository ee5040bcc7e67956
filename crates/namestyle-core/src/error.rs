//! Error types and handling for naming-style configuration processing
//!
//! Malformed naming configuration is never an error: incomplete rule titles
//! are silently excluded and unrecognized list tokens are dropped during
//! parsing. The variants here cover file I/O and genuine internal invariant
//! violations only.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for naming-style configuration operations
#[derive(Debug, Error)]
pub enum NamestyleError {
    /// Configuration loading or validation errors
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    /// File system I/O errors
    #[error("IO error for path '{path}': {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Generic internal errors that indicate a bug rather than bad input
    #[error("Internal error: {message}")]
    InternalError { message: String },
}

/// Error kind enumeration for categorizing errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Config,
    Io,
    Internal,
}

impl NamestyleError {
    /// Get the error kind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            NamestyleError::ConfigError { .. } => ErrorKind::Config,
            NamestyleError::IoError { .. } => ErrorKind::Io,
            NamestyleError::InternalError { .. } => ErrorKind::Internal,
        }
    }

    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    /// Create an IO error with path context
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::IoError {
            path: path.into(),
            source,
        }
    }

    /// Create an internal error
    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::InternalError {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for NamestyleError {
    fn from(err: std::io::Error) -> Self {
        Self::IoError {
            path: PathBuf::new(),
            source: err,
        }
    }
}
