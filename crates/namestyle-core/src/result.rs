//! Result type alias for naming-style configuration operations

use crate::error::NamestyleError;

/// Standard Result type for naming-style configuration operations
pub type Result<T> = std::result::Result<T, NamestyleError>;
