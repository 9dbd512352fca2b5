//! Unified error types for casedb.
//!
//! One canonical taxonomy for every store operation. Reads never surface
//! errors (an unreadable store lists as empty); everything here comes from
//! the mutating paths.

use thiserror::Error;

/// All casedb errors.
#[derive(Debug, Error)]
pub enum Error {
    /// Import payload is not parseable JSON, or not a top-level array
    #[error("malformed import: {0}")]
    MalformedImport(String),

    /// The underlying slot could not be read or written
    #[error("storage error: {0}")]
    Storage(String),

    /// I/O error (file import/export)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error on the encode path
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Result type for casedb operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this is a malformed-import error.
    pub fn is_malformed_import(&self) -> bool {
        matches!(self, Error::MalformedImport(_))
    }

    /// Check if this is a persistence failure.
    pub fn is_storage(&self) -> bool {
        matches!(self, Error::Storage(_) | Error::Io(_))
    }
}

// Convert from serde_json errors
impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
