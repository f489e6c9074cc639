//! Calm AI Help error types

use thiserror::Error;

/// Calm AI Help error type
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Durable write of a record or summary line failed
    #[error("Storage error: {0}")]
    Storage(String),

    /// No record with the given id exists for the kind
    #[error("No {kind} record with id '{id}'")]
    NotFound { kind: String, id: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Whether this error means "the record does not exist" rather than a
    /// storage or server fault.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }
}

/// Result type alias for Calm AI Help operations
pub type Result<T> = std::result::Result<T, Error>;
