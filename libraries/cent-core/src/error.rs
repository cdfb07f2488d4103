/// Core error types for Cent Player
use thiserror::Error;

/// Result type alias using `CentError`
pub type Result<T> = std::result::Result<T, CentError>;

/// Core error type for Cent Player
#[derive(Error, Debug)]
pub enum CentError {
    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Catalog (remote metadata) errors
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Invalid track record
    #[error("Invalid track {id}: {reason}")]
    InvalidTrack {
        /// Offending track id
        id: String,
        /// What is wrong with it
        reason: String,
    },

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl CentError {
    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Create a catalog error
    pub fn catalog(msg: impl Into<String>) -> Self {
        Self::Catalog(msg.into())
    }

    /// Create an invalid track error
    pub fn invalid_track(id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidTrack {
            id: id.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
