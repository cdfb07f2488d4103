/// Storage-specific errors
use thiserror::Error;

/// Result type alias using `StorageError`
pub type Result<T> = std::result::Result<T, StorageError>;

/// Storage error types
#[derive(Error, Debug)]
pub enum StorageError {
    /// Database error from redb
    #[error(transparent)]
    Database(#[from] redb::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Store refused the operation
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// Background writer has stopped
    #[error("Preference writer has stopped")]
    WriterClosed,

    /// I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl StorageError {
    /// Create an unavailable error
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }

    /// Wrap any redb error
    pub(crate) fn database(err: impl Into<redb::Error>) -> Self {
        Self::Database(err.into())
    }
}

impl From<StorageError> for cent_core::CentError {
    fn from(err: StorageError) -> Self {
        cent_core::CentError::storage(err.to_string())
    }
}
