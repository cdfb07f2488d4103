//! CLI error types

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Storage error: {0}")]
    Storage(#[from] cent_storage::StorageError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] cent_catalog::CatalogError),

    #[error(transparent)]
    Core(#[from] cent_core::CentError),

    #[error("Playback session lock poisoned")]
    SessionPoisoned,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CliError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}
