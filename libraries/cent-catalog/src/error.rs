//! Error types for the catalog client.

use thiserror::Error;

/// Errors that can occur when talking to the video platform API.
///
/// The [`TrackCatalog`](crate::TrackCatalog) methods never return these;
/// they degrade to fallback lists. The `try_*` methods on
/// [`YouTubeCatalog`](crate::YouTubeCatalog) expose them.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// API host could not be reached or timed out
    #[error("Catalog unreachable: {0}")]
    Unreachable(String),

    /// API returned an error response
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Failed to parse API response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// API returned no usable items
    #[error("Empty result set")]
    EmptyResult,

    /// Invalid API base URL
    #[error("Invalid base URL: {0}")]
    InvalidUrl(String),
}

impl From<CatalogError> for cent_core::CentError {
    fn from(err: CatalogError) -> Self {
        cent_core::CentError::catalog(err.to_string())
    }
}

/// Result type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
