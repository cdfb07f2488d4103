//! Catalog client configuration.

use std::time::Duration;

/// Default API base URL
pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

/// Configuration for [`YouTubeCatalog`](crate::YouTubeCatalog).
#[derive(Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// API key sent as the `key` query parameter
    pub api_key: String,

    /// API base URL, without trailing slash
    pub base_url: String,

    /// Region for the trending chart
    pub region_code: String,

    /// Page size for trending and search
    pub max_results: u32,

    /// Per-request timeout
    pub timeout: Duration,
}

impl CatalogConfig {
    /// Create a config for the public API with the given key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    /// Point the client at a different base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            region_code: "US".to_string(),
            max_results: 20,
            timeout: Duration::from_secs(30),
        }
    }
}

impl std::fmt::Debug for CatalogConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogConfig")
            .field("api_key", &if self.api_key.is_empty() { "" } else { "<redacted>" })
            .field("base_url", &self.base_url)
            .field("region_code", &self.region_code)
            .field("max_results", &self.max_results)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = CatalogConfig::new("secret");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.region_code, "US");
        assert_eq!(config.max_results, 20);
    }

    #[test]
    fn debug_hides_api_key() {
        let rendered = format!("{:?}", CatalogConfig::new("secret"));
        assert!(!rendered.contains("secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
