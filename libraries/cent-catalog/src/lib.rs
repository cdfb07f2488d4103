//! Cent Player Catalog
//!
//! Track metadata for Cent Player, fetched from the YouTube Data API v3.
//!
//! # Features
//!
//! - **Browse**: trending chart, new releases, recommendations
//! - **Search**: free-text search with a debounced front end
//! - **Related**: tracks related to the one playing
//! - **Offline**: built-in fallback lists whenever the API fails
//!
//! Callers see only [`TrackCatalog`], whose methods never fail. Every track
//! it returns passes [`Track::validate`](cent_core::Track::validate).
//!
//! # Example
//!
//! ```rust,no_run
//! use cent_catalog::{CatalogConfig, FallbackCatalog, TrackCatalog, YouTubeCatalog};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let catalog: Arc<dyn TrackCatalog> = match std::env::var("CENT_CATALOG__API_KEY") {
//!         Ok(key) => Arc::new(YouTubeCatalog::new(CatalogConfig::new(key))?),
//!         Err(_) => Arc::new(FallbackCatalog),
//!     };
//!
//!     for track in catalog.search("lofi").await {
//!         println!("{} - {}", track.artist, track.title);
//!     }
//!     Ok(())
//! }
//! ```

mod catalog;
mod client;
mod config;
mod debounce;
mod error;
pub mod fallback;
pub mod mapping;
pub mod types;

// Re-export main types
pub use catalog::{FallbackCatalog, TrackCatalog};
pub use client::YouTubeCatalog;
pub use config::{CatalogConfig, DEFAULT_BASE_URL};
pub use debounce::{SearchDebouncer, SearchState, DEFAULT_SEARCH_DEBOUNCE};
pub use error::{CatalogError, Result};
