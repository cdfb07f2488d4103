//! Cent Player Core
//!
//! Platform-agnostic core types, formatting helpers and persistence traits
//! for Cent Player.
//!
//! This crate provides the building blocks shared by the playback session,
//! the preference store and the catalog client.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Track`, `TrackId`, `PersistedPreferences`
//! - **Formatting**: display durations (`M:SS` / `H:MM:SS`), ISO 8601
//!   durations, abbreviated view counts
//! - **Core Traits**: `PreferenceStore`
//! - **Error Handling**: Unified `CentError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use cent_core::types::{Track, TrackId};
//!
//! let track = Track::new(TrackId::new("abc123"), "Midnight Dreams", "Aurora Sounds", "3:45", "dQw4w9WgXcQ");
//! assert_eq!(track.duration_seconds(), Some(225));
//! assert!(track.validate().is_ok());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod format;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{CentError, Result};
pub use traits::{load_or_default, PreferenceStore};
pub use types::{PersistedPreferences, Track, TrackId, PREFERENCES_KEY};
