//! Cent Player CLI Library
//!
//! Wires the catalog, playback session, preference store and a logging
//! transport together behind the `cent` command.
//!
//! This library exposes the core components for testing purposes.

pub mod commands;
pub mod config;
pub mod error;
pub mod state;
pub mod transport;

// Re-export commonly used types for convenience
pub use commands::{PlayOptions, TrackList};
pub use config::CliConfig;
pub use error::{CliError, Result};
pub use state::AppState;
pub use transport::LoggingTransport;
