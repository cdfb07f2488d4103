//! Error types for the playback session

use thiserror::Error;

/// Playback errors
///
/// Session operations never surface these to callers; they are logged and
/// recorded as [`SessionEvent::Error`](crate::SessionEvent::Error).
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// Playback transport rejected a command
    #[error("Transport error: {0}")]
    Transport(String),

    /// Preference store failed
    #[error("Persistence error: {0}")]
    Persistence(#[from] cent_core::CentError),
}

impl PlaybackError {
    /// Create a transport error
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
