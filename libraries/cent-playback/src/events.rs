//! Session events
//!
//! Every session mutation records one or more events. Presentation layers
//! drain them with [`PlaybackSession::drain_events`](crate::PlaybackSession::drain_events)
//! and re-render from a snapshot.

use serde::{Deserialize, Serialize};

/// Events emitted by the playback session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// A new track became current
    TrackChanged {
        /// ID of the new (current) track
        track_id: String,
        /// ID of the previous track (if any)
        previous_track_id: Option<String>,
    },

    /// Playing/paused flag changed
    StateChanged {
        /// Whether the session is now playing
        is_playing: bool,
    },

    /// Progress or duration changed
    ProgressChanged {
        /// Position in seconds
        progress: f64,
        /// Duration in seconds
        duration: f64,
    },

    /// Volume or mute changed
    VolumeChanged {
        /// Stored volume level
        level: f32,
        /// Whether output is muted
        is_muted: bool,
    },

    /// Queue contents or cursor changed
    QueueChanged {
        /// New queue length
        length: usize,
        /// Cursor position
        index: usize,
    },

    /// Favorites changed
    FavoritesChanged {
        /// Number of favorites
        count: usize,
    },

    /// Recently played changed
    RecentlyPlayedChanged {
        /// Number of recently played entries
        count: usize,
    },

    /// A transport or persistence failure was swallowed
    Error {
        /// Error message
        message: String,
    },
}
