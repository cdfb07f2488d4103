//! Core types for the playback session

use cent_core::Track;
use serde::{Deserialize, Serialize};

/// Configuration for the playback session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Maximum recently-played size (default: 50)
    pub history_size: usize,

    /// Volume used when no stored preferences exist (default: 0.8)
    pub default_volume: f32,

    /// `play_previous` restarts the current track past this position
    /// instead of stepping back (default: 3.0 seconds)
    pub restart_threshold_secs: f64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            history_size: 50,
            default_volume: cent_core::types::DEFAULT_VOLUME,
            restart_threshold_secs: 3.0,
        }
    }
}

/// Point-in-time copy of every observable session field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    /// Track considered current, if any
    pub current_track: Option<Track>,

    /// Transport state
    pub is_playing: bool,

    /// Playback position in seconds
    pub progress: f64,

    /// Duration of the current track in seconds (0 until known)
    pub duration: f64,

    /// Stored volume level
    pub volume: f32,

    /// Mute flag layered over the stored volume
    pub is_muted: bool,

    /// Play queue
    pub queue: Vec<Track>,

    /// Queue cursor
    pub queue_index: usize,

    /// Favorites, most recently added first
    pub favorites: Vec<Track>,

    /// Recently played, most recent first
    pub recently_played: Vec<Track>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = SessionConfig::default();
        assert_eq!(config.history_size, 50);
        assert_eq!(config.default_volume, 0.8);
        assert_eq!(config.restart_threshold_secs, 3.0);
    }
}
