/// Persisted preference record
use crate::types::Track;
use serde::{Deserialize, Serialize};

/// Fixed storage key for the persisted preference record
pub const PREFERENCES_KEY: &str = "cent-player-storage";

/// Volume used on first run
pub const DEFAULT_VOLUME: f32 = 0.8;

fn default_volume() -> f32 {
    DEFAULT_VOLUME
}

/// The slice of session state that survives restarts
///
/// Current track, transport state, progress, queue and mute flag are not
/// part of it and reset on every start.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedPreferences {
    /// Favorites, most recently added first
    #[serde(default)]
    pub favorites: Vec<Track>,

    /// Recently played, most recent first
    #[serde(default)]
    pub recently_played: Vec<Track>,

    /// Stored volume level
    #[serde(default = "default_volume")]
    pub volume: f32,
}

impl Default for PersistedPreferences {
    fn default() -> Self {
        Self {
            favorites: Vec::new(),
            recently_played: Vec::new(),
            volume: DEFAULT_VOLUME,
        }
    }
}
