//! Recently played tracking
//!
//! Maintains a bounded, duplicate-free list of played tracks, most recent
//! first.

use cent_core::Track;
use std::collections::VecDeque;

/// Recently played list with bounded size
///
/// Re-playing a track moves it to the front instead of adding a second
/// entry. When full, the oldest entry is discarded.
#[derive(Debug, Clone)]
pub struct RecentlyPlayed {
    /// History buffer (most recent = front)
    tracks: VecDeque<Track>,

    /// Maximum history size
    max_size: usize,
}

impl RecentlyPlayed {
    /// Create new history with specified maximum size
    pub fn new(max_size: usize) -> Self {
        Self {
            tracks: VecDeque::with_capacity(max_size),
            max_size,
        }
    }

    /// Rebuild history from a stored list (most recent first)
    ///
    /// Later duplicates are dropped and the list is cut to `max_size`.
    pub fn from_tracks(tracks: Vec<Track>, max_size: usize) -> Self {
        let mut history = Self::new(max_size);
        for track in tracks {
            if history.tracks.len() >= max_size {
                break;
            }
            if !history.contains(track.id.as_str()) {
                history.tracks.push_back(track);
            }
        }
        history
    }

    /// Record a track as just played
    pub fn push(&mut self, track: Track) {
        self.tracks.retain(|t| t.id != track.id);
        self.tracks.push_front(track);
        self.tracks.truncate(self.max_size);
    }

    /// Most recently played track
    pub fn latest(&self) -> Option<&Track> {
        self.tracks.front()
    }

    /// Check whether a track id is present
    pub fn contains(&self, id: &str) -> bool {
        self.tracks.iter().any(|t| t.id.as_str() == id)
    }

    /// Get all tracks (most recent first)
    pub fn to_vec(&self) -> Vec<Track> {
        self.tracks.iter().cloned().collect()
    }

    /// Get number of tracks in history
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Check if history is empty
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Get maximum history size
    pub fn max_size(&self) -> usize {
        self.max_size
    }
}

impl Default for RecentlyPlayed {
    fn default() -> Self {
        Self::new(50) // Default: 50 tracks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cent_core::TrackId;

    fn create_test_track(id: &str) -> Track {
        Track::new(TrackId::new(id), format!("Track {}", id), "Test Artist", "3:00", id)
    }

    fn ids(history: &RecentlyPlayed) -> Vec<String> {
        history.to_vec().into_iter().map(|t| t.id.to_string()).collect()
    }

    #[test]
    fn create_history() {
        let history = RecentlyPlayed::new(10);
        assert_eq!(history.max_size(), 10);
        assert_eq!(history.len(), 0);
        assert!(history.is_empty());
    }

    #[test]
    fn push_puts_newest_first() {
        let mut history = RecentlyPlayed::new(10);
        history.push(create_test_track("1"));
        history.push(create_test_track("2"));

        assert_eq!(ids(&history), vec!["2", "1"]);
        assert_eq!(history.latest().map(|t| t.id.as_str()), Some("2"));
    }

    #[test]
    fn replay_moves_to_front_without_growing() {
        let mut history = RecentlyPlayed::new(10);
        history.push(create_test_track("1"));
        history.push(create_test_track("2"));
        history.push(create_test_track("3"));
        history.push(create_test_track("1"));

        assert_eq!(ids(&history), vec!["1", "3", "2"]);
    }

    #[test]
    fn history_max_size() {
        let mut history = RecentlyPlayed::new(3);
        for i in 1..=5 {
            history.push(create_test_track(&i.to_string()));
        }

        assert_eq!(history.len(), 3);
        assert_eq!(ids(&history), vec!["5", "4", "3"]);
    }

    #[test]
    fn from_tracks_dedupes_and_caps() {
        let stored = ["a", "b", "a", "c", "d"]
            .iter()
            .map(|id| create_test_track(id))
            .collect();
        let history = RecentlyPlayed::from_tracks(stored, 3);

        assert_eq!(ids(&history), vec!["a", "b", "c"]);
    }
}
