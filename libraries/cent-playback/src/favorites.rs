//! Favorite tracks

use cent_core::Track;

/// Set of favorite tracks keyed by id, most recently added first
#[derive(Debug, Clone, Default)]
pub struct Favorites {
    tracks: Vec<Track>,
}

impl Favorites {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from a stored list, dropping duplicate ids
    pub fn from_tracks(tracks: Vec<Track>) -> Self {
        let mut favorites = Self::new();
        for track in tracks {
            if !favorites.contains(track.id.as_str()) {
                favorites.tracks.push(track);
            }
        }
        favorites
    }

    /// Insert at the front unless already present
    ///
    /// Returns `true` if the set changed. An existing entry keeps its position.
    pub fn add(&mut self, track: Track) -> bool {
        if self.contains(track.id.as_str()) {
            return false;
        }
        self.tracks.insert(0, track);
        true
    }

    /// Remove by id
    ///
    /// Returns `true` if the set changed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.tracks.len();
        self.tracks.retain(|t| t.id.as_str() != id);
        self.tracks.len() != before
    }

    /// Membership query
    pub fn contains(&self, id: &str) -> bool {
        self.tracks.iter().any(|t| t.id.as_str() == id)
    }

    /// All favorites, most recently added first
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Number of favorites
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Check if there are no favorites
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}
