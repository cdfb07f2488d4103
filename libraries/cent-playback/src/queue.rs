//! Cursor-addressed play queue
//!
//! Navigation moves the cursor without reordering or consuming tracks, so
//! stepping back after stepping forward lands on the same track again.

use cent_core::Track;

/// Ordered play queue with a cursor
///
/// Invariant: `index < tracks.len()` whenever the queue is non-empty, and
/// `index == 0` when it is empty.
#[derive(Debug, Clone, Default)]
pub struct Queue {
    tracks: Vec<Track>,
    index: usize,
}

impl Queue {
    /// Create new empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the queue contents
    ///
    /// Returns the track at `start` if it exists. An out-of-range `start`
    /// leaves the cursor at 0 and returns `None`.
    pub fn set(&mut self, tracks: Vec<Track>, start: usize) -> Option<&Track> {
        self.tracks = tracks;
        if start < self.tracks.len() {
            self.index = start;
            self.tracks.get(start)
        } else {
            self.index = 0;
            None
        }
    }

    /// Append a track to the end
    pub fn push(&mut self, track: Track) {
        self.tracks.push(track);
    }

    /// Remove the track at `index`
    ///
    /// Out-of-range indices are ignored. The cursor keeps pointing at the same
    /// track when an earlier one is removed, and is pulled back when it would
    /// fall off the end.
    pub fn remove(&mut self, index: usize) -> Option<Track> {
        if index >= self.tracks.len() {
            return None;
        }

        let removed = self.tracks.remove(index);

        if index < self.index {
            self.index -= 1;
        }
        if self.index >= self.tracks.len() {
            self.index = self.tracks.len().saturating_sub(1);
        }

        Some(removed)
    }

    /// Remove all tracks and reset the cursor
    pub fn clear(&mut self) {
        self.tracks.clear();
        self.index = 0;
    }

    /// Move the cursor forward, returning the new current track
    pub fn advance(&mut self) -> Option<&Track> {
        if !self.has_next() {
            return None;
        }
        self.index += 1;
        self.tracks.get(self.index)
    }

    /// Move the cursor back, returning the new current track
    pub fn go_back(&mut self) -> Option<&Track> {
        if !self.has_previous() {
            return None;
        }
        self.index -= 1;
        self.tracks.get(self.index)
    }

    /// Whether a track follows the cursor
    pub fn has_next(&self) -> bool {
        self.index + 1 < self.tracks.len()
    }

    /// Whether a track precedes the cursor
    pub fn has_previous(&self) -> bool {
        self.index > 0 && !self.tracks.is_empty()
    }

    /// Track at the cursor
    pub fn current(&self) -> Option<&Track> {
        self.tracks.get(self.index)
    }

    /// Cursor position
    pub fn index(&self) -> usize {
        self.index
    }

    /// All tracks in order
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Number of tracks
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Check if the queue is empty
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cent_core::TrackId;

    fn create_test_track(id: &str) -> Track {
        Track::new(TrackId::new(id), format!("Track {}", id), "Test Artist", "3:00", id)
    }

    fn create_queue(ids: &[&str]) -> Vec<Track> {
        ids.iter().map(|id| create_test_track(id)).collect()
    }

    #[test]
    fn set_positions_cursor() {
        let mut queue = Queue::new();
        let current = queue.set(create_queue(&["a", "b", "c"]), 1).cloned();

        assert_eq!(current.map(|t| t.id), Some(TrackId::new("b")));
        assert_eq!(queue.index(), 1);
        assert_eq!(queue.len(), 3);
    }

    #[test]
    fn set_out_of_range_keeps_tracks_without_current() {
        let mut queue = Queue::new();
        assert!(queue.set(create_queue(&["a", "b"]), 5).is_none());
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.index(), 0);
    }

    #[test]
    fn advance_stops_at_end() {
        let mut queue = Queue::new();
        queue.set(create_queue(&["a", "b"]), 0);

        assert_eq!(queue.advance().map(|t| t.id.as_str()), Some("b"));
        assert!(queue.advance().is_none());
        assert_eq!(queue.index(), 1);
    }

    #[test]
    fn go_back_stops_at_start() {
        let mut queue = Queue::new();
        queue.set(create_queue(&["a", "b"]), 1);

        assert_eq!(queue.go_back().map(|t| t.id.as_str()), Some("a"));
        assert!(queue.go_back().is_none());
        assert_eq!(queue.index(), 0);
    }

    #[test]
    fn remove_before_cursor_keeps_current_track() {
        let mut queue = Queue::new();
        queue.set(create_queue(&["a", "b", "c"]), 2);

        let removed = queue.remove(0);
        assert_eq!(removed.map(|t| t.id), Some(TrackId::new("a")));
        assert_eq!(queue.index(), 1);
        assert_eq!(queue.current().map(|t| t.id.as_str()), Some("c"));
    }

    #[test]
    fn remove_last_pulls_cursor_back() {
        let mut queue = Queue::new();
        queue.set(create_queue(&["a", "b"]), 1);

        queue.remove(1);
        assert_eq!(queue.index(), 0);

        queue.remove(0);
        assert!(queue.is_empty());
        assert_eq!(queue.index(), 0);
    }

    #[test]
    fn remove_out_of_range_is_noop() {
        let mut queue = Queue::new();
        queue.set(create_queue(&["a"]), 0);
        assert!(queue.remove(3).is_none());
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn clear_resets_cursor() {
        let mut queue = Queue::new();
        queue.set(create_queue(&["a", "b", "c"]), 2);
        queue.clear();

        assert!(queue.is_empty());
        assert_eq!(queue.index(), 0);
        assert!(!queue.has_next());
        assert!(!queue.has_previous());
    }
}
