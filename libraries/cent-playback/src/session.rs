//! Playback session - core orchestration
//!
//! Owns current track, transport state, progress, volume, queue, favorites
//! and recently played. Every mutation goes through a method on
//! [`PlaybackSession`]; none of them can fail from the caller's point of view.

use crate::{
    error::PlaybackError,
    events::SessionEvent,
    favorites::Favorites,
    history::RecentlyPlayed,
    queue::Queue,
    transport::PlaybackTransport,
    types::{SessionConfig, SessionSnapshot},
    volume::Volume,
};
use cent_core::{PersistedPreferences, PreferenceStore, Track};
use std::sync::Arc;
use tracing::{debug, warn};

/// Playback session
///
/// Single source of truth for what is playing, what is queued and what the
/// user has marked. Favorites, recently played and volume are written through
/// to the attached [`PreferenceStore`] on every change.
pub struct PlaybackSession {
    config: SessionConfig,

    current_track: Option<Track>,
    is_playing: bool,
    progress: f64,
    duration: f64,

    volume: Volume,
    queue: Queue,
    favorites: Favorites,
    recently_played: RecentlyPlayed,

    transport: Option<Box<dyn PlaybackTransport>>,
    store: Option<Arc<dyn PreferenceStore>>,

    // Event queue for UI synchronization
    pending_events: Vec<SessionEvent>,
}

impl PlaybackSession {
    /// Create a session with first-run state
    pub fn new(config: SessionConfig) -> Self {
        let prefs = PersistedPreferences {
            volume: config.default_volume,
            ..PersistedPreferences::default()
        };
        Self::with_preferences(config, prefs)
    }

    /// Create a session seeded from stored preferences
    pub fn with_preferences(config: SessionConfig, prefs: PersistedPreferences) -> Self {
        let recently_played = RecentlyPlayed::from_tracks(prefs.recently_played, config.history_size);

        Self {
            current_track: None,
            is_playing: false,
            progress: 0.0,
            duration: 0.0,
            volume: Volume::new(prefs.volume),
            queue: Queue::new(),
            favorites: Favorites::from_tracks(prefs.favorites),
            recently_played,
            transport: None,
            store: None,
            pending_events: Vec::new(),
            config,
        }
    }

    /// Create a session from a preference store and keep writing through to it
    ///
    /// A missing record or a read failure starts from defaults.
    pub fn restore(config: SessionConfig, store: Arc<dyn PreferenceStore>) -> Self {
        let first_run = PersistedPreferences {
            volume: config.default_volume,
            ..PersistedPreferences::default()
        };
        let prefs = match store.load() {
            Ok(Some(prefs)) => prefs,
            Ok(None) => first_run,
            Err(e) => {
                warn!(error = %e, "Failed to load preferences, using defaults");
                first_run
            }
        };

        debug!(
            favorites = prefs.favorites.len(),
            recently_played = prefs.recently_played.len(),
            volume = prefs.volume,
            "Restored preferences"
        );

        let mut session = Self::with_preferences(config, prefs);
        session.store = Some(store);
        session
    }

    /// Attach a preference store
    pub fn set_store(&mut self, store: Arc<dyn PreferenceStore>) {
        self.store = Some(store);
    }

    /// Attach a playback transport
    ///
    /// The transport immediately receives the current output volume.
    pub fn set_transport(&mut self, transport: Box<dyn PlaybackTransport>) {
        self.transport = Some(transport);
        let percent = self.volume.percent();
        self.drive_transport("set_volume", |t| t.set_volume(percent));
    }

    /// Builder form of [`set_transport`](Self::set_transport)
    #[must_use]
    pub fn with_transport(mut self, transport: Box<dyn PlaybackTransport>) -> Self {
        self.set_transport(transport);
        self
    }

    // ===== Track Selection =====

    /// Make `track` current and start playing it
    ///
    /// Resets progress, resolves the duration from the track's display
    /// duration (an unparsable one keeps the previous value) and records the
    /// track in recently played. The queue is not touched.
    pub fn set_current_track(&mut self, track: Track) {
        let previous_track_id = self.current_track.as_ref().map(|t| t.id.to_string());

        match track.duration_seconds() {
            Some(secs) => self.duration = secs as f64,
            None => warn!(
                track_id = %track.id,
                duration = %track.duration,
                "Unparsable track duration, keeping previous"
            ),
        }

        let was_playing = self.is_playing;
        self.progress = 0.0;
        self.is_playing = true;

        let track_id = track.id.to_string();
        let source_id = track.source_id.clone();
        self.recently_played.push(track.clone());
        self.current_track = Some(track);

        debug!(track_id = %track_id, source_id = %source_id, "Current track changed");

        self.drive_transport("load", |t| t.load(&source_id));
        self.drive_transport("play", |t| t.play());

        self.emit_track_changed(track_id, previous_track_id);
        if !was_playing {
            self.emit_state_changed();
        }
        self.emit_progress_changed();
        self.emit_recently_played_changed();
        self.persist();
    }

    // ===== Playback Control =====

    /// Start or resume playback
    pub fn play(&mut self) {
        self.drive_transport("play", |t| t.play());
        if !self.is_playing {
            self.is_playing = true;
            self.emit_state_changed();
        }
    }

    /// Pause playback
    pub fn pause(&mut self) {
        self.drive_transport("pause", |t| t.pause());
        if self.is_playing {
            self.is_playing = false;
            self.emit_state_changed();
        }
    }

    /// Toggle between playing and paused
    pub fn toggle_play(&mut self) {
        if self.is_playing {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Record a playback position reported by the transport or ticker
    ///
    /// The value is stored as given; callers own the bounds.
    pub fn set_progress(&mut self, seconds: f64) {
        self.progress = seconds;
        self.emit_progress_changed();
    }

    /// Override the duration of the current track
    pub fn set_duration(&mut self, seconds: f64) {
        self.duration = seconds;
        self.emit_progress_changed();
    }

    /// User seek to an absolute position in seconds (not clamped)
    pub fn seek_to(&mut self, seconds: f64) {
        self.set_progress(seconds);
        self.drive_transport("seek_to", |t| t.seek_to(seconds));
    }

    /// User seek to a fraction of the duration
    ///
    /// The fraction is clamped to 0.0-1.0. Ignored while the duration is
    /// unknown.
    pub fn seek_to_percent(&mut self, fraction: f64) {
        if self.duration.is_nan() || self.duration <= 0.0 {
            debug!("Seek ignored, duration unknown");
            return;
        }
        let fraction = if fraction.is_nan() {
            0.0
        } else {
            fraction.clamp(0.0, 1.0)
        };
        self.seek_to(fraction * self.duration);
    }

    /// Transport reported the end of the current media
    ///
    /// Advances like [`play_next`](Self::play_next); at the end of the queue
    /// playback stops.
    pub fn handle_track_finished(&mut self) {
        if self.queue.has_next() {
            self.play_next();
        } else if self.is_playing {
            debug!("Reached end of queue");
            self.is_playing = false;
            self.emit_state_changed();
        }
    }

    // ===== Volume Control =====

    /// Set volume level
    ///
    /// A level of 0 mutes, anything else unmutes. Out-of-range levels are
    /// stored as given.
    pub fn set_volume(&mut self, level: f32) {
        self.volume.set_level(level);
        let percent = self.volume.percent();
        self.drive_transport("set_volume", |t| t.set_volume(percent));
        self.emit_volume_changed();
        self.persist();
    }

    /// Toggle mute without touching the stored level
    pub fn toggle_mute(&mut self) {
        self.volume.toggle_mute();
        let percent = self.volume.percent();
        self.drive_transport("set_volume", |t| t.set_volume(percent));
        self.emit_volume_changed();
    }

    // ===== Queue Management =====

    /// Replace the queue and start playing `tracks[start_index]`
    ///
    /// An out-of-range start index queues the tracks without activating one
    /// and leaves the cursor at 0, not at `start_index`.
    pub fn set_queue(&mut self, tracks: Vec<Track>, start_index: usize) {
        let current = self.queue.set(tracks, start_index).cloned();
        debug!(length = self.queue.len(), start_index, "Queue replaced");
        self.emit_queue_changed();

        if let Some(track) = current {
            self.set_current_track(track);
        }
    }

    /// Append a track to the queue
    pub fn add_to_queue(&mut self, track: Track) {
        self.queue.push(track);
        self.emit_queue_changed();
    }

    /// Remove the track at `index` (out-of-range indices are ignored)
    pub fn remove_from_queue(&mut self, index: usize) {
        if self.queue.remove(index).is_some() {
            self.emit_queue_changed();
        }
    }

    /// Empty the queue and reset the cursor
    pub fn clear_queue(&mut self) {
        self.queue.clear();
        self.emit_queue_changed();
    }

    /// Advance to the next queued track
    ///
    /// No-op at the end of the queue.
    pub fn play_next(&mut self) {
        let Some(track) = self.queue.advance().cloned() else {
            debug!(index = self.queue.index(), "No next track");
            return;
        };
        self.emit_queue_changed();
        self.set_current_track(track);
    }

    /// Restart the current track or step back in the queue
    ///
    /// Past the restart threshold the current track restarts and the queue
    /// cursor stays put. Otherwise the previous queued track starts; at the
    /// start of the queue this is a no-op.
    pub fn play_previous(&mut self) {
        if self.progress > self.config.restart_threshold_secs {
            debug!(progress = self.progress, "Restarting current track");
            self.progress = 0.0;
            self.drive_transport("seek_to", |t| t.seek_to(0.0));
            self.emit_progress_changed();
            return;
        }

        let Some(track) = self.queue.go_back().cloned() else {
            debug!(index = self.queue.index(), "No previous track");
            return;
        };
        self.emit_queue_changed();
        self.set_current_track(track);
    }

    // ===== Favorites =====

    /// Add a track to favorites (idempotent)
    pub fn add_to_favorites(&mut self, track: Track) {
        let track_id = track.id.to_string();
        if self.favorites.add(track) {
            debug!(track_id = %track_id, "Added to favorites");
            self.emit_favorites_changed();
            self.persist();
        }
    }

    /// Remove a track from favorites (idempotent)
    pub fn remove_from_favorites(&mut self, id: &str) {
        if self.favorites.remove(id) {
            debug!(track_id = %id, "Removed from favorites");
            self.emit_favorites_changed();
            self.persist();
        }
    }

    /// Check whether a track id is a favorite
    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.contains(id)
    }

    // ===== State Queries =====

    /// Get current track
    pub fn current_track(&self) -> Option<&Track> {
        self.current_track.as_ref()
    }

    /// Check if playing
    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    /// Playback position in seconds
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Duration of the current track in seconds
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Stored volume level
    pub fn volume(&self) -> f32 {
        self.volume.level()
    }

    /// Check if muted
    pub fn is_muted(&self) -> bool {
        self.volume.is_muted()
    }

    /// Volume applied to output (0 when muted)
    pub fn effective_volume(&self) -> f32 {
        self.volume.effective()
    }

    /// Queued tracks in order
    pub fn queue(&self) -> &[Track] {
        self.queue.tracks()
    }

    /// Queue cursor
    pub fn queue_index(&self) -> usize {
        self.queue.index()
    }

    /// Check if a queued track follows the cursor
    pub fn has_next(&self) -> bool {
        self.queue.has_next()
    }

    /// Check if a queued track precedes the cursor
    pub fn has_previous(&self) -> bool {
        self.queue.has_previous()
    }

    /// Favorites, most recently added first
    pub fn favorites(&self) -> &[Track] {
        self.favorites.tracks()
    }

    /// Recently played, most recent first
    pub fn recently_played(&self) -> Vec<Track> {
        self.recently_played.to_vec()
    }

    /// Session configuration
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The persisted slice of session state
    pub fn preferences(&self) -> PersistedPreferences {
        PersistedPreferences {
            favorites: self.favorites.tracks().to_vec(),
            recently_played: self.recently_played.to_vec(),
            volume: self.volume.level(),
        }
    }

    /// Copy every observable field
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            current_track: self.current_track.clone(),
            is_playing: self.is_playing,
            progress: self.progress,
            duration: self.duration,
            volume: self.volume.level(),
            is_muted: self.volume.is_muted(),
            queue: self.queue.tracks().to_vec(),
            queue_index: self.queue.index(),
            favorites: self.favorites.tracks().to_vec(),
            recently_played: self.recently_played.to_vec(),
        }
    }

    // ===== Events =====

    /// Drain all pending events
    ///
    /// Returns all events recorded since the last drain.
    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Check if there are pending events
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    // ===== Internals =====

    /// Send a command to the transport, logging and recording failures
    fn drive_transport(
        &mut self,
        command: &'static str,
        op: impl FnOnce(&mut dyn PlaybackTransport) -> crate::Result<()>,
    ) {
        let result = match self.transport.as_mut() {
            Some(transport) => op(&mut **transport),
            None => return,
        };

        if let Err(e) = result {
            warn!(command, error = %e, "Transport command failed");
            self.emit_error(&e);
        }
    }

    /// Write the persisted slice through to the store
    ///
    /// Failures are logged and recorded; in-memory state stays authoritative.
    fn persist(&mut self) {
        let Some(store) = self.store.clone() else {
            return;
        };

        if let Err(e) = store.save(&self.preferences()) {
            let e = PlaybackError::from(e);
            warn!(error = %e, "Failed to persist preferences");
            self.emit_error(&e);
        }
    }

    fn emit_track_changed(&mut self, track_id: String, previous_track_id: Option<String>) {
        self.pending_events.push(SessionEvent::TrackChanged {
            track_id,
            previous_track_id,
        });
    }

    fn emit_state_changed(&mut self) {
        self.pending_events.push(SessionEvent::StateChanged {
            is_playing: self.is_playing,
        });
    }

    fn emit_progress_changed(&mut self) {
        self.pending_events.push(SessionEvent::ProgressChanged {
            progress: self.progress,
            duration: self.duration,
        });
    }

    fn emit_volume_changed(&mut self) {
        self.pending_events.push(SessionEvent::VolumeChanged {
            level: self.volume.level(),
            is_muted: self.volume.is_muted(),
        });
    }

    fn emit_queue_changed(&mut self) {
        self.pending_events.push(SessionEvent::QueueChanged {
            length: self.queue.len(),
            index: self.queue.index(),
        });
    }

    fn emit_favorites_changed(&mut self) {
        self.pending_events.push(SessionEvent::FavoritesChanged {
            count: self.favorites.len(),
        });
    }

    fn emit_recently_played_changed(&mut self) {
        self.pending_events.push(SessionEvent::RecentlyPlayedChanged {
            count: self.recently_played.len(),
        });
    }

    fn emit_error(&mut self, error: &PlaybackError) {
        self.pending_events.push(SessionEvent::Error {
            message: error.to_string(),
        });
    }
}

impl Default for PlaybackSession {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl std::fmt::Debug for PlaybackSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaybackSession")
            .field("current_track", &self.current_track.as_ref().map(|t| &t.id))
            .field("is_playing", &self.is_playing)
            .field("progress", &self.progress)
            .field("duration", &self.duration)
            .field("volume", &self.volume)
            .field("queue_len", &self.queue.len())
            .field("queue_index", &self.queue.index())
            .field("has_transport", &self.transport.is_some())
            .field("has_store", &self.store.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::{RecordingTransport, TransportCommand};
    use cent_core::TrackId;

    fn create_test_track(id: &str) -> Track {
        Track::new(TrackId::new(id), format!("Track {}", id), "Test Artist", "3:00", format!("src-{}", id))
    }

    #[test]
    fn create_session() {
        let session = PlaybackSession::default();
        assert!(session.current_track().is_none());
        assert!(!session.is_playing());
        assert_eq!(session.progress(), 0.0);
        assert_eq!(session.duration(), 0.0);
        assert_eq!(session.volume(), 0.8);
        assert!(!session.is_muted());
        assert!(session.queue().is_empty());
    }

    #[test]
    fn set_current_track_starts_playback() {
        let mut session = PlaybackSession::default();
        session.set_progress(42.0);
        session.set_current_track(create_test_track("a"));

        assert_eq!(session.current_track().map(|t| t.id.as_str()), Some("a"));
        assert!(session.is_playing());
        assert_eq!(session.progress(), 0.0);
        assert_eq!(session.duration(), 180.0);
        assert_eq!(session.recently_played()[0].id.as_str(), "a");
    }

    #[test]
    fn unparsable_duration_keeps_previous() {
        let mut session = PlaybackSession::default();
        session.set_current_track(create_test_track("a"));

        let mut live = create_test_track("b");
        live.duration = "LIVE".to_string();
        session.set_current_track(live);

        assert_eq!(session.duration(), 180.0);
        assert_eq!(session.current_track().map(|t| t.id.as_str()), Some("b"));
    }

    #[test]
    fn overflowing_duration_keeps_previous() {
        let mut session = PlaybackSession::default();
        session.set_current_track(create_test_track("a"));

        let mut broken = create_test_track("b");
        broken.duration = "307445734561825861:00".to_string();
        session.set_current_track(broken);

        assert_eq!(session.duration(), 180.0);
        assert!(session.is_playing());
    }

    #[test]
    fn play_pause_toggle_without_track() {
        let mut session = PlaybackSession::default();
        session.play();
        assert!(session.is_playing());
        session.toggle_play();
        assert!(!session.is_playing());
        session.pause();
        assert!(!session.is_playing());
    }

    #[test]
    fn transport_receives_load_then_play() {
        let transport = RecordingTransport::new();
        let mut session = PlaybackSession::default().with_transport(Box::new(transport.clone()));
        transport.clear();

        session.set_current_track(create_test_track("a"));

        assert_eq!(
            transport.commands(),
            vec![
                TransportCommand::Load("src-a".to_string()),
                TransportCommand::Play
            ]
        );
    }

    #[test]
    fn attaching_transport_syncs_volume() {
        let transport = RecordingTransport::new();
        let _session = PlaybackSession::default().with_transport(Box::new(transport.clone()));
        assert_eq!(transport.commands(), vec![TransportCommand::SetVolume(80)]);
    }

    #[test]
    fn transport_failure_is_swallowed_and_reported() {
        let transport = RecordingTransport::new();
        transport.set_failing(true);
        let mut session = PlaybackSession::default().with_transport(Box::new(transport));
        session.drain_events();

        session.set_current_track(create_test_track("a"));

        assert!(session.is_playing());
        let errors = session
            .drain_events()
            .into_iter()
            .filter(|e| matches!(e, SessionEvent::Error { .. }))
            .count();
        assert_eq!(errors, 2);
    }

    #[test]
    fn seek_to_percent_clamps_fraction() {
        let transport = RecordingTransport::new();
        let mut session = PlaybackSession::default().with_transport(Box::new(transport.clone()));
        session.set_current_track(create_test_track("a"));
        transport.clear();

        session.seek_to_percent(0.5);
        assert_eq!(session.progress(), 90.0);

        session.seek_to_percent(2.0);
        assert_eq!(session.progress(), 180.0);

        session.seek_to_percent(-1.0);
        assert_eq!(session.progress(), 0.0);

        assert_eq!(
            transport.commands(),
            vec![
                TransportCommand::SeekTo(90.0),
                TransportCommand::SeekTo(180.0),
                TransportCommand::SeekTo(0.0)
            ]
        );
    }

    #[test]
    fn seek_to_percent_without_duration_is_ignored() {
        let transport = RecordingTransport::new();
        let mut session = PlaybackSession::default().with_transport(Box::new(transport.clone()));
        transport.clear();

        session.seek_to_percent(0.5);

        assert_eq!(session.progress(), 0.0);
        assert!(transport.commands().is_empty());
        assert!(!session.has_pending_events());
    }

    #[test]
    fn handle_track_finished_advances_then_stops() {
        let mut session = PlaybackSession::default();
        session.set_queue(vec![create_test_track("a"), create_test_track("b")], 0);

        session.handle_track_finished();
        assert_eq!(session.current_track().map(|t| t.id.as_str()), Some("b"));
        assert!(session.is_playing());

        session.handle_track_finished();
        assert_eq!(session.current_track().map(|t| t.id.as_str()), Some("b"));
        assert!(!session.is_playing());
    }

    #[test]
    fn drain_events_clears_queue() {
        let mut session = PlaybackSession::default();
        session.set_volume(0.5);
        assert!(session.has_pending_events());

        let events = session.drain_events();
        assert_eq!(
            events,
            vec![SessionEvent::VolumeChanged {
                level: 0.5,
                is_muted: false
            }]
        );
        assert!(!session.has_pending_events());
    }

    #[test]
    fn snapshot_mirrors_accessors() {
        let mut session = PlaybackSession::default();
        session.set_queue(vec![create_test_track("a"), create_test_track("b")], 1);
        session.add_to_favorites(create_test_track("a"));
        session.toggle_mute();

        let snapshot = session.snapshot();
        assert_eq!(snapshot.current_track.map(|t| t.id), Some(TrackId::new("b")));
        assert_eq!(snapshot.queue_index, 1);
        assert_eq!(snapshot.queue.len(), 2);
        assert_eq!(snapshot.favorites.len(), 1);
        assert!(snapshot.is_muted);
        assert_eq!(snapshot.volume, 0.8);
        assert!(snapshot.is_playing);
    }

    #[test]
    fn effective_volume_is_zero_when_muted() {
        let mut session = PlaybackSession::default();
        session.set_volume(0.7);
        assert_eq!(session.effective_volume(), 0.7);
        session.toggle_mute();
        assert_eq!(session.effective_volume(), 0.0);
        assert_eq!(session.volume(), 0.7);
    }
}
