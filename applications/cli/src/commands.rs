//! Command implementations
//!
//! Each command returns data; printing is left to `main`.

use crate::error::{CliError, Result};
use crate::state::AppState;
use crate::transport::LoggingTransport;
use cent_catalog::SearchDebouncer;
use cent_core::format::format_clock;
use cent_core::Track;
use cent_playback::{PlaybackSession, ProgressTicker, SessionEvent, SessionSnapshot};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, info, warn};

/// Catalog lists that can be browsed
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum TrackList {
    Trending,
    NewReleases,
    Recommended,
}

/// Options for [`play`]
#[derive(Debug, Clone)]
pub struct PlayOptions {
    pub list: TrackList,
    /// Search instead of browsing `list`
    pub query: Option<String>,
    pub start: usize,
    /// Playback time to simulate, in ticks
    pub seconds: u64,
    /// Tracks to skip forward after playing
    pub skip: usize,
}

impl Default for PlayOptions {
    fn default() -> Self {
        Self {
            list: TrackList::Trending,
            query: None,
            start: 0,
            seconds: 10,
            skip: 0,
        }
    }
}

// ===== Browse =====

pub async fn fetch_list(state: &AppState, list: TrackList) -> Vec<Track> {
    match list {
        TrackList::Trending => state.catalog.fetch_trending().await,
        TrackList::NewReleases => state.catalog.fetch_new_releases().await,
        TrackList::Recommended => state.catalog.fetch_recommendations().await,
    }
}

/// Search through the debouncer and wait for the settled result
pub async fn search(state: &AppState, query: &str) -> Vec<Track> {
    if query.trim().is_empty() {
        return Vec::new();
    }

    let debouncer = SearchDebouncer::new(Arc::clone(&state.catalog), state.config.search_debounce());
    let mut rx = debouncer.subscribe();
    debouncer.search(query);

    let tracks = match rx.wait_for(|s| !s.loading).await {
        Ok(settled) => settled.tracks.clone(),
        Err(_) => {
            warn!(query, "Search ended without a result");
            Vec::new()
        }
    };
    tracks
}

// ===== Playback =====

/// Queue a list, play it through the logging transport, then skip forward
pub async fn play(state: &AppState, options: PlayOptions) -> Result<SessionSnapshot> {
    let tracks = match options.query.as_deref() {
        Some(query) => search(state, query).await,
        None => fetch_list(state, options.list).await,
    };

    if tracks.is_empty() {
        return Err(CliError::invalid_argument("nothing to play"));
    }
    if options.start >= tracks.len() {
        return Err(CliError::invalid_argument(format!(
            "--start {} is out of range (list has {} tracks)",
            options.start,
            tracks.len()
        )));
    }

    let session = state
        .session()
        .with_transport(Box::new(LoggingTransport::new()));
    let session = Arc::new(Mutex::new(session));

    {
        let mut guard = lock(&session)?;
        guard.set_queue(tracks, options.start);
        report_events(&mut guard);
    }

    let period = state.config.tick_interval();
    let ticker = ProgressTicker::spawn(Arc::clone(&session), period);

    for _ in 0..options.seconds {
        tokio::time::sleep(period).await;

        let mut guard = lock(&session)?;
        if guard.duration() > 0.0 && guard.progress() >= guard.duration() {
            guard.handle_track_finished();
        }
        report_events(&mut guard);

        // The ticker ends by itself once it sees the session paused
        if !guard.is_playing() {
            debug!("Playback stopped");
            break;
        }
    }

    ticker.cancel();

    let mut guard = lock(&session)?;
    for _ in 0..options.skip {
        guard.play_next();
    }
    report_events(&mut guard);

    Ok(guard.snapshot())
}

// ===== Preferences =====

pub fn favorites(state: &AppState) -> Vec<Track> {
    state.session().favorites().to_vec()
}

/// Favorite the track at `index` of a catalog list
pub async fn add_favorite(state: &AppState, list: TrackList, index: usize) -> Result<Track> {
    let tracks = fetch_list(state, list).await;
    let track = tracks.get(index).cloned().ok_or_else(|| {
        CliError::invalid_argument(format!(
            "--index {} is out of range (list has {} tracks)",
            index,
            tracks.len()
        ))
    })?;

    let mut session = state.session();
    session.add_to_favorites(track.clone());
    report_events(&mut session);
    Ok(track)
}

/// Returns false when `id` was not a favorite
pub fn remove_favorite(state: &AppState, id: &str) -> bool {
    let mut session = state.session();
    if !session.is_favorite(id) {
        return false;
    }
    session.remove_from_favorites(id);
    report_events(&mut session);
    true
}

pub fn history(state: &AppState) -> Vec<Track> {
    state.session().recently_played()
}

/// Set and persist the volume level
pub fn set_volume(state: &AppState, level: f32) -> Result<f32> {
    if !(0.0..=1.0).contains(&level) {
        return Err(CliError::invalid_argument(format!(
            "volume must be between 0 and 1, got {}",
            level
        )));
    }

    let mut session = state.session();
    session.set_volume(level);
    report_events(&mut session);
    Ok(session.volume())
}

// ===== Output =====

pub fn format_track_line(position: usize, track: &Track) -> String {
    let views = track
        .view_count
        .as_deref()
        .map(|v| format!(" {} views", v))
        .unwrap_or_default();
    format!(
        "{:>3}. {} - {} [{}]{} ({})",
        position, track.title, track.artist, track.duration, views, track.id
    )
}

pub fn format_snapshot(snapshot: &SessionSnapshot) -> String {
    let now_playing = snapshot.current_track.as_ref().map_or_else(
        || "nothing".to_string(),
        |t| format!("{} - {}", t.title, t.artist),
    );
    let volume = if snapshot.is_muted {
        "muted".to_string()
    } else {
        format!("{:.0}%", snapshot.volume * 100.0)
    };
    let queue = if snapshot.queue.is_empty() {
        "empty".to_string()
    } else {
        format!("{}/{}", snapshot.queue_index + 1, snapshot.queue.len())
    };

    format!(
        "Now playing:     {}\n\
         State:           {}\n\
         Position:        {} / {}\n\
         Volume:          {}\n\
         Queue:           {}\n\
         Favorites:       {}\n\
         Recently played: {}",
        now_playing,
        if snapshot.is_playing { "playing" } else { "paused" },
        format_clock(snapshot.progress),
        format_clock(snapshot.duration),
        volume,
        queue,
        snapshot.favorites.len(),
        snapshot.recently_played.len(),
    )
}

fn lock(session: &Mutex<PlaybackSession>) -> Result<MutexGuard<'_, PlaybackSession>> {
    session.lock().map_err(|_| CliError::SessionPoisoned)
}

fn report_events(session: &mut PlaybackSession) {
    for event in session.drain_events() {
        match &event {
            SessionEvent::TrackChanged { track_id, .. } => {
                if let Some(track) = session.current_track() {
                    info!(track_id = %track_id, title = %track.title, artist = %track.artist, "Now playing");
                }
            }
            SessionEvent::Error { message } => warn!(message = %message, "Session error"),
            other => debug!(event = ?other, "Session event"),
        }
    }
}
