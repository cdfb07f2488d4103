//! Command tests
//!
//! Run against the built-in catalog and an in-memory preference store, with
//! tokio's paused clock so simulated playback finishes instantly.

use cent_catalog::FallbackCatalog;
use cent_cli::commands::{self, PlayOptions, TrackList};
use cent_cli::{AppState, CliConfig, CliError};
use cent_core::{PersistedPreferences, PreferenceStore};
use cent_storage::MemoryPreferenceStore;
use std::sync::Arc;

fn create_state() -> (AppState, Arc<MemoryPreferenceStore>) {
    let store = Arc::new(MemoryPreferenceStore::new());
    let state = AppState::with_parts(CliConfig::default(), Arc::new(FallbackCatalog), store.clone());
    (state, store)
}

fn stored(store: &MemoryPreferenceStore) -> PersistedPreferences {
    store.load().unwrap().unwrap_or_default()
}

// ===== Browse =====

#[tokio::test]
async fn lists_come_from_catalog() {
    let (state, _store) = create_state();

    assert_eq!(commands::fetch_list(&state, TrackList::Trending).await.len(), 6);
    assert_eq!(commands::fetch_list(&state, TrackList::NewReleases).await.len(), 4);
    assert_eq!(commands::fetch_list(&state, TrackList::Recommended).await.len(), 4);
}

#[tokio::test(start_paused = true)]
async fn search_waits_for_debounced_result() {
    let (state, _store) = create_state();

    let tracks = commands::search(&state, "jazz").await;
    assert_eq!(tracks.len(), 6);
    assert_eq!(tracks[0].title, "jazz - Midnight Dreams");

    assert!(commands::search(&state, "  ").await.is_empty());
}

// ===== Playback =====

#[tokio::test(start_paused = true)]
async fn play_advances_progress() {
    let (state, store) = create_state();

    let snapshot = commands::play(
        &state,
        PlayOptions {
            start: 1,
            seconds: 5,
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let current = snapshot.current_track.unwrap();
    assert_eq!(current.title, "Golden Hour");
    assert_eq!(snapshot.duration, 252.0);
    assert!(snapshot.progress >= 4.0 && snapshot.progress <= 5.0);
    assert!(snapshot.is_playing);
    assert_eq!(snapshot.queue.len(), 6);

    let prefs = stored(&store);
    assert_eq!(prefs.recently_played[0].title, "Golden Hour");
}

#[tokio::test(start_paused = true)]
async fn play_stops_at_end_of_queue() {
    let (state, _store) = create_state();

    let snapshot = commands::play(
        &state,
        PlayOptions {
            start: 5,
            seconds: 400,
            ..Default::default()
        },
    )
    .await
    .unwrap();

    assert!(!snapshot.is_playing);
    assert_eq!(snapshot.queue_index, 5);
    assert_eq!(snapshot.progress, 273.0);
}

#[tokio::test(start_paused = true)]
async fn play_rolls_into_next_track() {
    let (state, _store) = create_state();

    // "Fresh Start" is 3:21
    let snapshot = commands::play(
        &state,
        PlayOptions {
            list: TrackList::NewReleases,
            seconds: 210,
            ..Default::default()
        },
    )
    .await
    .unwrap();

    assert_eq!(snapshot.queue_index, 1);
    assert_eq!(snapshot.current_track.unwrap().title, "Digital Dreams");
    assert_eq!(snapshot.recently_played.len(), 2);

    // One ticker drives both tracks
    assert!(snapshot.is_playing);
    assert!(snapshot.progress >= 7.0);
}

#[tokio::test(start_paused = true)]
async fn play_then_skip_records_history() {
    let (state, store) = create_state();

    let snapshot = commands::play(
        &state,
        PlayOptions {
            seconds: 0,
            skip: 2,
            ..Default::default()
        },
    )
    .await
    .unwrap();

    assert_eq!(snapshot.queue_index, 2);
    assert_eq!(snapshot.current_track.unwrap().title, "Electric Pulse");

    let history = commands::history(&state);
    let titles: Vec<_> = history.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, ["Electric Pulse", "Golden Hour", "Midnight Dreams"]);
    assert_eq!(stored(&store).recently_played.len(), 3);
}

#[tokio::test(start_paused = true)]
async fn play_search_results() {
    let (state, _store) = create_state();

    let snapshot = commands::play(
        &state,
        PlayOptions {
            query: Some("lofi".to_string()),
            seconds: 0,
            ..Default::default()
        },
    )
    .await
    .unwrap();

    assert_eq!(snapshot.current_track.unwrap().id.as_str(), "fallback-lofi-1");
}

#[tokio::test]
async fn play_rejects_out_of_range_start() {
    let (state, _store) = create_state();

    let result = commands::play(
        &state,
        PlayOptions {
            start: 6,
            ..Default::default()
        },
    )
    .await;

    assert!(matches!(result, Err(CliError::InvalidArgument(_))));
}

// ===== Preferences =====

#[tokio::test]
async fn favorites_add_and_remove() {
    let (state, store) = create_state();

    let track = commands::add_favorite(&state, TrackList::Recommended, 2).await.unwrap();
    assert_eq!(track.title, "Sunset Boulevard");

    // Adding twice keeps a single entry
    commands::add_favorite(&state, TrackList::Recommended, 2).await.unwrap();
    assert_eq!(commands::favorites(&state).len(), 1);
    assert_eq!(stored(&store).favorites[0].id.as_str(), "13");

    assert!(commands::remove_favorite(&state, "13"));
    assert!(!commands::remove_favorite(&state, "13"));
    assert!(commands::favorites(&state).is_empty());
    assert!(stored(&store).favorites.is_empty());
}

#[tokio::test]
async fn favorite_index_out_of_range() {
    let (state, _store) = create_state();

    let result = commands::add_favorite(&state, TrackList::NewReleases, 4).await;
    assert!(matches!(result, Err(CliError::InvalidArgument(_))));
}

#[test]
fn volume_is_persisted() {
    let (state, store) = create_state();

    assert_eq!(commands::set_volume(&state, 0.25).unwrap(), 0.25);
    assert_eq!(stored(&store).volume, 0.25);

    // A fresh session picks it up
    assert_eq!(state.session().volume(), 0.25);
}

#[test]
fn volume_out_of_range_is_rejected() {
    let (state, store) = create_state();

    assert!(commands::set_volume(&state, 1.5).is_err());
    assert!(commands::set_volume(&state, -0.1).is_err());
    assert_eq!(store.save_count(), 0);
}
