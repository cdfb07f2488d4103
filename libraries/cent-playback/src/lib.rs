//! Cent Player - Playback Session
//!
//! Platform-agnostic playback session core for Cent Player.
//!
//! This crate provides:
//! - Current track selection with duration resolution
//! - Cursor-addressed play queue (next / previous with restart rule)
//! - Volume with a non-destructive mute flag
//! - Favorites and a bounded, duplicate-free recently-played list
//! - Write-through of the persisted slice to a `PreferenceStore`
//! - Session events for presentation layers
//! - A cancellable one-second progress ticker
//!
//! # Architecture
//!
//! `cent-playback` does no decoding, streaming or rendering:
//! - Media is driven through the [`PlaybackTransport`] trait
//! - Persistence goes through `cent_core::PreferenceStore`
//! - Nothing reads files, the network or the environment
//!
//! # Example: Basic Playback
//!
//! ```rust
//! use cent_core::{Track, TrackId};
//! use cent_playback::{PlaybackSession, SessionConfig};
//!
//! let mut session = PlaybackSession::new(SessionConfig::default());
//!
//! let tracks: Vec<Track> = ["a", "b", "c"]
//!     .iter()
//!     .map(|id| Track::new(TrackId::new(*id), "Title", "Artist", "3:45", *id))
//!     .collect();
//!
//! session.set_queue(tracks, 1);
//! assert_eq!(session.current_track().map(|t| t.id.as_str()), Some("b"));
//! assert_eq!(session.duration(), 225.0);
//!
//! session.set_progress(5.0);
//! session.play_previous(); // past 3 seconds: restart, stay on "b"
//! assert_eq!(session.progress(), 0.0);
//! assert_eq!(session.queue_index(), 1);
//!
//! session.play_previous(); // now step back
//! assert_eq!(session.queue_index(), 0);
//! ```
//!
//! # Example: Platform Integration
//!
//! ```rust
//! use cent_playback::{PlaybackSession, PlaybackTransport, Result};
//!
//! struct EmbeddedPlayer;
//!
//! impl PlaybackTransport for EmbeddedPlayer {
//!     fn load(&mut self, _source_id: &str) -> Result<()> {
//!         // Hand the id to the embedded player
//!         Ok(())
//!     }
//!     fn play(&mut self) -> Result<()> { Ok(()) }
//!     fn pause(&mut self) -> Result<()> { Ok(()) }
//!     fn seek_to(&mut self, _seconds: f64) -> Result<()> { Ok(()) }
//!     fn set_volume(&mut self, _percent: u8) -> Result<()> { Ok(()) }
//! }
//!
//! let session = PlaybackSession::default().with_transport(Box::new(EmbeddedPlayer));
//! assert!(!session.is_playing());
//! ```

mod error;
mod events;
mod favorites;
mod history;
mod queue;
mod session;
mod ticker;
mod transport;
pub mod types;
mod volume;

// Public exports
pub use error::{PlaybackError, Result};
pub use events::SessionEvent;
pub use favorites::Favorites;
pub use history::RecentlyPlayed;
pub use queue::Queue;
pub use session::PlaybackSession;
pub use ticker::{ProgressTicker, DEFAULT_TICK_INTERVAL};
pub use transport::{PlaybackTransport, RecordingTransport, TransportCommand};
pub use types::{SessionConfig, SessionSnapshot};
pub use volume::Volume;
