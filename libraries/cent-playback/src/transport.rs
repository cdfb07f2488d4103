//! Playback transport abstraction
//!
//! The session does no decoding or streaming. It drives an external playback
//! surface (an embedded video player, a media element, a logging stub)
//! through these commands.

use crate::error::{PlaybackError, Result};
use std::sync::{Arc, Mutex};

/// External playback surface driven by the session
///
/// Implementors forward commands to whatever actually renders media. Position
/// reports travel the other way through
/// [`PlaybackSession::set_progress`](crate::PlaybackSession::set_progress).
pub trait PlaybackTransport: Send {
    /// Load media by its external source id
    fn load(&mut self, source_id: &str) -> Result<()>;

    /// Start or resume playback
    fn play(&mut self) -> Result<()>;

    /// Pause playback
    fn pause(&mut self) -> Result<()>;

    /// Jump to a position in seconds
    fn seek_to(&mut self, seconds: f64) -> Result<()>;

    /// Set output volume (0-100)
    fn set_volume(&mut self, percent: u8) -> Result<()>;
}

/// A command received by [`RecordingTransport`]
#[derive(Debug, Clone, PartialEq)]
pub enum TransportCommand {
    /// `load(source_id)`
    Load(String),
    /// `play()`
    Play,
    /// `pause()`
    Pause,
    /// `seek_to(seconds)`
    SeekTo(f64),
    /// `set_volume(percent)`
    SetVolume(u8),
}

/// Transport that records every command it receives
///
/// Clones share the same log, so a test can keep one handle while the session
/// owns another.
#[derive(Debug, Clone, Default)]
pub struct RecordingTransport {
    commands: Arc<Mutex<Vec<TransportCommand>>>,
    failing: Arc<Mutex<bool>>,
}

impl RecordingTransport {
    /// Create new recording transport
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent command fail (still recorded)
    pub fn set_failing(&self, failing: bool) {
        if let Ok(mut flag) = self.failing.lock() {
            *flag = failing;
        }
    }

    /// Commands received so far
    pub fn commands(&self) -> Vec<TransportCommand> {
        self.commands
            .lock()
            .map(|log| log.clone())
            .unwrap_or_default()
    }

    /// Forget recorded commands
    pub fn clear(&self) {
        if let Ok(mut log) = self.commands.lock() {
            log.clear();
        }
    }

    fn record(&self, command: TransportCommand) -> Result<()> {
        if let Ok(mut log) = self.commands.lock() {
            log.push(command.clone());
        }
        let failing = self.failing.lock().map(|flag| *flag).unwrap_or(false);
        if failing {
            return Err(PlaybackError::transport(format!("{:?} rejected", command)));
        }
        Ok(())
    }
}

impl PlaybackTransport for RecordingTransport {
    fn load(&mut self, source_id: &str) -> Result<()> {
        self.record(TransportCommand::Load(source_id.to_string()))
    }

    fn play(&mut self) -> Result<()> {
        self.record(TransportCommand::Play)
    }

    fn pause(&mut self) -> Result<()> {
        self.record(TransportCommand::Pause)
    }

    fn seek_to(&mut self, seconds: f64) -> Result<()> {
        self.record(TransportCommand::SeekTo(seconds))
    }

    fn set_volume(&mut self, percent: u8) -> Result<()> {
        self.record(TransportCommand::SetVolume(percent))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_log() {
        let transport = RecordingTransport::new();
        let mut owned = transport.clone();

        owned.load("abc").unwrap();
        owned.set_volume(40).unwrap();

        assert_eq!(
            transport.commands(),
            vec![
                TransportCommand::Load("abc".to_string()),
                TransportCommand::SetVolume(40)
            ]
        );
    }

    #[test]
    fn failing_transport_still_records() {
        let transport = RecordingTransport::new();
        transport.set_failing(true);

        let mut owned = transport.clone();
        assert!(owned.play().is_err());
        assert_eq!(transport.commands(), vec![TransportCommand::Play]);
    }
}
