//! Logging playback transport
//!
//! The CLI renders no media. This transport stands in for an embedded player
//! and reports every command it receives through `tracing`.

use cent_playback::{PlaybackTransport, Result};
use tracing::info;

#[derive(Debug, Default)]
pub struct LoggingTransport {
    loaded: Option<String>,
    volume: u8,
}

impl LoggingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Source id of the media last loaded
    pub fn loaded(&self) -> Option<&str> {
        self.loaded.as_deref()
    }

    /// Last volume percent received
    pub fn volume(&self) -> u8 {
        self.volume
    }
}

impl PlaybackTransport for LoggingTransport {
    fn load(&mut self, source_id: &str) -> Result<()> {
        info!(source_id, "Loading media");
        self.loaded = Some(source_id.to_string());
        Ok(())
    }

    fn play(&mut self) -> Result<()> {
        info!(source_id = ?self.loaded, "Play");
        Ok(())
    }

    fn pause(&mut self) -> Result<()> {
        info!(source_id = ?self.loaded, "Pause");
        Ok(())
    }

    fn seek_to(&mut self, seconds: f64) -> Result<()> {
        info!(seconds, "Seek");
        Ok(())
    }

    fn set_volume(&mut self, percent: u8) -> Result<()> {
        info!(percent, "Volume");
        self.volume = percent;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracks_loaded_media_and_volume() {
        let mut transport = LoggingTransport::new();
        transport.load("dQw4w9WgXcQ").unwrap();
        transport.set_volume(80).unwrap();

        assert_eq!(transport.loaded(), Some("dQw4w9WgXcQ"));
        assert_eq!(transport.volume(), 80);
    }
}
