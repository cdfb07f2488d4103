//! Volume and mute state
//!
//! The stored level is a fraction (nominally 0.0-1.0). Muting is layered over
//! it and never changes the stored level.

/// Volume controller
#[derive(Debug, Clone)]
pub struct Volume {
    /// Stored level, passed through unclamped
    level: f32,

    /// Mute state (preserves volume level)
    muted: bool,
}

impl Volume {
    /// Create new volume controller, unmuted
    pub fn new(level: f32) -> Self {
        Self {
            level,
            muted: false,
        }
    }

    /// Set volume level
    ///
    /// A level of exactly 0 mutes; any other level unmutes.
    pub fn set_level(&mut self, level: f32) {
        self.level = level;
        self.muted = level == 0.0;
    }

    /// Get stored volume level
    pub fn level(&self) -> f32 {
        self.level
    }

    /// Toggle mute state
    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
    }

    /// Check if muted
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Level actually applied to output (0 when muted)
    pub fn effective(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.level
        }
    }

    /// Output level as a transport percentage (0-100)
    ///
    /// Returns 0 when muted, otherwise `round(level * 100)` clamped to 0..=100.
    pub fn percent(&self) -> u8 {
        let scaled = (self.effective() * 100.0).round();
        if scaled.is_nan() {
            return 0;
        }
        scaled.clamp(0.0, 100.0) as u8
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self::new(cent_core::types::DEFAULT_VOLUME)
    }
}
