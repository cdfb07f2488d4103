//! Periodic progress ticker
//!
//! Advances the session's progress by one second per period while it is
//! playing. The ticker is a cancellable tokio task owned by whatever drives
//! playback; dropping the handle stops it.

use crate::session::PlaybackSession;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, warn};

/// Default tick period
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Handle to a running progress ticker
///
/// Each period the task sets progress to `min(progress + 1, duration)` as long
/// as the session is playing, the duration is known and no seek is in
/// progress. The task ends on its own when it finds the session paused.
#[derive(Debug)]
pub struct ProgressTicker {
    handle: JoinHandle<()>,
    seeking: Arc<AtomicBool>,
}

impl ProgressTicker {
    /// Spawn a ticker on the current tokio runtime
    ///
    /// # Panics
    /// Panics if called outside a tokio runtime.
    pub fn spawn(session: Arc<Mutex<PlaybackSession>>, period: Duration) -> Self {
        let seeking = Arc::new(AtomicBool::new(false));
        let task_seeking = Arc::clone(&seeking);

        let handle = tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                interval.tick().await;

                if task_seeking.load(Ordering::Acquire) {
                    continue;
                }

                let Ok(mut state) = session.lock() else {
                    warn!("Session lock poisoned, stopping progress ticker");
                    break;
                };

                if !state.is_playing() {
                    debug!("Session paused, stopping progress ticker");
                    break;
                }

                let duration = state.duration();
                if duration > 0.0 {
                    let next = (state.progress() + 1.0).min(duration);
                    state.set_progress(next);
                }
            }
        });

        Self { handle, seeking }
    }

    /// Suspend or resume ticking while the user drags a progress control
    pub fn set_seeking(&self, seeking: bool) {
        self.seeking.store(seeking, Ordering::Release);
    }

    /// Check whether ticking is suspended
    pub fn is_seeking(&self) -> bool {
        self.seeking.load(Ordering::Acquire)
    }

    /// Stop the ticker
    pub fn cancel(&self) {
        self.handle.abort();
    }

    /// Check whether the task has ended (paused session or cancelled)
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for ProgressTicker {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
