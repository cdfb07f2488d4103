//! In-process preference store

use crate::error::StorageError;
use cent_core::{PersistedPreferences, PreferenceStore};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

/// Preference store kept in memory
///
/// Used for ephemeral sessions and tests. [`set_failing`](Self::set_failing)
/// makes every call fail, simulating a full or unavailable disk.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    record: Mutex<Option<PersistedPreferences>>,
    failing: AtomicBool,
    saves: AtomicUsize,
}

impl MemoryPreferenceStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `prefs`
    pub fn with_preferences(prefs: PersistedPreferences) -> Self {
        Self {
            record: Mutex::new(Some(prefs)),
            ..Self::default()
        }
    }

    /// Make subsequent calls fail (or succeed again)
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Number of successful saves
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    fn check(&self) -> cent_core::Result<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(StorageError::unavailable("quota exceeded").into());
        }
        Ok(())
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load(&self) -> cent_core::Result<Option<PersistedPreferences>> {
        self.check()?;
        let record = self
            .record
            .lock()
            .map_err(|_| StorageError::unavailable("store lock poisoned"))?;
        Ok(record.clone())
    }

    fn save(&self, prefs: &PersistedPreferences) -> cent_core::Result<()> {
        self.check()?;
        let mut record = self
            .record
            .lock()
            .map_err(|_| StorageError::unavailable("store lock poisoned"))?;
        *record = Some(prefs.clone());
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
