/// Core traits for Cent Player
use crate::error::Result;
use crate::types::PersistedPreferences;

/// Durable storage for the persisted preference record
///
/// Implementers store exactly one record under a fixed key.
/// Implementations must be `Send + Sync` so a session can hand them to a
/// background writer.
pub trait PreferenceStore: Send + Sync {
    /// Read the stored record
    ///
    /// Returns `Ok(None)` when nothing has been written yet.
    ///
    /// # Errors
    /// Returns an error if the backing storage cannot be read or decoded
    fn load(&self) -> Result<Option<PersistedPreferences>>;

    /// Replace the stored record
    ///
    /// # Errors
    /// Returns an error if the backing storage cannot be written
    fn save(&self, prefs: &PersistedPreferences) -> Result<()>;
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for std::sync::Arc<S> {
    fn load(&self) -> Result<Option<PersistedPreferences>> {
        (**self).load()
    }

    fn save(&self, prefs: &PersistedPreferences) -> Result<()> {
        (**self).save(prefs)
    }
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for Box<S> {
    fn load(&self) -> Result<Option<PersistedPreferences>> {
        (**self).load()
    }

    fn save(&self, prefs: &PersistedPreferences) -> Result<()> {
        (**self).save(prefs)
    }
}

/// Load the stored record, falling back to defaults
///
/// A missing record and a read failure both yield
/// [`PersistedPreferences::default`]; the failure is logged.
pub fn load_or_default(store: &dyn PreferenceStore) -> PersistedPreferences {
    match store.load() {
        Ok(Some(prefs)) => prefs,
        Ok(None) => {
            tracing::debug!("No stored preferences, using defaults");
            PersistedPreferences::default()
        }
        Err(e) => {
            tracing::warn!(error = %e, "Failed to load preferences, using defaults");
            PersistedPreferences::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CentError;
    use std::sync::Mutex;

    struct FixedStore(Mutex<Option<PersistedPreferences>>);

    impl PreferenceStore for FixedStore {
        fn load(&self) -> Result<Option<PersistedPreferences>> {
            Ok(self.0.lock().unwrap().clone())
        }

        fn save(&self, prefs: &PersistedPreferences) -> Result<()> {
            *self.0.lock().unwrap() = Some(prefs.clone());
            Ok(())
        }
    }

    struct BrokenStore;

    impl PreferenceStore for BrokenStore {
        fn load(&self) -> Result<Option<PersistedPreferences>> {
            Err(CentError::storage("disk on fire"))
        }

        fn save(&self, _prefs: &PersistedPreferences) -> Result<()> {
            Err(CentError::storage("disk on fire"))
        }
    }

    #[test]
    fn missing_record_yields_defaults() {
        let store = FixedStore(Mutex::new(None));
        assert_eq!(load_or_default(&store), PersistedPreferences::default());
    }

    #[test]
    fn stored_record_is_returned() {
        let store = FixedStore(Mutex::new(None));
        let prefs = PersistedPreferences {
            volume: 0.25,
            ..Default::default()
        };
        store.save(&prefs).unwrap();
        assert_eq!(load_or_default(&store).volume, 0.25);
    }

    #[test]
    fn read_failure_yields_defaults() {
        assert_eq!(load_or_default(&BrokenStore), PersistedPreferences::default());
    }

    #[test]
    fn arc_store_delegates() {
        let store = std::sync::Arc::new(FixedStore(Mutex::new(None)));
        store.save(&PersistedPreferences::default()).unwrap();
        assert!(store.load().unwrap().is_some());
    }
}
