/// Shared application state
use crate::config::CliConfig;
use crate::error::Result;
use cent_catalog::{FallbackCatalog, TrackCatalog, YouTubeCatalog};
use cent_core::PreferenceStore;
use cent_playback::PlaybackSession;
use cent_storage::{RedbPreferenceStore, WriteBehindStore};
use std::sync::Arc;
use tracing::info;

/// Everything a command needs: configuration, catalog and preference store
#[derive(Clone)]
pub struct AppState {
    pub config: CliConfig,
    pub catalog: Arc<dyn TrackCatalog>,
    pub store: Arc<dyn PreferenceStore>,
}

impl AppState {
    /// Build the production wiring from configuration
    ///
    /// Without an API key the catalog serves only the built-in lists.
    /// Preferences go to a redb file behind a background writer.
    pub fn new(config: CliConfig) -> Result<Self> {
        let catalog: Arc<dyn TrackCatalog> = if config.is_offline() {
            info!("No catalog API key configured, using built-in lists");
            Arc::new(FallbackCatalog)
        } else {
            Arc::new(YouTubeCatalog::new(config.catalog_config())?)
        };

        let store = WriteBehindStore::new(RedbPreferenceStore::open(&config.storage.path)?)?;
        info!(path = %config.storage.path.display(), "Preference store opened");

        Ok(Self::with_parts(config, catalog, Arc::new(store)))
    }

    /// Assemble state from explicit parts
    pub fn with_parts(
        config: CliConfig,
        catalog: Arc<dyn TrackCatalog>,
        store: Arc<dyn PreferenceStore>,
    ) -> Self {
        Self {
            config,
            catalog,
            store,
        }
    }

    /// A session restored from the store, writing changes back to it
    pub fn session(&self) -> PlaybackSession {
        PlaybackSession::restore(self.config.session_config(), Arc::clone(&self.store))
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("offline", &self.config.is_offline())
            .field("storage", &self.config.storage.path)
            .finish_non_exhaustive()
    }
}
