/// CLI configuration
use crate::error::{CliError, Result};
use cent_catalog::{CatalogConfig, DEFAULT_BASE_URL};
use cent_playback::SessionConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Config file picked up from the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "cent.toml";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CliConfig {
    #[serde(default = "default_catalog")]
    pub catalog: CatalogSettings,

    #[serde(default = "default_storage")]
    pub storage: StorageSettings,

    #[serde(default = "default_playback")]
    pub playback: PlaybackSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogSettings {
    /// Empty means offline: only the built-in lists are served
    #[serde(default)]
    pub api_key: String,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_region_code")]
    pub region_code: String,

    #[serde(default = "default_max_results")]
    pub max_results: u32,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_search_debounce_ms")]
    pub search_debounce_ms: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageSettings {
    #[serde(default = "default_storage_path")]
    pub path: PathBuf,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlaybackSettings {
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,

    #[serde(default = "default_history_size")]
    pub history_size: usize,

    #[serde(default = "default_volume")]
    pub default_volume: f32,

    #[serde(default = "default_restart_threshold_secs")]
    pub restart_threshold_secs: f64,
}

impl CliConfig {
    /// Load configuration from file and environment
    ///
    /// `path` must exist when given. Otherwise `cent.toml` in the working
    /// directory is used if present. `CENT_`-prefixed variables override the
    /// file, with `__` between section and key (`CENT_CATALOG__API_KEY`).
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(CliError::config(format!(
                        "config file not found: {}",
                        path.display()
                    )));
                }
                settings = settings.add_source(config::File::from(path));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        // Override with environment variables (prefixed with CENT_)
        settings = settings.add_source(
            config::Environment::with_prefix("CENT")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| CliError::config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| CliError::config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let base_url = url::Url::parse(&self.catalog.base_url)
            .map_err(|e| CliError::config(format!("catalog.base_url: {}", e)))?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(CliError::config(
                "catalog.base_url must start with http:// or https://",
            ));
        }

        if self.catalog.max_results == 0 || self.catalog.max_results > 50 {
            return Err(CliError::config("catalog.max_results must be in 1..=50"));
        }

        if !(0.0..=1.0).contains(&self.playback.default_volume) {
            return Err(CliError::config(format!(
                "playback.default_volume must be in [0, 1], got {}",
                self.playback.default_volume
            )));
        }

        if self.playback.tick_interval_ms == 0 {
            return Err(CliError::config("playback.tick_interval_ms must be positive"));
        }

        if self.playback.history_size == 0 {
            return Err(CliError::config("playback.history_size must be positive"));
        }

        if !self.playback.restart_threshold_secs.is_finite()
            || self.playback.restart_threshold_secs < 0.0
        {
            return Err(CliError::config(
                "playback.restart_threshold_secs must be a non-negative number",
            ));
        }

        Ok(())
    }

    /// True when no API key is configured
    pub fn is_offline(&self) -> bool {
        self.catalog.api_key.trim().is_empty()
    }

    pub fn catalog_config(&self) -> CatalogConfig {
        CatalogConfig {
            api_key: self.catalog.api_key.clone(),
            base_url: self.catalog.base_url.clone(),
            region_code: self.catalog.region_code.clone(),
            max_results: self.catalog.max_results,
            timeout: Duration::from_secs(self.catalog.timeout_secs),
        }
    }

    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            history_size: self.playback.history_size,
            default_volume: self.playback.default_volume,
            restart_threshold_secs: self.playback.restart_threshold_secs,
        }
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.playback.tick_interval_ms)
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.catalog.search_debounce_ms)
    }
}

// Default values
fn default_catalog() -> CatalogSettings {
    CatalogSettings {
        api_key: String::new(),
        base_url: default_base_url(),
        region_code: default_region_code(),
        max_results: default_max_results(),
        timeout_secs: default_timeout_secs(),
        search_debounce_ms: default_search_debounce_ms(),
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_region_code() -> String {
    "US".to_string()
}

fn default_max_results() -> u32 {
    20
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_search_debounce_ms() -> u64 {
    500
}

fn default_storage() -> StorageSettings {
    StorageSettings {
        path: default_storage_path(),
    }
}

fn default_storage_path() -> PathBuf {
    PathBuf::from("./data/cent.redb")
}

fn default_playback() -> PlaybackSettings {
    PlaybackSettings {
        tick_interval_ms: default_tick_interval_ms(),
        history_size: default_history_size(),
        default_volume: default_volume(),
        restart_threshold_secs: default_restart_threshold_secs(),
    }
}

fn default_tick_interval_ms() -> u64 {
    1000
}

fn default_history_size() -> usize {
    50
}

fn default_volume() -> f32 {
    0.8
}

fn default_restart_threshold_secs() -> f64 {
    3.0
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            catalog: default_catalog(),
            storage: default_storage(),
            playback: default_playback(),
        }
    }
}
