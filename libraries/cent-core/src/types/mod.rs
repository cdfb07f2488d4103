mod ids;
mod preferences;
mod track;

pub use ids::TrackId;
pub use preferences::{PersistedPreferences, DEFAULT_VOLUME, PREFERENCES_KEY};
pub use track::Track;
