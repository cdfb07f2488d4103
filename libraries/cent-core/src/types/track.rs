/// Track domain type
use crate::error::{CentError, Result};
use crate::format::parse_duration;
use crate::types::TrackId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// A playable catalog item
///
/// Tracks are immutable values produced by the catalog. Two tracks are equal
/// when their ids are equal, regardless of the display metadata they carry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    /// Catalog-unique identifier
    pub id: TrackId,

    /// Track title
    pub title: String,

    /// Artist (channel / publisher name)
    pub artist: String,

    /// Best available thumbnail, empty if none
    #[serde(default)]
    pub thumbnail_url: String,

    /// Display duration (`M:SS` or `H:MM:SS`)
    pub duration: String,

    /// External platform identifier handed to the playback transport
    pub source_id: String,

    /// Abbreviated view count (`2.5M`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view_count: Option<String>,

    /// Publication timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
}

impl Track {
    /// Create a new track with the required fields
    pub fn new(
        id: TrackId,
        title: impl Into<String>,
        artist: impl Into<String>,
        duration: impl Into<String>,
        source_id: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            artist: artist.into(),
            thumbnail_url: String::new(),
            duration: duration.into(),
            source_id: source_id.into(),
            view_count: None,
            published_at: None,
        }
    }

    /// Set the thumbnail URL
    #[must_use]
    pub fn with_thumbnail(mut self, url: impl Into<String>) -> Self {
        self.thumbnail_url = url.into();
        self
    }

    /// Set the formatted view count
    #[must_use]
    pub fn with_view_count(mut self, views: impl Into<String>) -> Self {
        self.view_count = Some(views.into());
        self
    }

    /// Set the publication timestamp
    #[must_use]
    pub fn with_published_at(mut self, at: DateTime<Utc>) -> Self {
        self.published_at = Some(at);
        self
    }

    /// Duration in whole seconds, `None` if the display string does not parse
    pub fn duration_seconds(&self) -> Option<u64> {
        parse_duration(&self.duration)
    }

    /// Check the catalog contract
    ///
    /// A valid track has a non-empty id, a non-empty source id and a duration
    /// in `M:SS` or `H:MM:SS` form.
    pub fn validate(&self) -> Result<()> {
        if self.id.is_empty() {
            return Err(CentError::invalid_track(self.id.as_str(), "empty id"));
        }
        if self.source_id.trim().is_empty() {
            return Err(CentError::invalid_track(self.id.as_str(), "empty source id"));
        }
        if self.duration_seconds().is_none() {
            return Err(CentError::invalid_track(
                self.id.as_str(),
                format!("unparsable duration {:?}", self.duration),
            ));
        }
        Ok(())
    }
}

impl PartialEq for Track {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Track {}

impl Hash for Track {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Track {
        Track::new(
            TrackId::new("1"),
            "Midnight Dreams",
            "Aurora Sounds",
            "3:45",
            "dQw4w9WgXcQ",
        )
        .with_thumbnail("https://picsum.photos/seed/music1/400/400")
        .with_view_count("2.5M")
    }

    #[test]
    fn equality_is_by_id() {
        let a = sample();
        let mut b = sample();
        b.title = "Something else".to_string();
        assert_eq!(a, b);

        let c = Track::new(TrackId::new("2"), "Midnight Dreams", "Aurora Sounds", "3:45", "x");
        assert_ne!(a, c);
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["thumbnailUrl"], "https://picsum.photos/seed/music1/400/400");
        assert_eq!(json["sourceId"], "dQw4w9WgXcQ");
        assert_eq!(json["viewCount"], "2.5M");
        assert!(json.get("publishedAt").is_none());
    }

    #[test]
    fn deserializes_minimal_record() {
        let json = r#"{"id":"9","title":"T","artist":"A","duration":"1:02:03","sourceId":"s"}"#;
        let track: Track = serde_json::from_str(json).unwrap();
        assert_eq!(track.thumbnail_url, "");
        assert_eq!(track.view_count, None);
        assert_eq!(track.duration_seconds(), Some(3723));
    }

    #[test]
    fn huge_duration_is_unparsable() {
        let mut track = sample();
        track.duration = "307445734561825861:00".to_string();
        assert_eq!(track.duration_seconds(), None);
        assert!(track.validate().is_err());
    }

    #[test]
    fn validate_accepts_well_formed_track() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn validate_rejects_broken_records() {
        let mut track = sample();
        track.id = TrackId::new("");
        assert!(matches!(track.validate(), Err(CentError::InvalidTrack { .. })));

        let mut track = sample();
        track.source_id = " ".to_string();
        assert!(track.validate().is_err());

        let mut track = sample();
        track.duration = "soon".to_string();
        assert!(track.validate().is_err());
    }
}
