//! Wire types for the YouTube Data API v3 responses
//!
//! Only the fields the catalog reads are modeled. Everything is defaulted so
//! a partial response still deserializes; missing pieces are handled during
//! mapping.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Response of the `search` endpoint
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchListResponse {
    #[serde(default)]
    pub items: Vec<SearchItem>,
}

/// One `search` result
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchItem {
    #[serde(default)]
    pub id: SearchItemId,
    #[serde(default)]
    pub snippet: Snippet,
}

/// Identifier block of a `search` result
///
/// Channel and playlist results carry no `videoId`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchItemId {
    #[serde(default)]
    pub video_id: Option<String>,
}

/// Response of the `videos` endpoint
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoListResponse {
    #[serde(default)]
    pub items: Vec<VideoItem>,
}

/// One `videos` result
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoItem {
    pub id: String,
    #[serde(default)]
    pub snippet: Snippet,
    #[serde(default)]
    pub content_details: ContentDetails,
    #[serde(default)]
    pub statistics: Statistics,
}

/// Descriptive metadata shared by both endpoints
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snippet {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub channel_title: String,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub thumbnails: Thumbnails,
}

/// Available thumbnail renditions
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Thumbnails {
    pub default: Option<Thumbnail>,
    pub medium: Option<Thumbnail>,
    pub high: Option<Thumbnail>,
    pub standard: Option<Thumbnail>,
    pub maxres: Option<Thumbnail>,
}

/// A single thumbnail rendition
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Thumbnail {
    #[serde(default)]
    pub url: String,
}

/// `contentDetails` part of a video
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentDetails {
    /// ISO 8601 duration, e.g. `PT4M13S`
    #[serde(default)]
    pub duration: Option<String>,
}

/// `statistics` part of a video
///
/// Counts arrive as decimal strings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    #[serde(default)]
    pub view_count: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_search_response_without_video_id() {
        let json = r#"{
            "items": [
                {"id": {"kind": "youtube#video", "videoId": "abc"}, "snippet": {"title": "A", "channelTitle": "B"}},
                {"id": {"kind": "youtube#channel", "channelId": "xyz"}, "snippet": {"title": "C"}}
            ]
        }"#;

        let response: SearchListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.items.len(), 2);
        assert_eq!(response.items[0].id.video_id.as_deref(), Some("abc"));
        assert!(response.items[1].id.video_id.is_none());
    }

    #[test]
    fn missing_items_is_empty() {
        let response: VideoListResponse = serde_json::from_str("{}").unwrap();
        assert!(response.items.is_empty());
    }

    #[test]
    fn parses_video_parts() {
        let json = r#"{
            "id": "dQw4w9WgXcQ",
            "snippet": {
                "title": "Song",
                "channelTitle": "Artist",
                "publishedAt": "2024-03-01T12:00:00Z",
                "thumbnails": {"high": {"url": "https://i.ytimg.com/hq.jpg", "width": 480}}
            },
            "contentDetails": {"duration": "PT3M45S"},
            "statistics": {"viewCount": "2500000"}
        }"#;

        let video: VideoItem = serde_json::from_str(json).unwrap();
        assert_eq!(video.content_details.duration.as_deref(), Some("PT3M45S"));
        assert_eq!(video.statistics.view_count.as_deref(), Some("2500000"));
        assert!(video.snippet.published_at.is_some());
        assert_eq!(video.snippet.thumbnails.high.unwrap().url, "https://i.ytimg.com/hq.jpg");
    }
}
