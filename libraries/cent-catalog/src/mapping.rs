//! Conversion from API items into [`Track`]s
//!
//! Every track leaving this module has passed [`Track::validate`]; items
//! that cannot produce a playable track are dropped with a debug log.

use crate::types::{SearchItem, Statistics, Thumbnails, VideoItem};
use cent_core::format::{format_iso8601_duration, format_view_count_str};
use cent_core::{Track, TrackId};
use std::collections::HashMap;
use tracing::debug;

/// Duration shown when the API gives none
pub const UNKNOWN_DURATION: &str = "0:00";

/// Duration and views fetched separately for search results
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoDetails {
    /// Display duration (`M:SS` or `H:MM:SS`)
    pub duration: String,
    /// Display view count (`2.5M`)
    pub views: String,
}

impl Default for VideoDetails {
    fn default() -> Self {
        Self {
            duration: UNKNOWN_DURATION.to_string(),
            views: "0".to_string(),
        }
    }
}

impl VideoDetails {
    /// Build from the `contentDetails` and `statistics` parts of a video
    pub fn from_video(video: &VideoItem) -> Self {
        Self {
            duration: video
                .content_details
                .duration
                .as_deref()
                .map_or_else(|| UNKNOWN_DURATION.to_string(), format_iso8601_duration),
            views: format_views(&video.statistics),
        }
    }
}

/// Index a `videos` response by video id
pub fn details_by_id(videos: &[VideoItem]) -> HashMap<String, VideoDetails> {
    videos
        .iter()
        .map(|video| (video.id.clone(), VideoDetails::from_video(video)))
        .collect()
}

/// Pick the largest available thumbnail, or an empty string
pub fn best_thumbnail(thumbnails: &Thumbnails) -> String {
    [
        &thumbnails.maxres,
        &thumbnails.standard,
        &thumbnails.high,
        &thumbnails.medium,
        &thumbnails.default,
    ]
    .into_iter()
    .flatten()
    .map(|t| t.url.as_str())
    .find(|url| !url.is_empty())
    .unwrap_or_default()
    .to_string()
}

fn format_views(stats: &Statistics) -> String {
    stats
        .view_count
        .as_deref()
        .map_or_else(|| "0".to_string(), format_view_count_str)
}

/// Map a `videos` item (trending chart) to a track
pub fn video_to_track(video: VideoItem) -> Option<Track> {
    let details = VideoDetails::from_video(&video);
    let snippet = video.snippet;

    let mut track = Track::new(
        TrackId::new(video.id.clone()),
        decode_html_entities(&snippet.title),
        decode_html_entities(&snippet.channel_title),
        details.duration,
        video.id,
    )
    .with_thumbnail(best_thumbnail(&snippet.thumbnails))
    .with_view_count(details.views);

    if let Some(at) = snippet.published_at {
        track = track.with_published_at(at);
    }

    keep_valid(track)
}

/// Map a `search` item to a track, taking duration and views from `details`
///
/// Items without a video id yield `None`. Missing details fall back to
/// `0:00` and `0` views.
pub fn search_item_to_track(
    item: SearchItem,
    details: &HashMap<String, VideoDetails>,
) -> Option<Track> {
    let video_id = item.id.video_id?;
    let details = details.get(&video_id).cloned().unwrap_or_default();
    let snippet = item.snippet;

    let mut track = Track::new(
        TrackId::new(video_id.clone()),
        decode_html_entities(&snippet.title),
        decode_html_entities(&snippet.channel_title),
        details.duration,
        video_id,
    )
    .with_thumbnail(best_thumbnail(&snippet.thumbnails))
    .with_view_count(details.views);

    if let Some(at) = snippet.published_at {
        track = track.with_published_at(at);
    }

    keep_valid(track)
}

fn keep_valid(track: Track) -> Option<Track> {
    match track.validate() {
        Ok(()) => Some(track),
        Err(e) => {
            debug!(track_id = %track.id, error = %e, "Dropping unusable catalog item");
            None
        }
    }
}

/// Decode the HTML entities the API leaves in titles
///
/// Handles the named entities `&amp; &lt; &gt; &quot; &apos; &nbsp;` and
/// numeric references (`&#39;`, `&#x27;`). Anything unrecognized is kept
/// verbatim.
pub fn decode_html_entities(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find('&') {
        out.push_str(&rest[..start]);
        let candidate = &rest[start..];

        match candidate.find(';').and_then(|end| {
            decode_entity(&candidate[1..end]).map(|decoded| (decoded, end))
        }) {
            Some((decoded, end)) => {
                out.push(decoded);
                rest = &candidate[end + 1..];
            }
            None => {
                out.push('&');
                rest = &candidate[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

fn decode_entity(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some('\u{a0}'),
        _ => {
            let digits = name.strip_prefix('#')?;
            let code = match digits.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => digits.parse().ok()?,
            };
            char::from_u32(code)
        }
    }
}
