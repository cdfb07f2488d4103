//! Built-in track lists used when the API is unreachable
//!
//! The lists are fixed so an offline player still has something to show.
//! Thumbnails point at deterministic placeholder images.

use cent_core::{Track, TrackId};

struct FallbackEntry {
    id: &'static str,
    title: &'static str,
    artist: &'static str,
    seed: &'static str,
    duration: &'static str,
    source_id: &'static str,
    views: &'static str,
}

const TRENDING: &[FallbackEntry] = &[
    FallbackEntry { id: "1", title: "Midnight Dreams", artist: "Aurora Sounds", seed: "music1", duration: "3:45", source_id: "dQw4w9WgXcQ", views: "2.5M" },
    FallbackEntry { id: "2", title: "Golden Hour", artist: "Sunset Collective", seed: "music2", duration: "4:12", source_id: "kJQP7kiw5Fk", views: "1.8M" },
    FallbackEntry { id: "3", title: "Electric Pulse", artist: "Neon Waves", seed: "music3", duration: "3:28", source_id: "9bZkp7q19f0", views: "5.2M" },
    FallbackEntry { id: "4", title: "Starlight Symphony", artist: "Cosmic Orchestra", seed: "music4", duration: "5:01", source_id: "fJ9rUzIMcZQ", views: "3.1M" },
    FallbackEntry { id: "5", title: "Urban Jungle", artist: "Metro Beats", seed: "music5", duration: "3:55", source_id: "JGwWNGJdvx8", views: "4.7M" },
    FallbackEntry { id: "6", title: "Ocean Breeze", artist: "Coastal Vibes", seed: "music6", duration: "4:33", source_id: "RgKAFK5djSk", views: "2.9M" },
];

const NEW_RELEASES: &[FallbackEntry] = &[
    FallbackEntry { id: "7", title: "Fresh Start", artist: "Morning Glory", seed: "new1", duration: "3:21", source_id: "PT2_F-1esPk", views: "890K" },
    FallbackEntry { id: "8", title: "Digital Dreams", artist: "Cyber Flow", seed: "new2", duration: "4:05", source_id: "CevxZvSJLk8", views: "1.2M" },
    FallbackEntry { id: "9", title: "Velvet Sky", artist: "Ethereal", seed: "new3", duration: "3:58", source_id: "60ItHLz5WEA", views: "750K" },
    FallbackEntry { id: "10", title: "Thunder Road", artist: "Storm Riders", seed: "new4", duration: "4:22", source_id: "YQHsXMglC9A", views: "2.1M" },
];

const RECOMMENDATIONS: &[FallbackEntry] = &[
    FallbackEntry { id: "11", title: "Peaceful Mind", artist: "Zen Garden", seed: "rec1", duration: "5:15", source_id: "lTRiuFIWV54", views: "3.4M" },
    FallbackEntry { id: "12", title: "City Lights", artist: "Urban Dreams", seed: "rec2", duration: "3:48", source_id: "SlPhMPnQ58k", views: "2.8M" },
    FallbackEntry { id: "13", title: "Sunset Boulevard", artist: "Golden State", seed: "rec3", duration: "4:10", source_id: "pRpeEdMmmQ0", views: "1.9M" },
    FallbackEntry { id: "14", title: "Aurora Borealis", artist: "Northern Lights", seed: "rec4", duration: "4:45", source_id: "bo_efYhYU2A", views: "4.2M" },
];

impl FallbackEntry {
    fn to_track(&self) -> Track {
        Track::new(
            TrackId::new(self.id),
            self.title,
            self.artist,
            self.duration,
            self.source_id,
        )
        .with_thumbnail(placeholder_thumbnail(self.seed))
        .with_view_count(self.views)
    }
}

fn placeholder_thumbnail(seed: &str) -> String {
    format!("https://picsum.photos/seed/{}/400/400", seed)
}

/// Offline trending list
pub fn trending() -> Vec<Track> {
    TRENDING.iter().map(FallbackEntry::to_track).collect()
}

/// Offline new-releases list
pub fn new_releases() -> Vec<Track> {
    NEW_RELEASES.iter().map(FallbackEntry::to_track).collect()
}

/// Offline recommendations list
pub fn recommendations() -> Vec<Track> {
    RECOMMENDATIONS.iter().map(FallbackEntry::to_track).collect()
}

/// Offline search results for `query`
///
/// The trending list retitled as `"<query> - <title>"`, with ids
/// `fallback-<slug>-<n>` so repeated searches produce the same ids.
pub fn search(query: &str) -> Vec<Track> {
    let query = query.trim();
    let slug = slugify(query);

    TRENDING
        .iter()
        .enumerate()
        .map(|(n, entry)| {
            let mut track = entry.to_track();
            track.id = TrackId::new(format!("fallback-{}-{}", slug, n + 1));
            track.title = format!("{} - {}", query, entry.title);
            track
        })
        .collect()
}

fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for c in text.chars().flat_map(char::to_lowercase) {
        if c.is_alphanumeric() {
            slug.push(c);
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    if slug.is_empty() {
        slug.push_str("query");
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_sizes() {
        assert_eq!(trending().len(), 6);
        assert_eq!(new_releases().len(), 4);
        assert_eq!(recommendations().len(), 4);
        assert_eq!(search("jazz").len(), 6);
    }

    #[test]
    fn all_fallback_tracks_validate() {
        for track in trending()
            .into_iter()
            .chain(new_releases())
            .chain(recommendations())
            .chain(search("lo-fi beats"))
        {
            track.validate().unwrap();
        }
    }

    #[test]
    fn trending_first_entry() {
        let first = &trending()[0];
        assert_eq!(first.id.as_str(), "1");
        assert_eq!(first.title, "Midnight Dreams");
        assert_eq!(first.artist, "Aurora Sounds");
        assert_eq!(first.duration, "3:45");
        assert_eq!(first.source_id, "dQw4w9WgXcQ");
        assert_eq!(first.view_count.as_deref(), Some("2.5M"));
        assert_eq!(first.thumbnail_url, "https://picsum.photos/seed/music1/400/400");
    }

    #[test]
    fn ids_are_unique_across_lists() {
        let mut ids: Vec<_> = trending()
            .into_iter()
            .chain(new_releases())
            .chain(recommendations())
            .map(|t| t.id)
            .collect();
        let total = ids.len();
        ids.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        ids.dedup();
        assert_eq!(ids.len(), total);
    }

    #[test]
    fn search_retitles_and_is_deterministic() {
        let results = search("  Lo-Fi Beats ");
        assert_eq!(results[0].title, "Lo-Fi Beats - Midnight Dreams");
        assert_eq!(results[0].id.as_str(), "fallback-lo-fi-beats-1");
        assert_eq!(results[5].id.as_str(), "fallback-lo-fi-beats-6");
        assert_eq!(results[0].source_id, "dQw4w9WgXcQ");

        assert_eq!(search("Lo-Fi Beats"), results);
    }

    #[test]
    fn slug_handles_symbols() {
        assert_eq!(slugify("AC/DC & Friends!"), "ac-dc-friends");
        assert_eq!(slugify("???"), "query");
    }
}
