//! YouTube Data API v3 catalog client.

use crate::catalog::TrackCatalog;
use crate::config::CatalogConfig;
use crate::error::{CatalogError, Result};
use crate::fallback;
use crate::mapping::{self, VideoDetails};
use crate::types::{SearchListResponse, VideoListResponse};
use async_trait::async_trait;
use cent_core::Track;
use chrono::{Datelike, Duration as ChronoDuration, SecondsFormat, Utc};
use rand::seq::SliceRandom;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// YouTube category id for music
const MUSIC_CATEGORY_ID: &str = "10";

/// Page size for new releases and recommendations
const SHORT_LIST_RESULTS: u32 = 15;

/// Page size for related tracks
const RELATED_RESULTS: u32 = 10;

/// How far back "new releases" reaches
const NEW_RELEASE_WINDOW_DAYS: i64 = 14;

/// Query stems for recommendations; one is picked at random per call
const RECOMMENDATION_QUERIES: &[&str] = &["top hits", "popular music", "best songs", "viral music"];

/// Catalog backed by the YouTube Data API.
///
/// The [`TrackCatalog`] methods never fail: any request error, non-success
/// status or empty result is logged and answered from the built-in fallback
/// lists. The `try_*` methods expose the underlying errors.
///
/// # Example
///
/// ```rust,no_run
/// use cent_catalog::{CatalogConfig, TrackCatalog, YouTubeCatalog};
///
/// # async fn example() -> Result<(), cent_catalog::CatalogError> {
/// let catalog = YouTubeCatalog::new(CatalogConfig::new("my-api-key"))?;
///
/// for track in catalog.fetch_trending().await {
///     println!("{} - {} ({})", track.artist, track.title, track.duration);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct YouTubeCatalog {
    http: Client,
    config: CatalogConfig,
}

impl YouTubeCatalog {
    /// Create a new client with the given configuration.
    pub fn new(config: CatalogConfig) -> Result<Self> {
        if config.base_url.trim().is_empty() {
            return Err(CatalogError::InvalidUrl("URL cannot be empty".into()));
        }

        let base_url = config.base_url.trim().trim_end_matches('/').to_string();
        let parsed = Url::parse(&base_url).map_err(|e| CatalogError::InvalidUrl(e.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(CatalogError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let http = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("CentPlayer/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            config: CatalogConfig { base_url, ..config },
        })
    }

    /// The effective configuration (with normalized base URL).
    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    // ===== Fallible operations =====

    /// Fetch the regional most-popular music chart.
    pub async fn try_trending(&self) -> Result<Vec<Track>> {
        let response: VideoListResponse = self
            .get_json(
                "videos",
                &[
                    ("part", "snippet,contentDetails,statistics".to_string()),
                    ("chart", "mostPopular".to_string()),
                    ("videoCategoryId", MUSIC_CATEGORY_ID.to_string()),
                    ("maxResults", self.config.max_results.to_string()),
                    ("regionCode", self.config.region_code.clone()),
                ],
            )
            .await?;

        let tracks: Vec<Track> = response
            .items
            .into_iter()
            .filter_map(mapping::video_to_track)
            .collect();

        non_empty(tracks)
    }

    /// Search music videos matching `query`.
    ///
    /// A blank query returns an empty list without a request.
    pub async fn try_search(&self, query: &str) -> Result<Vec<Track>> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let tracks = self
            .search_tracks(vec![
                ("q", format!("{} music", query)),
                ("type", "video".to_string()),
                ("videoCategoryId", MUSIC_CATEGORY_ID.to_string()),
                ("maxResults", self.config.max_results.to_string()),
            ])
            .await?;

        non_empty(tracks)
    }

    /// Fetch music published in the last two weeks, newest first.
    pub async fn try_new_releases(&self) -> Result<Vec<Track>> {
        let now = Utc::now();
        let published_after = (now - ChronoDuration::days(NEW_RELEASE_WINDOW_DAYS))
            .to_rfc3339_opts(SecondsFormat::Secs, true);

        let tracks = self
            .search_tracks(vec![
                ("q", format!("new music {}", now.year())),
                ("type", "video".to_string()),
                ("videoCategoryId", MUSIC_CATEGORY_ID.to_string()),
                ("maxResults", SHORT_LIST_RESULTS.to_string()),
                ("order", "date".to_string()),
                ("publishedAfter", published_after),
            ])
            .await?;

        non_empty(tracks)
    }

    /// Fetch recommendations for a randomly chosen general query.
    pub async fn try_recommendations(&self) -> Result<Vec<Track>> {
        let stem = RECOMMENDATION_QUERIES
            .choose(&mut rand::thread_rng())
            .copied()
            .unwrap_or("popular music");
        let query = if stem == "top hits" {
            format!("{} {}", stem, Utc::now().year())
        } else {
            stem.to_string()
        };

        debug!(query = %query, "Fetching recommendations");

        let tracks = self
            .search_tracks(vec![
                ("q", query),
                ("type", "video".to_string()),
                ("videoCategoryId", MUSIC_CATEGORY_ID.to_string()),
                ("maxResults", SHORT_LIST_RESULTS.to_string()),
                ("order", "relevance".to_string()),
            ])
            .await?;

        non_empty(tracks)
    }

    /// Fetch videos related to `source_id`.
    ///
    /// An empty result is not an error here.
    pub async fn try_related(&self, source_id: &str) -> Result<Vec<Track>> {
        self.search_tracks(vec![
            ("relatedToVideoId", source_id.to_string()),
            ("type", "video".to_string()),
            ("maxResults", RELATED_RESULTS.to_string()),
        ])
        .await
    }

    /// Fetch duration and view count for a batch of video ids.
    pub async fn try_video_details(&self, ids: &[String]) -> Result<HashMap<String, VideoDetails>> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let response: VideoListResponse = self
            .get_json(
                "videos",
                &[
                    ("part", "contentDetails,statistics".to_string()),
                    ("id", ids.join(",")),
                ],
            )
            .await?;

        Ok(mapping::details_by_id(&response.items))
    }

    // ===== Internals =====

    /// Run a `search` request and enrich the hits with video details.
    ///
    /// A failed details request degrades to default durations and views.
    async fn search_tracks(&self, mut params: Vec<(&str, String)>) -> Result<Vec<Track>> {
        params.insert(0, ("part", "snippet".to_string()));
        let response: SearchListResponse = self.get_json("search", &params).await?;

        let ids: Vec<String> = response
            .items
            .iter()
            .filter_map(|item| item.id.video_id.clone())
            .collect();

        let details = match self.try_video_details(&ids).await {
            Ok(details) => details,
            Err(e) => {
                warn!(error = %e, count = ids.len(), "Failed to fetch video details");
                HashMap::new()
            }
        };

        Ok(response
            .items
            .into_iter()
            .filter_map(|item| mapping::search_item_to_track(item, &details))
            .collect())
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<T> {
        let url = format!("{}/{}", self.config.base_url, endpoint);
        debug!(url = %url, "Catalog request");

        let response = self
            .http
            .get(&url)
            .query(params)
            .query(&[("key", self.config.api_key.as_str())])
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() || e.is_timeout() {
                    CatalogError::Unreachable(e.to_string())
                } else {
                    CatalogError::Request(e)
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(CatalogError::Api {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json()
            .await
            .map_err(|e| CatalogError::ParseError(format!("{}: {}", endpoint, e)))
    }
}

fn non_empty(tracks: Vec<Track>) -> Result<Vec<Track>> {
    if tracks.is_empty() {
        Err(CatalogError::EmptyResult)
    } else {
        Ok(tracks)
    }
}

fn or_fallback(
    operation: &'static str,
    result: Result<Vec<Track>>,
    fallback: impl FnOnce() -> Vec<Track>,
) -> Vec<Track> {
    match result {
        Ok(tracks) => {
            debug!(operation, count = tracks.len(), "Catalog fetch succeeded");
            tracks
        }
        Err(e) => {
            warn!(operation, error = %e, "Catalog fetch failed, using fallback list");
            fallback()
        }
    }
}

#[async_trait]
impl TrackCatalog for YouTubeCatalog {
    async fn fetch_trending(&self) -> Vec<Track> {
        or_fallback("trending", self.try_trending().await, fallback::trending)
    }

    async fn fetch_new_releases(&self) -> Vec<Track> {
        or_fallback("new_releases", self.try_new_releases().await, fallback::new_releases)
    }

    async fn fetch_recommendations(&self) -> Vec<Track> {
        or_fallback(
            "recommendations",
            self.try_recommendations().await,
            fallback::recommendations,
        )
    }

    async fn search(&self, query: &str) -> Vec<Track> {
        if query.trim().is_empty() {
            return Vec::new();
        }
        or_fallback("search", self.try_search(query).await, || {
            fallback::search(query)
        })
    }

    async fn related(&self, source_id: &str) -> Vec<Track> {
        or_fallback("related", self.try_related(source_id).await, Vec::new)
    }
}
