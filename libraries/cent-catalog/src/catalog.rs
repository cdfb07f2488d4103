//! The catalog seam used by the player

use crate::fallback;
use async_trait::async_trait;
use cent_core::Track;
use std::sync::Arc;

/// Source of browsable and searchable tracks
///
/// Every method is infallible: implementations degrade to their fallback
/// lists (or an empty list for [`related`](Self::related)) instead of
/// returning errors. Returned tracks always pass
/// [`Track::validate`](cent_core::Track::validate).
#[async_trait]
pub trait TrackCatalog: Send + Sync {
    /// Currently popular music
    async fn fetch_trending(&self) -> Vec<Track>;

    /// Music published recently
    async fn fetch_new_releases(&self) -> Vec<Track>;

    /// General recommendations
    async fn fetch_recommendations(&self) -> Vec<Track>;

    /// Free-text search; a blank query yields an empty list
    async fn search(&self, query: &str) -> Vec<Track>;

    /// Tracks related to `source_id`; empty when nothing is found
    async fn related(&self, source_id: &str) -> Vec<Track>;
}

#[async_trait]
impl<C: TrackCatalog + ?Sized> TrackCatalog for Arc<C> {
    async fn fetch_trending(&self) -> Vec<Track> {
        (**self).fetch_trending().await
    }

    async fn fetch_new_releases(&self) -> Vec<Track> {
        (**self).fetch_new_releases().await
    }

    async fn fetch_recommendations(&self) -> Vec<Track> {
        (**self).fetch_recommendations().await
    }

    async fn search(&self, query: &str) -> Vec<Track> {
        (**self).search(query).await
    }

    async fn related(&self, source_id: &str) -> Vec<Track> {
        (**self).related(source_id).await
    }
}

/// Catalog that only serves the built-in lists
///
/// Used when no API key is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackCatalog;

#[async_trait]
impl TrackCatalog for FallbackCatalog {
    async fn fetch_trending(&self) -> Vec<Track> {
        fallback::trending()
    }

    async fn fetch_new_releases(&self) -> Vec<Track> {
        fallback::new_releases()
    }

    async fn fetch_recommendations(&self) -> Vec<Track> {
        fallback::recommendations()
    }

    async fn search(&self, query: &str) -> Vec<Track> {
        if query.trim().is_empty() {
            return Vec::new();
        }
        fallback::search(query)
    }

    async fn related(&self, _source_id: &str) -> Vec<Track> {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fallback_catalog_serves_lists() {
        let catalog = FallbackCatalog;
        assert_eq!(catalog.fetch_trending().await.len(), 6);
        assert_eq!(catalog.fetch_new_releases().await.len(), 4);
        assert_eq!(catalog.fetch_recommendations().await.len(), 4);
        assert!(catalog.related("dQw4w9WgXcQ").await.is_empty());
    }

    #[tokio::test]
    async fn blank_search_is_empty() {
        let catalog: Arc<dyn TrackCatalog> = Arc::new(FallbackCatalog);
        assert!(catalog.search("   ").await.is_empty());
        assert_eq!(catalog.search("rock").await.len(), 6);
    }
}
