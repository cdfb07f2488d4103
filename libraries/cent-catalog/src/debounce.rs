//! Debounced search
//!
//! Typing fires a search for every keystroke; the debouncer waits until the
//! query has been stable for a short delay and only then asks the catalog.
//! Results are published on a [`tokio::sync::watch`] channel.

use crate::catalog::TrackCatalog;
use cent_core::Track;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

/// Default quiet period before a search is sent
pub const DEFAULT_SEARCH_DEBOUNCE: Duration = Duration::from_millis(500);

/// Observable search state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    /// The query the results belong to (or are being fetched for)
    pub query: String,
    /// Latest results
    pub tracks: Vec<Track>,
    /// A search is pending or in flight
    pub loading: bool,
}

/// Delays catalog searches until input settles
///
/// Each call to [`search`](Self::search) cancels the previous pending search.
/// A blank query clears the results immediately without contacting the
/// catalog. Must be used from within a Tokio runtime.
pub struct SearchDebouncer {
    catalog: Arc<dyn TrackCatalog>,
    delay: Duration,
    state_tx: Arc<watch::Sender<SearchState>>,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl SearchDebouncer {
    /// Create a debouncer over `catalog` with the given quiet period
    pub fn new(catalog: Arc<dyn TrackCatalog>, delay: Duration) -> Self {
        let (state_tx, _) = watch::channel(SearchState::default());
        Self {
            catalog,
            delay,
            state_tx: Arc::new(state_tx),
            pending: Mutex::new(None),
        }
    }

    /// Subscribe to state changes
    pub fn subscribe(&self) -> watch::Receiver<SearchState> {
        self.state_tx.subscribe()
    }

    /// Current state
    pub fn state(&self) -> SearchState {
        self.state_tx.borrow().clone()
    }

    /// Quiet period
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Submit a new query
    pub fn search(&self, query: impl Into<String>) {
        let query = query.into();
        self.cancel_pending();

        if query.trim().is_empty() {
            self.state_tx.send_replace(SearchState {
                query,
                tracks: Vec::new(),
                loading: false,
            });
            return;
        }

        self.state_tx.send_modify(|state| {
            state.query.clone_from(&query);
            state.loading = true;
        });

        let catalog = Arc::clone(&self.catalog);
        let state_tx = Arc::clone(&self.state_tx);
        let delay = self.delay;

        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            debug!(query = %query, "Debounced search firing");

            let tracks = catalog.search(&query).await;

            // A newer query may have replaced this one while the request ran
            state_tx.send_if_modified(|state| {
                if state.query != query {
                    return false;
                }
                state.tracks = tracks;
                state.loading = false;
                true
            });
        });

        if let Ok(mut pending) = self.pending.lock() {
            *pending = Some(handle);
        }
    }

    /// Cancel any pending search and clear the results
    pub fn clear(&self) {
        self.search(String::new());
    }

    fn cancel_pending(&self) {
        if let Ok(mut pending) = self.pending.lock() {
            if let Some(handle) = pending.take() {
                handle.abort();
            }
        }
    }
}

impl Drop for SearchDebouncer {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}

impl std::fmt::Debug for SearchDebouncer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchDebouncer")
            .field("delay", &self.delay)
            .field("state", &*self.state_tx.borrow())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use cent_core::TrackId;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Catalog that records every search it receives
    #[derive(Default)]
    struct CountingCatalog {
        searches: AtomicUsize,
        queries: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl TrackCatalog for CountingCatalog {
        async fn fetch_trending(&self) -> Vec<Track> {
            Vec::new()
        }

        async fn fetch_new_releases(&self) -> Vec<Track> {
            Vec::new()
        }

        async fn fetch_recommendations(&self) -> Vec<Track> {
            Vec::new()
        }

        async fn search(&self, query: &str) -> Vec<Track> {
            self.searches.fetch_add(1, Ordering::SeqCst);
            self.queries.lock().unwrap().push(query.to_string());
            vec![Track::new(TrackId::new(query), query, "Artist", "3:00", query)]
        }

        async fn related(&self, _source_id: &str) -> Vec<Track> {
            Vec::new()
        }
    }

    fn create_debouncer() -> (SearchDebouncer, Arc<CountingCatalog>) {
        let catalog = Arc::new(CountingCatalog::default());
        let debouncer = SearchDebouncer::new(catalog.clone(), DEFAULT_SEARCH_DEBOUNCE);
        (debouncer, catalog)
    }

    #[tokio::test(start_paused = true)]
    async fn fires_after_quiet_period() {
        let (debouncer, catalog) = create_debouncer();

        debouncer.search("jazz");
        assert!(debouncer.state().loading);

        tokio::time::sleep(Duration::from_millis(400)).await;
        assert_eq!(catalog.searches.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(catalog.searches.load(Ordering::SeqCst), 1);

        let state = debouncer.state();
        assert!(!state.loading);
        assert_eq!(state.query, "jazz");
        assert_eq!(state.tracks[0].title, "jazz");
    }

    #[tokio::test(start_paused = true)]
    async fn rapid_queries_only_search_last() {
        let (debouncer, catalog) = create_debouncer();

        for query in ["j", "ja", "jaz", "jazz"] {
            debouncer.search(query);
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
        tokio::time::sleep(Duration::from_secs(1)).await;

        assert_eq!(catalog.searches.load(Ordering::SeqCst), 1);
        assert_eq!(*catalog.queries.lock().unwrap(), vec!["jazz".to_string()]);
        assert_eq!(debouncer.state().tracks.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn blank_query_clears_without_search() {
        let (debouncer, catalog) = create_debouncer();

        debouncer.search("rock");
        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(debouncer.state().tracks.len(), 1);

        debouncer.search("   ");
        let state = debouncer.state();
        assert!(state.tracks.is_empty());
        assert!(!state.loading);

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(catalog.searches.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn clear_cancels_pending_search() {
        let (debouncer, catalog) = create_debouncer();

        debouncer.search("pop");
        debouncer.clear();
        tokio::time::sleep(Duration::from_secs(1)).await;

        assert_eq!(catalog.searches.load(Ordering::SeqCst), 0);
        assert_eq!(debouncer.state(), SearchState::default());
    }

    #[tokio::test(start_paused = true)]
    async fn subscribers_see_results() {
        let (debouncer, _catalog) = create_debouncer();
        let mut rx = debouncer.subscribe();

        debouncer.search("blues");
        rx.changed().await.unwrap();
        assert!(rx.borrow_and_update().loading);

        rx.changed().await.unwrap();
        let state = rx.borrow_and_update().clone();
        assert!(!state.loading);
        assert_eq!(state.tracks.len(), 1);
    }
}
