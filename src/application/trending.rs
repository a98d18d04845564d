use crate::domain::error::TrendError;
use crate::domain::model::{CacheKey, ContentRecord, DateBucket, Query, ViewState, PAGE_INCREMENT};
use crate::domain::traits::{Cache, Clock, ContentSource};
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use tracing::{debug, warn};

/// Starting point for a controller
#[derive(Debug, Clone, Copy)]
pub struct ControllerSettings {
    pub initial_bucket: DateBucket,
    pub page_increment: u32,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            initial_bucket: DateBucket::Day,
            page_increment: PAGE_INCREMENT,
        }
    }
}

/// What happened to a fetch that finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The result belonged to the current query and is now visible
    Applied,
    /// The query moved on while the fetch was pending; the view was left alone
    Stale,
}

struct Completion {
    key: CacheKey,
    result: Result<Vec<ContentRecord>, TrendError>,
}

/// Reports exactly one completion per spawned fetch.
///
/// If the task is dropped before finishing (the source panicked or the
/// runtime shut down), a failure is sent so the key leaves `in_flight`.
struct PendingFetch {
    key: CacheKey,
    tx: Option<mpsc::UnboundedSender<Completion>>,
}

impl PendingFetch {
    fn finish(mut self, result: Result<Vec<ContentRecord>, TrendError>) {
        if let Some(tx) = self.tx.take() {
            // Receiver only goes away with the controller
            let _ = tx.send(Completion {
                key: self.key,
                result,
            });
        }
    }
}

impl Drop for PendingFetch {
    fn drop(&mut self) {
        if let Some(tx) = self.tx.take() {
            let _ = tx.send(Completion {
                key: self.key,
                result: Err(TrendError::Interrupted(
                    "fetch task ended without a result".to_string(),
                )),
            });
        }
    }
}

/// Owns the current query, the result cache and the visible state.
///
/// Fetches run as spawned tasks and report back over a channel; nothing is
/// applied until the owner drives [`TrendingController::next_completion`].
/// A completion only reaches the view when its cache key is still the one
/// the current query resolved to.
///
/// `mount`, `set_date_bucket`, `load_more` and `refresh` spawn onto the
/// ambient Tokio runtime and panic when called outside one.
pub struct TrendingController {
    source: Arc<dyn ContentSource>,
    clock: Arc<dyn Clock>,
    cache: Box<dyn Cache + Send>,
    page_increment: u32,
    query: Query,
    current_key: Option<CacheKey>,
    in_flight: HashSet<CacheKey>,
    view: ViewState,
    completions_tx: mpsc::UnboundedSender<Completion>,
    completions_rx: mpsc::UnboundedReceiver<Completion>,
    updates: watch::Sender<ViewState>,
    fetches_issued: u64,
}

impl TrendingController {
    pub fn new(
        source: Arc<dyn ContentSource>,
        clock: Arc<dyn Clock>,
        cache: Box<dyn Cache + Send>,
        settings: ControllerSettings,
    ) -> Self {
        let page_increment = settings.page_increment.max(1);
        let query = Query::new(settings.initial_bucket, page_increment);
        let view = ViewState::new(query);
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();
        let (updates, _) = watch::channel(view.clone());

        Self {
            source,
            clock,
            cache,
            page_increment,
            query,
            current_key: None,
            in_flight: HashSet::new(),
            view,
            completions_tx,
            completions_rx,
            updates,
            fetches_issued: 0,
        }
    }

    /// Receive a new snapshot after every state change
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.updates.subscribe()
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn query(&self) -> Query {
        self.query
    }

    pub fn page_increment(&self) -> u32 {
        self.page_increment
    }

    /// Number of network fetches started so far
    pub fn fetches_issued(&self) -> u64 {
        self.fetches_issued
    }

    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    pub fn has_pending(&self) -> bool {
        !self.in_flight.is_empty()
    }

    /// Initial fetch for the starting query
    pub fn mount(&mut self) {
        self.refetch();
    }

    /// Switch the date filter, starting pagination over.
    ///
    /// Returns `false` without touching anything when `bucket` is already current.
    pub fn set_date_bucket(&mut self, bucket: DateBucket) -> bool {
        if bucket == self.query.bucket {
            return false;
        }

        self.query = Query::new(bucket, self.page_increment);
        self.view.initial_load = true;
        self.refetch();
        true
    }

    /// Ask for one more page worth of records.
    ///
    /// Not guarded on `loading`/`has_more`; the caller decides when to offer it.
    pub fn load_more(&mut self) {
        self.query.page_size += self.page_increment;
        self.refetch();
    }

    /// Drop every cached result and fetch the current query again
    pub fn refresh(&mut self) {
        self.cache.clear();
        self.refetch();
    }

    fn refetch(&mut self) {
        self.view.query = self.query;
        self.view.loading = true;
        self.view.last_error = None;

        let key = self.query.cache_key(self.clock.now());
        self.current_key = Some(key);

        if let Some(cached) = self.cache.get(&key) {
            debug!(%key, "trending cache hit");
            self.view.has_more = cached.len() == self.query.page_size as usize;
            self.view.items = cached;
            self.view.loading = false;
            self.view.initial_load = false;
            self.publish();
            return;
        }

        // 同一个 key 已在请求中，等待它返回即可
        if self.in_flight.insert(key) {
            self.spawn_fetch(key);
        } else {
            debug!(%key, "fetch already in flight, waiting for it");
        }
        self.publish();
    }

    fn spawn_fetch(&mut self, key: CacheKey) {
        self.fetches_issued += 1;
        debug!(%key, "issuing trending fetch");

        let source = Arc::clone(&self.source);
        let pending = PendingFetch {
            key,
            tx: Some(self.completions_tx.clone()),
        };
        tokio::spawn(async move {
            let result = source.fetch_trending(key.published_at, key.limit).await;
            pending.finish(result);
        });
    }

    /// Wait for the next fetch to finish and apply it.
    ///
    /// Returns `None` when nothing is in flight. Safe to use inside
    /// `tokio::select!`: a cancelled wait loses no completion.
    pub async fn next_completion(&mut self) -> Option<Outcome> {
        if self.in_flight.is_empty() {
            return None;
        }
        let completion = self.completions_rx.recv().await?;
        Some(self.apply(completion))
    }

    /// Drive completions until the current query has a result
    pub async fn settle(&mut self) -> &ViewState {
        while self.view.loading {
            if self.next_completion().await.is_none() {
                break;
            }
        }
        &self.view
    }

    fn apply(&mut self, completion: Completion) -> Outcome {
        let Completion { key, result } = completion;
        self.in_flight.remove(&key);

        if self.current_key != Some(key) {
            match result {
                Ok(records) => {
                    debug!(%key, count = records.len(), "stale trending response cached, view untouched");
                    self.cache.insert(key, records);
                }
                Err(e) => debug!(%key, error = %e, "stale trending fetch failed, ignored"),
            }
            return Outcome::Stale;
        }

        match result {
            Ok(records) => {
                self.view.has_more = records.len() == key.limit as usize;
                self.cache.insert(key, records.clone());
                self.view.items = records;
            }
            Err(e) => {
                warn!(%key, error = %e, "error fetching trending content");
                self.view.last_error = Some(format!("Failed to fetch trending content: {}", e));
                self.view.items = Vec::new();
            }
        }

        self.view.loading = false;
        self.view.initial_load = false;
        self.publish();
        Outcome::Applied
    }

    fn publish(&self) {
        self.updates.send_replace(self.view.clone());
    }
}
