use crate::domain::error::TrendError;
use crate::domain::model::{CacheKey, ContentRecord};
use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};

/// Trait for trending content providers
///
/// The controller only depends on this seam, so the HTTP endpoint can be
/// swapped for a scripted source in tests.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Fetch up to `limit` records published on or after `published_at`
    async fn fetch_trending(
        &self,
        published_at: NaiveDate,
        limit: u32,
    ) -> Result<Vec<ContentRecord>, TrendError>;
}

/// Trait for fetched result caches
pub trait Cache {
    /// Get a cached result set, marking it as recently used
    fn get(&mut self, key: &CacheKey) -> Option<Vec<ContentRecord>>;

    /// Insert a result set, possibly evicting an older one
    fn insert(&mut self, key: CacheKey, value: Vec<ContentRecord>);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn clear(&mut self);
}

/// Source of "now" used when resolving date boundaries
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}
