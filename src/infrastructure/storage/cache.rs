// In-memory result cache bounded by an LRU policy
use crate::domain::model::{CacheKey, ContentRecord};
use crate::domain::traits::Cache;
use lru::LruCache;
use std::num::NonZeroUsize;

/// Keeps the most recently used result sets, up to `capacity` entries.
pub struct LruContentCache {
    map: LruCache<CacheKey, Vec<ContentRecord>>,
}

impl LruContentCache {
    /// A zero capacity is bumped to one entry.
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            map: LruCache::new(capacity),
        }
    }

    pub fn capacity(&self) -> usize {
        self.map.cap().get()
    }

    pub fn contains(&self, key: &CacheKey) -> bool {
        self.map.contains(key)
    }
}

impl Cache for LruContentCache {
    fn get(&mut self, key: &CacheKey) -> Option<Vec<ContentRecord>> {
        self.map.get(key).cloned()
    }

    fn insert(&mut self, key: CacheKey, value: Vec<ContentRecord>) {
        self.map.put(key, value);
    }

    fn len(&self) -> usize {
        self.map.len()
    }

    fn clear(&mut self) {
        self.map.clear();
    }
}
