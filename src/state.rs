use crate::application::trending::{ControllerSettings, TrendingController};
use crate::domain::error::TrendError;
use crate::domain::model::DateBucket;
use crate::infrastructure::clock::SystemClock;
use crate::infrastructure::config::Config;
use crate::infrastructure::network::{create_client, HttpContentSource};
use crate::infrastructure::storage::cache::LruContentCache;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub source: Arc<HttpContentSource>,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, TrendError> {
        config.validate()?;
        let http_client = create_client(&config.api)?;
        let source = HttpContentSource::new(http_client, config.api.base_url.clone());

        Ok(Self {
            config: Arc::new(config),
            source: Arc::new(source),
        })
    }

    /// Build a controller wired to the HTTP endpoint, the wall clock and a
    /// fresh cache sized from config. `bucket` overrides the configured
    /// starting window.
    pub fn controller(&self, bucket: Option<DateBucket>) -> TrendingController {
        let settings = ControllerSettings {
            initial_bucket: bucket.unwrap_or(self.config.trending.default_bucket),
            page_increment: self.config.trending.page_size,
        };

        TrendingController::new(
            self.source.clone(),
            Arc::new(SystemClock),
            Box::new(LruContentCache::new(self.config.trending.cache_capacity)),
            settings,
        )
    }
}
