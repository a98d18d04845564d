// HTTP client utilities
use crate::domain::error::TrendError;
use crate::infrastructure::config::ApiConfig;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;
use std::time::Duration;

/// Create the HTTP client used for the content endpoint
///
/// The admin API only answers with JSON when asked for it, so `Accept` is set
/// on every request. The timeout applies to the whole request.
pub fn create_client(api: &ApiConfig) -> Result<Client, TrendError> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    Ok(Client::builder()
        .default_headers(headers)
        .pool_max_idle_per_host(10)
        .pool_idle_timeout(Duration::from_secs(30))
        .timeout(Duration::from_millis(api.timeout_ms))
        .user_agent(concat!("press-trending/", env!("CARGO_PKG_VERSION")))
        .build()?)
}
