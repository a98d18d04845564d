use crate::domain::error::TrendError;
use crate::domain::model::ContentRecord;
use crate::domain::traits::ContentSource;
use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};

const TRENDING_PATH: &str = "/api/admin/trending";

/// Content source backed by the admin panel's trending endpoint
pub struct HttpContentSource {
    client: Client,
    base_url: String,
}

impl HttpContentSource {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, TRENDING_PATH)
    }
}

#[async_trait]
impl ContentSource for HttpContentSource {
    async fn fetch_trending(
        &self,
        published_at: NaiveDate,
        limit: u32,
    ) -> Result<Vec<ContentRecord>, TrendError> {
        let published_at = published_at.format("%Y-%m-%d").to_string();
        let limit = limit.to_string();
        let params = [("published_at", published_at.as_str()), ("limit", limit.as_str())];

        debug!(endpoint = %self.endpoint(), published_at = %published_at, limit = %limit, "requesting trending content");

        let response = self
            .client
            .get(self.endpoint())
            .query(&params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "trending endpoint returned an error status");
            return Err(TrendError::Api(format!(
                "Trending endpoint responded with {}",
                status
            )));
        }

        let body = response.bytes().await?;
        decode_records(&body)
    }
}

/// Decode an endpoint body into records
///
/// `null` or an empty body means no records. Any JSON value other than an
/// array is also treated as empty; only unparsable JSON is an error.
pub fn decode_records(body: &[u8]) -> Result<Vec<ContentRecord>, TrendError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }

    match serde_json::from_slice::<Value>(body)? {
        Value::Array(items) => {
            let records = items
                .into_iter()
                .map(serde_json::from_value::<ContentRecord>)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(records)
        }
        Value::Null => Ok(Vec::new()),
        other => {
            debug!(kind = json_kind(&other), "non-array body treated as empty");
            Ok(Vec::new())
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
