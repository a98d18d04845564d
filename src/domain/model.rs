use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Records requested per page; load-more grows the page size by this step.
pub const PAGE_INCREMENT: u32 = 12;

// 时间窗口过滤器
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DateBucket {
    Day,
    Week,
    Month,
}

impl DateBucket {
    pub const ALL: [DateBucket; 3] = [DateBucket::Day, DateBucket::Week, DateBucket::Month];

    /// Resolve the earliest publish date eligible for this bucket.
    ///
    /// `Day` is the start of the current calendar day, `Week` the Monday of the
    /// current ISO week, and `Month` the date thirty days before `now`.
    pub fn boundary(self, now: NaiveDateTime) -> NaiveDate {
        let today = now.date();
        match self {
            DateBucket::Day => today,
            DateBucket::Week => {
                today - Duration::days(i64::from(today.weekday().num_days_from_monday()))
            }
            DateBucket::Month => (now - Duration::days(30)).date(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DateBucket::Day => "day",
            DateBucket::Week => "week",
            DateBucket::Month => "month",
        }
    }

    /// Human wording used in empty-state messages
    pub fn label(self) -> &'static str {
        match self {
            DateBucket::Day => "today",
            DateBucket::Week => "this week",
            DateBucket::Month => "in the last 30 days",
        }
    }
}

impl fmt::Display for DateBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DateBucket {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "day" | "d" | "today" => Ok(DateBucket::Day),
            "week" | "w" => Ok(DateBucket::Week),
            "month" | "m" => Ok(DateBucket::Month),
            other => Err(format!("unknown date bucket: {}", other)),
        }
    }
}

/// The single logical query the controller is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Query {
    pub bucket: DateBucket,
    pub page_size: u32,
}

impl Query {
    pub fn new(bucket: DateBucket, page_size: u32) -> Self {
        Self { bucket, page_size }
    }

    /// Derive the cache key using the boundary resolved at `now`.
    pub fn cache_key(&self, now: NaiveDateTime) -> CacheKey {
        CacheKey {
            published_at: self.bucket.boundary(now),
            limit: self.page_size,
        }
    }
}

/// Identifies one fetched result set: resolved boundary plus page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub published_at: NaiveDate,
    pub limit: u32,
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.published_at.format("%Y-%m-%d"), self.limit)
    }
}

// 趋势内容条目 (字段与 /api/admin/trending 返回的 JSON 一致)
// Missing keys and explicit nulls both decode to the field's default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub content_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub user_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub category_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub thumbnail: String,
    #[serde(deserialize_with = "null_as_default")]
    pub content_description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub comments_enabled: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub view_count_enabled: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub like_count_enabled: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub dislike_count_enabled: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub view_count: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub like_count: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub dislike_count: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub comment_count: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub updated_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub published_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub is_deleted: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub total_interactions: u64,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Snapshot handed to the rendering side on every state change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewState {
    pub query: Query,
    pub items: Vec<ContentRecord>,
    pub loading: bool,
    pub initial_load: bool,
    pub has_more: bool,
    pub last_error: Option<String>,
}

impl ViewState {
    pub fn new(query: Query) -> Self {
        Self {
            query,
            items: Vec::new(),
            loading: true,
            initial_load: true,
            has_more: true,
            last_error: None,
        }
    }
}
