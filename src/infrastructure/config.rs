use crate::domain::error::TrendError;
use crate::domain::model::{DateBucket, PAGE_INCREMENT};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_enable_emoji")]
    pub enable_emoji: bool,
    #[serde(default)]
    pub clear_screen: bool,
    #[serde(default)]
    pub logging: Logging,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub trending: TrendingConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Logging {
    #[serde(default = "default_enable")]
    pub enable: bool,
    pub path: Option<String>,
    #[serde(default = "default_log_level")]
    pub level: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TrendingConfig {
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: usize,
    #[serde(default = "default_bucket")]
    pub default_bucket: DateBucket,
}

impl Default for Logging {
    fn default() -> Self {
        Self {
            enable: true,
            path: None,
            level: default_log_level(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl Default for TrendingConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            cache_capacity: default_cache_capacity(),
            default_bucket: default_bucket(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            enable_emoji: true,
            clear_screen: false,
            logging: Logging::default(),
            api: ApiConfig::default(),
            trending: TrendingConfig::default(),
        }
    }
}

impl Config {
    /// Reject values the controller cannot work with
    pub fn validate(&self) -> Result<(), TrendError> {
        if self.trending.page_size == 0 {
            return Err(TrendError::Config(
                "trending.page_size must be positive".to_string(),
            ));
        }
        if self.trending.cache_capacity == 0 {
            return Err(TrendError::Config(
                "trending.cache_capacity must be positive".to_string(),
            ));
        }
        if self.api.base_url.trim().is_empty() {
            return Err(TrendError::Config("api.base_url is empty".to_string()));
        }
        Ok(())
    }
}

// Defaults
fn default_theme() -> String {
    "temp".to_string()
}
fn default_enable_emoji() -> bool {
    true
}
fn default_enable() -> bool {
    true
}
fn default_log_level() -> String {
    "WARN".to_string()
}
fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}
fn default_timeout_ms() -> u64 {
    1000
}
fn default_page_size() -> u32 {
    PAGE_INCREMENT
}
fn default_cache_capacity() -> usize {
    10
}
fn default_bucket() -> DateBucket {
    DateBucket::Day
}

pub fn get_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("press-trending").join("config.toml"))
}

/// Parse a config document, filling every missing field with its default
pub fn parse_config(content: &str) -> Result<Config, TrendError> {
    let config = toml::from_str::<Config>(content)?;
    config.validate()?;
    Ok(config)
}

pub fn load_config() -> Result<Config, TrendError> {
    match get_config_path() {
        Some(path) => load_config_from(&path),
        None => Ok(Config::default()),
    }
}

pub fn load_config_from(path: &Path) -> Result<Config, TrendError> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path)?;
    match parse_config(&content) {
        Ok(config) => Ok(config),
        Err(e) => {
            eprintln!(
                "Warning: Failed to parse config file: {}. Using defaults.",
                e
            );
            Ok(Config::default())
        }
    }
}

pub fn generate_config_sample() -> Result<(), TrendError> {
    let path = get_config_path()
        .ok_or_else(|| TrendError::Config("Cannot determine config directory".to_string()))?;

    if path.exists() {
        eprintln!("Config file already exists at: {}", path.display());
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let toml_content = toml::to_string_pretty(&Config::default())
        .map_err(|e| TrendError::Config(format!("Failed to serialize config: {}", e)))?;
    fs::write(&path, toml_content)
        .map_err(|e| TrendError::Config(format!("Failed to write config file: {}", e)))?;
    println!("Generated config file at: {}", path.display());

    Ok(())
}
