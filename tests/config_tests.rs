//! 配置功能测试

use press_trending::domain::model::DateBucket;
use press_trending::infrastructure::config::{load_config_from, parse_config, Config};

#[test]
fn test_config_defaults() {
    let config = Config::default();

    assert_eq!(config.theme, "temp");
    assert!(config.enable_emoji);
    assert!(!config.clear_screen);
    assert!(config.logging.enable);
    assert_eq!(config.logging.level, "WARN");
    assert_eq!(config.api.timeout_ms, 1000);
    assert_eq!(config.trending.page_size, 12);
    assert_eq!(config.trending.cache_capacity, 10);
    assert_eq!(config.trending.default_bucket, DateBucket::Day);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_toml_format() {
    let toml_content = r#"
theme = "wudao"
enable_emoji = false

[logging]
enable = true
path = "/tmp/test.log"
level = "DEBUG"

[api]
base_url = "https://press.example.com"

[trending]
default_bucket = "week"
cache_capacity = 4
"#;

    let config = parse_config(toml_content).unwrap();
    assert_eq!(config.theme, "wudao");
    assert!(!config.enable_emoji);
    assert_eq!(config.logging.path.as_deref(), Some("/tmp/test.log"));
    assert_eq!(config.logging.level, "DEBUG");
    assert_eq!(config.api.base_url, "https://press.example.com");
    // Missing keys fall back per field
    assert_eq!(config.api.timeout_ms, 1000);
    assert_eq!(config.trending.page_size, 12);
    assert_eq!(config.trending.cache_capacity, 4);
    assert_eq!(config.trending.default_bucket, DateBucket::Week);
}

#[test]
fn test_empty_config_is_default() {
    let config = parse_config("").unwrap();
    assert_eq!(config.trending.page_size, 12);
    assert_eq!(config.api.base_url, "http://localhost:8080");
}

#[test]
fn test_invalid_values_rejected() {
    assert!(parse_config("[trending]\npage_size = 0\n").is_err());
    assert!(parse_config("[trending]\ncache_capacity = 0\n").is_err());
    assert!(parse_config("[trending]\ndefault_bucket = \"year\"\n").is_err());
    assert!(parse_config("[api]\nbase_url = \"  \"\n").is_err());
}

#[test]
fn test_load_missing_file_uses_defaults() {
    let path = std::env::temp_dir().join("press-trending-missing-config.toml");
    let _ = std::fs::remove_file(&path);

    let config = load_config_from(&path).unwrap();
    assert_eq!(config.theme, "temp");
}

#[test]
fn test_load_broken_file_falls_back() {
    let path = std::env::temp_dir().join(format!(
        "press-trending-broken-{}.toml",
        std::process::id()
    ));
    std::fs::write(&path, "theme = [unterminated").unwrap();

    let config = load_config_from(&path).unwrap();
    assert_eq!(config.trending.page_size, 12);

    std::fs::remove_file(&path).ok();
}

#[test]
fn test_default_config_round_trips_through_toml() {
    let sample = toml::to_string_pretty(&Config::default()).unwrap();
    assert!(sample.contains("[trending]"));
    assert!(sample.contains("default_bucket = \"day\""));

    let parsed = parse_config(&sample).unwrap();
    assert_eq!(parsed.api.base_url, Config::default().api.base_url);
}
