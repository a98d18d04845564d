//! 应用状态装配测试

use press_trending::domain::model::DateBucket;
use press_trending::infrastructure::config::Config;
use press_trending::state::AppState;

#[test]
fn test_controller_starts_on_requested_bucket() {
    let state = AppState::new(Config::default()).unwrap();

    let controller = state.controller(Some(DateBucket::Week));

    let query = controller.query();
    assert_eq!(query.bucket, DateBucket::Week);
    assert_eq!(query.page_size, 12);
    assert_eq!(controller.view().query.bucket, DateBucket::Week);
    // 挂载前不应发出任何请求
    assert_eq!(controller.fetches_issued(), 0);
    assert!(!controller.has_pending());
}

#[test]
fn test_controller_falls_back_to_configured_bucket() {
    let mut config = Config::default();
    config.trending.default_bucket = DateBucket::Month;
    config.trending.page_size = 5;
    let state = AppState::new(config).unwrap();

    let controller = state.controller(None);

    assert_eq!(controller.query().bucket, DateBucket::Month);
    assert_eq!(controller.page_increment(), 5);
    assert_eq!(controller.fetches_issued(), 0);
}
