//! Trending content browser for the press admin panel.
//!
//! The core is [`application::trending::TrendingController`]: it tracks the
//! current date window and page size, caches fetched pages, and keeps late
//! responses for an old query from overwriting the current one.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod presentation;
pub mod state;
