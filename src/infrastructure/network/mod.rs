pub mod client;
pub mod http;

pub use client::HttpContentSource;
pub use http::create_client;
