pub mod http;
pub mod static_feed;
