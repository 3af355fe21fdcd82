pub mod campaign_repository;
pub mod catalog;
pub mod strategy;
pub mod trend_feed;
pub mod variant;
