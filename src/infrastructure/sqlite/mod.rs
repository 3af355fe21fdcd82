pub mod campaign_repo;
pub mod migrations;
