pub mod catalog;
pub mod feeds;
pub mod sqlite;
