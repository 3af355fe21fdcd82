//! Filesystem catalog loader.
//!
//! Reads the session dataset from a directory of JSON files:
//! `products.json`, `influencers.json`, `trends.json`, `events.json`.
//! Missing files are treated as empty collections so a products-only
//! directory still loads.

use std::path::Path;

use chrono::Utc;
use serde::de::DeserializeOwned;

use crate::domain::entities::event::EventSignal;
use crate::domain::entities::influencer::Influencer;
use crate::domain::entities::product::Product;
use crate::domain::error::DomainError;
use crate::domain::ports::trend_feed::TrendRecord;

use super::MemoryCatalog;

pub fn load_dir(dir: &Path) -> Result<MemoryCatalog, DomainError> {
    let products: Vec<Product> = load_file(&dir.join("products.json"))?;
    let influencers: Vec<Influencer> = load_file(&dir.join("influencers.json"))?;
    let records: Vec<TrendRecord> = load_file(&dir.join("trends.json"))?;
    let mut events: Vec<EventSignal> = load_file(&dir.join("events.json"))?;

    // days_until in the file goes stale; recompute from the event date.
    let today = Utc::now().date_naive();
    for event in &mut events {
        event.days_until = (event.date - today).num_days();
    }

    let trends = records.into_iter().map(TrendRecord::into_signal).collect();

    Ok(MemoryCatalog::new(products, influencers, trends, events))
}

fn load_file<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, DomainError> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let raw = std::fs::read_to_string(path)
        .map_err(|e| DomainError::Parse(format!("Failed to read {}: {e}", path.display())))?;
    serde_json::from_str(&raw)
        .map_err(|e| DomainError::Parse(format!("Failed to parse {}: {e}", path.display())))
}
