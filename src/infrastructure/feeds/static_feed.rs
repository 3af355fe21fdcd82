use async_trait::async_trait;

use crate::domain::error::DomainError;
use crate::domain::ports::trend_feed::{TrendFeed, TrendRecord};

/// In-memory trend feed. Serves a fixed record set; used when no feed URL is
/// configured and as a test double.
pub struct StaticTrendFeed {
    records: Vec<TrendRecord>,
}

impl StaticTrendFeed {
    pub fn new(records: Vec<TrendRecord>) -> Self {
        Self { records }
    }
}

#[async_trait]
impl TrendFeed for StaticTrendFeed {
    async fn fetch(&self) -> Result<Vec<TrendRecord>, DomainError> {
        Ok(self.records.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_feed_returns_records() {
        let records: Vec<TrendRecord> = serde_json::from_str(
            r#"[{"term": "protein coffee", "changePercent": 34.0}]"#,
        )
        .unwrap();
        let feed = StaticTrendFeed::new(records);
        let rt = tokio::runtime::Runtime::new().unwrap();
        let fetched = rt.block_on(feed.fetch()).unwrap();
        assert_eq!(fetched.len(), 1);
        assert_eq!(fetched[0].term, "protein coffee");
    }
}
