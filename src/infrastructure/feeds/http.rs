use async_trait::async_trait;

use crate::domain::error::DomainError;
use crate::domain::ports::trend_feed::{TrendFeed, TrendRecord};

/// Trend feed pulling a JSON array of trend records over HTTP.
pub struct HttpTrendFeed {
    url: String,
    client: reqwest::Client,
}

impl HttpTrendFeed {
    pub fn new(url: String) -> Self {
        Self {
            url,
            client: reqwest::Client::builder()
                .user_agent("sensai/0.1")
                .build()
                .unwrap_or_default(),
        }
    }
}

#[async_trait]
impl TrendFeed for HttpTrendFeed {
    async fn fetch(&self) -> Result<Vec<TrendRecord>, DomainError> {
        let resp = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| DomainError::Feed(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(DomainError::Feed(format!(
                "Trend endpoint returned {}",
                resp.status()
            )));
        }

        resp.json::<Vec<TrendRecord>>()
            .await
            .map_err(|e| DomainError::Parse(e.to_string()))
    }
}
