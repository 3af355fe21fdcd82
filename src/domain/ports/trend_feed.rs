//! Trend feed port: the consumed interface for upstream trend data.
//!
//! Upstream serves raw trend records; fields beyond the term are routinely
//! missing or malformed, so everything defaults. Records are coerced into
//! [`TrendSignal`]s before the core ever sees them.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::entities::trend::TrendSignal;
use crate::domain::error::DomainError;
use crate::domain::values::trend_class::TrendClass;

/// Raw wire record from a trend provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendRecord {
    pub term: String,
    #[serde(default)]
    pub current_interest: f64,
    #[serde(default)]
    pub change_percent: f64,
    #[serde(default)]
    pub interest_over_time: Vec<f64>,
    #[serde(default)]
    pub matched_skus: Vec<String>,
    #[serde(default)]
    pub matched_categories: Vec<String>,
    #[serde(default)]
    pub suggested_action: Option<String>,
    #[serde(default)]
    pub urgency: Option<String>,
}

impl TrendRecord {
    /// Coerce into a domain signal; the class is derived from the change
    /// percentage rather than trusting any upstream label.
    pub fn into_signal(self) -> TrendSignal {
        TrendSignal {
            class: TrendClass::from_change_pct(self.change_percent),
            keyword: self.term,
            change_pct: self.change_percent,
            matched_skus: self.matched_skus,
            matched_categories: self.matched_categories,
        }
    }
}

#[async_trait]
pub trait TrendFeed: Send + Sync {
    async fn fetch(&self) -> Result<Vec<TrendRecord>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_record_coerces_with_defaults() {
        let record: TrendRecord =
            serde_json::from_str(r#"{"term": "protein ice cream"}"#).unwrap();
        let signal = record.into_signal();
        assert_eq!(signal.keyword, "protein ice cream");
        assert_eq!(signal.change_pct, 0.0);
        assert_eq!(signal.class, TrendClass::Stable);
        assert!(signal.matched_skus.is_empty());
    }

    #[test]
    fn test_full_record_maps_class_from_change() {
        let record: TrendRecord = serde_json::from_str(
            r#"{"term": "hyrox training", "changePercent": 68.0, "matchedSkus": ["PRE-003"]}"#,
        )
        .unwrap();
        let signal = record.into_signal();
        assert_eq!(signal.class, TrendClass::Surging);
        assert_eq!(signal.matched_skus, vec!["PRE-003"]);
    }
}
