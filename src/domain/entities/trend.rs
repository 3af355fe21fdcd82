use serde::{Deserialize, Serialize};

use crate::domain::values::trend_class::TrendClass;

/// A social/search trend keyword with momentum and pre-matched inventory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendSignal {
    pub keyword: String,
    /// Interest change over the lookback window, in percent.
    pub change_pct: f64,
    pub class: TrendClass,
    /// SKUs explicitly matched to this trend upstream (primary join key).
    #[serde(default)]
    pub matched_skus: Vec<String>,
    /// Category names matched upstream (informational).
    #[serde(default)]
    pub matched_categories: Vec<String>,
}
