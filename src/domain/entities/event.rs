use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::values::product_category::ProductCategory;

/// A scheduled demand-driving event (competition, expo, seasonal moment).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventSignal {
    pub id: String,
    pub name: String,
    pub date: NaiveDate,
    pub days_until: i64,
    pub attendees: u64,
    /// Impact tier label, e.g. "High" or "Critical".
    pub impact: String,
    /// Product categories the event drives demand for (explicit join key).
    #[serde(default)]
    pub categories: Vec<ProductCategory>,
    /// Demand multiplier during the event window, e.g. 1.8 = +80%.
    pub demand_multiplier: f64,
}

impl EventSignal {
    /// Demand lift in percent: `(multiplier − 1) × 100`.
    pub fn demand_lift_pct(&self) -> f64 {
        (self.demand_multiplier - 1.0) * 100.0
    }
}
