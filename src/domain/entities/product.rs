use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;
use crate::domain::values::assessment::{assess, Assessment};
use crate::domain::values::bet_quality::BetQuality;
use crate::domain::values::budget::BudgetPolicy;
use crate::domain::values::inventory::{InventorySnapshot, Pricing};
use crate::domain::values::product_category::ProductCategory;

/// A catalog SKU with its inventory snapshot. Immutable for the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub sku: String,
    pub name: String,
    pub short_name: String,
    pub category: ProductCategory,
    /// Total shelf life of the product in days.
    pub shelf_life_days: i64,
    /// Days of shelf life remaining for the stock on hand.
    pub shelf_life_remaining_days: i64,
    pub inventory: InventorySnapshot,
    pub pricing: Pricing,
    pub bet_quality: BetQuality,
    /// Keyword tags this SKU is known to respond to; the ranker joins trend
    /// and event signals against these.
    #[serde(default)]
    pub matched_signals: Vec<String>,
}

impl Product {
    /// Inventory value at cost.
    pub fn inventory_value(&self) -> f64 {
        self.inventory.on_hand_units as f64 * self.pricing.unit_cost
    }

    /// Score this position against the given budget policy.
    pub fn assess(&self, policy: &BudgetPolicy) -> Result<Assessment, DomainError> {
        assess(
            self.bet_quality,
            self.shelf_life_remaining_days,
            &self.inventory,
            &self.pricing,
            policy,
        )
    }
}
