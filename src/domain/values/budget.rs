//! Campaign budget and discount estimation.
//!
//! Two pure formulas, selected by the recommended action:
//! - Liquidation budget: a fixed share of inventory value at cost.
//! - Amplify budget: a share of the revenue lift a campaign is expected to
//!   generate over its duration at the target lift.
//!
//! Discounting for liquidation is a shelf-life-tiered lookup; shorter shelf
//! life never yields a smaller discount.

use serde::Serialize;

use crate::domain::values::inventory::{InventorySnapshot, Pricing};

/// Configuration for budget calculations.
#[derive(Debug, Clone, Serialize)]
pub struct BudgetPolicy {
    /// Share of inventory value (at cost) to spend on liquidation. Default: 0.08.
    pub liquidation_rate: f64,
    /// Amplify campaign duration in days. Default: 14.
    pub amplify_duration_days: u32,
    /// Target demand lift for amplify campaigns (0.0–1.0). Default: 0.35.
    pub amplify_target_lift: f64,
    /// Share of the projected lift revenue to spend. Default: 0.25.
    pub amplify_budget_share: f64,
    /// Days of demand considered sellable before expiry when projecting
    /// revenue loss. Default: 45.
    pub sellable_demand_days: f64,
}

impl Default for BudgetPolicy {
    fn default() -> Self {
        Self {
            liquidation_rate: 0.08,
            amplify_duration_days: 14,
            amplify_target_lift: 0.35,
            amplify_budget_share: 0.25,
            sellable_demand_days: 45.0,
        }
    }
}

impl BudgetPolicy {
    /// Liquidation budget: `on_hand × unit_cost × liquidation_rate`.
    pub fn liquidation_budget(&self, inv: &InventorySnapshot, pricing: &Pricing) -> f64 {
        inv.on_hand_units as f64 * pricing.unit_cost * self.liquidation_rate
    }

    /// Amplify budget: a share of the projected lift revenue over the
    /// campaign duration (`demand × retail × days × lift × share`).
    pub fn amplify_budget(&self, inv: &InventorySnapshot, pricing: &Pricing) -> f64 {
        inv.avg_daily_demand
            * pricing.retail_price
            * self.amplify_duration_days as f64
            * self.amplify_target_lift
            * self.amplify_budget_share
    }

    /// Revenue written off if the excess beyond the sellable window expires:
    /// `max(0, on_hand − demand × sellable_days) × retail`.
    pub fn projected_revenue_loss(&self, inv: &InventorySnapshot, pricing: &Pricing) -> f64 {
        let sellable = inv.avg_daily_demand * self.sellable_demand_days;
        (inv.on_hand_units as f64 - sellable).max(0.0) * pricing.retail_price
    }

    /// Shelf-life-tiered liquidation discount:
    /// `<60d → 25%`, `<90d → 20%`, `days_of_supply > 60 → 15%`, else `10%`.
    pub fn recommended_discount(
        &self,
        shelf_life_remaining_days: i64,
        inv: &InventorySnapshot,
    ) -> f64 {
        if shelf_life_remaining_days < 60 {
            0.25
        } else if shelf_life_remaining_days < 90 {
            0.20
        } else if inv.days_of_supply > 60 {
            0.15
        } else {
            0.10
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inv(on_hand: i64, days_of_supply: i64, demand: f64) -> InventorySnapshot {
        InventorySnapshot {
            on_hand_units: on_hand,
            days_of_supply,
            avg_daily_demand: demand,
        }
    }

    fn pricing(cost: f64, retail: f64) -> Pricing {
        Pricing {
            unit_cost: cost,
            retail_price: retail,
        }
    }

    #[test]
    fn test_liquidation_budget_exact() {
        // 0.08 × 4800 × 2.80 = 1075.20, no rounding
        let policy = BudgetPolicy::default();
        let budget = policy.liquidation_budget(&inv(4800, 65, 73.8), &pricing(2.80, 4.99));
        assert!((budget - 1075.20).abs() < 1e-9);
    }

    #[test]
    fn test_amplify_budget_collapses_to_0_0875() {
        // 0.25 × 0.35 = 0.0875, so budget = 0.0875 × demand × retail × 14
        let policy = BudgetPolicy::default();
        let budget = policy.amplify_budget(&inv(960, 18, 53.3), &pricing(14.0, 29.99));
        let expected = 0.0875 * 53.3 * 29.99 * 14.0;
        assert!((budget - expected).abs() < 1e-9);
    }

    #[test]
    fn test_discount_tiers() {
        let policy = BudgetPolicy::default();
        assert_eq!(policy.recommended_discount(28, &inv(100, 65, 2.0)), 0.25);
        assert_eq!(policy.recommended_discount(75, &inv(100, 40, 2.0)), 0.20);
        assert_eq!(policy.recommended_discount(120, &inv(100, 65, 2.0)), 0.15);
        assert_eq!(policy.recommended_discount(120, &inv(100, 40, 2.0)), 0.10);
    }

    #[test]
    fn test_discount_monotonic_in_shelf_life() {
        // Shorter shelf life never yields a smaller discount, all else equal.
        let policy = BudgetPolicy::default();
        let position = inv(100, 65, 2.0);
        let mut last = f64::INFINITY;
        for days in [10, 59, 60, 89, 90, 400] {
            let d = policy.recommended_discount(days, &position);
            assert!(d <= last, "discount increased with longer shelf life");
            last = d;
        }
    }

    #[test]
    fn test_revenue_loss_clamps_at_zero() {
        let policy = BudgetPolicy::default();
        // 100 on hand, 45 days × 10/day = 450 sellable, no excess.
        let loss = policy.projected_revenue_loss(&inv(100, 10, 10.0), &pricing(1.0, 3.0));
        assert_eq!(loss, 0.0);
    }

    #[test]
    fn test_revenue_loss_on_excess() {
        let policy = BudgetPolicy::default();
        // 1000 on hand, 45 × 10 = 450 sellable → 550 excess × 3.0 retail.
        let loss = policy.projected_revenue_loss(&inv(1000, 100, 10.0), &pricing(1.0, 3.0));
        assert!((loss - 1650.0).abs() < 1e-9);
    }
}
