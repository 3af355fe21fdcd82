//! Expiry-driven liquidation opportunities.
//!
//! Flags positions with a BAD bet or under 45 days of shelf life remaining.
//! Under 30 days the clock dominates everything else in the scan: CRITICAL.

use chrono::Utc;

use crate::domain::error::DomainError;
use crate::domain::ports::strategy::{Opportunity, OpportunityKind, ScanContext, SignalStrategy};
use crate::domain::values::bet_quality::BetQuality;
use crate::domain::values::priority::Priority;

/// Shelf-life floor (days remaining) below which a position is flagged.
const EXPIRY_FLAG_DAYS: i64 = 45;
/// Below this many days the opportunity is CRITICAL.
const CRITICAL_DAYS: i64 = 30;
/// Flash-sale budget as a share of inventory value at cost.
const FLASH_BUDGET_RATE: f64 = 0.02;
/// Share of retail value recoverable in a flash sale.
const RECOVERY_SHARE: f64 = 0.6;
/// Share of cost-side margin rescued by clearing before expiry.
const MARGIN_SAVED_SHARE: f64 = 0.4;
/// Expected sell-through lift from a flash sale, in percent.
const FLASH_LIFT_PCT: f64 = 80.0;
/// Influencers costing less than this per post fit liquidation economics.
const MAX_POST_COST: f64 = 200.0;
/// How many cheap influencers to attach.
const INFLUENCER_SLOTS: usize = 5;

pub struct LiquidateStrategy;

impl SignalStrategy for LiquidateStrategy {
    fn name(&self) -> &'static str {
        "expiry_liquidate"
    }

    fn detect(
        &self,
        ctx: &ScanContext,
        _detected: &[Opportunity],
    ) -> Result<Vec<Opportunity>, DomainError> {
        let now = Utc::now();

        let suggested: Vec<String> = ctx
            .influencers
            .iter()
            .filter(|i| i.booking_cost() < MAX_POST_COST)
            .take(INFLUENCER_SLOTS)
            .map(|i| i.handle.clone())
            .collect();

        let mut opportunities = Vec::new();

        for product in ctx.products.iter().filter(|p| {
            p.bet_quality == BetQuality::Bad || p.shelf_life_remaining_days < EXPIRY_FLAG_DAYS
        }) {
            let days = product.shelf_life_remaining_days;
            let priority = if days < CRITICAL_DAYS {
                Priority::Critical
            } else {
                Priority::High
            };

            // Shelf-life consumed so far, expressed as negative momentum.
            let decay_pct = if product.shelf_life_days > 0 {
                -((1.0 - days as f64 / product.shelf_life_days as f64) * 100.0).round()
            } else {
                -100.0
            };

            let units = product.inventory.on_hand_units as f64;
            let budget = units * product.pricing.unit_cost * FLASH_BUDGET_RATE;
            let expected_roi = if budget > 0.0 {
                (units * product.pricing.retail_price * RECOVERY_SHARE) / budget
            } else {
                0.0
            };

            opportunities.push(Opportunity {
                id: format!("liq-{}", product.sku),
                strategy: self.name().to_string(),
                kind: OpportunityKind::Liquidate,
                priority,
                signal_kind: "expiry".to_string(),
                signal_name: format!("Expiring in {days} days"),
                signal_change_pct: decay_pct,
                sku: product.sku.clone(),
                product_name: product.name.clone(),
                title: "Flash Sale Liquidation".to_string(),
                description: format!(
                    "Clear {} units before expiry",
                    product.inventory.on_hand_units
                ),
                suggested_budget: budget,
                expected_lift_pct: FLASH_LIFT_PCT,
                expected_roi,
                margin_saved: Some(units * product.pricing.unit_cost * MARGIN_SAVED_SHARE),
                suggested_influencers: suggested.clone(),
                detected_at: now,
            });
        }

        Ok(opportunities)
    }
}
