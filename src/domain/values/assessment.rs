//! Inventory position scoring.
//!
//! Single-pass rule scoring over one position: accumulate urgency from the
//! liquidation triggers, then pick an action.
//!
//! - Bad bet: +40
//! - Shelf life under 90 days: +35
//! - More than 60 days of supply: +25
//!
//! Urgency ≥ 40 forces LIQUIDATE. Otherwise a good bet with tight supply,
//! long shelf life, and velocity strictly above 50 units/day is AMPLIFY
//! (urgency pinned at 30). Everything else is STABLE and keeps whatever
//! sub-threshold urgency accumulated.

use serde::Serialize;

use crate::domain::error::DomainError;
use crate::domain::values::action::Action;
use crate::domain::values::bet_quality::BetQuality;
use crate::domain::values::budget::BudgetPolicy;
use crate::domain::values::inventory::{InventorySnapshot, Pricing};

/// Urgency contribution for a BAD inventory bet.
const BAD_BET_URGENCY: u32 = 40;
/// Urgency contribution for shelf life under the short-shelf threshold.
const SHORT_SHELF_URGENCY: u32 = 35;
/// Urgency contribution for excess days of supply.
const EXCESS_SUPPLY_URGENCY: u32 = 25;
/// Urgency at or above this triggers liquidation.
const LIQUIDATE_THRESHOLD: u32 = 40;
/// Fixed urgency assigned to amplify candidates.
const AMPLIFY_URGENCY: u32 = 30;
/// Shelf-life cutoff (days) for the short-shelf trigger and amplify floor.
const SHELF_LIFE_CUTOFF_DAYS: i64 = 90;
/// Days-of-supply cutoff separating excess from tight supply.
const SUPPLY_CUTOFF_DAYS: i64 = 60;
/// Velocity (units/day) a product must strictly exceed to amplify.
const AMPLIFY_VELOCITY_MIN: f64 = 50.0;

/// Result of scoring one inventory position.
#[derive(Debug, Clone, Serialize)]
pub struct Assessment {
    pub action: Action,
    /// 0–100 urgency score.
    pub urgency_score: u32,
    /// Human-readable triggers that fired.
    pub reasons: Vec<String>,
    pub recommended_budget: f64,
    /// Revenue at risk if the excess expires. Zero unless liquidating.
    pub projected_revenue_loss: f64,
    /// Suggested liquidation discount (0.0–1.0). Zero unless liquidating.
    pub recommended_discount: f64,
}

/// Score one inventory position.
///
/// Inputs are validated up front: negative units, demand, prices, or day
/// counts are rejected with `InvalidInput` rather than flowing through the
/// arithmetic unchecked.
pub fn assess(
    bet_quality: BetQuality,
    shelf_life_remaining_days: i64,
    inv: &InventorySnapshot,
    pricing: &Pricing,
    policy: &BudgetPolicy,
) -> Result<Assessment, DomainError> {
    validate_inputs(shelf_life_remaining_days, inv, pricing)?;

    let mut urgency_score = 0u32;
    let mut reasons = Vec::new();

    if bet_quality == BetQuality::Bad {
        reasons.push("Poor inventory bet".to_string());
        urgency_score += BAD_BET_URGENCY;
    }

    if shelf_life_remaining_days < SHELF_LIFE_CUTOFF_DAYS {
        reasons.push(format!(
            "Only {shelf_life_remaining_days} days shelf life"
        ));
        urgency_score += SHORT_SHELF_URGENCY;
    }

    if inv.days_of_supply > SUPPLY_CUTOFF_DAYS {
        reasons.push(format!("{} days of excess supply", inv.days_of_supply));
        urgency_score += EXCESS_SUPPLY_URGENCY;
    }

    if urgency_score >= LIQUIDATE_THRESHOLD {
        return Ok(Assessment {
            action: Action::Liquidate,
            urgency_score,
            reasons,
            recommended_budget: policy.liquidation_budget(inv, pricing),
            projected_revenue_loss: policy.projected_revenue_loss(inv, pricing),
            recommended_discount: policy.recommended_discount(shelf_life_remaining_days, inv),
        });
    }

    if bet_quality == BetQuality::Good
        && inv.days_of_supply < SUPPLY_CUTOFF_DAYS
        && shelf_life_remaining_days > SHELF_LIFE_CUTOFF_DAYS
        && inv.velocity() > AMPLIFY_VELOCITY_MIN
    {
        reasons.push("High-velocity product, amplify demand".to_string());
        return Ok(Assessment {
            action: Action::Amplify,
            urgency_score: AMPLIFY_URGENCY,
            reasons,
            recommended_budget: policy.amplify_budget(inv, pricing),
            projected_revenue_loss: 0.0,
            recommended_discount: 0.0,
        });
    }

    Ok(Assessment {
        action: Action::Stable,
        urgency_score,
        reasons,
        recommended_budget: 0.0,
        projected_revenue_loss: 0.0,
        recommended_discount: 0.0,
    })
}

fn validate_inputs(
    shelf_life_remaining_days: i64,
    inv: &InventorySnapshot,
    pricing: &Pricing,
) -> Result<(), DomainError> {
    if shelf_life_remaining_days < 0 {
        return Err(DomainError::InvalidInput(format!(
            "negative shelf life: {shelf_life_remaining_days}"
        )));
    }
    if inv.on_hand_units < 0 {
        return Err(DomainError::InvalidInput(format!(
            "negative on-hand units: {}",
            inv.on_hand_units
        )));
    }
    if inv.days_of_supply < 0 {
        return Err(DomainError::InvalidInput(format!(
            "negative days of supply: {}",
            inv.days_of_supply
        )));
    }
    if inv.avg_daily_demand < 0.0 {
        return Err(DomainError::InvalidInput(format!(
            "negative daily demand: {}",
            inv.avg_daily_demand
        )));
    }
    if pricing.unit_cost < 0.0 || pricing.retail_price < 0.0 {
        return Err(DomainError::InvalidInput(
            "negative price".to_string(),
        ));
    }
    Ok(())
}
