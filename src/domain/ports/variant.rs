//! Campaign variant generation port.
//!
//! A [`VariantGenerator`] turns a classified product plus its recommended
//! budget into one concrete, fully-specified campaign plan. Generators may
//! decline (no matching influencer pool, zero bookable slots) by returning
//! `Ok(None)`; callers collect whatever plans materialize.

use serde::Serialize;

use crate::domain::entities::campaign::Channel;
use crate::domain::entities::influencer::Influencer;
use crate::domain::entities::product::Product;
use crate::domain::error::DomainError;
use crate::domain::values::assessment::Assessment;

/// One influencer slotted into a plan.
#[derive(Debug, Clone, Serialize)]
pub struct PlannedInfluencer {
    pub id: String,
    pub handle: String,
    pub followers: u64,
    pub engagement_rate: f64,
    pub cost: f64,
}

/// Paid-search configuration within a plan.
#[derive(Debug, Clone, Serialize)]
pub struct AdStrategy {
    pub campaign_type: String,
    pub keywords: Vec<String>,
    pub daily_budget: f64,
    pub target_cpa: Option<f64>,
    pub ad_copy: Option<String>,
}

/// A named phase of the campaign timeline.
#[derive(Debug, Clone, Serialize)]
pub struct TimelinePhase {
    pub name: String,
    pub description: String,
    pub day_range: String,
}

/// Messaging angle plus supporting hooks, selected by action type.
#[derive(Debug, Clone, Serialize)]
pub struct Messaging {
    pub angle: String,
    pub hooks: Vec<String>,
}

/// A concrete, ready-to-launch campaign proposal.
#[derive(Debug, Clone, Serialize)]
pub struct CampaignPlan {
    pub channel: Channel,
    pub name: String,
    pub description: String,
    pub budget: f64,
    pub expected_roi: f64,
    pub reach: u64,
    pub duration_days: u32,
    pub units_to_move: i64,
    pub influencers: Vec<PlannedInfluencer>,
    pub ad_strategy: Option<AdStrategy>,
    pub timeline: Vec<TimelinePhase>,
    pub messaging: Messaging,
}

/// Input handed to every variant generator.
pub struct VariantInput<'a> {
    pub product: &'a Product,
    pub assessment: &'a Assessment,
    pub influencers: &'a [Influencer],
}

pub trait VariantGenerator: Send + Sync {
    /// Unique name for this generator.
    fn name(&self) -> &'static str;

    /// Build a plan, or decline with `Ok(None)`.
    fn generate(&self, input: &VariantInput<'_>) -> Result<Option<CampaignPlan>, DomainError>;
}
