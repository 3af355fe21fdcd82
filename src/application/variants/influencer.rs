//! Influencer campaign variant.
//!
//! Books a slate of category-matched, active-contract influencers, best
//! historical ROI first. Declines when the pool has no affinity match or the
//! budget buys zero slots.

use crate::domain::entities::campaign::Channel;
use crate::domain::entities::influencer::{ContractStatus, Influencer};
use crate::domain::error::DomainError;
use crate::domain::ports::variant::{
    CampaignPlan, Messaging, PlannedInfluencer, TimelinePhase, VariantGenerator, VariantInput,
};
use crate::domain::values::action::Action;

/// Budget required per influencer slot.
const COST_PER_SLOT: f64 = 250.0;
/// Hard cap on slate size.
const MAX_SLOTS: usize = 8;
/// Contingency buffer applied on top of the booked cost.
const COST_BUFFER: f64 = 1.15;

pub struct InfluencerVariant;

impl VariantGenerator for InfluencerVariant {
    fn name(&self) -> &'static str {
        "influencer"
    }

    fn generate(&self, input: &VariantInput<'_>) -> Result<Option<CampaignPlan>, DomainError> {
        let product = input.product;
        let action = input.assessment.action;
        let budget = input.assessment.recommended_budget;
        let affinity = product.category.affinity_tags();

        let slots = (budget / COST_PER_SLOT).floor() as usize;
        let slots = slots.min(MAX_SLOTS);
        if slots == 0 {
            return Ok(None);
        }

        let mut matched: Vec<&Influencer> = input
            .influencers
            .iter()
            .filter(|i| i.contract_status == ContractStatus::Active && i.matches_affinity(affinity))
            .collect();
        if matched.is_empty() {
            return Ok(None);
        }

        // Best historical ROI first; handle tie-break keeps output stable.
        matched.sort_by(|a, b| {
            b.avg_roi
                .partial_cmp(&a.avg_roi)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.handle.cmp(&b.handle))
        });

        let selected: Vec<PlannedInfluencer> = matched
            .into_iter()
            .take(slots)
            .map(|i| PlannedInfluencer {
                id: i.id.clone(),
                handle: i.handle.clone(),
                followers: i.followers,
                engagement_rate: i.engagement_rate,
                cost: i.booking_cost(),
            })
            .collect();

        let total_cost: f64 = selected.iter().map(|i| i.cost).sum();
        let reach: u64 = selected.iter().map(|i| i.followers).sum();

        let liquidating = action == Action::Liquidate;
        let duration: u32 = if liquidating { 7 } else { 14 };
        let sell_share = if liquidating { 0.4 } else { 0.35 };
        let units_to_move =
            (product.inventory.avg_daily_demand * sell_share * duration as f64).round() as i64;

        let timeline = if liquidating {
            vec![
                phase("Launch", "Influencers post initial content", "Day 1-2"),
                phase("Amplify", "Stories and engagement", "Day 3-5"),
                phase("Close", "Last chance messaging", "Day 6-7"),
            ]
        } else {
            vec![
                phase("Awareness", "Build anticipation", "Day 1-5"),
                phase("Engagement", "Product integration", "Day 6-10"),
                phase("Conversion", "Drive sales", "Day 11-14"),
            ]
        };

        Ok(Some(CampaignPlan {
            channel: Channel::Influencer,
            name: if liquidating {
                "Flash Influencer Liquidation".to_string()
            } else {
                "Influencer Amplify Campaign".to_string()
            },
            description: if liquidating {
                "Clear excess inventory through targeted influencer partnerships".to_string()
            } else {
                "Drive demand with high-engagement influencer content".to_string()
            },
            budget: total_cost * COST_BUFFER,
            expected_roi: if liquidating { 5.2 } else { 3.8 },
            reach,
            duration_days: duration,
            units_to_move,
            influencers: selected,
            ad_strategy: None,
            timeline,
            messaging: Messaging {
                angle: if liquidating {
                    "Limited stock - my followers get exclusive early access".to_string()
                } else {
                    "Why I always have this in my routine".to_string()
                },
                hooks: if liquidating {
                    vec!["Exclusivity".into(), "Scarcity".into(), "Insider Access".into()]
                } else {
                    vec!["Authenticity".into(), "Results".into(), "Community".into()]
                },
            },
        }))
    }
}

fn phase(name: &str, description: &str, day_range: &str) -> TimelinePhase {
    TimelinePhase {
        name: name.to_string(),
        description: description.to_string(),
        day_range: day_range.to_string(),
    }
}
