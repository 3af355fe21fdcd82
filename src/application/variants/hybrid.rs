//! Hybrid campaign variant: influencers + paid search around a trend topic.
//!
//! Splits the budget 60/40, books the top four active influencers by
//! historical ROI regardless of category affinity, and names the campaign
//! after the category's leading trend topic.

use crate::domain::entities::campaign::Channel;
use crate::domain::entities::influencer::{ContractStatus, Influencer};
use crate::domain::error::DomainError;
use crate::domain::ports::variant::{
    AdStrategy, CampaignPlan, Messaging, PlannedInfluencer, TimelinePhase, VariantGenerator,
    VariantInput,
};
use crate::domain::values::action::Action;

use super::paid_search::keywords_for;

/// Influencer share of the budget; the rest goes to search.
const INFLUENCER_SHARE: f64 = 0.6;
/// Estimated impressions bought per budget unit across both channels.
const IMPRESSIONS_PER_UNIT: f64 = 80.0;
/// Share of daily demand a converged campaign moves.
const SELL_SHARE: f64 = 0.5;
/// Slate size, best ROI first, category-agnostic.
const SLATE_SIZE: usize = 4;
/// Fallback topic when a category has no trend table entry.
const FALLBACK_TOPIC: &str = "fitness trends";

pub struct HybridVariant;

impl VariantGenerator for HybridVariant {
    fn name(&self) -> &'static str {
        "hybrid"
    }

    fn generate(&self, input: &VariantInput<'_>) -> Result<Option<CampaignPlan>, DomainError> {
        let product = input.product;
        let action = input.assessment.action;
        let liquidating = action == Action::Liquidate;
        let budget = input.assessment.recommended_budget;
        if budget <= 0.0 {
            return Ok(None);
        }

        let trend_topic = product
            .category
            .trend_topics()
            .first()
            .copied()
            .unwrap_or(FALLBACK_TOPIC);

        let ads_budget = budget * (1.0 - INFLUENCER_SHARE);
        let duration: u32 = if liquidating { 10 } else { 14 };

        let mut pool: Vec<&Influencer> = input
            .influencers
            .iter()
            .filter(|i| i.contract_status == ContractStatus::Active)
            .collect();
        pool.sort_by(|a, b| {
            b.avg_roi
                .partial_cmp(&a.avg_roi)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.handle.cmp(&b.handle))
        });

        let slate: Vec<PlannedInfluencer> = pool
            .into_iter()
            .take(SLATE_SIZE)
            .map(|i| PlannedInfluencer {
                id: i.id.clone(),
                handle: i.handle.clone(),
                followers: i.followers,
                engagement_rate: i.engagement_rate,
                cost: i.booking_cost(),
            })
            .collect();

        let units_to_move =
            (product.inventory.avg_daily_demand * SELL_SHARE * duration as f64).round() as i64;

        let timeline = vec![
            TimelinePhase {
                name: "Launch Influencers".to_string(),
                description: "Influencer content goes live".to_string(),
                day_range: "Day 1-3".to_string(),
            },
            TimelinePhase {
                name: "Launch Search".to_string(),
                description: "Capture search intent".to_string(),
                day_range: "Day 2-5".to_string(),
            },
            TimelinePhase {
                name: "Retarget".to_string(),
                description: "Display ads to engaged audience".to_string(),
                day_range: format!("Day 6-{duration}"),
            },
        ];

        Ok(Some(CampaignPlan {
            channel: Channel::Hybrid,
            name: format!("{trend_topic} Convergence Campaign"),
            description: format!(
                "Multi-channel campaign leveraging {trend_topic} with influencers + search"
            ),
            budget,
            expected_roi: if liquidating { 6.0 } else { 4.5 },
            reach: (budget * IMPRESSIONS_PER_UNIT).round() as u64,
            duration_days: duration,
            units_to_move,
            influencers: slate,
            ad_strategy: Some(AdStrategy {
                campaign_type: "Search + Shopping + Display Retargeting".to_string(),
                keywords: keywords_for(product.category, &product.name),
                daily_budget: ads_budget / duration as f64,
                target_cpa: None,
                ad_copy: None,
            }),
            timeline,
            messaging: Messaging {
                angle: format!("Ride the {trend_topic} wave with {}", product.short_name),
                hooks: vec![
                    "Trending".into(),
                    "FOMO".into(),
                    "Social Proof".into(),
                    "Authority".into(),
                ],
            },
        }))
    }
}
