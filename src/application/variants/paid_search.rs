//! Paid-search campaign variant.
//!
//! Allocates 70% of the recommended budget over a 7- or 14-day flight with
//! fixed channel ROI constants and a category-driven keyword list.

use crate::domain::entities::campaign::Channel;
use crate::domain::error::DomainError;
use crate::domain::ports::variant::{
    AdStrategy, CampaignPlan, Messaging, TimelinePhase, VariantGenerator, VariantInput,
};
use crate::domain::values::action::Action;
use crate::domain::values::product_category::ProductCategory;

/// Share of the recommended budget spent on search.
const BUDGET_SHARE: f64 = 0.7;
/// Estimated impressions bought per budget unit.
const IMPRESSIONS_PER_UNIT: f64 = 50.0;
/// Share of daily demand a search flight converts.
const SELL_SHARE: f64 = 0.3;
/// Target cost-per-acquisition as a share of retail price.
const TARGET_CPA_SHARE: f64 = 0.15;

pub struct PaidSearchVariant;

/// Category base keywords plus the product name and two evergreen terms.
pub fn keywords_for(category: ProductCategory, product_name: &str) -> Vec<String> {
    let mut keywords: Vec<String> = category
        .keywords()
        .iter()
        .map(|k| k.to_string())
        .collect();
    keywords.push(product_name.to_string());
    keywords.push("sports nutrition".to_string());
    keywords.push("fitness supplements".to_string());
    keywords
}

impl VariantGenerator for PaidSearchVariant {
    fn name(&self) -> &'static str {
        "paid_search"
    }

    fn generate(&self, input: &VariantInput<'_>) -> Result<Option<CampaignPlan>, DomainError> {
        let product = input.product;
        let action = input.assessment.action;
        let liquidating = action == Action::Liquidate;

        if input.assessment.recommended_budget <= 0.0 {
            return Ok(None);
        }
        let budget = input.assessment.recommended_budget * BUDGET_SHARE;
        let duration: u32 = if liquidating { 7 } else { 14 };
        let daily_budget = budget / duration as f64;

        let units_to_move =
            (product.inventory.avg_daily_demand * SELL_SHARE * duration as f64).round() as i64;

        let ad_copy = if liquidating {
            format!(
                "{} - Limited Time Offer | Up to {:.0}% Off",
                product.short_name,
                input.assessment.recommended_discount * 100.0
            )
        } else {
            format!(
                "Premium {} | Fast Shipping | Trusted Brand",
                product.short_name
            )
        };

        let (optimize_end, scale_start) = if liquidating { (5, 6) } else { (10, 11) };
        let timeline = vec![
            TimelinePhase {
                name: "Setup".to_string(),
                description: "Campaign creation & approval".to_string(),
                day_range: "Day 1".to_string(),
            },
            TimelinePhase {
                name: "Optimize".to_string(),
                description: "Monitor and adjust bids".to_string(),
                day_range: format!("Day 2-{optimize_end}"),
            },
            TimelinePhase {
                name: "Scale".to_string(),
                description: "Increase budget on winners".to_string(),
                day_range: format!("Day {scale_start}-{duration}"),
            },
        ];

        Ok(Some(CampaignPlan {
            channel: Channel::PaidSearch,
            name: if liquidating {
                "Clearance Search + Shopping".to_string()
            } else {
                "Search + Shopping".to_string()
            },
            description: if liquidating {
                "Aggressive shopping + search to clear inventory fast".to_string()
            } else {
                "Capture high-intent search traffic with optimized campaigns".to_string()
            },
            budget,
            expected_roi: if liquidating { 4.5 } else { 3.2 },
            reach: (budget * IMPRESSIONS_PER_UNIT).round() as u64,
            duration_days: duration,
            units_to_move,
            influencers: Vec::new(),
            ad_strategy: Some(AdStrategy {
                campaign_type: if liquidating {
                    "Shopping + Search (Aggressive)".to_string()
                } else {
                    "Search + Display".to_string()
                },
                keywords: keywords_for(product.category, &product.name),
                daily_budget,
                target_cpa: Some(product.pricing.retail_price * TARGET_CPA_SHARE),
                ad_copy: Some(ad_copy),
            }),
            timeline,
            messaging: Messaging {
                angle: if liquidating {
                    "Flash sale - Limited inventory available".to_string()
                } else {
                    "Premium quality, fast delivery, trusted by athletes".to_string()
                },
                hooks: if liquidating {
                    vec!["Price Discount".into(), "Limited Availability".into(), "Act Now".into()]
                } else {
                    vec!["Quality".into(), "Trust".into(), "Performance".into()]
                },
            },
        }))
    }
}
