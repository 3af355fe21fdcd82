//! Trend-driven amplification opportunities.
//!
//! Pairs SURGING/RISING trends with GOOD-bet inventory. The join is the
//! trend's explicit `matched_skus` list when present, falling back to
//! full-phrase keyword overlap against the product's matched signals.

use chrono::Utc;

use crate::domain::entities::influencer::Availability;
use crate::domain::entities::product::Product;
use crate::domain::entities::trend::TrendSignal;
use crate::domain::error::DomainError;
use crate::domain::ports::strategy::{Opportunity, OpportunityKind, ScanContext, SignalStrategy};
use crate::domain::values::bet_quality::BetQuality;
use crate::domain::values::matching::phrase_overlap;
use crate::domain::values::priority::Priority;
use crate::domain::values::trend_class::TrendClass;

/// Budget per on-hand unit when riding a trend.
const BUDGET_PER_UNIT: f64 = 0.15;
/// Expected lift is this share of the trend's change percentage.
const LIFT_SHARE: f64 = 0.3;
/// ROI divisor: a +25% trend is worth about 1x return.
const ROI_DIVISOR: f64 = 25.0;
/// How many available influencers to attach to each opportunity.
const INFLUENCER_SLOTS: usize = 3;

pub struct AmplifyStrategy;

fn trend_matches(trend: &TrendSignal, product: &Product) -> bool {
    if trend.matched_skus.iter().any(|s| s == &product.sku) {
        return true;
    }
    phrase_overlap(&trend.keyword, &product.matched_signals)
}

impl SignalStrategy for AmplifyStrategy {
    fn name(&self) -> &'static str {
        "trend_amplify"
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
            .filter(|i| i.availability == Availability::Available)
            .take(INFLUENCER_SLOTS)
            .map(|i| i.handle.clone())
            .collect();

        let mut opportunities = Vec::new();

        for trend in ctx.trends.iter().filter(|t| t.class.is_actionable()) {
            for product in ctx
                .products
                .iter()
                .filter(|p| p.bet_quality == BetQuality::Good && trend_matches(trend, p))
            {
                let priority = if trend.class == TrendClass::Surging {
                    Priority::High
                } else {
                    Priority::Medium
                };

                let mut title: String = trend.keyword.clone();
                if let Some(first) = title.get_mut(0..1) {
                    first.make_ascii_uppercase();
                }

                opportunities.push(Opportunity {
                    id: format!("amp-{}-{}", slug(&trend.keyword), product.sku),
                    strategy: self.name().to_string(),
                    kind: OpportunityKind::Amplify,
                    priority,
                    signal_kind: "trend".to_string(),
                    signal_name: trend.keyword.clone(),
                    signal_change_pct: trend.change_pct,
                    sku: product.sku.clone(),
                    product_name: product.name.clone(),
                    title: format!("{title} Campaign"),
                    description: format!(
                        "Ride the {} trend wave with targeted content",
                        trend.keyword
                    ),
                    suggested_budget: product.inventory.on_hand_units as f64 * BUDGET_PER_UNIT,
                    expected_lift_pct: trend.change_pct * LIFT_SHARE,
                    expected_roi: trend.change_pct / ROI_DIVISOR,
                    margin_saved: None,
                    suggested_influencers: suggested.clone(),
                    detected_at: now,
                });
            }
        }

        Ok(opportunities)
    }
}

fn slug(s: &str) -> String {
    s.to_lowercase().replace(' ', "-")
}
