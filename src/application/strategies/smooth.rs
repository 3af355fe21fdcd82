//! Pre-event demand smoothing opportunities.
//!
//! Pairs upcoming events with matched inventory to build awareness ahead of
//! the demand spike. Skips SKUs that already carry a non-liquidation
//! opportunity from an earlier strategy: one demand-side play per SKU.

use chrono::Utc;

use crate::domain::entities::event::EventSignal;
use crate::domain::entities::product::Product;
use crate::domain::error::DomainError;
use crate::domain::ports::strategy::{Opportunity, OpportunityKind, ScanContext, SignalStrategy};
use crate::domain::values::matching::phrase_overlap;
use crate::domain::values::priority::Priority;

/// Budget per percentage point of event demand lift.
const BUDGET_PER_LIFT_POINT: f64 = 3.0;
/// ROI divisor: a +30% event lift is worth about 1x return.
const ROI_DIVISOR: f64 = 30.0;
/// How many fitness-niche influencers to attach.
const INFLUENCER_SLOTS: usize = 2;

pub struct SmoothStrategy;

fn event_matches(event: &EventSignal, product: &Product) -> bool {
    if event.categories.contains(&product.category) {
        return true;
    }
    phrase_overlap(&event.name, &product.matched_signals)
}

impl SignalStrategy for SmoothStrategy {
    fn name(&self) -> &'static str {
        "event_smooth"
    }

    fn detect(
        &self,
        ctx: &ScanContext,
        detected: &[Opportunity],
    ) -> Result<Vec<Opportunity>, DomainError> {
        let now = Utc::now();

        let suggested: Vec<String> = ctx
            .influencers
            .iter()
            .filter(|i| i.niche.to_lowercase().contains("fitness"))
            .take(INFLUENCER_SLOTS)
            .map(|i| i.handle.clone())
            .collect();

        let mut opportunities = Vec::new();

        for event in &ctx.events {
            let lift = event.demand_lift_pct();

            for product in ctx.products.iter().filter(|p| event_matches(event, p)) {
                let already_claimed = detected
                    .iter()
                    .chain(opportunities.iter())
                    .any(|o| o.sku == product.sku && o.kind != OpportunityKind::Liquidate);
                if already_claimed {
                    continue;
                }

                opportunities.push(Opportunity {
                    id: format!("smooth-{}-{}", event.id, product.sku),
                    strategy: self.name().to_string(),
                    kind: OpportunityKind::Smooth,
                    priority: Priority::Medium,
                    signal_kind: "event".to_string(),
                    signal_name: event.name.clone(),
                    signal_change_pct: lift,
                    sku: product.sku.clone(),
                    product_name: product.name.clone(),
                    title: "Pre-Event Awareness".to_string(),
                    description: format!("Build demand before {}", event.name),
                    suggested_budget: lift * BUDGET_PER_LIFT_POINT,
                    expected_lift_pct: lift,
                    expected_roi: lift / ROI_DIVISOR,
                    margin_saved: None,
                    suggested_influencers: suggested.clone(),
                    detected_at: now,
                });
            }
        }

        Ok(opportunities)
    }
}
