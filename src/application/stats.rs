//! Dashboard stats use case — aggregate numbers over the classified catalog
//! and the campaign log.

use std::sync::Arc;

use serde::Serialize;

use crate::application::classify::ClassifyUseCase;
use crate::domain::error::DomainError;
use crate::domain::ports::campaign_repository::CampaignRepository;

#[derive(Debug, Serialize)]
pub struct InventoryStats {
    pub total_skus: usize,
    pub critical_skus: usize,
    pub amplify_skus: usize,
    pub stable_skus: usize,
    /// Inventory value at cost across the whole catalog.
    pub total_inventory_value: f64,
    /// Projected revenue written off if liquidation candidates expire unsold.
    pub value_at_risk: f64,
    /// Sum of recommended campaign budgets across all SKUs.
    pub recommended_spend: f64,
    pub launched_campaigns: usize,
}

pub struct StatsUseCase {
    classify: Arc<ClassifyUseCase>,
    repo: Arc<dyn CampaignRepository>,
}

impl StatsUseCase {
    pub fn new(classify: Arc<ClassifyUseCase>, repo: Arc<dyn CampaignRepository>) -> Self {
        Self { classify, repo }
    }

    pub fn execute(&self) -> Result<InventoryStats, DomainError> {
        let review = self.classify.review()?;

        let value_at_risk: f64 = review
            .critical
            .products
            .iter()
            .map(|c| c.assessment.projected_revenue_loss)
            .sum();

        let recommended_spend: f64 = review
            .critical
            .products
            .iter()
            .chain(review.amplify.products.iter())
            .map(|c| c.assessment.recommended_budget)
            .sum();

        Ok(InventoryStats {
            total_skus: review.total_skus,
            critical_skus: review.critical.count,
            amplify_skus: review.amplify.count,
            stable_skus: review.stable.count,
            total_inventory_value: review.critical.inventory_value
                + review.amplify.inventory_value
                + review.stable.inventory_value,
            value_at_risk,
            recommended_spend,
            launched_campaigns: self.repo.count()?,
        })
    }
}
