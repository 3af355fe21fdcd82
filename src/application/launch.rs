//! Campaign launch use case — appends to the launched-campaign log.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::entities::campaign::{Channel, LaunchedCampaign};
use crate::domain::error::DomainError;
use crate::domain::ports::campaign_repository::{CampaignFilter, CampaignRepository};
use crate::domain::ports::catalog::Catalog;

pub struct LaunchUseCase {
    repo: Arc<dyn CampaignRepository>,
    catalog: Arc<dyn Catalog>,
}

impl LaunchUseCase {
    pub fn new(repo: Arc<dyn CampaignRepository>, catalog: Arc<dyn Catalog>) -> Self {
        Self { repo, catalog }
    }

    pub fn launch(
        &self,
        sku: String,
        channel: Channel,
        name: String,
        budget: f64,
        expected_roi: f64,
        source_opportunity: Option<String>,
    ) -> Result<LaunchedCampaign, DomainError> {
        if budget < 0.0 {
            return Err(DomainError::InvalidInput(format!(
                "negative budget: {budget}"
            )));
        }
        // Launches must reference a real SKU.
        if self.catalog.product_by_sku(&sku)?.is_none() {
            return Err(DomainError::NotFound(format!("SKU not found: {sku}")));
        }

        let campaign =
            LaunchedCampaign::new(sku, channel, name, budget, expected_roi, source_opportunity);
        self.repo.append(&campaign)?;
        Ok(campaign)
    }

    pub fn list(
        &self,
        limit: Option<usize>,
        since: Option<DateTime<Utc>>,
        sku: Option<String>,
    ) -> Result<Vec<LaunchedCampaign>, DomainError> {
        self.repo.list(&CampaignFilter { sku, since, limit })
    }
}
