//! Campaign recommendation use case — runs every variant generator for a
//! classified product and collects the plans that materialize.

use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;

use crate::application::classify::ClassifiedProduct;
use crate::domain::error::DomainError;
use crate::domain::ports::catalog::Catalog;
use crate::domain::ports::variant::{CampaignPlan, VariantGenerator, VariantInput};
use crate::domain::values::assessment::Assessment;
use crate::domain::values::budget::BudgetPolicy;

/// A classified product with its 0–3 campaign plans.
#[derive(Debug, Serialize)]
pub struct RecommendationSet {
    pub generated_at: chrono::DateTime<chrono::Utc>,
    pub sku: String,
    pub product_name: String,
    pub assessment: Assessment,
    pub plans: Vec<CampaignPlan>,
}

pub struct RecommendUseCase {
    catalog: Arc<dyn Catalog>,
    policy: BudgetPolicy,
    generators: Vec<Box<dyn VariantGenerator>>,
}

impl RecommendUseCase {
    pub fn new(
        catalog: Arc<dyn Catalog>,
        policy: BudgetPolicy,
        generators: Vec<Box<dyn VariantGenerator>>,
    ) -> Self {
        Self {
            catalog,
            policy,
            generators,
        }
    }

    pub fn execute(&self, sku: &str) -> Result<RecommendationSet, DomainError> {
        let product = self
            .catalog
            .product_by_sku(sku)?
            .ok_or_else(|| DomainError::NotFound(format!("SKU not found: {sku}")))?;
        let assessment = product.assess(&self.policy)?;
        let influencers = self.catalog.influencers()?;

        let input = VariantInput {
            product: &product,
            assessment: &assessment,
            influencers: &influencers,
        };

        let mut plans = Vec::new();
        for generator in &self.generators {
            // A generator declining (None) is normal; a failing one is not.
            if let Some(plan) = generator.generate(&input)? {
                plans.push(plan);
            }
        }

        Ok(RecommendationSet {
            generated_at: Utc::now(),
            sku: product.sku.clone(),
            product_name: product.name.clone(),
            assessment,
            plans,
        })
    }

    /// Recommendation for an already-classified product (no catalog lookup).
    pub fn for_classified(
        &self,
        classified: &ClassifiedProduct,
    ) -> Result<Vec<CampaignPlan>, DomainError> {
        let influencers = self.catalog.influencers()?;
        let input = VariantInput {
            product: &classified.product,
            assessment: &classified.assessment,
            influencers: &influencers,
        };

        let mut plans = Vec::new();
        for generator in &self.generators {
            if let Some(plan) = generator.generate(&input)? {
                plans.push(plan);
            }
        }
        Ok(plans)
    }
}
