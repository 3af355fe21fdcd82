//! Inventory review use case — classifies every catalog position into
//! critical/amplify/stable buckets.

use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;

use crate::domain::entities::product::Product;
use crate::domain::error::DomainError;
use crate::domain::ports::catalog::Catalog;
use crate::domain::values::action::Action;
use crate::domain::values::assessment::Assessment;
use crate::domain::values::budget::BudgetPolicy;

/// A product paired with its assessment.
#[derive(Debug, Clone, Serialize)]
pub struct ClassifiedProduct {
    pub product: Product,
    pub assessment: Assessment,
}

/// One review bucket with its aggregate inventory value at cost.
#[derive(Debug, Serialize)]
pub struct Bucket {
    pub count: usize,
    pub inventory_value: f64,
    pub products: Vec<ClassifiedProduct>,
}

impl Bucket {
    fn new() -> Self {
        Self {
            count: 0,
            inventory_value: 0.0,
            products: Vec::new(),
        }
    }

    fn push(&mut self, item: ClassifiedProduct) {
        self.count += 1;
        self.inventory_value += item.product.inventory_value();
        self.products.push(item);
    }
}

/// Full inventory review: every SKU classified and bucketed by action.
#[derive(Debug, Serialize)]
pub struct InventoryReview {
    pub reviewed_at: chrono::DateTime<chrono::Utc>,
    pub total_skus: usize,
    pub critical: Bucket,
    pub amplify: Bucket,
    pub stable: Bucket,
}

pub struct ClassifyUseCase {
    catalog: Arc<dyn Catalog>,
    policy: BudgetPolicy,
}

impl ClassifyUseCase {
    pub fn new(catalog: Arc<dyn Catalog>, policy: BudgetPolicy) -> Self {
        Self { catalog, policy }
    }

    /// Classify the whole catalog. A single pass, recomputed from scratch on
    /// every call.
    pub fn review(&self) -> Result<InventoryReview, DomainError> {
        let products = self.catalog.products()?;

        let mut review = InventoryReview {
            reviewed_at: Utc::now(),
            total_skus: products.len(),
            critical: Bucket::new(),
            amplify: Bucket::new(),
            stable: Bucket::new(),
        };

        for product in products {
            let assessment = product.assess(&self.policy)?;
            let bucket = match assessment.action {
                Action::Liquidate => &mut review.critical,
                Action::Amplify => &mut review.amplify,
                Action::Stable => &mut review.stable,
            };
            bucket.push(ClassifiedProduct {
                product,
                assessment,
            });
        }

        Ok(review)
    }

    /// Classify a single SKU.
    pub fn classify_sku(&self, sku: &str) -> Result<ClassifiedProduct, DomainError> {
        let product = self
            .catalog
            .product_by_sku(sku)?
            .ok_or_else(|| DomainError::NotFound(format!("SKU not found: {sku}")))?;
        let assessment = product.assess(&self.policy)?;
        Ok(ClassifiedProduct {
            product,
            assessment,
        })
    }
}
