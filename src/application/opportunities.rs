//! Opportunity scan use case — runs all registered strategies over the
//! session dataset and returns a ranked, deterministic list.

use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;

use crate::domain::error::DomainError;
use crate::domain::ports::catalog::Catalog;
use crate::domain::ports::strategy::{Opportunity, ScanContext, SignalStrategy};
use crate::domain::values::priority::Priority;

/// Result of running all strategies.
#[derive(Debug, Serialize)]
pub struct OpportunityScan {
    pub scanned_at: chrono::DateTime<chrono::Utc>,
    pub products_scanned: usize,
    pub trends_scanned: usize,
    pub events_scanned: usize,
    pub strategies_run: usize,
    pub strategies_failed: usize,
    pub total_opportunities: usize,
    pub opportunities: Vec<Opportunity>,
}

pub struct OpportunityScanUseCase {
    catalog: Arc<dyn Catalog>,
    strategies: Vec<Box<dyn SignalStrategy>>,
}

impl OpportunityScanUseCase {
    pub fn new(catalog: Arc<dyn Catalog>, strategies: Vec<Box<dyn SignalStrategy>>) -> Self {
        Self {
            catalog,
            strategies,
        }
    }

    /// Run all strategies and return ranked opportunities.
    ///
    /// `min_priority` drops anything less urgent; `limit` caps the output.
    pub fn execute(
        &self,
        min_priority: Option<Priority>,
        limit: Option<usize>,
    ) -> Result<OpportunityScan, DomainError> {
        let now = Utc::now();

        let ctx = ScanContext {
            products: self.catalog.products()?,
            trends: self.catalog.trends()?,
            events: self.catalog.events()?,
            influencers: self.catalog.influencers()?,
        };

        let products_scanned = ctx.products.len();
        let trends_scanned = ctx.trends.len();
        let events_scanned = ctx.events.len();

        let mut all = Vec::new();
        let mut succeeded = 0usize;

        for strategy in &self.strategies {
            match strategy.detect(&ctx, &all) {
                Ok(mut opps) => {
                    succeeded += 1;
                    all.append(&mut opps);
                }
                Err(e) => {
                    eprintln!("WARNING: Strategy '{}' failed: {}", strategy.name(), e);
                }
            }
        }

        if let Some(min) = min_priority {
            all.retain(|o| o.priority <= min);
        }

        // Priority rank first, then budget descending, then SKU: fully
        // deterministic regardless of strategy emission order.
        all.sort_by(|a, b| {
            a.priority
                .rank()
                .cmp(&b.priority.rank())
                .then_with(|| {
                    b.suggested_budget
                        .partial_cmp(&a.suggested_budget)
                        .unwrap_or(std::cmp::Ordering::Equal)
                })
                .then_with(|| a.sku.cmp(&b.sku))
        });

        if let Some(max) = limit {
            all.truncate(max);
        }

        Ok(OpportunityScan {
            scanned_at: now,
            products_scanned,
            trends_scanned,
            events_scanned,
            strategies_run: succeeded,
            strategies_failed: self.strategies.len() - succeeded,
            total_opportunities: all.len(),
            opportunities: all,
        })
    }
}
