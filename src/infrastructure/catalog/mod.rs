pub mod demo;
pub mod json_catalog;

use crate::domain::entities::event::EventSignal;
use crate::domain::entities::influencer::Influencer;
use crate::domain::entities::product::Product;
use crate::domain::entities::trend::TrendSignal;
use crate::domain::error::DomainError;
use crate::domain::ports::catalog::Catalog;

/// In-memory catalog backing both the JSON loader and the built-in demo
/// dataset. Static for the session.
#[derive(Debug)]
pub struct MemoryCatalog {
    products: Vec<Product>,
    influencers: Vec<Influencer>,
    trends: Vec<TrendSignal>,
    events: Vec<EventSignal>,
}

impl MemoryCatalog {
    pub fn new(
        products: Vec<Product>,
        influencers: Vec<Influencer>,
        trends: Vec<TrendSignal>,
        events: Vec<EventSignal>,
    ) -> Self {
        Self {
            products,
            influencers,
            trends,
            events,
        }
    }
}

impl Catalog for MemoryCatalog {
    fn products(&self) -> Result<Vec<Product>, DomainError> {
        Ok(self.products.clone())
    }

    fn product_by_sku(&self, sku: &str) -> Result<Option<Product>, DomainError> {
        Ok(self
            .products
            .iter()
            .find(|p| p.sku.eq_ignore_ascii_case(sku))
            .cloned())
    }

    fn influencers(&self) -> Result<Vec<Influencer>, DomainError> {
        Ok(self.influencers.clone())
    }

    fn trends(&self) -> Result<Vec<TrendSignal>, DomainError> {
        Ok(self.trends.clone())
    }

    fn events(&self) -> Result<Vec<EventSignal>, DomainError> {
        Ok(self.events.clone())
    }
}
