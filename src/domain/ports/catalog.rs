use crate::domain::entities::event::EventSignal;
use crate::domain::entities::influencer::Influencer;
use crate::domain::entities::product::Product;
use crate::domain::entities::trend::TrendSignal;
use crate::domain::error::DomainError;

/// Read-only source for the session's static reference data: products with
/// their inventory snapshots, the influencer pool, and the trend/event
/// signal sets.
pub trait Catalog: Send + Sync {
    fn products(&self) -> Result<Vec<Product>, DomainError>;
    fn product_by_sku(&self, sku: &str) -> Result<Option<Product>, DomainError>;
    fn influencers(&self) -> Result<Vec<Influencer>, DomainError>;
    fn trends(&self) -> Result<Vec<TrendSignal>, DomainError>;
    fn events(&self) -> Result<Vec<EventSignal>, DomainError>;
}
