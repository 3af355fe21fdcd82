use chrono::{DateTime, Utc};

use crate::domain::entities::campaign::LaunchedCampaign;
use crate::domain::error::DomainError;

#[derive(Debug, Clone, Default)]
pub struct CampaignFilter {
    pub sku: Option<String>,
    pub since: Option<DateTime<Utc>>,
    pub limit: Option<usize>,
}

/// Append-only launched-campaign log. There is deliberately no update or
/// delete operation: campaigns have no lifecycle after launch.
pub trait CampaignRepository: Send + Sync {
    fn append(&self, campaign: &LaunchedCampaign) -> Result<(), DomainError>;
    fn list(&self, filter: &CampaignFilter) -> Result<Vec<LaunchedCampaign>, DomainError>;
    fn get(&self, id: &str) -> Result<Option<LaunchedCampaign>, DomainError>;
    fn count(&self) -> Result<usize, DomainError>;
}
