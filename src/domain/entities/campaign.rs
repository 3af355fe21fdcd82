use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Marketing channel a campaign runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Channel {
    Influencer,
    PaidSearch,
    Hybrid,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Channel::Influencer => write!(f, "INFLUENCER"),
            Channel::PaidSearch => write!(f, "PAID_SEARCH"),
            Channel::Hybrid => write!(f, "HYBRID"),
        }
    }
}

impl FromStr for Channel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "INFLUENCER" => Ok(Channel::Influencer),
            "PAID_SEARCH" | "PAIDSEARCH" => Ok(Channel::PaidSearch),
            "HYBRID" => Ok(Channel::Hybrid),
            _ => Err(format!("Unknown channel: {s}")),
        }
    }
}

/// A launched campaign. Append-only: campaigns carry no lifecycle beyond the
/// static "active" tag they are created with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaunchedCampaign {
    pub id: String,
    pub sku: String,
    pub channel: Channel,
    pub name: String,
    pub budget: f64,
    pub expected_roi: f64,
    /// Id of the opportunity this launch came from, when applicable.
    pub source_opportunity: Option<String>,
    pub status: String,
    pub launched_at: DateTime<Utc>,
}

impl LaunchedCampaign {
    pub fn new(
        sku: String,
        channel: Channel,
        name: String,
        budget: f64,
        expected_roi: f64,
        source_opportunity: Option<String>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            sku,
            channel,
            name,
            budget,
            expected_roi,
            source_opportunity,
            status: "active".to_string(),
            launched_at: Utc::now(),
        }
    }
}
