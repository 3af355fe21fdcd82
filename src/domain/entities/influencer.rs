use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fallback per-post cost when an influencer has no published rate.
pub const DEFAULT_POST_COST: f64 = 250.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum InfluencerTier {
    Micro,
    Mid,
    Macro,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ContractStatus {
    Active,
    Paused,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Availability {
    Available,
    Limited,
    Booked,
}

impl fmt::Display for ContractStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContractStatus::Active => write!(f, "ACTIVE"),
            ContractStatus::Paused => write!(f, "PAUSED"),
        }
    }
}

impl FromStr for ContractStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "ACTIVE" => Ok(ContractStatus::Active),
            "PAUSED" => Ok(ContractStatus::Paused),
            _ => Err(format!("Unknown contract status: {s}")),
        }
    }
}

/// A pre-vetted influencer in the pool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Influencer {
    pub id: String,
    pub handle: String,
    pub name: String,
    pub platform: String,
    pub tier: InfluencerTier,
    pub followers: u64,
    /// Engagement rate (0.0–1.0).
    pub engagement_rate: f64,
    /// Content niche, e.g. "Fitness & Wellness".
    pub niche: String,
    /// Affinity tags matched against a category's affinity table.
    #[serde(default)]
    pub categories: Vec<String>,
    pub cost_per_post: Option<f64>,
    pub cost_per_video: Option<f64>,
    /// Historical return on campaign spend.
    pub avg_roi: f64,
    pub contract_status: ContractStatus,
    pub availability: Availability,
}

impl Influencer {
    /// Booking cost for one post: published rate, video rate fallback, then
    /// the pool default.
    pub fn booking_cost(&self) -> f64 {
        self.cost_per_post
            .or(self.cost_per_video)
            .unwrap_or(DEFAULT_POST_COST)
    }

    /// Whether any of this influencer's tags appear in the given affinity list.
    pub fn matches_affinity(&self, affinity_tags: &[&str]) -> bool {
        self.categories
            .iter()
            .any(|c| affinity_tags.iter().any(|t| t.eq_ignore_ascii_case(c)))
    }
}
