use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Forecast confidence in a SKU's inventory position, precomputed upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BetQuality {
    Good,
    Neutral,
    Bad,
}

impl fmt::Display for BetQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BetQuality::Good => write!(f, "GOOD"),
            BetQuality::Neutral => write!(f, "NEUTRAL"),
            BetQuality::Bad => write!(f, "BAD"),
        }
    }
}

impl FromStr for BetQuality {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "GOOD" => Ok(BetQuality::Good),
            "NEUTRAL" => Ok(BetQuality::Neutral),
            "BAD" => Ok(BetQuality::Bad),
            _ => Err(format!("Unknown bet quality: {s}")),
        }
    }
}
