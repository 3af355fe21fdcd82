use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Recommended action for an inventory position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Action {
    Liquidate,
    Amplify,
    Stable,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Liquidate => write!(f, "LIQUIDATE"),
            Action::Amplify => write!(f, "AMPLIFY"),
            Action::Stable => write!(f, "STABLE"),
        }
    }
}

impl FromStr for Action {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "LIQUIDATE" => Ok(Action::Liquidate),
            "AMPLIFY" => Ok(Action::Amplify),
            "STABLE" => Ok(Action::Stable),
            _ => Err(format!("Unknown action: {s}")),
        }
    }
}
