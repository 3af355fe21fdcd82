use serde::{Deserialize, Serialize};
use std::fmt;

/// Momentum classification for a trend keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TrendClass {
    Surging,
    Rising,
    Stable,
    Falling,
}

impl TrendClass {
    /// Classify a change percentage: `>50 → SURGING`, `>20 → RISING`,
    /// `>-10 → STABLE`, else `FALLING`.
    pub fn from_change_pct(change_pct: f64) -> Self {
        if change_pct > 50.0 {
            TrendClass::Surging
        } else if change_pct > 20.0 {
            TrendClass::Rising
        } else if change_pct > -10.0 {
            TrendClass::Stable
        } else {
            TrendClass::Falling
        }
    }

    pub fn is_actionable(&self) -> bool {
        matches!(self, TrendClass::Surging | TrendClass::Rising)
    }
}

impl fmt::Display for TrendClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrendClass::Surging => write!(f, "SURGING"),
            TrendClass::Rising => write!(f, "RISING"),
            TrendClass::Stable => write!(f, "STABLE"),
            TrendClass::Falling => write!(f, "FALLING"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_thresholds() {
        assert_eq!(TrendClass::from_change_pct(127.0), TrendClass::Surging);
        assert_eq!(TrendClass::from_change_pct(50.0), TrendClass::Rising);
        assert_eq!(TrendClass::from_change_pct(21.0), TrendClass::Rising);
        assert_eq!(TrendClass::from_change_pct(20.0), TrendClass::Stable);
        assert_eq!(TrendClass::from_change_pct(-10.0), TrendClass::Falling);
        assert_eq!(TrendClass::from_change_pct(-9.9), TrendClass::Stable);
    }

    #[test]
    fn test_actionable() {
        assert!(TrendClass::Surging.is_actionable());
        assert!(TrendClass::Rising.is_actionable());
        assert!(!TrendClass::Stable.is_actionable());
        assert!(!TrendClass::Falling.is_actionable());
    }
}
