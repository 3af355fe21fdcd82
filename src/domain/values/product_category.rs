use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProductCategory {
    Protein,
    PreWorkout,
    Creatine,
    RtdShake,
    EnergyDrink,
    ProteinBar,
}

impl ProductCategory {
    /// Influencer affinity tags for this category. Categories without a row
    /// here (creatine, protein bars) have no vetted influencer pool, so the
    /// influencer campaign variant yields nothing for them.
    pub fn affinity_tags(&self) -> &'static [&'static str] {
        match self {
            ProductCategory::Protein => &["nutrition", "recipes", "bodybuilding"],
            ProductCategory::PreWorkout => &["crossfit", "functional-fitness", "competition"],
            ProductCategory::RtdShake => &["convenience", "beginner-fitness"],
            ProductCategory::EnergyDrink => &["competition", "running", "hyrox"],
            ProductCategory::Creatine | ProductCategory::ProteinBar => &[],
        }
    }

    /// Base paid-search keywords per category.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            ProductCategory::Protein => {
                &["protein powder", "whey protein", "protein supplement"]
            }
            ProductCategory::PreWorkout => {
                &["pre workout", "energy supplement", "workout booster"]
            }
            ProductCategory::Creatine => &["creatine monohydrate", "creatine supplement"],
            ProductCategory::RtdShake => {
                &["protein shake", "ready to drink protein", "protein drink"]
            }
            ProductCategory::EnergyDrink => {
                &["energy drink", "performance drink", "sports drink"]
            }
            ProductCategory::ProteinBar => &["protein bar", "protein snack", "fitness bar"],
        }
    }

    /// Trend topics this category rides; the hybrid campaign names itself
    /// after the first entry.
    pub fn trend_topics(&self) -> &'static [&'static str] {
        match self {
            ProductCategory::Protein => {
                &["Protein Ice Cream", "Anabolic Recipes", "Macro Tracking"]
            }
            ProductCategory::PreWorkout => {
                &["Morning Routine", "Hyrox Training", "Competition Prep"]
            }
            ProductCategory::Creatine => &["Cognitive Health", "Muscle Building", "Performance"],
            ProductCategory::RtdShake => {
                &["Convenience", "75 Soft Challenge", "Meal Replacement"]
            }
            ProductCategory::EnergyDrink => &["Energy Boost", "Pre-Race Fuel", "Competition"],
            ProductCategory::ProteinBar => {
                &["Healthy Snacking", "Office Nutrition", "On-the-Go"]
            }
        }
    }
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductCategory::Protein => write!(f, "protein"),
            ProductCategory::PreWorkout => write!(f, "preWorkout"),
            ProductCategory::Creatine => write!(f, "creatine"),
            ProductCategory::RtdShake => write!(f, "rtdShake"),
            ProductCategory::EnergyDrink => write!(f, "energyDrink"),
            ProductCategory::ProteinBar => write!(f, "proteinBar"),
        }
    }
}

impl FromStr for ProductCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "protein" => Ok(ProductCategory::Protein),
            "preWorkout" => Ok(ProductCategory::PreWorkout),
            "creatine" => Ok(ProductCategory::Creatine),
            "rtdShake" => Ok(ProductCategory::RtdShake),
            "energyDrink" => Ok(ProductCategory::EnergyDrink),
            "proteinBar" => Ok(ProductCategory::ProteinBar),
            _ => Err(format!("Unknown product category: {s}")),
        }
    }
}
