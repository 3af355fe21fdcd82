//! Built-in demo dataset: a supplement brand's catalog snapshot with the
//! influencer pool and current trend/event signals. Used when no data
//! directory is given, and by the integration tests.

use chrono::{Duration, Utc};

use crate::domain::entities::event::EventSignal;
use crate::domain::entities::influencer::{
    Availability, ContractStatus, Influencer, InfluencerTier,
};
use crate::domain::entities::product::Product;
use crate::domain::entities::trend::TrendSignal;
use crate::domain::values::bet_quality::BetQuality;
use crate::domain::values::inventory::{InventorySnapshot, Pricing};
use crate::domain::values::product_category::ProductCategory;
use crate::domain::values::trend_class::TrendClass;

use super::MemoryCatalog;

pub fn demo_catalog() -> MemoryCatalog {
    MemoryCatalog::new(products(), influencers(), trends(), events())
}

fn product(
    id: &str,
    sku: &str,
    name: &str,
    short_name: &str,
    category: ProductCategory,
    shelf_life_days: i64,
    shelf_life_remaining_days: i64,
    on_hand_units: i64,
    days_of_supply: i64,
    avg_daily_demand: f64,
    unit_cost: f64,
    retail_price: f64,
    bet_quality: BetQuality,
    matched_signals: &[&str],
) -> Product {
    Product {
        id: id.to_string(),
        sku: sku.to_string(),
        name: name.to_string(),
        short_name: short_name.to_string(),
        category,
        shelf_life_days,
        shelf_life_remaining_days,
        inventory: InventorySnapshot {
            on_hand_units,
            days_of_supply,
            avg_daily_demand,
        },
        pricing: Pricing {
            unit_cost,
            retail_price,
        },
        bet_quality,
        matched_signals: matched_signals.iter().map(|s| s.to_string()).collect(),
    }
}

fn products() -> Vec<Product> {
    vec![
        product(
            "P-001",
            "CAS-001",
            "Micellar Casein Protein 1kg",
            "Casein 1kg",
            ProductCategory::Protein,
            365,
            165,
            2400,
            48,
            50.0,
            14.50,
            34.99,
            BetQuality::Good,
            &["slow release protein"],
        ),
        product(
            "P-002",
            "WPI-002",
            "Whey Protein Isolate Vanilla 908g",
            "WPI Vanilla",
            ProductCategory::Protein,
            540,
            210,
            1800,
            30,
            60.0,
            18.20,
            44.99,
            BetQuality::Good,
            &["protein ice cream", "protein coffee"],
        ),
        product(
            "P-003",
            "PRE-003",
            "Stim Pre-Workout Fruit Punch 400g",
            "Pre Fruit Punch",
            ProductCategory::PreWorkout,
            365,
            280,
            960,
            18,
            53.3,
            9.80,
            29.99,
            BetQuality::Good,
            &["hyrox training", "pump pre workout"],
        ),
        product(
            "P-004",
            "BAR-004",
            "Protein Bar Chocolate 12-pack",
            "Bar Choc 12pk",
            ProductCategory::ProteinBar,
            180,
            38,
            2200,
            52,
            42.3,
            11.40,
            24.99,
            BetQuality::Neutral,
            &[],
        ),
        product(
            "P-005",
            "RTD-005",
            "RTD Protein Shake Chocolate 330ml",
            "RTD Choc",
            ProductCategory::RtdShake,
            120,
            28,
            4800,
            65,
            73.8,
            2.80,
            4.49,
            BetQuality::Bad,
            &["grab and go protein"],
        ),
        product(
            "P-006",
            "GEL-006",
            "Energy Gel Citrus 24-pack",
            "Gel Citrus",
            ProductCategory::EnergyDrink,
            540,
            320,
            6000,
            25,
            240.0,
            0.85,
            1.99,
            BetQuality::Good,
            &["marathon rotterdam", "hyrox cologne"],
        ),
        product(
            "P-007",
            "CRE-007",
            "Creatine Monohydrate 500g",
            "Creatine 500g",
            ProductCategory::Creatine,
            720,
            580,
            3100,
            45,
            68.9,
            7.60,
            19.99,
            BetQuality::Neutral,
            &[],
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn influencer(
    id: &str,
    handle: &str,
    name: &str,
    platform: &str,
    tier: InfluencerTier,
    followers: u64,
    engagement_rate: f64,
    niche: &str,
    categories: &[&str],
    cost_per_post: Option<f64>,
    cost_per_video: Option<f64>,
    avg_roi: f64,
    contract_status: ContractStatus,
    availability: Availability,
) -> Influencer {
    Influencer {
        id: id.to_string(),
        handle: handle.to_string(),
        name: name.to_string(),
        platform: platform.to_string(),
        tier,
        followers,
        engagement_rate,
        niche: niche.to_string(),
        categories: categories.iter().map(|s| s.to_string()).collect(),
        cost_per_post,
        cost_per_video,
        avg_roi,
        contract_status,
        availability,
    }
}

fn influencers() -> Vec<Influencer> {
    vec![
        influencer(
            "INF-001",
            "@liftwithlena",
            "Lena Hartmann",
            "Instagram",
            InfluencerTier::Mid,
            184_000,
            0.047,
            "Fitness & Wellness",
            &["bodybuilding", "nutrition"],
            Some(420.0),
            Some(850.0),
            4.8,
            ContractStatus::Active,
            Availability::Available,
        ),
        influencer(
            "INF-002",
            "@proteinchef_max",
            "Max Okafor",
            "TikTok",
            InfluencerTier::Micro,
            62_000,
            0.081,
            "High-Protein Cooking",
            &["recipes", "nutrition"],
            Some(180.0),
            None,
            6.1,
            ContractStatus::Active,
            Availability::Available,
        ),
        influencer(
            "INF-003",
            "@hyroxjonas",
            "Jonas Weber",
            "Instagram",
            InfluencerTier::Mid,
            141_000,
            0.052,
            "Hybrid Fitness Racing",
            &["hyrox", "competition", "functional-fitness"],
            Some(390.0),
            Some(720.0),
            5.3,
            ContractStatus::Active,
            Availability::Limited,
        ),
        influencer(
            "INF-004",
            "@runfuel_anna",
            "Anna Kovacs",
            "YouTube",
            InfluencerTier::Macro,
            510_000,
            0.028,
            "Endurance Running",
            &["running", "competition"],
            None,
            Some(1_900.0),
            3.9,
            ContractStatus::Active,
            Availability::Available,
        ),
        influencer(
            "INF-005",
            "@easygains_tom",
            "Tom Driessen",
            "TikTok",
            InfluencerTier::Micro,
            38_000,
            0.094,
            "Beginner Fitness",
            &["beginner-fitness", "convenience"],
            Some(150.0),
            None,
            5.7,
            ContractStatus::Active,
            Availability::Available,
        ),
        influencer(
            "INF-006",
            "@wodqueen_sara",
            "Sara Lindgren",
            "Instagram",
            InfluencerTier::Mid,
            205_000,
            0.043,
            "CrossFit Training",
            &["crossfit", "competition", "functional-fitness"],
            Some(460.0),
            Some(900.0),
            4.4,
            ContractStatus::Active,
            Availability::Available,
        ),
        influencer(
            "INF-007",
            "@mealprep_mia",
            "Mia Castellano",
            "Instagram",
            InfluencerTier::Micro,
            54_000,
            0.072,
            "Meal Prep & Nutrition",
            &["recipes", "convenience", "nutrition"],
            Some(165.0),
            None,
            5.0,
            ContractStatus::Active,
            Availability::Limited,
        ),
        // Paused contract; stays in the pool but never gets booked.
        influencer(
            "INF-008",
            "@bulkseason_ben",
            "Ben Richter",
            "YouTube",
            InfluencerTier::Macro,
            690_000,
            0.022,
            "Bodybuilding",
            &["bodybuilding", "nutrition"],
            None,
            Some(2_400.0),
            4.1,
            ContractStatus::Paused,
            Availability::Booked,
        ),
    ]
}

fn trend(keyword: &str, change_pct: f64, matched_skus: &[&str]) -> TrendSignal {
    TrendSignal {
        keyword: keyword.to_string(),
        change_pct,
        class: TrendClass::from_change_pct(change_pct),
        matched_skus: matched_skus.iter().map(|s| s.to_string()).collect(),
        matched_categories: Vec::new(),
    }
}

fn trends() -> Vec<TrendSignal> {
    vec![
        trend("protein ice cream", 127.0, &["WPI-002"]),
        trend("hyrox training", 68.0, &["PRE-003"]),
        trend("protein coffee", 34.0, &["WPI-002"]),
        trend("keto snacks", -18.0, &[]),
    ]
}

fn event(
    id: &str,
    name: &str,
    days_until: i64,
    attendees: u64,
    impact: &str,
    categories: &[ProductCategory],
    demand_multiplier: f64,
) -> EventSignal {
    EventSignal {
        id: id.to_string(),
        name: name.to_string(),
        date: Utc::now().date_naive() + Duration::days(days_until),
        days_until,
        attendees,
        impact: impact.to_string(),
        categories: categories.to_vec(),
        demand_multiplier,
    }
}

fn events() -> Vec<EventSignal> {
    vec![
        event(
            "EVT-001",
            "Hyrox Cologne",
            13,
            2500,
            "High",
            &[ProductCategory::PreWorkout, ProductCategory::EnergyDrink],
            1.8,
        ),
        event(
            "EVT-002",
            "CrossFit Regional Finals",
            27,
            1800,
            "Medium",
            &[ProductCategory::Protein, ProductCategory::PreWorkout],
            1.4,
        ),
        event(
            "EVT-003",
            "Marathon Rotterdam",
            42,
            17_000,
            "High",
            &[ProductCategory::EnergyDrink, ProductCategory::RtdShake],
            1.6,
        ),
        event(
            "EVT-004",
            "FIBO Cologne",
            67,
            60_000,
            "Critical",
            &[
                ProductCategory::Protein,
                ProductCategory::PreWorkout,
                ProductCategory::Creatine,
                ProductCategory::ProteinBar,
            ],
            2.2,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_catalog_is_consistent() {
        let catalog = demo_catalog();
        for p in products() {
            // days_of_supply must agree with on-hand divided by daily demand
            let implied = p.inventory.on_hand_units as f64 / p.inventory.avg_daily_demand;
            assert!(
                (implied - p.inventory.days_of_supply as f64).abs() < 1.0,
                "{}: days_of_supply {} vs implied {implied:.1}",
                p.sku,
                p.inventory.days_of_supply
            );
        }
        assert_eq!(products().len(), 7);
        assert!(crate::domain::ports::catalog::Catalog::product_by_sku(&catalog, "RTD-005")
            .unwrap()
            .is_some());
    }

    #[test]
    fn test_trend_classes_derived_from_change() {
        let trends = trends();
        assert_eq!(trends[0].class, TrendClass::Surging);
        assert_eq!(trends[2].class, TrendClass::Rising);
        assert_eq!(trends[3].class, TrendClass::Falling);
    }
}
