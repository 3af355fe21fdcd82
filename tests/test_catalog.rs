//! Tests for the JSON catalog loader.

use sensai::domain::ports::catalog::Catalog;
use sensai::domain::values::trend_class::TrendClass;
use sensai::infrastructure::catalog::json_catalog;

fn write(dir: &std::path::Path, name: &str, content: &str) {
    std::fs::write(dir.join(name), content).unwrap();
}

#[test]
fn test_load_full_directory() {
    let dir = tempfile::tempdir().unwrap();

    write(
        dir.path(),
        "products.json",
        r#"[{
            "id": "P-001",
            "sku": "WPI-002",
            "name": "Whey Protein Isolate Vanilla 908g",
            "short_name": "WPI Vanilla",
            "category": "protein",
            "shelf_life_days": 540,
            "shelf_life_remaining_days": 210,
            "inventory": {"on_hand_units": 1800, "days_of_supply": 30, "avg_daily_demand": 60.0},
            "pricing": {"unit_cost": 18.20, "retail_price": 44.99},
            "bet_quality": "GOOD",
            "matched_signals": ["protein ice cream"]
        }]"#,
    );
    write(
        dir.path(),
        "influencers.json",
        r#"[{
            "id": "INF-001",
            "handle": "@liftwithlena",
            "name": "Lena Hartmann",
            "platform": "Instagram",
            "tier": "MID",
            "followers": 184000,
            "engagement_rate": 0.047,
            "niche": "Fitness & Wellness",
            "categories": ["bodybuilding", "nutrition"],
            "cost_per_post": 420.0,
            "cost_per_video": 850.0,
            "avg_roi": 4.8,
            "contract_status": "ACTIVE",
            "availability": "AVAILABLE"
        }]"#,
    );
    write(
        dir.path(),
        "trends.json",
        r#"[
            {"term": "protein ice cream", "changePercent": 127.0, "matchedSkus": ["WPI-002"]},
            {"term": "keto snacks", "changePercent": -18.0}
        ]"#,
    );
    write(
        dir.path(),
        "events.json",
        r#"[{
            "id": "EVT-001",
            "name": "Hyrox Cologne",
            "date": "2099-01-20",
            "days_until": 0,
            "attendees": 2500,
            "impact": "High",
            "categories": ["preWorkout"],
            "demand_multiplier": 1.8
        }]"#,
    );

    let catalog = json_catalog::load_dir(dir.path()).unwrap();

    let products = catalog.products().unwrap();
    assert_eq!(products.len(), 1);
    assert!(catalog.product_by_sku("wpi-002").unwrap().is_some());

    let influencers = catalog.influencers().unwrap();
    assert_eq!(influencers[0].booking_cost(), 420.0);

    let trends = catalog.trends().unwrap();
    assert_eq!(trends.len(), 2);
    assert_eq!(trends[0].class, TrendClass::Surging);
    assert_eq!(trends[1].class, TrendClass::Falling);

    // Stale days_until in the file gets recomputed from the date.
    let events = catalog.events().unwrap();
    assert!(events[0].days_until > 1000);
}

#[test]
fn test_missing_files_load_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "products.json", "[]");

    let catalog = json_catalog::load_dir(dir.path()).unwrap();
    assert!(catalog.products().unwrap().is_empty());
    assert!(catalog.influencers().unwrap().is_empty());
    assert!(catalog.trends().unwrap().is_empty());
    assert!(catalog.events().unwrap().is_empty());
}

#[test]
fn test_malformed_json_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "products.json", "{not json");

    let err = json_catalog::load_dir(dir.path()).unwrap_err();
    assert!(err.to_string().contains("products.json"));
}
