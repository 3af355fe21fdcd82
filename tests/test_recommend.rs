//! Tests for campaign recommendation — variant generation per action type.

mod common;

use common::setup;
use sensai::domain::entities::campaign::Channel;
use sensai::domain::error::DomainError;
use sensai::domain::values::action::Action;

#[test]
fn test_amplify_sku_gets_all_three_variants() {
    let engine = setup();
    let set = engine.recommend("WPI-002").unwrap();

    assert_eq!(set.assessment.action, Action::Amplify);
    assert_eq!(set.plans.len(), 3);

    let channels: Vec<Channel> = set.plans.iter().map(|p| p.channel).collect();
    assert!(channels.contains(&Channel::Influencer));
    assert!(channels.contains(&Channel::PaidSearch));
    assert!(channels.contains(&Channel::Hybrid));
}

#[test]
fn test_influencer_slate_sorted_by_roi() {
    let engine = setup();
    let set = engine.recommend("WPI-002").unwrap();

    let plan = set
        .plans
        .iter()
        .find(|p| p.channel == Channel::Influencer)
        .unwrap();

    // Protein affinity pool, active contracts only, best historical ROI first.
    let handles: Vec<&str> = plan.influencers.iter().map(|i| i.handle.as_str()).collect();
    assert_eq!(handles, vec!["@proteinchef_max", "@mealprep_mia", "@liftwithlena"]);

    // Booked cost plus the 15% buffer.
    let booked: f64 = plan.influencers.iter().map(|i| i.cost).sum();
    assert!((plan.budget - booked * 1.15).abs() < 1e-9);
    assert_eq!(plan.duration_days, 14);
    assert!((plan.expected_roi - 3.8).abs() < 1e-9);
}

#[test]
fn test_liquidation_variants_use_flash_settings() {
    let engine = setup();
    let set = engine.recommend("RTD-005").unwrap();

    assert_eq!(set.assessment.action, Action::Liquidate);

    let influencer = set
        .plans
        .iter()
        .find(|p| p.channel == Channel::Influencer)
        .unwrap();
    assert_eq!(influencer.duration_days, 7);
    assert!((influencer.expected_roi - 5.2).abs() < 1e-9);
    // rtdShake affinity pool: the two convenience/beginner creators.
    assert_eq!(influencer.influencers.len(), 2);

    let search = set
        .plans
        .iter()
        .find(|p| p.channel == Channel::PaidSearch)
        .unwrap();
    // 70% of the 1075.20 liquidation budget.
    assert!((search.budget - 1075.20 * 0.7).abs() < 1e-9);
    assert_eq!(search.duration_days, 7);
    let ad = search.ad_strategy.as_ref().unwrap();
    assert!(ad.ad_copy.as_ref().unwrap().contains("25% Off"));

    let hybrid = set
        .plans
        .iter()
        .find(|p| p.channel == Channel::Hybrid)
        .unwrap();
    assert_eq!(hybrid.duration_days, 10);
    assert!((hybrid.expected_roi - 6.0).abs() < 1e-9);
}

#[test]
fn test_stable_sku_gets_no_plans() {
    // CRE-007 is healthy; zero recommended budget means every variant declines.
    let engine = setup();
    let set = engine.recommend("CRE-007").unwrap();
    assert_eq!(set.assessment.action, Action::Stable);
    assert!(set.plans.is_empty());
}

#[test]
fn test_paused_contracts_never_booked() {
    let engine = setup();
    for sku in ["WPI-002", "RTD-005", "PRE-003"] {
        let set = engine.recommend(sku).unwrap();
        for plan in &set.plans {
            assert!(
                plan.influencers.iter().all(|i| i.handle != "@bulkseason_ben"),
                "paused influencer booked in {sku} plan"
            );
        }
    }
}

#[test]
fn test_hybrid_names_category_trend_topic() {
    let engine = setup();
    let set = engine.recommend("WPI-002").unwrap();
    let hybrid = set
        .plans
        .iter()
        .find(|p| p.channel == Channel::Hybrid)
        .unwrap();
    assert!(hybrid.name.starts_with("Protein Ice Cream"));
}

#[test]
fn test_recommend_unknown_sku() {
    let engine = setup();
    let err = engine.recommend("NOPE-999").unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)));
}
