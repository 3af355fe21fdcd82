//! Tests for the inventory review — bucket assignment, urgency scoring, and
//! budget figures over the demo catalog.

mod common;

use common::setup;
use sensai::domain::error::DomainError;
use sensai::domain::values::action::Action;

#[test]
fn test_review_buckets_whole_catalog() {
    let engine = setup();
    let review = engine.review_inventory().unwrap();

    assert_eq!(review.total_skus, 7);
    assert_eq!(review.critical.count, 1);
    assert_eq!(review.amplify.count, 3);
    assert_eq!(review.stable.count, 3);

    let critical_skus: Vec<&str> = review
        .critical
        .products
        .iter()
        .map(|c| c.product.sku.as_str())
        .collect();
    assert_eq!(critical_skus, vec!["RTD-005"]);

    let mut amplify_skus: Vec<&str> = review
        .amplify
        .products
        .iter()
        .map(|c| c.product.sku.as_str())
        .collect();
    amplify_skus.sort();
    assert_eq!(amplify_skus, vec!["GEL-006", "PRE-003", "WPI-002"]);
}

#[test]
fn test_liquidation_candidate_scores_100() {
    let engine = setup();
    let classified = engine.classify_sku("RTD-005").unwrap();

    assert_eq!(classified.assessment.action, Action::Liquidate);
    assert_eq!(classified.assessment.urgency_score, 100);
    assert_eq!(classified.assessment.reasons.len(), 3);
    // 0.08 × 4800 × 2.80
    assert!((classified.assessment.recommended_budget - 1075.20).abs() < 1e-9);
    assert_eq!(classified.assessment.recommended_discount, 0.25);
    assert!(classified.assessment.projected_revenue_loss > 0.0);
}

#[test]
fn test_velocity_at_threshold_stays_stable() {
    // CAS-001 moves exactly 50 units/day; the amplify cutoff is strict.
    let engine = setup();
    let classified = engine.classify_sku("CAS-001").unwrap();
    assert_eq!(classified.assessment.action, Action::Stable);
    assert_eq!(classified.assessment.urgency_score, 0);
}

#[test]
fn test_short_shelf_bar_stays_stable_below_threshold() {
    // BAR-004 has 38 days left: one trigger (35) is under the 40 threshold.
    let engine = setup();
    let classified = engine.classify_sku("BAR-004").unwrap();
    assert_eq!(classified.assessment.action, Action::Stable);
    assert_eq!(classified.assessment.urgency_score, 35);
    assert_eq!(classified.assessment.recommended_budget, 0.0);
}

#[test]
fn test_unknown_sku_is_not_found() {
    let engine = setup();
    let err = engine.classify_sku("NOPE-999").unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)));
}

#[test]
fn test_bucket_inventory_values_sum_to_total() {
    let engine = setup();
    let review = engine.review_inventory().unwrap();
    let stats = engine.stats().unwrap();

    let summed = review.critical.inventory_value
        + review.amplify.inventory_value
        + review.stable.inventory_value;
    assert!((stats.total_inventory_value - summed).abs() < 1e-6);
    assert_eq!(stats.total_skus, 7);
    assert_eq!(stats.critical_skus, 1);
    assert_eq!(stats.launched_campaigns, 0);
    assert!(stats.value_at_risk > 0.0);
    assert!(stats.recommended_spend > 1075.0);
}
