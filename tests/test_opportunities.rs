//! Tests for the opportunity scan — strategy orchestration, ranking, and
//! filtering over the demo catalog.

mod common;

use common::setup;
use sensai::domain::values::priority::Priority;

#[test]
fn test_scan_runs_all_strategies() {
    let engine = setup();
    let scan = engine.scan_opportunities(None, None).unwrap();

    assert_eq!(scan.strategies_run, 3);
    assert_eq!(scan.strategies_failed, 0);
    assert_eq!(scan.products_scanned, 7);
    assert_eq!(scan.trends_scanned, 4);
    assert_eq!(scan.events_scanned, 4);
    assert!(scan.total_opportunities > 0);
    assert_eq!(scan.total_opportunities, scan.opportunities.len());
}

#[test]
fn test_critical_sorts_before_everything() {
    let engine = setup();
    let scan = engine.scan_opportunities(None, None).unwrap();

    // RTD-005 has 28 days left: the one CRITICAL liquidation.
    let first = &scan.opportunities[0];
    assert_eq!(first.priority, Priority::Critical);
    assert_eq!(first.sku, "RTD-005");

    let ranks: Vec<u8> = scan.opportunities.iter().map(|o| o.priority.rank()).collect();
    let mut sorted = ranks.clone();
    sorted.sort();
    assert_eq!(ranks, sorted, "priorities out of order");
}

#[test]
fn test_surging_trend_roi() {
    let engine = setup();
    let scan = engine.scan_opportunities(None, None).unwrap();

    // protein ice cream +127% against WPI-002: ROI = 127 / 25 = 5.08
    let opp = scan
        .opportunities
        .iter()
        .find(|o| o.id == "amp-protein-ice-cream-WPI-002")
        .expect("surging trend opportunity missing");
    assert_eq!(opp.priority, Priority::High);
    assert!((opp.expected_roi - 5.08).abs() < 1e-9);
    assert!((opp.signal_change_pct - 127.0).abs() < 1e-9);
}

#[test]
fn test_falling_trend_produces_nothing() {
    let engine = setup();
    let scan = engine.scan_opportunities(None, None).unwrap();
    assert!(scan
        .opportunities
        .iter()
        .all(|o| o.signal_name != "keto snacks"));
}

#[test]
fn test_short_shelf_bar_flagged_high() {
    // BAR-004 (38 days left) is STABLE in the review but still a HIGH
    // liquidation opportunity in the scan.
    let engine = setup();
    let scan = engine.scan_opportunities(None, None).unwrap();

    let opp = scan
        .opportunities
        .iter()
        .find(|o| o.id == "liq-BAR-004")
        .expect("expiring bar not flagged");
    assert_eq!(opp.priority, Priority::High);
    assert!(opp.margin_saved.is_some());
}

#[test]
fn test_smooth_skips_skus_with_demand_play() {
    let engine = setup();
    let scan = engine.scan_opportunities(None, None).unwrap();

    // PRE-003 already rides the hyrox training trend; no event opportunity
    // stacks on top of it.
    assert!(scan
        .opportunities
        .iter()
        .any(|o| o.sku == "PRE-003" && o.strategy == "trend_amplify"));
    assert!(!scan
        .opportunities
        .iter()
        .any(|o| o.sku == "PRE-003" && o.strategy == "event_smooth"));

    // RTD-005 only carries a liquidation, so the marathon event still lands.
    assert!(scan
        .opportunities
        .iter()
        .any(|o| o.sku == "RTD-005" && o.strategy == "event_smooth"));
}

#[test]
fn test_min_priority_filter() {
    let engine = setup();
    let scan = engine
        .scan_opportunities(Some(Priority::High), None)
        .unwrap();
    assert!(!scan.opportunities.is_empty());
    assert!(scan
        .opportunities
        .iter()
        .all(|o| o.priority <= Priority::High));
}

#[test]
fn test_limit_truncates() {
    let engine = setup();
    let scan = engine.scan_opportunities(None, Some(2)).unwrap();
    assert_eq!(scan.opportunities.len(), 2);
    assert_eq!(scan.total_opportunities, 2);
}

#[test]
fn test_scan_order_is_deterministic() {
    let engine = setup();
    let first: Vec<String> = engine
        .scan_opportunities(None, None)
        .unwrap()
        .opportunities
        .into_iter()
        .map(|o| o.id)
        .collect();
    let second: Vec<String> = engine
        .scan_opportunities(None, None)
        .unwrap()
        .opportunities
        .into_iter()
        .map(|o| o.id)
        .collect();
    assert_eq!(first, second);
}
