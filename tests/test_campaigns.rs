//! Tests for campaign launch and the append-only campaign log.

mod common;

use common::setup;
use sensai::domain::entities::campaign::Channel;
use sensai::domain::error::DomainError;

#[test]
fn test_launch_and_list() {
    let engine = setup();

    let launched = engine
        .launch_campaign(
            "RTD-005".into(),
            Channel::PaidSearch,
            "Clearance Search + Shopping".into(),
            752.64,
            4.5,
            Some("liq-RTD-005".into()),
        )
        .unwrap();
    assert_eq!(launched.status, "active");
    assert_eq!(launched.sku, "RTD-005");

    let campaigns = engine.campaigns(None, None, None).unwrap();
    assert_eq!(campaigns.len(), 1);
    assert_eq!(campaigns[0].id, launched.id);
    assert_eq!(campaigns[0].channel, Channel::PaidSearch);
    assert_eq!(
        campaigns[0].source_opportunity.as_deref(),
        Some("liq-RTD-005")
    );
}

#[test]
fn test_sku_filter_and_limit() {
    let engine = setup();

    for (sku, name) in [
        ("RTD-005", "Flash A"),
        ("RTD-005", "Flash B"),
        ("WPI-002", "Amplify A"),
    ] {
        engine
            .launch_campaign(
                sku.into(),
                Channel::Hybrid,
                name.into(),
                500.0,
                4.5,
                None,
            )
            .unwrap();
    }

    let rtd = engine
        .campaigns(None, None, Some("RTD-005".into()))
        .unwrap();
    assert_eq!(rtd.len(), 2);
    assert!(rtd.iter().all(|c| c.sku == "RTD-005"));

    let limited = engine.campaigns(Some(1), None, None).unwrap();
    assert_eq!(limited.len(), 1);
}

#[test]
fn test_launch_unknown_sku_rejected() {
    let engine = setup();
    let err = engine
        .launch_campaign(
            "NOPE-999".into(),
            Channel::Influencer,
            "Ghost".into(),
            100.0,
            2.0,
            None,
        )
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)));
    assert!(engine.campaigns(None, None, None).unwrap().is_empty());
}

#[test]
fn test_negative_budget_rejected() {
    let engine = setup();
    let err = engine
        .launch_campaign(
            "RTD-005".into(),
            Channel::Influencer,
            "Bad budget".into(),
            -1.0,
            2.0,
            None,
        )
        .unwrap_err();
    assert!(matches!(err, DomainError::InvalidInput(_)));
}

#[test]
fn test_launch_counts_into_stats() {
    let engine = setup();
    assert_eq!(engine.stats().unwrap().launched_campaigns, 0);

    engine
        .launch_campaign(
            "WPI-002".into(),
            Channel::Influencer,
            "Influencer Amplify Campaign".into(),
            879.75,
            3.8,
            None,
        )
        .unwrap();

    assert_eq!(engine.stats().unwrap().launched_campaigns, 1);
}

#[test]
fn test_since_filter() {
    let engine = setup();
    engine
        .launch_campaign(
            "WPI-002".into(),
            Channel::Hybrid,
            "Now".into(),
            100.0,
            4.5,
            None,
        )
        .unwrap();

    let future = chrono::Utc::now() + chrono::Duration::hours(1);
    assert!(engine.campaigns(None, Some(future), None).unwrap().is_empty());

    let past = chrono::Utc::now() - chrono::Duration::hours(1);
    assert_eq!(engine.campaigns(None, Some(past), None).unwrap().len(), 1);
}
