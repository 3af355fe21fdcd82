//! Strategy port for signal-driven opportunity discovery.
//!
//! Defines the [`SignalStrategy`] trait and supporting types. Strategies scan
//! the session's inventory positions against one signal source (trends,
//! expiry clocks, events) and emit zero or more opportunities; the scan use
//! case merges and ranks them.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::event::EventSignal;
use crate::domain::entities::influencer::Influencer;
use crate::domain::entities::product::Product;
use crate::domain::entities::trend::TrendSignal;
use crate::domain::error::DomainError;
use crate::domain::values::priority::Priority;

/// What kind of play an opportunity suggests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OpportunityKind {
    Amplify,
    Liquidate,
    Smooth,
}

/// A derived, ephemeral recommendation pairing a signal with a matched
/// inventory position. Recomputed on every scan, never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct Opportunity {
    pub id: String,
    /// Which strategy emitted this.
    pub strategy: String,
    pub kind: OpportunityKind,
    pub priority: Priority,
    /// Signal source: "trend", "expiry", or "event".
    pub signal_kind: String,
    pub signal_name: String,
    /// Signal movement in percent (negative for expiry decay).
    pub signal_change_pct: f64,
    pub sku: String,
    pub product_name: String,
    pub title: String,
    pub description: String,
    pub suggested_budget: f64,
    pub expected_lift_pct: f64,
    pub expected_roi: f64,
    /// Cost-side margin rescued by acting, where applicable.
    pub margin_saved: Option<f64>,
    /// Handles of influencers suggested for the play.
    pub suggested_influencers: Vec<String>,
    pub detected_at: DateTime<Utc>,
}

/// Context handed to strategies during a scan: the full session dataset.
pub struct ScanContext {
    pub products: Vec<Product>,
    pub trends: Vec<TrendSignal>,
    pub events: Vec<EventSignal>,
    pub influencers: Vec<Influencer>,
}

/// Trait for opportunity detection strategies. Each strategy is a pure,
/// synchronous pass over the scan context.
pub trait SignalStrategy: Send + Sync {
    /// Unique name for this strategy.
    fn name(&self) -> &'static str;

    /// Scan the context. `detected` holds what earlier strategies already
    /// emitted; the smoothing strategy uses it to avoid doubling up on a SKU.
    fn detect(
        &self,
        ctx: &ScanContext,
        detected: &[Opportunity],
    ) -> Result<Vec<Opportunity>, DomainError>;
}
