//! Shared test helpers.

use sensai::infrastructure::catalog::demo::demo_catalog;
use sensai::infrastructure::feeds::static_feed::StaticTrendFeed;
use sensai::SensAi;
use std::sync::Arc;

pub fn setup() -> SensAi {
    SensAi::with_providers(
        ":memory:",
        Arc::new(demo_catalog()),
        Arc::new(StaticTrendFeed::new(Vec::new())),
    )
    .unwrap()
}
