pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;

use crate::application::classify::{ClassifiedProduct, ClassifyUseCase, InventoryReview};
use crate::application::launch::LaunchUseCase;
use crate::application::opportunities::{OpportunityScan, OpportunityScanUseCase};
use crate::application::recommend::{RecommendUseCase, RecommendationSet};
use crate::application::stats::{InventoryStats, StatsUseCase};
use crate::application::strategies::amplify::AmplifyStrategy;
use crate::application::strategies::liquidate::LiquidateStrategy;
use crate::application::strategies::smooth::SmoothStrategy;
use crate::application::variants::hybrid::HybridVariant;
use crate::application::variants::influencer::InfluencerVariant;
use crate::application::variants::paid_search::PaidSearchVariant;
use crate::domain::entities::campaign::{Channel, LaunchedCampaign};
use crate::domain::entities::trend::TrendSignal;
use crate::domain::error::DomainError;
use crate::domain::ports::campaign_repository::CampaignRepository;
use crate::domain::ports::catalog::Catalog;
use crate::domain::ports::strategy::SignalStrategy;
use crate::domain::ports::trend_feed::{TrendFeed, TrendRecord};
use crate::domain::ports::variant::VariantGenerator;
use crate::domain::values::budget::BudgetPolicy;
use crate::domain::values::priority::Priority;
use crate::infrastructure::catalog::{demo, json_catalog};
use crate::infrastructure::feeds::http::HttpTrendFeed;
use crate::infrastructure::feeds::static_feed::StaticTrendFeed;
use crate::infrastructure::sqlite::campaign_repo::SqliteCampaignRepo;
use crate::infrastructure::sqlite::migrations::run_migrations;
use chrono::{DateTime, Utc};
use rusqlite::Connection;
use std::path::Path;
use std::sync::Arc;

pub struct SensAi {
    classify_uc: Arc<ClassifyUseCase>,
    recommend_uc: RecommendUseCase,
    opportunities_uc: OpportunityScanUseCase,
    launch_uc: LaunchUseCase,
    stats_uc: StatsUseCase,
    feed: Arc<dyn TrendFeed>,
}

impl SensAi {
    /// Open with the catalog selected by `data_dir` and the trend feed
    /// selected by `SENSAI_TREND_URL`.
    pub fn new(db_path: &str, data_dir: Option<&Path>) -> Result<Self, DomainError> {
        let catalog: Arc<dyn Catalog> = match data_dir {
            Some(dir) => Arc::new(json_catalog::load_dir(dir)?),
            None => Arc::new(demo::demo_catalog()),
        };

        let feed: Arc<dyn TrendFeed> = match std::env::var("SENSAI_TREND_URL") {
            Ok(url) if !url.is_empty() => Arc::new(HttpTrendFeed::new(url)),
            _ => Arc::new(StaticTrendFeed::new(Vec::new())),
        };

        Self::with_providers(db_path, catalog, feed)
    }

    pub fn with_providers(
        db_path: &str,
        catalog: Arc<dyn Catalog>,
        feed: Arc<dyn TrendFeed>,
    ) -> Result<Self, DomainError> {
        let conn = Connection::open(db_path)
            .map_err(|e| DomainError::Database(format!("DB error: {e}")))?;
        conn.pragma_update(None, "journal_mode", "WAL")
            .map_err(|e| DomainError::Database(format!("WAL error: {e}")))?;
        run_migrations(&conn)?;

        let repo: Arc<dyn CampaignRepository> = Arc::new(SqliteCampaignRepo::new(conn));
        let policy = BudgetPolicy::default();

        let strategies: Vec<Box<dyn SignalStrategy>> = vec![
            Box::new(AmplifyStrategy),
            Box::new(LiquidateStrategy),
            Box::new(SmoothStrategy),
        ];
        let generators: Vec<Box<dyn VariantGenerator>> = vec![
            Box::new(InfluencerVariant),
            Box::new(PaidSearchVariant),
            Box::new(HybridVariant),
        ];

        let classify_uc = Arc::new(ClassifyUseCase::new(catalog.clone(), policy.clone()));

        Ok(Self {
            classify_uc: classify_uc.clone(),
            recommend_uc: RecommendUseCase::new(catalog.clone(), policy, generators),
            opportunities_uc: OpportunityScanUseCase::new(catalog.clone(), strategies),
            launch_uc: LaunchUseCase::new(repo.clone(), catalog),
            stats_uc: StatsUseCase::new(classify_uc, repo),
            feed,
        })
    }

    // Delegating methods
    pub fn review_inventory(&self) -> Result<InventoryReview, DomainError> {
        self.classify_uc.review()
    }

    pub fn classify_sku(&self, sku: &str) -> Result<ClassifiedProduct, DomainError> {
        self.classify_uc.classify_sku(sku)
    }

    pub fn recommend(&self, sku: &str) -> Result<RecommendationSet, DomainError> {
        self.recommend_uc.execute(sku)
    }

    pub fn scan_opportunities(
        &self,
        min_priority: Option<Priority>,
        limit: Option<usize>,
    ) -> Result<OpportunityScan, DomainError> {
        self.opportunities_uc.execute(min_priority, limit)
    }

    pub fn launch_campaign(
        &self,
        sku: String,
        channel: Channel,
        name: String,
        budget: f64,
        expected_roi: f64,
        source_opportunity: Option<String>,
    ) -> Result<LaunchedCampaign, DomainError> {
        self.launch_uc
            .launch(sku, channel, name, budget, expected_roi, source_opportunity)
    }

    pub fn campaigns(
        &self,
        limit: Option<usize>,
        since: Option<DateTime<Utc>>,
        sku: Option<String>,
    ) -> Result<Vec<LaunchedCampaign>, DomainError> {
        self.launch_uc.list(limit, since, sku)
    }

    pub fn stats(&self) -> Result<InventoryStats, DomainError> {
        self.stats_uc.execute()
    }

    /// Fetch trend signals from the given URL, or from the feed configured at
    /// construction when no URL is passed.
    pub async fn fetch_trends(&self, url: Option<String>) -> Result<Vec<TrendSignal>, DomainError> {
        let records = match url {
            Some(url) => HttpTrendFeed::new(url).fetch().await?,
            None => self.feed.fetch().await?,
        };
        Ok(records.into_iter().map(TrendRecord::into_signal).collect())
    }
}
