use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "sensai", about = "Inventory-first demand orchestration engine")]
pub struct Cli {
    /// Directory with products.json, influencers.json, trends.json,
    /// events.json (built-in demo dataset if omitted)
    #[arg(long, global = true)]
    pub data: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Review the whole catalog: classify every SKU into critical/amplify/stable
    Classify {
        /// Classify a single SKU instead of the whole catalog
        sku: Option<String>,
    },
    /// Generate campaign recommendations for a SKU
    Recommend {
        /// SKU to recommend for
        sku: String,
    },
    /// Scan trends and events for marketing opportunities
    Opportunities {
        /// Drop opportunities below this priority (critical, high, medium, low)
        #[arg(long)]
        min_priority: Option<String>,
        #[arg(long, default_value = "20")]
        limit: usize,
    },
    /// Launch a campaign
    Launch {
        /// JSON with sku, channel, name, budget, expected_roi, source_opportunity
        json: String,
    },
    /// List launched campaigns
    Campaigns {
        #[arg(long, default_value = "20")]
        limit: usize,
        /// Only campaigns launched on or after this date (YYYY-MM-DD or RFC3339)
        #[arg(long)]
        since: Option<String>,
        /// Filter by SKU
        #[arg(long)]
        sku: Option<String>,
    },
    /// Show dashboard statistics
    Stats,
    /// Fetch current trend signals from the configured feed
    Trends {
        /// Feed URL (overrides SENSAI_TREND_URL)
        #[arg(long)]
        url: Option<String>,
    },
}
