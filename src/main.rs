use clap::Parser;
use sensai::cli::commands::{Cli, Commands};
use sensai::domain::entities::campaign::Channel;
use sensai::domain::values::priority::Priority;
use sensai::SensAi;
use std::path::Path;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let db_path = std::env::var("SENSAI_DB").unwrap_or_else(|_| "./sensai.db".into());
    let data_dir = cli.data.as_deref().map(Path::new);

    let engine = match SensAi::new(&db_path, data_dir) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("Error initializing SensAI: {e}");
            std::process::exit(1);
        }
    };

    let result = run_command(engine, cli.command).await;
    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run_command(engine: SensAi, cmd: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        Commands::Classify { sku } => match sku {
            Some(sku) => {
                let classified = engine.classify_sku(&sku)?;
                println!("{}", serde_json::to_string_pretty(&classified).unwrap());
            }
            None => {
                let review = engine.review_inventory()?;
                println!("{}", serde_json::to_string_pretty(&review).unwrap());
            }
        },
        Commands::Recommend { sku } => {
            let set = engine.recommend(&sku)?;
            println!("{}", serde_json::to_string_pretty(&set).unwrap());
        }
        Commands::Opportunities {
            min_priority,
            limit,
        } => {
            let min = min_priority
                .map(|p| p.parse::<Priority>())
                .transpose()
                .map_err(|e: String| e)?;
            let scan = engine.scan_opportunities(min, Some(limit))?;
            println!("{}", serde_json::to_string_pretty(&scan).unwrap());
        }
        Commands::Launch { json } => {
            let data: serde_json::Value = serde_json::from_str(&json)?;

            let sku = data["sku"].as_str().ok_or("sku required")?.to_string();
            let channel: Channel = data["channel"]
                .as_str()
                .ok_or("channel required")?
                .parse()
                .map_err(|e: String| e)?;
            let name = data["name"].as_str().ok_or("name required")?.to_string();
            let budget = data["budget"].as_f64().ok_or("budget required")?;
            let expected_roi = data["expected_roi"].as_f64().ok_or("expected_roi required")?;
            let source_opportunity = data["source_opportunity"].as_str().map(String::from);

            let campaign = engine.launch_campaign(
                sku,
                channel,
                name,
                budget,
                expected_roi,
                source_opportunity,
            )?;
            println!("{}", serde_json::to_string_pretty(&campaign).unwrap());
        }
        Commands::Campaigns { limit, since, sku } => {
            let since_dt = parse_date(&since)?;
            let campaigns = engine.campaigns(Some(limit), since_dt, sku)?;
            println!("{}", serde_json::to_string_pretty(&campaigns).unwrap());
        }
        Commands::Stats => {
            let stats = engine.stats()?;
            println!("{}", serde_json::to_string_pretty(&stats).unwrap());
        }
        Commands::Trends { url } => {
            let trends = engine.fetch_trends(url).await?;
            println!("{}", serde_json::to_string_pretty(&trends).unwrap());
        }
    }
    Ok(())
}

fn parse_date(s: &Option<String>) -> Result<Option<chrono::DateTime<chrono::Utc>>, String> {
    match s {
        None => Ok(None),
        Some(s) => {
            if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(s) {
                return Ok(Some(dt.with_timezone(&chrono::Utc)));
            }
            if let Ok(date) = chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d") {
                let dt = date.and_hms_opt(0, 0, 0).unwrap();
                return Ok(Some(chrono::DateTime::from_naive_utc_and_offset(
                    dt,
                    chrono::Utc,
                )));
            }
            Err(format!(
                "Invalid date format: {s}. Use YYYY-MM-DD or RFC3339"
            ))
        }
    }
}
