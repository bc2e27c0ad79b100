//! Command-line investment research dossier generator

use std::sync::Arc;

use clap::{Parser, ValueEnum};
use tracing::error;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use dossier_stock::analysis::{QualitativeAnalysis, QuantitativeAnalysis, SectorAnalysis};
use dossier_stock::api::{AlphaVantageClient, GeminiClient};
use dossier_stock::cache::CacheManager;
use dossier_stock::report;
use dossier_stock::DossierConfig;

#[derive(Parser, Debug)]
#[command(name = "dossier")]
#[command(about = "Generate an investment research dossier for a stock ticker", long_about = None)]
struct Args {
    /// Stock ticker symbol, e.g. AAPL
    symbol: String,

    /// Fiscal years of history covered by the trend analysis
    #[arg(long, default_value_t = 10)]
    years: usize,

    /// Generate only one dossier section
    #[arg(long, value_enum)]
    section: Option<Section>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Section {
    Sector,
    Qualitative,
    Quantitative,
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let args = Args::parse();
    let symbol = args.symbol.to_uppercase();

    let config = DossierConfig::builder()
        .with_env_api_keys()
        .analysis_years(args.years)
        .build()?;

    let cache = Arc::new(CacheManager::new(
        config.cache_ttl_quote,
        config.cache_ttl_fundamental,
    ));

    let alpha_vantage_key = config
        .alpha_vantage_api_key
        .clone()
        .ok_or_else(|| anyhow::anyhow!("ALPHA_VANTAGE_API_KEY is not set"))?;
    let gemini_key = config
        .gemini_api_key
        .clone()
        .ok_or_else(|| anyhow::anyhow!("GEMINI_API_KEY is not set"))?;

    let market_data = Arc::new(AlphaVantageClient::new(
        alpha_vantage_key,
        config.rate_limit_per_minute,
        config.request_timeout,
        cache,
    ));
    let narrative = Arc::new(GeminiClient::new(gemini_key, config.gemini_model.clone())?);

    let run_all = args.section.is_none();
    let wants = |section: Section| run_all || args.section == Some(section);

    println!("{}", "=".repeat(80));
    println!("FULL INVESTMENT DOSSIER: {symbol}");
    println!("{}", "=".repeat(80));

    // Each section fails on its own; a narrative outage must not take
    // the numeric analysis down with it.
    if wants(Section::Sector) {
        let analysis = SectorAnalysis::new(market_data.clone(), narrative.clone());
        match analysis.analyse_sector(&symbol).await {
            Ok(sector) => println!("\n{}", report::format_sector(&sector)),
            Err(err) => {
                error!(%err, "sector analysis failed");
                println!("\nSector analysis unavailable: {err}");
            }
        }
    }

    if wants(Section::Qualitative) {
        let analysis = QualitativeAnalysis::new(market_data.clone(), narrative.clone());
        match analysis.profile_company(&symbol).await {
            Ok(qualitative) => println!("\n{}", report::format_qualitative(&qualitative)),
            Err(err) => {
                error!(%err, "qualitative analysis failed");
                println!("\nQualitative analysis unavailable: {err}");
            }
        }
    }

    if wants(Section::Quantitative) {
        let analysis = QuantitativeAnalysis::new(market_data.clone());
        match analysis.evaluate_ticker(&symbol, config.analysis_years).await {
            Ok(quantitative) => println!("\n{}", report::format_quantitative(&quantitative)),
            Err(err) => {
                error!(%err, "quantitative analysis failed");
                println!("\nQuantitative analysis unavailable: {err}");
            }
        }
    }

    println!("{}", "=".repeat(80));

    Ok(())
}
