pub mod cli;
pub mod core;
pub mod providers;

use crate::core::config::AppConfig;
use crate::core::market::{ChartRange, MarketProvider, SortMode};
use crate::providers::CoinGeckoProvider;
use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Application commands, decoupled from the clap surface so integration
/// tests can drive the app directly.
#[derive(Debug, Clone)]
pub enum AppCommand {
    Watch,
    Markets { sort: SortMode },
    Movers,
    Chart { coin_id: String, range: ChartRange },
    Target {
        coin_id: String,
        investment: f64,
        profit: f64,
        fee: f64,
    },
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("Coin Radar starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let provider = CoinGeckoProvider::new(
        &config.provider.base_url,
        &config.vs_currency,
        config.per_page,
    );

    match command {
        AppCommand::Watch => {
            let provider: Arc<dyn MarketProvider> = Arc::new(provider);
            cli::watch::run(provider, Duration::from_secs(config.refresh_secs)).await
        }
        AppCommand::Markets { sort } => cli::markets::run(&provider, sort).await,
        AppCommand::Movers => cli::movers::run(&provider).await,
        AppCommand::Chart { coin_id, range } => cli::chart::run(&provider, &coin_id, range).await,
        AppCommand::Target {
            coin_id,
            investment,
            profit,
            fee,
        } => cli::target::run(&provider, &coin_id, investment, profit, fee).await,
    }
}
