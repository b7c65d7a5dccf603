use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use coinradar::core::log::init_logging;
use coinradar::core::market::{ChartRange, SortMode};

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl From<Commands> for coinradar::AppCommand {
    fn from(cmd: Commands) -> coinradar::AppCommand {
        match cmd {
            Commands::Watch => coinradar::AppCommand::Watch,
            Commands::Markets { sort } => coinradar::AppCommand::Markets { sort },
            Commands::Movers => coinradar::AppCommand::Movers,
            Commands::Chart { coin_id, range } => {
                coinradar::AppCommand::Chart { coin_id, range }
            }
            Commands::Target {
                coin_id,
                investment,
                profit,
                fee,
            } => coinradar::AppCommand::Target {
                coin_id,
                investment,
                profit,
                fee,
            },
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Live dashboard with periodic refresh
    Watch,
    /// Display the market table once
    Markets {
        /// Sort order: cap | activity
        #[arg(short, long, default_value = "cap")]
        sort: SortMode,
    },
    /// Display top gainers and losers
    Movers,
    /// Chart the recent price history of one asset
    Chart {
        /// Asset id, e.g. "bitcoin"
        coin_id: String,
        /// Time window: 24h | 3d | 7d
        #[arg(short, long, default_value = "7d")]
        range: ChartRange,
    },
    /// Compute a fee-aware exit price for a profit target
    Target {
        /// Asset id, e.g. "bitcoin"
        coin_id: String,
        /// Amount invested, in the quote currency
        #[arg(short, long)]
        investment: f64,
        /// Desired net profit; negative models a stop-loss
        #[arg(short, long)]
        profit: f64,
        /// Exchange fee percent, charged on entry and exit
        #[arg(short, long, default_value_t = 0.1)]
        fee: f64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => coinradar::cli::setup::setup(),
        Some(cmd) => coinradar::run_command(cmd.into(), cli.config_path.as_deref()).await,
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
