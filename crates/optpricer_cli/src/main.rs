//! optpricer CLI - Monte Carlo option pricing from the command line
//!
//! # Commands
//!
//! - `optpricer european` - European call by terminal-value simulation
//! - `optpricer asian --mode <mode>` - One Asian payoff (kebab name or AC/AP/GC/GP)
//! - `optpricer all-asian` - The four Asian payoffs on one configuration
//! - `optpricer diagnose` - Sample path summary and terminal moment checks
//! - `optpricer bond zero|coupon` - Flat-yield bond prices
//! - `optpricer series cumsum|sma|ewma` - Price series transforms
//!
//! # Configuration
//!
//! Settings come from, in increasing priority: built-in defaults, the TOML
//! file given by `--config`, `OPTPRICER_*` environment variables and the
//! global flags.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use optpricer_pricing::PayoffMode;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

use commands::asian::AsianMarketArgs;
use commands::bond::BondCommand;
use commands::diagnose::DiagnoseArgs;
use commands::european::EuropeanArgs;
use commands::series::SeriesCommand;
use config::{build_config, CliArgs, LogLevel};

/// Monte Carlo option pricer
#[derive(Parser)]
#[command(name = "optpricer")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Seed for the random number generator (defaults to the wall clock)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Output format (table, json)
    #[arg(long, global = true)]
    format: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price a European call by simulating terminal values
    European(EuropeanArgs),

    /// Price one Asian option
    Asian {
        /// Payoff: arithmetic-asian-call, arithmetic-asian-put,
        /// geometric-asian-call, geometric-asian-put, or AC, AP, GC, GP
        #[arg(short, long, default_value = "arithmetic-asian-call")]
        mode: PayoffMode,

        #[command(flatten)]
        market: AsianMarketArgs,
    },

    /// Price all four Asian options on one configuration
    AllAsian(AsianMarketArgs),

    /// Summarise a sample path and check terminal price moments
    Diagnose(DiagnoseArgs),

    /// Price a bond at a flat yield
    #[command(subcommand)]
    Bond(BondCommand),

    /// Transform a price series
    #[command(subcommand)]
    Series(SeriesCommand),
}

impl Cli {
    fn config_args(&self) -> CliArgs {
        CliArgs {
            config_file: self.config.clone(),
            seed: self.seed,
            log_level: self.log_level.clone(),
            format: self.format.clone(),
        }
    }
}

fn init_tracing(level: LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_filter_str()));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = build_config(&cli.config_args())?;
    let level = if cli.verbose && cli.log_level.is_none() {
        LogLevel::Debug
    } else {
        config.log_level
    };
    init_tracing(level);

    if cli.verbose {
        info!("Verbose mode enabled");
    }
    debug!("Configuration: {:?}", config);

    match &cli.command {
        Commands::European(args) => commands::european::run(args, &config),
        Commands::Asian { mode, market } => commands::asian::run(market, *mode, &config),
        Commands::AllAsian(market) => commands::asian::run_all(market, &config),
        Commands::Diagnose(args) => commands::diagnose::run(args, &config),
        Commands::Bond(bond) => commands::bond::run(bond, &config),
        Commands::Series(series) => commands::series::run(series, &config),
    }
}
