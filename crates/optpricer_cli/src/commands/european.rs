//! European command implementation
//!
//! Prices a European call by simulating terminal values and reports the
//! Black–Scholes value alongside.

use std::io::{self, Write};

use clap::Args;
use optpricer_core::types::MarketParameters;
use optpricer_pricing::analytical::black_scholes_call;
use optpricer_pricing::{MonteCarloConfig, MonteCarloPricer, PayoffMode, PricingResult};
use serde::Serialize;
use tracing::info;

use crate::commands::emit;
use crate::config::CliConfig;
use crate::Result;

/// Contract and market inputs for the European call.
#[derive(Debug, Clone, Args)]
pub struct EuropeanArgs {
    /// Time to expiry in years
    #[arg(long, default_value_t = 0.5)]
    pub expiry: f64,

    /// Strike price
    #[arg(long, default_value_t = 100.0)]
    pub strike: f64,

    /// Spot price of the underlying
    #[arg(long, default_value_t = 120.0)]
    pub spot: f64,

    /// Annualised volatility
    #[arg(long, default_value_t = 0.2)]
    pub vol: f64,

    /// Continuously compounded risk-free rate
    #[arg(long, default_value_t = 0.06)]
    pub rate: f64,

    /// Number of Monte Carlo paths (defaults to the configured value)
    #[arg(short, long)]
    pub paths: Option<usize>,
}

/// Result of the `european` command.
#[derive(Debug, Serialize)]
pub struct EuropeanReport {
    /// Inputs that were priced.
    pub params: MarketParameters,
    /// Seed the generator started from.
    pub seed: u64,
    /// Monte Carlo estimate.
    pub result: PricingResult,
    /// Closed-form reference value.
    pub black_scholes: f64,
}

/// Prices the call described by `args`.
pub fn build_report(args: &EuropeanArgs, config: &CliConfig) -> Result<EuropeanReport> {
    let params = MarketParameters::new(args.spot, args.strike, args.vol, args.rate, args.expiry)?;
    let replications = args.paths.unwrap_or(config.european_paths);

    let mc_config = MonteCarloConfig::builder()
        .replications(replications)
        .maybe_seed(config.seed)
        .build()?;
    let mut pricer = MonteCarloPricer::new(mc_config)?;
    let result = pricer.price_detailed(&params, PayoffMode::EuropeanCall)?;

    Ok(EuropeanReport {
        params,
        seed: pricer.seed(),
        result,
        black_scholes: black_scholes_call(args.spot, args.strike, args.rate, args.vol, args.expiry),
    })
}

fn write_table<W: Write>(out: &mut W, report: &EuropeanReport) -> io::Result<()> {
    let p = &report.params;
    writeln!(out, "European call")?;
    writeln!(
        out,
        "  expiry {:.4}  strike {:.4}  spot {:.4}  vol {:.4}  rate {:.4}",
        p.expiry(),
        p.strike(),
        p.spot(),
        p.volatility(),
        p.risk_free_rate()
    )?;
    writeln!(out, "  paths          {}", report.result.replications)?;
    writeln!(out, "  seed           {}", report.seed)?;
    writeln!(
        out,
        "  price          {:.6} ± {:.6} (95%)",
        report.result.price,
        report.result.confidence_95()
    )?;
    writeln!(out, "  std error      {:.6}", report.result.std_error)?;
    writeln!(out, "  Black–Scholes  {:.6}", report.black_scholes)
}

/// Run the european command
pub fn run(args: &EuropeanArgs, config: &CliConfig) -> Result<()> {
    info!("Pricing European call...");
    info!(
        "  Expiry: {}, Strike: {}, Spot: {}, Vol: {}, Rate: {}",
        args.expiry, args.strike, args.spot, args.vol, args.rate
    );

    let report = build_report(args, config)?;
    info!(
        "  Price: {:.6} (seed {}, {} paths)",
        report.result.price, report.seed, report.result.replications
    );

    emit(config.format, &report, write_table)
}
