//! Diagnose command implementation
//!
//! Summarises one simulated path and compares the moments of simulated
//! terminal prices with their log-normal values.

use std::io::{self, Write};

use clap::Args;
use optpricer_core::types::MarketParameters;
use optpricer_pricing::mc::{generate_path, SimulatedPath, TerminalDiagnostics};
use optpricer_pricing::rng::{GaussianSampler, PricerRng};
use serde::Serialize;
use tracing::{info, warn};

use crate::commands::asian::AsianContractArgs;
use crate::commands::emit;
use crate::config::CliConfig;
use crate::Result;

/// Inputs for the `diagnose` command.
#[derive(Debug, Clone, Args)]
pub struct DiagnoseArgs {
    #[command(flatten)]
    pub contract: AsianContractArgs,

    /// Number of paths whose terminal prices are summarised
    #[arg(long, default_value_t = 1_000)]
    pub samples: usize,
}

/// Summary of a single simulated path.
#[derive(Debug, Serialize)]
pub struct PathSummary {
    /// Arithmetic mean of the path.
    pub arithmetic_mean: f64,
    /// Geometric mean of the path.
    pub geometric_mean: f64,
    /// Final price on the path.
    pub terminal: f64,
}

/// Result of the `diagnose` command.
#[derive(Debug, Serialize)]
pub struct DiagnoseReport {
    /// Inputs that were simulated.
    pub params: MarketParameters,
    /// Seed the generator started from.
    pub seed: u64,
    /// The first simulated path.
    pub sample_path: PathSummary,
    /// Terminal price moments against theory.
    pub terminal: TerminalDiagnostics,
}

/// Simulates one path and then `args.samples` more for the terminal moments.
pub fn build_report(args: &DiagnoseArgs, config: &CliConfig) -> Result<DiagnoseReport> {
    let params = args.contract.market_parameters(config)?;
    let rng = match config.seed {
        Some(seed) => PricerRng::from_seed(seed),
        None => PricerRng::from_clock(),
    };
    let seed = rng.seed();
    let mut sampler = GaussianSampler::new(rng);

    let mut path = SimulatedPath::with_capacity(params.step_count());
    generate_path(&mut path, &params, &mut sampler);
    let sample_path = PathSummary {
        arithmetic_mean: path.arithmetic_mean(),
        geometric_mean: path.geometric_mean(),
        terminal: path.terminal().unwrap_or(f64::NAN),
    };

    let terminal = TerminalDiagnostics::run(&params, args.samples, &mut sampler)?;
    if terminal.mean_error().abs() > 4.0 * terminal.sample.std_error() {
        warn!(
            "Terminal mean {:.4} is more than four standard errors from {:.4}",
            terminal.sample.mean, terminal.expected_mean
        );
    }

    Ok(DiagnoseReport {
        params,
        seed,
        sample_path,
        terminal,
    })
}

fn write_table<W: Write>(out: &mut W, report: &DiagnoseReport) -> io::Result<()> {
    let path = &report.sample_path;
    let t = &report.terminal;
    writeln!(out, "Sample path ({} steps, seed {})", report.params.step_count(), report.seed)?;
    writeln!(out, "  arithmetic mean  {:.6}", path.arithmetic_mean)?;
    writeln!(out, "  geometric mean   {:.6}", path.geometric_mean)?;
    writeln!(out, "  last price       {:.6}", path.terminal)?;
    writeln!(out, "Terminal prices ({} samples)", t.sample.count)?;
    writeln!(out, "  {:<10} {:>12} {:>12}", "", "simulated", "expected")?;
    writeln!(out, "  {:<10} {:>12.6} {:>12.6}", "mean", t.sample.mean, t.expected_mean)?;
    writeln!(
        out,
        "  {:<10} {:>12.6} {:>12.6}",
        "std dev", t.sample.std_dev, t.expected_std_dev
    )
}

/// Run the diagnose command
pub fn run(args: &DiagnoseArgs, config: &CliConfig) -> Result<()> {
    info!("Running path diagnostics...");
    info!("  Samples: {}", args.samples);

    let report = build_report(args, config)?;
    info!(
        "  Terminal mean error: {:.6}, std dev error: {:.6}",
        report.terminal.mean_error(),
        report.terminal.std_dev_error()
    );

    emit(config.format, &report, write_table)
}
