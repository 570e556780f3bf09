//! Series command implementation
//!
//! Applies cumulative sums and moving averages to values given on the
//! command line.

use std::io::{self, Write};

use clap::Subcommand;
use optpricer_core::math::series::{
    cumulative_sum, exponential_moving_average, simple_moving_average, DEFAULT_EWMA_ALPHA,
    DEFAULT_SMA_WINDOW,
};
use serde::Serialize;
use tracing::info;

use crate::commands::emit;
use crate::config::CliConfig;
use crate::Result;

/// Series transforms offered by `optpricer series`.
#[derive(Debug, Clone, Subcommand)]
pub enum SeriesCommand {
    /// Running totals
    Cumsum {
        /// Input values
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<f64>,
    },

    /// Trailing simple moving average
    Sma {
        /// Window length
        #[arg(short, long, default_value_t = DEFAULT_SMA_WINDOW)]
        window: usize,

        /// Input values
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<f64>,
    },

    /// Exponentially weighted moving average
    Ewma {
        /// Smoothing factor in (0, 1]
        #[arg(short, long, default_value_t = DEFAULT_EWMA_ALPHA)]
        alpha: f64,

        /// Input values
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<f64>,
    },
}

/// Result of the `series` command.
#[derive(Debug, Serialize)]
pub struct SeriesReport {
    /// Transform that was applied.
    pub transform: &'static str,
    /// Transformed values.
    pub values: Vec<f64>,
}

/// Applies the transform described by `command`.
pub fn build_report(command: &SeriesCommand) -> Result<SeriesReport> {
    let report = match command {
        SeriesCommand::Cumsum { values } => SeriesReport {
            transform: "cumsum",
            values: cumulative_sum(values),
        },
        SeriesCommand::Sma { window, values } => SeriesReport {
            transform: "sma",
            values: simple_moving_average(values, *window)?,
        },
        SeriesCommand::Ewma { alpha, values } => SeriesReport {
            transform: "ewma",
            values: exponential_moving_average(values, *alpha)?,
        },
    };
    Ok(report)
}

fn write_table<W: Write>(out: &mut W, report: &SeriesReport) -> io::Result<()> {
    writeln!(out, "{}", report.transform)?;
    for (i, value) in report.values.iter().enumerate() {
        writeln!(out, "  {:>4}  {:.6}", i, value)?;
    }
    Ok(())
}

/// Run the series command
pub fn run(command: &SeriesCommand, config: &CliConfig) -> Result<()> {
    let report = build_report(command)?;
    info!("Computed {} over {} values", report.transform, report.values.len());
    emit(config.format, &report, write_table)
}
