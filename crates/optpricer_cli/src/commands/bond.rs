//! Bond command implementation
//!
//! Discounts zero-coupon and fixed-coupon bonds at a flat yield.

use std::io::{self, Write};

use clap::Subcommand;
use optpricer_core::rates::{coupon_bond_price, zero_coupon_bond_price};
use serde::Serialize;
use tracing::info;

use crate::commands::emit;
use crate::config::CliConfig;
use crate::Result;

/// Bond kinds priced by `optpricer bond`.
#[derive(Debug, Clone, Subcommand)]
pub enum BondCommand {
    /// Zero-coupon bond: F / (1 + y)^n
    Zero {
        /// Years to maturity
        #[arg(long)]
        periods: u32,

        /// Annual yield to maturity
        #[arg(long, allow_negative_numbers = true)]
        ytm: f64,

        /// Face value
        #[arg(long, default_value_t = 100.0)]
        face: f64,
    },

    /// Fixed-coupon bond paying `frequency` coupons per year
    Coupon {
        /// Years to maturity
        #[arg(long)]
        years: u32,

        /// Annual coupon rate
        #[arg(long)]
        coupon_rate: f64,

        /// Coupon payments per year
        #[arg(long, default_value_t = 2)]
        frequency: u32,

        /// Annual yield to maturity
        #[arg(long, allow_negative_numbers = true)]
        ytm: f64,

        /// Face value
        #[arg(long, default_value_t = 100.0)]
        face: f64,
    },
}

/// Result of the `bond` command.
#[derive(Debug, Serialize)]
pub struct BondReport {
    /// `zero` or `coupon`.
    pub kind: &'static str,
    /// Face value.
    pub face: f64,
    /// Yield the cash flows were discounted at.
    pub ytm: f64,
    /// Present value.
    pub price: f64,
}

/// Prices the bond described by `command`.
pub fn build_report(command: &BondCommand) -> Result<BondReport> {
    let report = match *command {
        BondCommand::Zero { periods, ytm, face } => BondReport {
            kind: "zero",
            face,
            ytm,
            price: zero_coupon_bond_price(periods, ytm, face)?,
        },
        BondCommand::Coupon {
            years,
            coupon_rate,
            frequency,
            ytm,
            face,
        } => BondReport {
            kind: "coupon",
            face,
            ytm,
            price: coupon_bond_price(years, coupon_rate, frequency, ytm, face)?,
        },
    };
    Ok(report)
}

fn write_table<W: Write>(out: &mut W, report: &BondReport) -> io::Result<()> {
    writeln!(
        out,
        "{} bond  face {:.2}  ytm {:.4}  price {:.6}",
        report.kind, report.face, report.ytm, report.price
    )
}

/// Run the bond command
pub fn run(command: &BondCommand, config: &CliConfig) -> Result<()> {
    info!("Pricing bond: {:?}", command);
    let report = build_report(command)?;
    emit(config.format, &report, write_table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_coupon_report() {
        let report = build_report(&BondCommand::Zero {
            periods: 2,
            ytm: 0.05,
            face: 100.0,
        })
        .unwrap();

        assert_eq!(report.kind, "zero");
        assert_relative_eq!(report.price, 100.0 / 1.1025, epsilon = 1e-12);
    }

    #[test]
    fn test_coupon_at_par() {
        let report = build_report(&BondCommand::Coupon {
            years: 5,
            coupon_rate: 0.04,
            frequency: 2,
            ytm: 0.04,
            face: 1000.0,
        })
        .unwrap();

        assert_eq!(report.kind, "coupon");
        assert_relative_eq!(report.price, 1000.0, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_frequency_rejected() {
        let result = build_report(&BondCommand::Coupon {
            years: 5,
            coupon_rate: 0.04,
            frequency: 0,
            ytm: 0.04,
            face: 1000.0,
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_table_output() {
        let report = build_report(&BondCommand::Zero {
            periods: 0,
            ytm: 0.07,
            face: 100.0,
        })
        .unwrap();
        let mut buffer = Vec::new();
        write_table(&mut buffer, &report).unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "zero bond  face 100.00  ytm 0.0700  price 100.000000\n"
        );
    }
}
