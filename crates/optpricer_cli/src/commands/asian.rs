//! Asian command implementations
//!
//! `asian` prices one averaging payoff; `all-asian` prices the four Asian
//! payoffs one after another from a single random stream.

use std::io::{self, Write};

use clap::Args;
use optpricer_core::types::MarketParameters;
use optpricer_pricing::analytical::{discrete_geometric_asian_call, discrete_geometric_asian_put};
use optpricer_pricing::mc::{Averaging, OptionType};
use optpricer_pricing::{MonteCarloConfig, MonteCarloPricer, PayoffMode, PricingResult};
use serde::Serialize;
use tracing::info;

use crate::commands::emit;
use crate::config::CliConfig;
use crate::{CliError, Result};

/// Contract and market inputs of an averaging option.
#[derive(Debug, Clone, Args)]
pub struct AsianContractArgs {
    /// Number of averaging dates
    #[arg(long)]
    pub steps: Option<usize>,

    /// Strike price
    #[arg(long, default_value_t = 100.0)]
    pub strike: f64,

    /// Spot price of the underlying
    #[arg(long, default_value_t = 95.0)]
    pub spot: f64,

    /// Annualised volatility
    #[arg(long, default_value_t = 0.2)]
    pub vol: f64,

    /// Continuously compounded risk-free rate
    #[arg(long, default_value_t = 0.06)]
    pub rate: f64,

    /// Time to expiry in years
    #[arg(long, default_value_t = 0.5)]
    pub expiry: f64,
}

impl AsianContractArgs {
    /// Validated market parameters, falling back to the configured step count.
    pub fn market_parameters(&self, config: &CliConfig) -> Result<MarketParameters> {
        let params = MarketParameters::new(self.spot, self.strike, self.vol, self.rate, self.expiry)?
            .with_step_count(self.steps.unwrap_or(config.steps))?;
        Ok(params)
    }
}

/// Inputs of the pricing commands `asian` and `all-asian`.
#[derive(Debug, Clone, Args)]
pub struct AsianMarketArgs {
    #[command(flatten)]
    pub contract: AsianContractArgs,

    /// Replications per price (defaults to the configured value)
    #[arg(short, long)]
    pub replications: Option<usize>,
}

impl AsianMarketArgs {
    fn pricer(&self, config: &CliConfig) -> Result<MonteCarloPricer> {
        let mc_config = MonteCarloConfig::builder()
            .replications(self.replications.unwrap_or(config.replications))
            .maybe_seed(config.seed)
            .build()?;
        Ok(MonteCarloPricer::new(mc_config)?)
    }
}

/// One priced Asian payoff.
#[derive(Debug, Serialize)]
pub struct AsianQuote {
    /// Monte Carlo estimate.
    pub result: PricingResult,
    /// Closed-form value, available for geometric averaging only.
    pub closed_form: Option<f64>,
}

/// Result of the `asian` and `all-asian` commands.
#[derive(Debug, Serialize)]
pub struct AsianReport {
    /// Inputs that were priced.
    pub params: MarketParameters,
    /// Seed the generator started from.
    pub seed: u64,
    /// Prices in the order they were simulated.
    pub quotes: Vec<AsianQuote>,
}

fn closed_form(params: &MarketParameters, mode: PayoffMode) -> Option<f64> {
    let (s, k, r, v, t, n) = (
        params.spot(),
        params.strike(),
        params.risk_free_rate(),
        params.volatility(),
        params.expiry(),
        params.step_count(),
    );
    match (mode.averaging()?, mode.option_type()) {
        (Averaging::Geometric, OptionType::Call) => Some(discrete_geometric_asian_call(s, k, r, v, t, n)),
        (Averaging::Geometric, OptionType::Put) => Some(discrete_geometric_asian_put(s, k, r, v, t, n)),
        (Averaging::Arithmetic, _) => None,
    }
}

/// Prices `modes` in order with one pricer.
pub fn build_report(
    args: &AsianMarketArgs,
    modes: &[PayoffMode],
    config: &CliConfig,
) -> Result<AsianReport> {
    if let Some(mode) = modes.iter().find(|m| !m.is_path_dependent()) {
        return Err(CliError::InvalidArgument(format!(
            "{} is not an Asian payoff; use the `european` command",
            mode
        )));
    }

    let params = args.contract.market_parameters(config)?;
    let mut pricer = args.pricer(config)?;
    let seed = pricer.seed();

    let quotes = modes
        .iter()
        .map(|&mode| -> Result<AsianQuote> {
            let result = pricer.price_detailed(&params, mode)?;
            info!("  {}: {:.6}", mode, result.price);
            Ok(AsianQuote {
                result,
                closed_form: closed_form(&params, mode),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(AsianReport {
        params,
        seed,
        quotes,
    })
}

fn write_table<W: Write>(out: &mut W, report: &AsianReport) -> io::Result<()> {
    let p = &report.params;
    writeln!(
        out,
        "Asian options  steps {}  strike {:.4}  spot {:.4}  vol {:.4}  rate {:.4}  expiry {:.4}",
        p.step_count(),
        p.strike(),
        p.spot(),
        p.volatility(),
        p.risk_free_rate(),
        p.expiry()
    )?;
    writeln!(out, "  seed {}", report.seed)?;
    writeln!(
        out,
        "  {:<24} {:>12} {:>12} {:>12}",
        "mode", "price", "std error", "closed form"
    )?;
    for quote in &report.quotes {
        let closed = quote
            .closed_form
            .map(|v| format!("{:.6}", v))
            .unwrap_or_else(|| "-".to_string());
        writeln!(
            out,
            "  {:<24} {:>12.6} {:>12.6} {:>12}",
            quote.result.mode.name(),
            quote.result.price,
            quote.result.std_error,
            closed
        )?;
    }
    Ok(())
}

/// Run the asian command
pub fn run(args: &AsianMarketArgs, mode: PayoffMode, config: &CliConfig) -> Result<()> {
    info!("Pricing {}...", mode);
    let report = build_report(args, &[mode], config)?;
    emit(config.format, &report, write_table)
}

/// Run the all-asian command
pub fn run_all(args: &AsianMarketArgs, config: &CliConfig) -> Result<()> {
    info!("Pricing all Asian payoffs...");
    let report = build_report(args, &PayoffMode::ASIAN, config)?;
    emit(config.format, &report, write_table)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(replications: usize) -> AsianMarketArgs {
        AsianMarketArgs {
            contract: AsianContractArgs {
                steps: None,
                strike: 100.0,
                spot: 95.0,
                vol: 0.2,
                rate: 0.06,
                expiry: 0.5,
            },
            replications: Some(replications),
        }
    }

    fn seeded_config() -> CliConfig {
        CliConfig {
            seed: Some(7),
            ..Default::default()
        }
    }

    #[test]
    fn test_steps_fall_back_to_config() {
        let params = args(10).contract.market_parameters(&seeded_config()).unwrap();
        assert_eq!(params.step_count(), 126);

        let mut a = args(10);
        a.contract.steps = Some(12);
        assert_eq!(
            a.contract.market_parameters(&seeded_config()).unwrap().step_count(),
            12
        );
    }

    #[test]
    fn test_all_asian_prices_four_modes_in_order() {
        let report = build_report(&args(2_000), &PayoffMode::ASIAN, &seeded_config()).unwrap();

        assert_eq!(report.seed, 7);
        let modes: Vec<_> = report.quotes.iter().map(|q| q.result.mode).collect();
        assert_eq!(modes, PayoffMode::ASIAN.to_vec());
        for quote in &report.quotes {
            assert!(quote.result.price >= 0.0);
            assert_eq!(quote.result.replications, 2_000);
        }
    }

    #[test]
    fn test_closed_form_only_for_geometric() {
        let report = build_report(
            &args(20_000),
            &[PayoffMode::GeometricAsianCall, PayoffMode::ArithmeticAsianCall],
            &seeded_config(),
        )
        .unwrap();

        let geometric = &report.quotes[0];
        let reference = geometric.closed_form.unwrap();
        assert!((reference - 1.6433).abs() < 1e-3);
        assert!((geometric.result.price - reference).abs() < 4.0 * geometric.result.std_error);
        assert!(report.quotes[1].closed_form.is_none());
    }

    #[test]
    fn test_european_mode_rejected() {
        let err = build_report(&args(10), &[PayoffMode::EuropeanCall], &seeded_config()).unwrap_err();
        assert!(matches!(err, CliError::InvalidArgument(_)));
    }

    #[test]
    fn test_zero_replications_rejected() {
        let err = build_report(&args(0), &PayoffMode::ASIAN, &seeded_config()).unwrap_err();
        assert!(matches!(err, CliError::Pricing(_)));
    }

    #[test]
    fn test_table_output_lists_modes() {
        let report = build_report(&args(200), &PayoffMode::ASIAN, &seeded_config()).unwrap();
        let mut buffer = Vec::new();
        write_table(&mut buffer, &report).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        for mode in PayoffMode::ASIAN {
            assert!(text.contains(mode.name()), "missing {}", mode);
        }
        assert!(text.contains("  seed 7"));
    }
}
