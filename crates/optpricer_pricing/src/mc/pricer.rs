//! Monte Carlo pricing engine.

use optpricer_core::math::statistics::RunningStatistics;
use optpricer_core::types::{MarketParameters, PricingError};
use tracing::{debug, trace};

use super::config::{validate_replications, MonteCarloConfig};
use super::paths::{generate_path, terminal_value};
use super::payoff::PayoffMode;
use super::workspace::SimulatedPath;
use crate::rng::{GaussianSampler, PricerRng, RandomSource};

/// Result of a Monte Carlo pricing run.
///
/// `price` is the discounted sample-mean payoff. `std_error` is the
/// discounted standard error of that mean; it is NaN for a single
/// replication.
///
/// # Examples
///
/// ```rust
/// use optpricer_pricing::mc::{PayoffMode, PricingResult};
///
/// let result = PricingResult {
///     price: 10.45,
///     std_error: 0.05,
///     replications: 10_000,
///     mode: PayoffMode::EuropeanCall,
/// };
///
/// println!("Price: {} +/- {}", result.price, result.confidence_95());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingResult {
    /// Present value of the option.
    pub price: f64,
    /// Standard error of the price estimate.
    pub std_error: f64,
    /// Number of replications behind the estimate.
    pub replications: usize,
    /// Payoff rule that was priced.
    pub mode: PayoffMode,
}

impl PricingResult {
    /// Returns the 95% confidence interval half-width.
    #[inline]
    pub fn confidence_95(&self) -> f64 {
        1.96 * self.std_error
    }

    /// Returns the 99% confidence interval half-width.
    #[inline]
    pub fn confidence_99(&self) -> f64 {
        2.576 * self.std_error
    }
}

/// Monte Carlo pricing engine.
///
/// Owns its configuration, its Gaussian sampler (and through it the random
/// source) and one trajectory buffer that is reused by every Asian
/// replication.
///
/// # Examples
///
/// ```rust
/// use optpricer_core::types::MarketParameters;
/// use optpricer_pricing::mc::{MonteCarloConfig, MonteCarloPricer, PayoffMode};
///
/// let config = MonteCarloConfig::builder()
///     .replications(10_000)
///     .seed(42)
///     .build()
///     .unwrap();
/// let mut pricer = MonteCarloPricer::new(config).unwrap();
///
/// let params = MarketParameters::new(120.0, 100.0, 0.2, 0.06, 0.5).unwrap();
/// let result = pricer.price_detailed(&params, PayoffMode::EuropeanCall).unwrap();
/// println!("Price: {} +/- {}", result.price, result.std_error);
/// ```
#[derive(Debug)]
pub struct MonteCarloPricer<R = PricerRng> {
    config: MonteCarloConfig,
    path: SimulatedPath,
    sampler: GaussianSampler<R>,
}

impl MonteCarloPricer<PricerRng> {
    /// Creates a pricer seeded from the configuration, or from the wall
    /// clock when the configuration carries no seed.
    ///
    /// # Errors
    ///
    /// Returns a domain error if the configuration is invalid.
    pub fn new(config: MonteCarloConfig) -> Result<Self, PricingError> {
        let rng = match config.seed() {
            Some(seed) => PricerRng::from_seed(seed),
            None => PricerRng::from_clock(),
        };
        Self::with_source(config, rng)
    }

    /// Seed of the underlying generator.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.sampler.source().seed()
    }

    /// Restarts the random stream from `seed`.
    pub fn reseed(&mut self, seed: u64) {
        self.sampler.source_mut().reseed(seed);
    }
}

impl<R: RandomSource> MonteCarloPricer<R> {
    /// Creates a pricer drawing from an explicit random source.
    ///
    /// # Errors
    ///
    /// Returns a domain error if the configuration is invalid.
    pub fn with_source(config: MonteCarloConfig, source: R) -> Result<Self, PricingError> {
        config.validate()?;

        Ok(Self {
            config,
            path: SimulatedPath::new(),
            sampler: GaussianSampler::new(source),
        })
    }

    /// Returns a reference to the configuration.
    #[inline]
    pub fn config(&self) -> &MonteCarloConfig {
        &self.config
    }

    /// Prices `mode` with the configured replication count.
    ///
    /// # Errors
    ///
    /// - Domain error if `params` fail validation
    /// - [`PricingError::NumericalDegeneracy`] if the estimate is not finite
    pub fn price(&mut self, params: &MarketParameters, mode: PayoffMode) -> Result<f64, PricingError> {
        self.price_detailed(params, mode).map(|result| result.price)
    }

    /// Prices `mode` with an explicit replication count.
    ///
    /// # Errors
    ///
    /// As [`price`](Self::price); additionally
    /// [`DomainError::ZeroReplications`](optpricer_core::types::DomainError::ZeroReplications)
    /// when `replications` is 0.
    pub fn price_with_replications(
        &mut self,
        params: &MarketParameters,
        mode: PayoffMode,
        replications: usize,
    ) -> Result<f64, PricingError> {
        self.run(params, mode, replications).map(|result| result.price)
    }

    /// Prices `mode` and reports the standard error alongside the price.
    ///
    /// # Errors
    ///
    /// As [`price`](Self::price).
    pub fn price_detailed(
        &mut self,
        params: &MarketParameters,
        mode: PayoffMode,
    ) -> Result<PricingResult, PricingError> {
        self.run(params, mode, self.config.replications())
    }

    /// Validates everything up front, then runs the replication loop.
    fn run(
        &mut self,
        params: &MarketParameters,
        mode: PayoffMode,
        replications: usize,
    ) -> Result<PricingResult, PricingError> {
        if let Err(err) = params.validate().and(validate_replications(replications)) {
            trace!(%mode, replications, error = %err, "rejected pricing request");
            return Err(err);
        }

        let strike = params.strike();
        let mut sum = 0.0;
        let mut stats = RunningStatistics::new();

        if mode.is_path_dependent() {
            for _ in 0..replications {
                generate_path(&mut self.path, params, &mut self.sampler);
                let payoff = mode.path_payoff(&self.path, strike);
                sum += payoff;
                stats.push(payoff);
            }
        } else {
            let option_type = mode.option_type();
            for _ in 0..replications {
                let payoff = option_type.intrinsic(terminal_value(params, &mut self.sampler), strike);
                sum += payoff;
                stats.push(payoff);
            }
        }

        let discount = params.discount_factor();
        let price = discount * sum / replications as f64;
        let std_error = stats
            .std_dev()
            .map(|sd| discount * sd / (replications as f64).sqrt())
            .unwrap_or(f64::NAN);

        if !price.is_finite() {
            return Err(PricingError::NumericalDegeneracy(format!(
                "{} estimate is {} after {} replications",
                mode, price, replications
            )));
        }

        debug!(%mode, replications, price, std_error, "priced option");

        Ok(PricingResult {
            price,
            std_error,
            replications,
            mode,
        })
    }
}
