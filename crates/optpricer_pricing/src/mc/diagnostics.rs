//! Checks of the simulated distribution against theory.
//!
//! Under risk-neutral GBM the terminal price is log-normal with
//!
//! ```text
//! E[S_T]  = S_0 · e^{rT}
//! SD[S_T] = E[S_T] · sqrt(e^{σ²T} − 1)
//! ```
//!
//! Simulating full paths and comparing the sample moments of their end
//! points with these values validates the whole data-generating process,
//! not just the terminal shortcut.

use optpricer_core::math::statistics::SampleStatistics;
use optpricer_core::types::{MarketParameters, PricingError};
use tracing::debug;

use super::config::validate_replications;
use super::paths::generate_path;
use super::payoff::Averaging;
use super::workspace::SimulatedPath;
use crate::rng::{GaussianSampler, RandomSource};

/// Terminal prices of `samples` independently generated paths.
///
/// # Errors
///
/// Domain error if `params` are invalid or `samples` is 0.
pub fn simulate_terminal_prices<R: RandomSource>(
    params: &MarketParameters,
    samples: usize,
    sampler: &mut GaussianSampler<R>,
) -> Result<Vec<f64>, PricingError> {
    params.validate()?;
    validate_replications(samples)?;

    let mut path = SimulatedPath::with_capacity(params.step_count());
    let mut terminals = Vec::with_capacity(samples);
    for _ in 0..samples {
        generate_path(&mut path, params, sampler);
        if let Some(terminal) = path.terminal() {
            terminals.push(terminal);
        }
    }
    Ok(terminals)
}

/// Path averages of `replications` independently generated paths.
///
/// The sample mean of the arithmetic averages estimates `E[A]`, which links
/// Asian call and put prices: `C − P = e^{−rT}·(E[A] − K)`.
///
/// # Errors
///
/// Domain error if `params` are invalid or `replications` is 0.
pub fn simulate_path_averages<R: RandomSource>(
    params: &MarketParameters,
    averaging: Averaging,
    replications: usize,
    sampler: &mut GaussianSampler<R>,
) -> Result<Vec<f64>, PricingError> {
    params.validate()?;
    validate_replications(replications)?;

    let mut path = SimulatedPath::with_capacity(params.step_count());
    Ok((0..replications)
        .map(|_| {
            generate_path(&mut path, params, sampler);
            averaging.summarise(&path)
        })
        .collect())
}

/// Sample moments of simulated terminal prices next to their theoretical
/// values.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TerminalDiagnostics {
    /// Mean and standard deviation of the simulated terminal prices.
    pub sample: SampleStatistics,
    /// `S_0 · e^{rT}`.
    pub expected_mean: f64,
    /// `E[S_T] · sqrt(e^{σ²T} − 1)`.
    pub expected_std_dev: f64,
}

impl TerminalDiagnostics {
    /// Theoretical `(mean, std_dev)` of `S_T`.
    pub fn expected_moments(params: &MarketParameters) -> (f64, f64) {
        let mean = params.spot() * (params.risk_free_rate() * params.expiry()).exp();
        let std_dev = mean * params.total_variance().exp_m1().sqrt();
        (mean, std_dev)
    }

    /// Simulates `samples` paths and summarises their terminal prices.
    ///
    /// # Errors
    ///
    /// Domain error if `params` are invalid or `samples < 2`;
    /// [`PricingError::NumericalDegeneracy`] if a sample moment is not
    /// finite.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optpricer_core::types::MarketParameters;
    /// use optpricer_pricing::mc::TerminalDiagnostics;
    /// use optpricer_pricing::rng::{GaussianSampler, PricerRng};
    ///
    /// let params = MarketParameters::new(100.0, 100.0, 0.2, 0.05, 1.0)
    ///     .unwrap()
    ///     .with_step_count(50)
    ///     .unwrap();
    /// let mut sampler = GaussianSampler::new(PricerRng::from_seed(1));
    ///
    /// let report = TerminalDiagnostics::run(&params, 10_000, &mut sampler).unwrap();
    /// assert!(report.mean_error().abs() < 1.0);
    /// ```
    pub fn run<R: RandomSource>(
        params: &MarketParameters,
        samples: usize,
        sampler: &mut GaussianSampler<R>,
    ) -> Result<Self, PricingError> {
        let terminals = simulate_terminal_prices(params, samples, sampler)?;
        let sample = SampleStatistics::from_samples(&terminals)?;
        if !(sample.mean.is_finite() && sample.std_dev.is_finite()) {
            return Err(PricingError::NumericalDegeneracy(format!(
                "terminal moments are not finite (mean {}, std dev {})",
                sample.mean, sample.std_dev
            )));
        }

        let (expected_mean, expected_std_dev) = Self::expected_moments(params);
        debug!(
            samples,
            mean = sample.mean,
            std_dev = sample.std_dev,
            expected_mean,
            expected_std_dev,
            "terminal diagnostics"
        );

        Ok(Self {
            sample,
            expected_mean,
            expected_std_dev,
        })
    }

    /// Sample mean minus theoretical mean.
    #[inline]
    pub fn mean_error(&self) -> f64 {
        self.sample.mean - self.expected_mean
    }

    /// Sample standard deviation minus theoretical standard deviation.
    #[inline]
    pub fn std_dev_error(&self) -> f64 {
        self.sample.std_dev - self.expected_std_dev
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::PricerRng;
    use approx::assert_relative_eq;
    use optpricer_core::types::DomainError;

    fn params() -> MarketParameters {
        MarketParameters::new(100.0, 100.0, 0.2, 0.05, 1.0)
            .unwrap()
            .with_step_count(20)
            .unwrap()
    }

    #[test]
    fn test_expected_moments() {
        let (mean, std_dev) = TerminalDiagnostics::expected_moments(&params());
        assert_relative_eq!(mean, 105.127_109_637_602_4, epsilon = 1e-9);
        assert_relative_eq!(std_dev, 21.237_438_824, epsilon = 1e-6);
    }

    #[test]
    fn test_terminal_moments_match_theory() {
        let mut sampler = GaussianSampler::new(PricerRng::from_seed(2718));
        let report = TerminalDiagnostics::run(&params(), 50_000, &mut sampler).unwrap();

        // Standard error of the mean is about 0.095
        assert!(report.mean_error().abs() < 0.5, "mean error {}", report.mean_error());
        assert!(
            report.std_dev_error().abs() < 0.6,
            "std dev error {}",
            report.std_dev_error()
        );
        assert_eq!(report.sample.count, 50_000);
    }

    #[test]
    fn test_terminal_prices_count() {
        let mut sampler = GaussianSampler::new(PricerRng::from_seed(1));
        let terminals = simulate_terminal_prices(&params(), 17, &mut sampler).unwrap();
        assert_eq!(terminals.len(), 17);
    }

    #[test]
    fn test_single_sample_is_insufficient() {
        let mut sampler = GaussianSampler::new(PricerRng::from_seed(1));
        let err = TerminalDiagnostics::run(&params(), 1, &mut sampler).unwrap_err();
        assert!(matches!(
            err,
            PricingError::Domain(DomainError::InsufficientSamples { required: 2, actual: 1 })
        ));
    }

    #[test]
    fn test_zero_samples_rejected() {
        let mut sampler = GaussianSampler::new(PricerRng::from_seed(1));
        assert!(simulate_terminal_prices(&params(), 0, &mut sampler)
            .unwrap_err()
            .is_domain());
        assert!(
            simulate_path_averages(&params(), Averaging::Arithmetic, 0, &mut sampler)
                .unwrap_err()
                .is_domain()
        );
    }

    #[test]
    fn test_geometric_average_below_arithmetic() {
        let mut a = GaussianSampler::new(PricerRng::from_seed(5));
        let mut g = GaussianSampler::new(PricerRng::from_seed(5));
        let arithmetic = simulate_path_averages(&params(), Averaging::Arithmetic, 100, &mut a).unwrap();
        let geometric = simulate_path_averages(&params(), Averaging::Geometric, 100, &mut g).unwrap();

        for (am, gm) in arithmetic.iter().zip(&geometric) {
            assert!(gm <= &(am + 1e-9));
        }
    }
}
