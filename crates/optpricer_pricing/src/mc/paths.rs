//! Geometric Brownian motion discretisation.
//!
//! Under the risk-neutral measure the underlying follows
//!
//! ```text
//! dS = r S dt + σ S dW
//! ```
//!
//! whose log increments over an interval of length `T/n` are normal with
//! mean `(r − σ²/2)·T/n` and standard deviation `σ·sqrt(T/n)`.
//!
//! # Cumulative Shock Formulation
//!
//! A path is built by accumulating log increments and exponentiating the
//! running total against the initial spot:
//!
//! ```text
//! cum_i = cum_{i-1} + μ + σ·sqrt(T/n)·z_i
//! S_i   = S_0 · exp(cum_i)
//! ```
//!
//! Each point is derived from the running log shock, never from the
//! previous point, so rounding does not compound multiplicatively along the
//! path.

use optpricer_core::types::MarketParameters;

use super::workspace::SimulatedPath;
use crate::rng::{GaussianSampler, RandomSource};

/// Per-step drift and diffusion for a given parameter set.
///
/// # Examples
///
/// ```rust
/// use optpricer_core::types::MarketParameters;
/// use optpricer_pricing::mc::GbmDiscretisation;
///
/// let params = MarketParameters::new(100.0, 100.0, 0.2, 0.06, 0.5)
///     .unwrap()
///     .with_step_count(2)
///     .unwrap();
/// let step = GbmDiscretisation::new(&params);
///
/// assert!((step.drift - (0.03 - 0.01) / 2.0).abs() < 1e-15);
/// assert!((step.diffusion - 0.2 * 0.25_f64.sqrt()).abs() < 1e-15);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GbmDiscretisation {
    /// Log drift per step, `(rT − σ²T/2) / n`.
    pub drift: f64,
    /// Log-volatility per step, `σ·sqrt(T/n)`.
    pub diffusion: f64,
    /// Number of steps, `n`.
    pub steps: usize,
}

impl GbmDiscretisation {
    /// Precomputes the step constants for `params`.
    #[inline]
    pub fn new(params: &MarketParameters) -> Self {
        let steps = params.step_count();
        let n = steps as f64;
        let r = params.risk_free_rate();
        let t = params.expiry();
        let sigma = params.volatility();

        Self {
            drift: (r * t - 0.5 * sigma * sigma * t) / n,
            diffusion: sigma * (t / n).sqrt(),
            steps,
        }
    }
}

/// Overwrites `path` with a fresh trajectory of `params.step_count()`
/// points.
///
/// Consumes exactly one Gaussian draw per step.
///
/// # Arguments
///
/// * `path` - Buffer owned by the current replication; cleared first
/// * `params` - Validated market parameters
/// * `sampler` - Gaussian source for the shocks
pub fn generate_path<R: RandomSource>(
    path: &mut SimulatedPath,
    params: &MarketParameters,
    sampler: &mut GaussianSampler<R>,
) {
    let step = GbmDiscretisation::new(params);
    let spot = params.spot();

    path.clear();
    path.reserve_steps(step.steps);

    let mut cumulative_shock = 0.0;
    for _ in 0..step.steps {
        cumulative_shock += step.drift + step.diffusion * sampler.sample();
        path.push(spot * cumulative_shock.exp());
    }
}

/// Draws a single terminal price `S_T` without intermediate points.
///
/// ```text
/// S_T = S_0 · exp(rT − σ²T/2) · exp(σ·sqrt(T)·z)
/// ```
///
/// Consumes exactly one Gaussian draw. `params.step_count()` is ignored.
#[inline]
pub fn terminal_value<R: RandomSource>(
    params: &MarketParameters,
    sampler: &mut GaussianSampler<R>,
) -> f64 {
    let variance = params.total_variance();
    let moved_spot =
        params.spot() * (params.risk_free_rate() * params.expiry() - 0.5 * variance).exp();
    moved_spot * (variance.sqrt() * sampler.sample()).exp()
}
