//! # optpricer_pricing: Monte Carlo Engine
//!
//! ## Layer 2 Role
//!
//! optpricer_pricing simulates the underlying and prices options on top of
//! the validated inputs and statistics of `optpricer_core`:
//! - Random number generation: seeded uniform sources and a polar
//!   Box–Muller Gaussian sampler (`rng`)
//! - GBM path and terminal value generation, payoff rules, the
//!   replication loop and distribution diagnostics (`mc`)
//! - Closed-form reference prices for verification (`analytical`)
//!
//! ## Usage Example
//!
//! ```rust
//! use optpricer_core::types::MarketParameters;
//! use optpricer_pricing::{price, PayoffMode};
//!
//! let params = MarketParameters::new(95.0, 100.0, 0.2, 0.06, 0.5)
//!     .unwrap()
//!     .with_step_count(126)
//!     .unwrap();
//!
//! let value = price(&params, PayoffMode::GeometricAsianCall, 1_000, Some(42)).unwrap();
//! assert!(value >= 0.0);
//! ```
//!
//! ## Reproducibility
//!
//! Every pricing context owns its random source. Passing a seed makes a
//! call reproducible; passing `None` seeds from the wall clock.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod mc;
pub mod rng;

pub use mc::{MonteCarloConfig, MonteCarloPricer, PayoffMode, PricingResult};

use optpricer_core::types::{MarketParameters, PricingError};

/// Prices `mode` with a fresh, independently seeded pricer.
///
/// # Arguments
///
/// * `params` - Market inputs; `step_count` matters only for Asian modes
/// * `mode` - Payoff rule
/// * `replications` - Number of independent trials (at least 1)
/// * `seed` - Seed for the random source, `None` for the wall clock
///
/// # Errors
///
/// - [`DomainError::ZeroReplications`](optpricer_core::types::DomainError::ZeroReplications)
///   if `replications` is 0, raised before any simulation
/// - [`PricingError::NumericalDegeneracy`] if the estimate is not finite
pub fn price(
    params: &MarketParameters,
    mode: PayoffMode,
    replications: usize,
    seed: Option<u64>,
) -> Result<f64, PricingError> {
    let config = MonteCarloConfig::builder()
        .replications(replications)
        .maybe_seed(seed)
        .build()?;
    MonteCarloPricer::new(config)?.price(params, mode)
}

/// As [`price`], returning the standard error alongside the estimate.
///
/// # Errors
///
/// As [`price`].
pub fn price_detailed(
    params: &MarketParameters,
    mode: PayoffMode,
    replications: usize,
    seed: Option<u64>,
) -> Result<PricingResult, PricingError> {
    let config = MonteCarloConfig::builder()
        .replications(replications)
        .maybe_seed(seed)
        .build()?;
    MonteCarloPricer::new(config)?.price_detailed(params, mode)
}
