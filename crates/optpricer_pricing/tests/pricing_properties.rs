//! End-to-end properties of the pricing entry points.
//!
//! # Test Categories
//!
//! 1. **Put-Call Relationship**: Asian call minus put against path averages
//! 2. **Error Handling**: invalid requests fail before simulation
//! 3. **Seeding**: reproducible with a seed, independent across seeds

use approx::assert_relative_eq;
use optpricer_core::types::{DomainError, MarketParameters, PricingError};
use optpricer_pricing::mc::{simulate_path_averages, Averaging, PayoffMode};
use optpricer_pricing::rng::{GaussianSampler, PricerRng};
use optpricer_pricing::{price, price_detailed};

fn asian_params(strike: f64) -> MarketParameters {
    MarketParameters::new(95.0, strike, 0.2, 0.06, 0.5)
        .unwrap()
        .with_step_count(126)
        .unwrap()
}

/// `E[A] = S/n · Σ e^{r·iT/n}` for the arithmetic average of the fixings.
fn expected_arithmetic_average(spot: f64, rate: f64, expiry: f64, steps: usize) -> f64 {
    let n = steps as f64;
    spot / n * (1..=steps).map(|i| (rate * expiry * i as f64 / n).exp()).sum::<f64>()
}

// ============================================================================
// Put-Call Relationship
// ============================================================================

#[test]
fn test_arithmetic_put_call_identity_on_shared_stream() {
    let seed = 314;
    let replications = 4_000;
    let strike = 100.0;
    let params = asian_params(strike);

    let call = price(&params, PayoffMode::ArithmeticAsianCall, replications, Some(seed)).unwrap();
    let put = price(&params, PayoffMode::ArithmeticAsianPut, replications, Some(seed)).unwrap();

    let mut sampler = GaussianSampler::new(PricerRng::from_seed(seed));
    let averages =
        simulate_path_averages(&params, Averaging::Arithmetic, replications, &mut sampler).unwrap();
    let mean_average = averages.iter().sum::<f64>() / replications as f64;

    // max(A − K, 0) − max(K − A, 0) = A − K on every path
    assert_relative_eq!(
        call - put,
        params.discount_factor() * (mean_average - strike),
        epsilon = 1e-9
    );
}

#[test]
fn test_arithmetic_put_call_parity_against_theory() {
    let strike = 95.0;
    let params = asian_params(strike);
    let replications = 20_000;

    let call = price(&params, PayoffMode::ArithmeticAsianCall, replications, Some(1)).unwrap();
    let put = price(&params, PayoffMode::ArithmeticAsianPut, replications, Some(2)).unwrap();
    let theoretical =
        params.discount_factor() * (expected_arithmetic_average(95.0, 0.06, 0.5, 126) - strike);

    // Independent streams; combined standard error is roughly 0.06
    assert!(
        (call - put - theoretical).abs() < 0.3,
        "C − P = {:.4}, theory = {:.4}",
        call - put,
        theoretical
    );
}

#[test]
fn test_simulated_average_matches_expectation() {
    let params = asian_params(100.0);
    let mut sampler = GaussianSampler::new(PricerRng::from_seed(77));
    let averages =
        simulate_path_averages(&params, Averaging::Arithmetic, 20_000, &mut sampler).unwrap();
    let mean_average = averages.iter().sum::<f64>() / averages.len() as f64;

    let expected = expected_arithmetic_average(95.0, 0.06, 0.5, 126);
    assert_relative_eq!(expected, 96.4508, epsilon = 1e-3);
    assert!(
        (mean_average - expected).abs() < 0.3,
        "simulated E[A] = {:.4}, expected {:.4}",
        mean_average,
        expected
    );
}

// ============================================================================
// Error Handling
// ============================================================================

#[test]
fn test_zero_replications_fails_for_every_mode() {
    let params = asian_params(100.0);
    for mode in PayoffMode::ALL {
        let err = price(&params, mode, 0, Some(1)).unwrap_err();
        assert!(
            matches!(err, PricingError::Domain(DomainError::ZeroReplications)),
            "{}: {:?}",
            mode,
            err
        );
    }
}

#[test]
fn test_invalid_parameters_rejected_at_construction() {
    assert!(MarketParameters::new(-1.0, 100.0, 0.2, 0.06, 0.5)
        .unwrap_err()
        .is_domain());
    assert!(MarketParameters::new(100.0, 100.0, 0.2, 0.06, 0.0)
        .unwrap_err()
        .is_domain());
    assert!(MarketParameters::new(100.0, 100.0, -0.2, 0.06, 0.5)
        .unwrap_err()
        .is_domain());
}

// ============================================================================
// Seeding
// ============================================================================

#[test]
fn test_seeded_calls_are_reproducible() {
    let params = asian_params(100.0);
    for mode in PayoffMode::ALL {
        let a = price(&params, mode, 300, Some(9)).unwrap();
        let b = price(&params, mode, 300, Some(9)).unwrap();
        assert_eq!(a, b, "{} not reproducible", mode);
    }
}

#[test]
fn test_different_seeds_give_different_estimates() {
    let params = asian_params(100.0);
    let a = price(&params, PayoffMode::ArithmeticAsianCall, 300, Some(1)).unwrap();
    let b = price(&params, PayoffMode::ArithmeticAsianCall, 300, Some(2)).unwrap();
    assert_ne!(a, b);
}

#[test]
fn test_clock_seeded_call_succeeds() {
    let params = asian_params(100.0);
    let result = price_detailed(&params, PayoffMode::GeometricAsianCall, 500, None).unwrap();
    assert!(result.price >= 0.0);
    assert!(result.std_error.is_finite());
    assert_eq!(result.replications, 500);
}
