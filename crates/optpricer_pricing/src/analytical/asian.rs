//! Geometric average Asian options with discrete monitoring.
//!
//! For fixings `t_i = iT/n`, `i = 1..n`, the log of the geometric average
//! `G = (∏ S_{t_i})^{1/n}` is normal with
//!
//! ```text
//! μ_G  = ln S + (r − σ²/2)·T·(n + 1) / (2n)
//! σ_G² = σ²·T·(n + 1)(2n + 1) / (6n²)
//! ```
//!
//! so the option prices in closed form:
//!
//! ```text
//! d1 = (μ_G − ln K + σ_G²) / σ_G
//! d2 = d1 − σ_G
//! C  = e^{−rT}·[e^{μ_G + σ_G²/2}·N(d1) − K·N(d2)]
//! P  = e^{−rT}·[K·N(−d2) − e^{μ_G + σ_G²/2}·N(−d1)]
//! ```
//!
//! As `n → ∞` this tends to the continuously monitored Kemna–Vorst price.

use num_traits::Float;

use super::{lit, norm_cdf};

/// Moments of `ln G` for a discretely monitored geometric average.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeometricAverageMoments<T: Float> {
    /// Mean of `ln G`.
    pub log_mean: T,
    /// Variance of `ln G`.
    pub log_variance: T,
}

impl<T: Float> GeometricAverageMoments<T> {
    /// Computes the log-moments for `fixings` equally spaced observations.
    pub fn new(spot: T, rate: T, volatility: T, maturity: T, fixings: usize) -> Self {
        let n = lit::<T>(fixings as f64);
        let one = T::one();
        let two = lit::<T>(2.0);
        let half_var = lit::<T>(0.5) * volatility * volatility;

        let log_mean = spot.ln() + (rate - half_var) * maturity * (n + one) / (two * n);
        let log_variance = volatility * volatility * maturity * (n + one) * (two * n + one)
            / (lit::<T>(6.0) * n * n);

        Self {
            log_mean,
            log_variance,
        }
    }

    /// `E[G] = exp(μ_G + σ_G²/2)`.
    #[inline]
    pub fn expected_average(&self) -> T {
        (self.log_mean + lit::<T>(0.5) * self.log_variance).exp()
    }

    fn d1_d2(&self, strike: T) -> (T, T) {
        let std = self.log_variance.sqrt();
        let d1 = (self.log_mean - strike.ln() + self.log_variance) / std;
        (d1, d1 - std)
    }
}

/// Price of a geometric average Asian call with `fixings` observations.
///
/// # Arguments
///
/// * `spot` - Current spot price
/// * `strike` - Strike price
/// * `rate` - Risk-free interest rate (annualised, continuous)
/// * `volatility` - Annualised volatility (must be positive)
/// * `maturity` - Time to maturity in years
/// * `fixings` - Number of averaging dates (at least 1)
pub fn discrete_geometric_asian_call<T: Float>(
    spot: T,
    strike: T,
    rate: T,
    volatility: T,
    maturity: T,
    fixings: usize,
) -> T {
    let moments = GeometricAverageMoments::new(spot, rate, volatility, maturity, fixings);
    let (d1, d2) = moments.d1_d2(strike);
    let discount = (-rate * maturity).exp();
    discount * (moments.expected_average() * norm_cdf(d1) - strike * norm_cdf(d2))
}

/// Price of a geometric average Asian put with `fixings` observations.
///
/// Arguments as for [`discrete_geometric_asian_call`].
pub fn discrete_geometric_asian_put<T: Float>(
    spot: T,
    strike: T,
    rate: T,
    volatility: T,
    maturity: T,
    fixings: usize,
) -> T {
    let moments = GeometricAverageMoments::new(spot, rate, volatility, maturity, fixings);
    let (d1, d2) = moments.d1_d2(strike);
    let discount = (-rate * maturity).exp();
    discount * (strike * norm_cdf(-d2) - moments.expected_average() * norm_cdf(-d1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytical::{black_scholes_call, black_scholes_put};
    use approx::assert_relative_eq;

    #[test]
    fn test_reference_values() {
        assert_relative_eq!(
            discrete_geometric_asian_call(95.0, 100.0, 0.06, 0.2, 0.5, 126),
            1.643_306,
            epsilon = 1e-5
        );
        assert_relative_eq!(
            discrete_geometric_asian_put(95.0, 100.0, 0.06, 0.2, 0.5, 126),
            5.246_939,
            epsilon = 1e-5
        );
    }

    #[test]
    fn test_single_fixing_is_black_scholes() {
        let call = discrete_geometric_asian_call(100.0, 100.0, 0.05, 0.2, 1.0, 1);
        let put = discrete_geometric_asian_put(100.0, 100.0, 0.05, 0.2, 1.0, 1);
        assert_relative_eq!(call, black_scholes_call(100.0, 100.0, 0.05, 0.2, 1.0), epsilon = 1e-9);
        assert_relative_eq!(put, black_scholes_put(100.0, 100.0, 0.05, 0.2, 1.0), epsilon = 1e-9);
    }

    #[test]
    fn test_averaging_lowers_call_value() {
        let european = black_scholes_call(100.0, 100.0, 0.05, 0.2, 1.0);
        let asian = discrete_geometric_asian_call(100.0, 100.0, 0.05, 0.2, 1.0, 252);
        assert!(asian < european);
    }

    #[test]
    fn test_put_call_relation() {
        let (s, k, r, v, t, n): (f64, f64, f64, f64, f64, usize) = (95.0, 100.0, 0.06, 0.2, 0.5, 126);
        let moments = GeometricAverageMoments::new(s, r, v, t, n);
        let call = discrete_geometric_asian_call(s, k, r, v, t, n);
        let put = discrete_geometric_asian_put(s, k, r, v, t, n);
        let discount = (-r * t).exp();
        assert_relative_eq!(
            call - put,
            discount * (moments.expected_average() - k),
            epsilon = 1e-6
        );
    }
}
