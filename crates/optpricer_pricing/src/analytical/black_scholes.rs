//! Black–Scholes prices for European options.
//!
//! ```text
//! d1 = [ln(S/K) + (r + σ²/2)T] / (σ√T)
//! d2 = d1 − σ√T
//! C  = S·N(d1) − K·e^{−rT}·N(d2)
//! P  = K·e^{−rT}·N(−d2) − S·N(−d1)
//! ```

use num_traits::Float;

use super::{lit, norm_cdf};

fn d1_d2<T: Float>(spot: T, strike: T, rate: T, volatility: T, maturity: T) -> (T, T) {
    let vol_sqrt_t = volatility * maturity.sqrt();
    let d1 = ((spot / strike).ln() + (rate + lit::<T>(0.5) * volatility * volatility) * maturity)
        / vol_sqrt_t;
    (d1, d1 - vol_sqrt_t)
}

/// Black–Scholes price of a European call.
///
/// With zero volatility the discounted intrinsic value of the forward is
/// returned.
///
/// # Arguments
///
/// * `spot` - Current spot price
/// * `strike` - Strike price
/// * `rate` - Risk-free interest rate (annualised, continuous)
/// * `volatility` - Annualised volatility
/// * `maturity` - Time to maturity in years
pub fn black_scholes_call<T: Float>(spot: T, strike: T, rate: T, volatility: T, maturity: T) -> T {
    let discount = (-rate * maturity).exp();
    if volatility <= T::zero() {
        return (spot - strike * discount).max(T::zero());
    }
    let (d1, d2) = d1_d2(spot, strike, rate, volatility, maturity);
    spot * norm_cdf(d1) - strike * discount * norm_cdf(d2)
}

/// Black–Scholes price of a European put.
///
/// Arguments as for [`black_scholes_call`].
pub fn black_scholes_put<T: Float>(spot: T, strike: T, rate: T, volatility: T, maturity: T) -> T {
    let discount = (-rate * maturity).exp();
    if volatility <= T::zero() {
        return (strike * discount - spot).max(T::zero());
    }
    let (d1, d2) = d1_d2(spot, strike, rate, volatility, maturity);
    strike * discount * norm_cdf(-d2) - spot * norm_cdf(-d1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_reference_call() {
        assert_relative_eq!(
            black_scholes_call(120.0, 100.0, 0.06, 0.2, 0.5),
            23.400_536,
            epsilon = 1e-5
        );
        assert_relative_eq!(
            black_scholes_call(100.0, 100.0, 0.05, 0.2, 1.0),
            10.450_584,
            epsilon = 1e-5
        );
    }

    #[test]
    fn test_put_call_parity() {
        let (s, k, r, v, t): (f64, f64, f64, f64, f64) = (95.0, 100.0, 0.06, 0.25, 0.75);
        let call = black_scholes_call(s, k, r, v, t);
        let put = black_scholes_put(s, k, r, v, t);
        assert_relative_eq!(call - put, s - k * (-r * t).exp(), epsilon = 1e-6);
    }

    #[test]
    fn test_zero_volatility() {
        let call = black_scholes_call(120.0, 100.0, 0.06, 0.0, 0.5);
        assert_relative_eq!(call, 120.0 - 100.0 * (-0.03_f64).exp(), epsilon = 1e-12);
        assert_eq!(black_scholes_put(120.0, 100.0, 0.06, 0.0, 0.5), 0.0);
    }
}
