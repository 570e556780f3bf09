//! Closed-form prices used to check the Monte Carlo engine.
//!
//! # Available Solutions
//!
//! - **Black–Scholes**: European call and put on a non-dividend asset
//! - **Discrete geometric Asian**: call and put on the geometric average of
//!   `n` equally spaced fixings `t_i = iT/n`, the same grid the path
//!   generator simulates
//!
//! All functions are generic over [`num_traits::Float`].
//!
//! # Usage
//!
//! ```rust
//! use optpricer_pricing::analytical::{black_scholes_call, discrete_geometric_asian_call};
//!
//! let european: f64 = black_scholes_call(120.0, 100.0, 0.06, 0.2, 0.5);
//! assert!((european - 23.4005).abs() < 1e-3);
//!
//! // With a single fixing the geometric Asian collapses to Black–Scholes.
//! let asian: f64 = discrete_geometric_asian_call(120.0, 100.0, 0.06, 0.2, 0.5, 1);
//! assert!((asian - european).abs() < 1e-9);
//! ```

mod asian;
mod black_scholes;

pub use asian::{discrete_geometric_asian_call, discrete_geometric_asian_put, GeometricAverageMoments};
pub use black_scholes::{black_scholes_call, black_scholes_put};

use num_traits::Float;

/// Converts an `f64` constant into `T`, yielding NaN if it is not
/// representable.
#[inline]
pub(crate) fn lit<T: Float>(value: f64) -> T {
    T::from(value).unwrap_or_else(T::nan)
}

/// Standard normal cumulative distribution function.
///
/// Abramowitz and Stegun 7.1.26 for the complementary error function;
/// maximum absolute error about 1.5e-7.
///
/// # Examples
///
/// ```rust
/// use optpricer_pricing::analytical::norm_cdf;
///
/// assert!((norm_cdf(0.0_f64) - 0.5).abs() < 1e-7);
/// assert!(norm_cdf(-3.0_f64) < 0.01);
/// assert!(norm_cdf(3.0_f64) > 0.99);
/// ```
#[inline]
pub fn norm_cdf<T: Float>(x: T) -> T {
    let one = T::one();
    let zero = T::zero();

    if x.abs() > lit(8.0) {
        return if x > zero { one } else { zero };
    }

    let a1 = lit::<T>(0.254829592);
    let a2 = lit::<T>(-0.284496736);
    let a3 = lit::<T>(1.421413741);
    let a4 = lit::<T>(-1.453152027);
    let a5 = lit::<T>(1.061405429);
    let p = lit::<T>(0.3275911);

    // Φ(x) = erfc(-x/√2) / 2
    let arg = -x / lit(std::f64::consts::SQRT_2);
    let abs_arg = arg.abs();
    let t = one / (one + p * abs_arg);
    let poly = a1 + t * (a2 + t * (a3 + t * (a4 + t * a5)));
    let erfc_abs = t * poly * (-abs_arg * abs_arg).exp();

    let erfc = if arg < zero {
        lit::<T>(2.0) - erfc_abs
    } else {
        erfc_abs
    };
    lit::<T>(0.5) * erfc
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_norm_cdf_known_values() {
        assert_relative_eq!(norm_cdf(0.0_f64), 0.5, epsilon = 1e-7);
        assert_relative_eq!(norm_cdf(1.0_f64), 0.841_344_746, epsilon = 1e-6);
        assert_relative_eq!(norm_cdf(-1.96_f64), 0.024_997_895, epsilon = 1e-6);
    }

    #[test]
    fn test_norm_cdf_symmetry() {
        for &x in &[0.1_f64, 0.5, 1.3, 2.7, 5.0] {
            assert_relative_eq!(norm_cdf(x) + norm_cdf(-x), 1.0, epsilon = 1e-7);
        }
    }

    #[test]
    fn test_norm_cdf_tails() {
        assert_eq!(norm_cdf(9.0_f64), 1.0);
        assert_eq!(norm_cdf(-9.0_f64), 0.0);
    }

    #[test]
    fn test_norm_cdf_f32() {
        assert!((norm_cdf(0.0_f32) - 0.5).abs() < 1e-6);
    }
}
