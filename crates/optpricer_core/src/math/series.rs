//! Running transforms over price series.
//!
//! - [`cumulative_sum`]: prefix sums
//! - [`simple_moving_average`]: trailing window mean, truncated at the start
//! - [`exponential_moving_average`]: recursive exponential smoothing

use crate::types::{DomainError, PricingError};

/// Default trailing window for [`simple_moving_average`].
pub const DEFAULT_SMA_WINDOW: usize = 7;

/// Default smoothing factor for [`exponential_moving_average`].
pub const DEFAULT_EWMA_ALPHA: f64 = 0.05;

/// Prefix sums of `xs`; `result[i] = xs[0] + ... + xs[i]`.
///
/// # Examples
///
/// ```rust
/// use optpricer_core::math::series::cumulative_sum;
///
/// assert_eq!(cumulative_sum(&[1.0, 2.0, 3.0]), vec![1.0, 3.0, 6.0]);
/// ```
pub fn cumulative_sum(xs: &[f64]) -> Vec<f64> {
    xs.iter()
        .scan(0.0, |acc, &x| {
            *acc += x;
            Some(*acc)
        })
        .collect()
}

/// Trailing simple moving average with window `window`.
///
/// Element `i` averages `xs[i + 1 - window..=i]`; for the first `window - 1`
/// elements the window is truncated to the available history, so the output
/// has the same length as the input.
///
/// # Errors
///
/// [`DomainError::InvalidParameter`] if `window` is zero.
///
/// # Examples
///
/// ```rust
/// use optpricer_core::math::series::simple_moving_average;
///
/// let sma = simple_moving_average(&[2.0, 4.0, 6.0, 8.0], 2).unwrap();
/// assert_eq!(sma, vec![2.0, 3.0, 5.0, 7.0]);
/// ```
pub fn simple_moving_average(xs: &[f64], window: usize) -> Result<Vec<f64>, PricingError> {
    if window == 0 {
        return Err(DomainError::invalid("window", "must be at least 1").into());
    }

    let mut result = Vec::with_capacity(xs.len());
    let mut running = 0.0;
    for (i, &x) in xs.iter().enumerate() {
        running += x;
        if i >= window {
            running -= xs[i - window];
        }
        let width = (i + 1).min(window);
        result.push(running / width as f64);
    }
    Ok(result)
}

/// Exponentially weighted moving average with smoothing factor `alpha`.
///
/// The output has `xs.len() + 1` elements: `ewma[0] = xs[0]` and
/// `ewma[i] = alpha * xs[i - 1] + (1 - alpha) * ewma[i - 1]`, so the last
/// element has absorbed every observation.
///
/// # Errors
///
/// - [`DomainError::InsufficientSamples`] if `xs` is empty
/// - [`DomainError::InvalidParameter`] if `alpha` is outside `(0, 1]`
///
/// # Examples
///
/// ```rust
/// use optpricer_core::math::series::exponential_moving_average;
///
/// let ewma = exponential_moving_average(&[10.0, 20.0], 0.5).unwrap();
/// assert_eq!(ewma, vec![10.0, 10.0, 15.0]);
/// ```
pub fn exponential_moving_average(xs: &[f64], alpha: f64) -> Result<Vec<f64>, PricingError> {
    if !(alpha > 0.0 && alpha <= 1.0) {
        return Err(DomainError::invalid("alpha", format!("must lie in (0, 1], got {}", alpha)).into());
    }
    let first = *xs.first().ok_or(DomainError::InsufficientSamples {
        required: 1,
        actual: 0,
    })?;

    let mut ewma = Vec::with_capacity(xs.len() + 1);
    ewma.push(first);
    let mut previous = first;
    for &x in xs {
        previous = alpha * x + (1.0 - alpha) * previous;
        ewma.push(previous);
    }
    Ok(ewma)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_cumulative_sum_empty() {
        assert!(cumulative_sum(&[]).is_empty());
    }

    #[test]
    fn test_cumulative_sum_last_is_total() {
        let xs = [0.5, -1.0, 4.0, 2.5];
        let cs = cumulative_sum(&xs);
        assert_eq!(cs.len(), xs.len());
        assert_relative_eq!(*cs.last().unwrap(), 6.0);
    }

    #[test]
    fn test_sma_truncated_start() {
        let xs: Vec<f64> = (1..=10).map(f64::from).collect();
        let sma = simple_moving_average(&xs, DEFAULT_SMA_WINDOW).unwrap();

        assert_eq!(sma.len(), 10);
        assert_relative_eq!(sma[0], 1.0);
        assert_relative_eq!(sma[2], 2.0); // (1 + 2 + 3) / 3
        assert_relative_eq!(sma[6], 4.0); // (1..=7) / 7
        assert_relative_eq!(sma[9], 7.0); // (4..=10) / 7
    }

    #[test]
    fn test_sma_window_one_is_identity() {
        let xs = [3.0, 1.0, 4.0, 1.0, 5.0];
        assert_eq!(simple_moving_average(&xs, 1).unwrap(), xs.to_vec());
    }

    #[test]
    fn test_sma_window_longer_than_series() {
        let sma = simple_moving_average(&[2.0, 4.0], 50).unwrap();
        assert_eq!(sma, vec![2.0, 3.0]);
    }

    #[test]
    fn test_sma_zero_window_rejected() {
        assert!(simple_moving_average(&[1.0], 0).unwrap_err().is_domain());
    }

    #[test]
    fn test_ewma_length_and_seed() {
        let xs = [100.0, 101.0, 99.0, 102.0];
        let ewma = exponential_moving_average(&xs, DEFAULT_EWMA_ALPHA).unwrap();
        assert_eq!(ewma.len(), xs.len() + 1);
        assert_eq!(ewma[0], 100.0);
        // First update smooths the first observation into itself
        assert_eq!(ewma[1], 100.0);
        assert_relative_eq!(ewma[2], 0.05 * 101.0 + 0.95 * 100.0, epsilon = 1e-12);
    }

    #[test]
    fn test_ewma_alpha_one_tracks_input() {
        let xs = [1.0, 5.0, 2.0];
        let ewma = exponential_moving_average(&xs, 1.0).unwrap();
        assert_eq!(ewma, vec![1.0, 1.0, 5.0, 2.0]);
    }

    #[test]
    fn test_ewma_rejects_bad_inputs() {
        assert!(exponential_moving_average(&[], 0.5).unwrap_err().is_domain());
        assert!(exponential_moving_average(&[1.0], 0.0).is_err());
        assert!(exponential_moving_average(&[1.0], 1.5).is_err());
        assert!(exponential_moving_average(&[1.0], f64::NAN).is_err());
    }
}
