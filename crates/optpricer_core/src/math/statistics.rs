//! Sample statistics used to judge simulation quality.
//!
//! Two flavours are provided:
//!
//! - Pure functions over a complete slice ([`mean`], [`std_dev`],
//!   [`SampleStatistics::from_samples`]). Nothing is cached; each call
//!   re-derives its result from the full input.
//! - [`RunningStatistics`], a streaming accumulator (Welford's algorithm)
//!   for callers that cannot retain every sample.
//!
//! The standard deviation is the unbiased sample estimator: the sum of
//! squared deviations is divided by `n - 1` (Bessel correction).

use serde::{Deserialize, Serialize};

use crate::types::{DomainError, PricingError};

/// Arithmetic mean of `xs`.
///
/// # Errors
///
/// [`DomainError::InsufficientSamples`] if `xs` is empty.
///
/// # Examples
///
/// ```rust
/// use optpricer_core::math::statistics::mean;
///
/// assert_eq!(mean(&[1.0, 2.0, 6.0]).unwrap(), 3.0);
/// assert!(mean(&[]).is_err());
/// ```
pub fn mean(xs: &[f64]) -> Result<f64, PricingError> {
    require_samples(xs, 1)?;
    Ok(xs.iter().sum::<f64>() / xs.len() as f64)
}

/// Bessel-corrected sample standard deviation of `xs`.
///
/// The mean is computed once, then reused for every squared deviation.
///
/// # Errors
///
/// [`DomainError::InsufficientSamples`] if `xs` has fewer than two elements.
pub fn std_dev(xs: &[f64]) -> Result<f64, PricingError> {
    require_samples(xs, 2)?;
    let m = mean(xs)?;
    std_dev_with_mean(xs, m)
}

/// Bessel-corrected sample standard deviation around a precomputed mean.
///
/// Lets callers that already hold `mean(xs)` avoid a second pass.
///
/// # Errors
///
/// [`DomainError::InsufficientSamples`] if `xs` has fewer than two elements.
pub fn std_dev_with_mean(xs: &[f64], mean: f64) -> Result<f64, PricingError> {
    require_samples(xs, 2)?;
    let sum_sq: f64 = xs.iter().map(|&x| (x - mean) * (x - mean)).sum();
    Ok((sum_sq / (xs.len() - 1) as f64).sqrt())
}

fn require_samples(xs: &[f64], required: usize) -> Result<(), PricingError> {
    if xs.len() < required {
        return Err(DomainError::InsufficientSamples {
            required,
            actual: xs.len(),
        }
        .into());
    }
    Ok(())
}

/// Mean and standard deviation of a finite sample.
///
/// # Examples
///
/// ```rust
/// use optpricer_core::math::statistics::SampleStatistics;
///
/// let stats = SampleStatistics::from_samples(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
/// assert_eq!(stats.mean, 5.0);
/// assert_eq!(stats.count, 8);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SampleStatistics {
    /// Arithmetic mean.
    pub mean: f64,
    /// Bessel-corrected standard deviation.
    pub std_dev: f64,
    /// Number of samples.
    pub count: usize,
}

impl SampleStatistics {
    /// Computes mean and standard deviation of `xs` (at least two samples).
    pub fn from_samples(xs: &[f64]) -> Result<Self, PricingError> {
        let mean = mean(xs)?;
        let std_dev = std_dev_with_mean(xs, mean)?;
        Ok(Self {
            mean,
            std_dev,
            count: xs.len(),
        })
    }

    /// Standard error of the mean, `std_dev / sqrt(count)`.
    #[inline]
    pub fn std_error(&self) -> f64 {
        self.std_dev / (self.count as f64).sqrt()
    }
}

/// Streaming mean and variance accumulator (Welford).
///
/// Numerically stable for long runs where a naive sum of squares would
/// cancel catastrophically.
///
/// # Examples
///
/// ```rust
/// use optpricer_core::math::statistics::RunningStatistics;
///
/// let mut running = RunningStatistics::new();
/// for x in [1.0, 2.0, 3.0, 4.0] {
///     running.push(x);
/// }
/// assert_eq!(running.mean(), 2.5);
/// assert!((running.std_dev().unwrap() - 1.2909944487358056).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RunningStatistics {
    count: usize,
    mean: f64,
    m2: f64,
}

impl RunningStatistics {
    /// Creates an empty accumulator.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one observation.
    #[inline]
    pub fn push(&mut self, x: f64) {
        self.count += 1;
        let delta = x - self.mean;
        self.mean += delta / self.count as f64;
        self.m2 += delta * (x - self.mean);
    }

    /// Number of observations so far.
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Running mean (0 when empty).
    #[inline]
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Bessel-corrected standard deviation of the observations so far.
    ///
    /// # Errors
    ///
    /// [`DomainError::InsufficientSamples`] with fewer than two observations.
    pub fn std_dev(&self) -> Result<f64, PricingError> {
        if self.count < 2 {
            return Err(DomainError::InsufficientSamples {
                required: 2,
                actual: self.count,
            }
            .into());
        }
        Ok((self.m2 / (self.count - 1) as f64).sqrt())
    }

    /// Snapshot as [`SampleStatistics`].
    pub fn statistics(&self) -> Result<SampleStatistics, PricingError> {
        Ok(SampleStatistics {
            mean: self.mean,
            std_dev: self.std_dev()?,
            count: self.count,
        })
    }
}

impl Extend<f64> for RunningStatistics {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for x in iter {
            self.push(x);
        }
    }
}
