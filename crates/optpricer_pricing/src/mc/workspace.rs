//! Reusable trajectory buffer for path-dependent simulation.
//!
//! A [`SimulatedPath`] belongs to exactly one pricer. Its backing storage is
//! allocated once and overwritten at the start of every replication, so no
//! replication ever observes the points of another.
//!
//! # Layout
//!
//! `points[0]` is the first post-initial observation (time `T/n`) and
//! `points[n - 1]` is the price at maturity. The initial spot is not stored.

/// Discretised trajectory of the underlying.
///
/// # Examples
///
/// ```rust
/// use optpricer_core::types::MarketParameters;
/// use optpricer_pricing::mc::{generate_path, SimulatedPath};
/// use optpricer_pricing::rng::{GaussianSampler, PricerRng};
///
/// let params = MarketParameters::new(100.0, 100.0, 0.2, 0.05, 1.0)
///     .unwrap()
///     .with_step_count(12)
///     .unwrap();
/// let mut sampler = GaussianSampler::new(PricerRng::from_seed(1));
/// let mut path = SimulatedPath::with_capacity(12);
///
/// generate_path(&mut path, &params, &mut sampler);
/// assert_eq!(path.len(), 12);
/// assert!(path.geometric_mean() <= path.arithmetic_mean());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SimulatedPath {
    points: Vec<f64>,
}

impl SimulatedPath {
    /// Creates an empty path.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty path able to hold `steps` points without
    /// reallocating.
    #[inline]
    pub fn with_capacity(steps: usize) -> Self {
        Self {
            points: Vec::with_capacity(steps),
        }
    }

    /// Discards the current points, keeping the allocation.
    #[inline]
    pub(crate) fn clear(&mut self) {
        self.points.clear();
    }

    /// Reserves room for `steps` points in total.
    #[inline]
    pub(crate) fn reserve_steps(&mut self, steps: usize) {
        self.points.reserve(steps.saturating_sub(self.points.len()));
    }

    #[inline]
    pub(crate) fn push(&mut self, value: f64) {
        self.points.push(value);
    }

    /// Number of stored points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if no path has been generated yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Allocated capacity in points.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.points.capacity()
    }

    /// Read-only view of the points.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.points
    }

    /// Price at maturity, or `None` for an empty path.
    #[inline]
    pub fn terminal(&self) -> Option<f64> {
        self.points.last().copied()
    }

    /// Arithmetic mean of the points (NaN when empty).
    pub fn arithmetic_mean(&self) -> f64 {
        self.points.iter().sum::<f64>() / self.points.len() as f64
    }

    /// Geometric mean of the points, `exp(mean(ln S_i))` (NaN when empty).
    ///
    /// Computed in log space so long paths cannot overflow the product.
    pub fn geometric_mean(&self) -> f64 {
        let log_sum: f64 = self.points.iter().map(|p| p.ln()).sum();
        (log_sum / self.points.len() as f64).exp()
    }
}

impl AsRef<[f64]> for SimulatedPath {
    fn as_ref(&self) -> &[f64] {
        &self.points
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn path_of(values: &[f64]) -> SimulatedPath {
        let mut path = SimulatedPath::with_capacity(values.len());
        for &v in values {
            path.push(v);
        }
        path
    }

    #[test]
    fn test_empty_path() {
        let path = SimulatedPath::new();
        assert!(path.is_empty());
        assert_eq!(path.terminal(), None);
        assert!(path.arithmetic_mean().is_nan());
    }

    #[test]
    fn test_summaries() {
        let path = path_of(&[1.0, 2.0, 4.0]);

        assert_eq!(path.len(), 3);
        assert_eq!(path.terminal(), Some(4.0));
        assert_relative_eq!(path.arithmetic_mean(), 7.0 / 3.0, epsilon = 1e-12);
        assert_relative_eq!(path.geometric_mean(), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_geometric_mean_long_path_does_not_overflow() {
        let path = path_of(&[1e200; 50]);
        assert_relative_eq!(path.geometric_mean(), 1e200, max_relative = 1e-12);
    }

    #[test]
    fn test_clear_keeps_allocation() {
        let mut path = path_of(&[1.0; 64]);
        let capacity = path.capacity();

        path.clear();
        assert!(path.is_empty());
        assert_eq!(path.capacity(), capacity);

        path.reserve_steps(32);
        assert_eq!(path.capacity(), capacity);
    }

    #[test]
    fn test_as_ref_matches_slice() {
        let path = path_of(&[3.0, 5.0]);
        let view: &[f64] = path.as_ref();
        assert_eq!(view, path.as_slice());
    }
}
