//! Monte Carlo simulation configuration.
//!
//! The market side of a pricing call lives in
//! [`MarketParameters`](optpricer_core::types::MarketParameters); this module
//! carries only the simulation controls: how many replications to run and
//! how to seed the random source.

use optpricer_core::types::{DomainError, PricingError};

/// Replication count used when none is configured.
pub const DEFAULT_REPLICATIONS: usize = 1_000;

/// Monte Carlo simulation configuration.
///
/// Immutable once built. Use [`MonteCarloConfigBuilder`] to construct
/// instances.
///
/// # Examples
///
/// ```rust
/// use optpricer_pricing::mc::MonteCarloConfig;
///
/// let config = MonteCarloConfig::builder()
///     .replications(10_000)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.replications(), 10_000);
/// assert_eq!(config.seed(), Some(42));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MonteCarloConfig {
    replications: usize,
    /// `None` seeds from the wall clock.
    seed: Option<u64>,
}

impl Default for MonteCarloConfig {
    fn default() -> Self {
        Self {
            replications: DEFAULT_REPLICATIONS,
            seed: None,
        }
    }
}

impl MonteCarloConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> MonteCarloConfigBuilder {
        MonteCarloConfigBuilder::default()
    }

    /// Returns the number of replications.
    #[inline]
    pub fn replications(&self) -> usize {
        self.replications
    }

    /// Returns the optional seed for reproducibility.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// [`DomainError::ZeroReplications`] if `replications` is 0.
    pub fn validate(&self) -> Result<(), PricingError> {
        validate_replications(self.replications)
    }
}

/// Any positive replication count is accepted.
pub(crate) fn validate_replications(replications: usize) -> Result<(), PricingError> {
    if replications == 0 {
        return Err(DomainError::ZeroReplications.into());
    }
    Ok(())
}

/// Builder for [`MonteCarloConfig`].
///
/// # Examples
///
/// ```rust
/// use optpricer_pricing::mc::MonteCarloConfig;
///
/// let config = MonteCarloConfig::builder()
///     .replications(50_000)
///     .build()
///     .expect("valid config");
/// assert!(config.seed().is_none());
/// ```
#[derive(Clone, Debug, Default)]
pub struct MonteCarloConfigBuilder {
    replications: Option<usize>,
    seed: Option<u64>,
}

impl MonteCarloConfigBuilder {
    /// Sets the number of replications.
    ///
    /// # Arguments
    ///
    /// * `replications` - Number of trials in [1, 100_000_000]
    #[inline]
    pub fn replications(mut self, replications: usize) -> Self {
        self.replications = Some(replications);
        self
    }

    /// Sets the seed for reproducibility.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets or clears the seed.
    #[inline]
    pub fn maybe_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns a domain error if `replications` was not set or is invalid.
    pub fn build(self) -> Result<MonteCarloConfig, PricingError> {
        let replications = self
            .replications
            .ok_or_else(|| DomainError::invalid("replications", "must be specified"))?;

        let config = MonteCarloConfig {
            replications,
            seed: self.seed,
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_valid_config() {
        let config = MonteCarloConfig::builder()
            .replications(1000)
            .seed(42)
            .build()
            .unwrap();

        assert_eq!(config.replications(), 1000);
        assert_eq!(config.seed(), Some(42));
    }

    #[test]
    fn test_default_config() {
        let config = MonteCarloConfig::default();
        assert_eq!(config.replications(), DEFAULT_REPLICATIONS);
        assert!(config.seed().is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_missing_replications() {
        let result = MonteCarloConfig::builder().seed(1).build();
        assert!(matches!(
            result,
            Err(PricingError::Domain(DomainError::InvalidParameter {
                name: "replications",
                ..
            }))
        ));
    }

    #[test]
    fn test_builder_zero_replications() {
        let result = MonteCarloConfig::builder().replications(0).build();
        assert!(matches!(
            result,
            Err(PricingError::Domain(DomainError::ZeroReplications))
        ));
    }

    #[test]
    fn test_builder_boundary_values() {
        assert!(MonteCarloConfig::builder().replications(1).build().is_ok());
        assert!(MonteCarloConfig::builder()
            .replications(usize::MAX)
            .build()
            .is_ok());
    }

    #[test]
    fn test_large_replication_counts_have_no_upper_bound() {
        let config = MonteCarloConfig::builder()
            .replications(100_000_001)
            .build()
            .unwrap();
        assert_eq!(config.replications(), 100_000_001);
        assert!(validate_replications(usize::MAX).is_ok());
        assert!(validate_replications(0).is_err());
    }

    #[test]
    fn test_maybe_seed_clears() {
        let config = MonteCarloConfig::builder()
            .replications(10)
            .seed(5)
            .maybe_seed(None)
            .build()
            .unwrap();
        assert_eq!(config.seed(), None);
    }
}
