//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: top-level error returned by every fallible operation
//! - `DomainError`: invalid inputs, detected before any simulation starts

use thiserror::Error;

/// Invalid input to a pricing, statistics or utility operation.
///
/// # Examples
/// ```
/// use optpricer_core::types::DomainError;
///
/// let err = DomainError::InsufficientSamples { required: 2, actual: 1 };
/// assert_eq!(format!("{}", err), "at least 2 samples required, got 1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A named parameter violated its constraint.
    #[error("invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Violated constraint, including the offending value.
        reason: String,
    },

    /// Replication (path) count of zero.
    #[error("replication count must be positive")]
    ZeroReplications,

    /// Discretisation step count of zero.
    #[error("step count must be positive")]
    ZeroSteps,

    /// Too few samples for the requested statistic.
    #[error("at least {required} samples required, got {actual}")]
    InsufficientSamples {
        /// Minimum number of samples.
        required: usize,
        /// Number of samples supplied.
        actual: usize,
    },
}

impl DomainError {
    /// Shorthand for [`DomainError::InvalidParameter`].
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

/// Categorised pricing errors.
///
/// # Variants
/// - `Domain`: invalid parameters (fail fast, before simulation)
/// - `NumericalDegeneracy`: a computed estimate or moment is not finite
///
/// # Examples
/// ```
/// use optpricer_core::types::{DomainError, PricingError};
///
/// let err: PricingError = DomainError::ZeroReplications.into();
/// assert!(err.is_domain());
/// assert_eq!(format!("{}", err), "domain error: replication count must be positive");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    /// Invalid input data or parameters.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// Computation produced a non-finite value.
    #[error("numerical degeneracy: {0}")]
    NumericalDegeneracy(String),
}

impl PricingError {
    /// Returns `true` for [`PricingError::Domain`].
    #[inline]
    pub fn is_domain(&self) -> bool {
        matches!(self, Self::Domain(_))
    }

    /// Returns the inner [`DomainError`], if any.
    #[inline]
    pub fn as_domain(&self) -> Option<&DomainError> {
        match self {
            Self::Domain(err) => Some(err),
            Self::NumericalDegeneracy(_) => None,
        }
    }
}
