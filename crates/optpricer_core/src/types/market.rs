//! Market and contract inputs for a single pricing call.

use serde::{Deserialize, Serialize};

use super::error::{DomainError, PricingError};

/// Immutable, validated inputs of one pricing call.
///
/// # Model
///
/// The underlying follows risk-neutral geometric Brownian motion:
/// ```text
/// dS = r S dt + σ S dW
/// ```
///
/// # Invariants
///
/// - `spot > 0`, `strike > 0`, `expiry > 0`
/// - `volatility >= 0`
/// - `step_count >= 1`
/// - every field is finite
///
/// Instances can only be obtained through [`MarketParameters::new`] or
/// [`MarketParameters::with_step_count`], so every value in circulation
/// satisfies the invariants. Deserialisation goes through the same checks.
///
/// # Examples
///
/// ```rust
/// use optpricer_core::types::MarketParameters;
///
/// let params = MarketParameters::new(95.0, 100.0, 0.2, 0.06, 0.5)
///     .and_then(|p| p.with_step_count(126))
///     .unwrap();
///
/// assert_eq!(params.step_count(), 126);
/// assert!((params.discount_factor() - (-0.03_f64).exp()).abs() < 1e-15);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawMarketParameters")]
pub struct MarketParameters {
    spot: f64,
    strike: f64,
    volatility: f64,
    risk_free_rate: f64,
    expiry: f64,
    step_count: usize,
}

impl MarketParameters {
    /// Creates validated parameters with a single discretisation step.
    ///
    /// # Arguments
    ///
    /// * `spot` - Current price of the underlying (S₀)
    /// * `strike` - Strike price (K)
    /// * `volatility` - Annualised volatility (σ)
    /// * `risk_free_rate` - Continuously compounded risk-free rate (r)
    /// * `expiry` - Time to maturity in years (T)
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidParameter`] for the first field that
    /// violates its constraint.
    pub fn new(
        spot: f64,
        strike: f64,
        volatility: f64,
        risk_free_rate: f64,
        expiry: f64,
    ) -> Result<Self, PricingError> {
        let params = Self {
            spot,
            strike,
            volatility,
            risk_free_rate,
            expiry,
            step_count: 1,
        };
        params.validate()?;
        Ok(params)
    }

    /// Returns a copy with `step_count` discretisation intervals.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::ZeroSteps`] if `step_count` is zero.
    pub fn with_step_count(self, step_count: usize) -> Result<Self, PricingError> {
        if step_count == 0 {
            return Err(DomainError::ZeroSteps.into());
        }
        Ok(Self { step_count, ..self })
    }

    /// Checks every invariant.
    pub fn validate(&self) -> Result<(), PricingError> {
        check_positive("spot", self.spot)?;
        check_positive("strike", self.strike)?;
        check_positive("expiry", self.expiry)?;
        if !self.volatility.is_finite() || self.volatility < 0.0 {
            return Err(DomainError::invalid(
                "volatility",
                format!("must be finite and non-negative, got {}", self.volatility),
            )
            .into());
        }
        if !self.risk_free_rate.is_finite() {
            return Err(DomainError::invalid(
                "risk_free_rate",
                format!("must be finite, got {}", self.risk_free_rate),
            )
            .into());
        }
        if self.step_count == 0 {
            return Err(DomainError::ZeroSteps.into());
        }
        Ok(())
    }

    /// Current price of the underlying.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Strike price.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Annualised volatility.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Continuously compounded risk-free rate.
    #[inline]
    pub fn risk_free_rate(&self) -> f64 {
        self.risk_free_rate
    }

    /// Time to maturity in years.
    #[inline]
    pub fn expiry(&self) -> f64 {
        self.expiry
    }

    /// Number of discretisation intervals.
    #[inline]
    pub fn step_count(&self) -> usize {
        self.step_count
    }

    /// Risk-neutral discount factor `exp(-r·T)`.
    #[inline]
    pub fn discount_factor(&self) -> f64 {
        (-self.risk_free_rate * self.expiry).exp()
    }

    /// Total log-variance over the life of the option, `σ²·T`.
    #[inline]
    pub fn total_variance(&self) -> f64 {
        self.volatility * self.volatility * self.expiry
    }
}

fn check_positive(name: &'static str, value: f64) -> Result<(), PricingError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(DomainError::invalid(name, format!("must be finite and positive, got {}", value)).into())
    }
}

#[derive(Deserialize)]
struct RawMarketParameters {
    spot: f64,
    strike: f64,
    volatility: f64,
    risk_free_rate: f64,
    expiry: f64,
    #[serde(default = "default_step_count")]
    step_count: usize,
}

fn default_step_count() -> usize {
    1
}

impl TryFrom<RawMarketParameters> for MarketParameters {
    type Error = PricingError;

    fn try_from(raw: RawMarketParameters) -> Result<Self, Self::Error> {
        Self::new(
            raw.spot,
            raw.strike,
            raw.volatility,
            raw.risk_free_rate,
            raw.expiry,
        )?
        .with_step_count(raw.step_count)
    }
}
