//! Payoff rules.
//!
//! A pricing call selects exactly one [`PayoffMode`]. European calls need
//! only the terminal price; Asian modes summarise the whole path by its
//! arithmetic or geometric mean before applying the call or put floor.

use std::fmt;
use std::str::FromStr;

use optpricer_core::types::DomainError;

use super::workspace::SimulatedPath;

/// Call or put.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionType {
    /// Pays `max(underlying − strike, 0)`.
    Call,
    /// Pays `max(strike − underlying, 0)`.
    Put,
}

impl OptionType {
    /// Floored payoff for `underlying` against `strike`.
    #[inline]
    pub fn intrinsic(self, underlying: f64, strike: f64) -> f64 {
        match self {
            OptionType::Call => (underlying - strike).max(0.0),
            OptionType::Put => (strike - underlying).max(0.0),
        }
    }
}

/// How an Asian option summarises its path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Averaging {
    /// `Σ S_i / n`
    Arithmetic,
    /// `exp(Σ ln S_i / n)`
    Geometric,
}

impl Averaging {
    /// Applies the averaging rule to `path`.
    #[inline]
    pub fn summarise(self, path: &SimulatedPath) -> f64 {
        match self {
            Averaging::Arithmetic => path.arithmetic_mean(),
            Averaging::Geometric => path.geometric_mean(),
        }
    }
}

impl fmt::Display for Averaging {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Averaging::Arithmetic => write!(f, "arithmetic"),
            Averaging::Geometric => write!(f, "geometric"),
        }
    }
}

/// The option priced by one call to the engine.
///
/// Parses from kebab-case names (`european-call`, `arithmetic-asian-put`, ...)
/// and from the two-letter codes `AC`, `AP`, `GC`, `GP` for the Asian modes.
///
/// # Examples
///
/// ```rust
/// use optpricer_pricing::mc::{Averaging, OptionType, PayoffMode};
///
/// let mode: PayoffMode = "GP".parse().unwrap();
/// assert_eq!(mode, PayoffMode::GeometricAsianPut);
/// assert_eq!(mode.averaging(), Some(Averaging::Geometric));
/// assert_eq!(mode.option_type(), OptionType::Put);
/// assert_eq!(mode.to_string(), "geometric-asian-put");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum PayoffMode {
    /// Plain European call on the terminal price.
    EuropeanCall,
    /// Call on the arithmetic path average.
    ArithmeticAsianCall,
    /// Put on the arithmetic path average.
    ArithmeticAsianPut,
    /// Call on the geometric path average.
    GeometricAsianCall,
    /// Put on the geometric path average.
    GeometricAsianPut,
}

impl PayoffMode {
    /// Every mode, European first.
    pub const ALL: [PayoffMode; 5] = [
        PayoffMode::EuropeanCall,
        PayoffMode::ArithmeticAsianCall,
        PayoffMode::ArithmeticAsianPut,
        PayoffMode::GeometricAsianCall,
        PayoffMode::GeometricAsianPut,
    ];

    /// The four path-dependent modes.
    pub const ASIAN: [PayoffMode; 4] = [
        PayoffMode::ArithmeticAsianCall,
        PayoffMode::ArithmeticAsianPut,
        PayoffMode::GeometricAsianCall,
        PayoffMode::GeometricAsianPut,
    ];

    /// Asian mode for the given averaging and option type.
    #[inline]
    pub fn asian(averaging: Averaging, option_type: OptionType) -> Self {
        match (averaging, option_type) {
            (Averaging::Arithmetic, OptionType::Call) => PayoffMode::ArithmeticAsianCall,
            (Averaging::Arithmetic, OptionType::Put) => PayoffMode::ArithmeticAsianPut,
            (Averaging::Geometric, OptionType::Call) => PayoffMode::GeometricAsianCall,
            (Averaging::Geometric, OptionType::Put) => PayoffMode::GeometricAsianPut,
        }
    }

    /// Returns `true` if the mode needs the full path.
    #[inline]
    pub fn is_path_dependent(self) -> bool {
        self.averaging().is_some()
    }

    /// Path averaging rule, `None` for the European call.
    #[inline]
    pub fn averaging(self) -> Option<Averaging> {
        match self {
            PayoffMode::EuropeanCall => None,
            PayoffMode::ArithmeticAsianCall | PayoffMode::ArithmeticAsianPut => {
                Some(Averaging::Arithmetic)
            }
            PayoffMode::GeometricAsianCall | PayoffMode::GeometricAsianPut => {
                Some(Averaging::Geometric)
            }
        }
    }

    /// Call or put.
    #[inline]
    pub fn option_type(self) -> OptionType {
        match self {
            PayoffMode::ArithmeticAsianPut | PayoffMode::GeometricAsianPut => OptionType::Put,
            _ => OptionType::Call,
        }
    }

    /// Kebab-case name.
    pub fn name(self) -> &'static str {
        match self {
            PayoffMode::EuropeanCall => "european-call",
            PayoffMode::ArithmeticAsianCall => "arithmetic-asian-call",
            PayoffMode::ArithmeticAsianPut => "arithmetic-asian-put",
            PayoffMode::GeometricAsianCall => "geometric-asian-call",
            PayoffMode::GeometricAsianPut => "geometric-asian-put",
        }
    }

    /// Two-letter code for Asian modes.
    pub fn code(self) -> Option<&'static str> {
        match self {
            PayoffMode::EuropeanCall => None,
            PayoffMode::ArithmeticAsianCall => Some("AC"),
            PayoffMode::ArithmeticAsianPut => Some("AP"),
            PayoffMode::GeometricAsianCall => Some("GC"),
            PayoffMode::GeometricAsianPut => Some("GP"),
        }
    }

    /// Floored payoff of one Asian replication.
    ///
    /// For [`PayoffMode::EuropeanCall`] the path's terminal point is used.
    #[inline]
    pub fn path_payoff(self, path: &SimulatedPath, strike: f64) -> f64 {
        let underlying = match self.averaging() {
            Some(averaging) => averaging.summarise(path),
            None => path.terminal().unwrap_or(f64::NAN),
        };
        self.option_type().intrinsic(underlying, strike)
    }
}

impl fmt::Display for PayoffMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PayoffMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised = s.trim().to_ascii_lowercase().replace('_', "-");
        PayoffMode::ALL
            .into_iter()
            .find(|mode| {
                mode.name() == normalised
                    || mode
                        .code()
                        .is_some_and(|code| code.eq_ignore_ascii_case(&normalised))
            })
            .ok_or_else(|| {
                DomainError::invalid(
                    "mode",
                    format!(
                        "unknown payoff mode '{}'; expected one of european-call, \
                         arithmetic-asian-call, arithmetic-asian-put, geometric-asian-call, \
                         geometric-asian-put, AC, AP, GC, GP",
                        s
                    ),
                )
            })
    }
}
