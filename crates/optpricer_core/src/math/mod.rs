//! Numerical utilities.
//!
//! - [`statistics`]: sample mean, Bessel-corrected standard deviation and
//!   Welford running moments
//! - [`series`]: cumulative sums and moving averages over price series

pub mod series;
pub mod statistics;
