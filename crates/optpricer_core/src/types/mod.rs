//! Core value types shared by every pricing layer.
//!
//! - [`MarketParameters`]: validated, immutable inputs of one pricing call
//! - [`PricingError`] / [`DomainError`]: structured failures

pub mod error;
pub mod market;

pub use error::{DomainError, PricingError};
pub use market::MarketParameters;
