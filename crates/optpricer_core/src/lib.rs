//! # optpricer_core: Foundation for Monte Carlo Option Pricing
//!
//! ## Layer 1 (Foundation) Role
//!
//! optpricer_core is the bottom layer of the workspace. It performs no
//! simulation and no I/O; it provides:
//! - Validated market inputs: `MarketParameters` (`types::market`)
//! - Error types: `PricingError`, `DomainError` (`types::error`)
//! - Sample statistics: `mean`, `std_dev`, `SampleStatistics`,
//!   `RunningStatistics` (`math::statistics`)
//! - Series utilities: cumulative sum, simple and exponential moving
//!   averages (`math::series`)
//! - Closed-form bond prices (`rates::bond`)
//!
//! ## Usage Examples
//!
//! ```rust
//! use optpricer_core::math::statistics::{mean, std_dev};
//! use optpricer_core::types::MarketParameters;
//!
//! let params = MarketParameters::new(120.0, 100.0, 0.2, 0.06, 0.5).unwrap();
//! assert_eq!(params.step_count(), 1);
//!
//! let xs = [1.0, 2.0, 3.0, 4.0];
//! assert_eq!(mean(&xs).unwrap(), 2.5);
//! assert!((std_dev(&xs).unwrap() - 1.2909944487358056).abs() < 1e-12);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod rates;
pub mod types;
