//! Monte Carlo pricing of European and Asian options under GBM.
//!
//! # Architecture
//!
//! ```text
//! MonteCarloPricer
//! ├── MonteCarloConfig   (replications, seed)
//! ├── SimulatedPath      (trajectory buffer reused per replication)
//! ├── GaussianSampler    (polar Box–Muller over an owned RandomSource)
//! └── Replication loop
//!     ├── terminal_value()  European call
//!     └── generate_path()   Asian modes
//! ```
//!
//! # Examples
//!
//! ## European Call
//!
//! ```rust
//! use optpricer_core::types::MarketParameters;
//! use optpricer_pricing::mc::{MonteCarloConfig, MonteCarloPricer, PayoffMode};
//!
//! let config = MonteCarloConfig::builder()
//!     .replications(20_000)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//! let mut pricer = MonteCarloPricer::new(config).unwrap();
//!
//! let params = MarketParameters::new(120.0, 100.0, 0.2, 0.06, 0.5).unwrap();
//! let price = pricer.price(&params, PayoffMode::EuropeanCall).unwrap();
//! assert!((price - 23.40).abs() < 0.5);
//! ```
//!
//! ## Asian Options
//!
//! ```rust
//! use optpricer_core::types::MarketParameters;
//! use optpricer_pricing::mc::{MonteCarloConfig, MonteCarloPricer, PayoffMode};
//!
//! let config = MonteCarloConfig::builder().replications(1_000).seed(7).build().unwrap();
//! let mut pricer = MonteCarloPricer::new(config).unwrap();
//!
//! let params = MarketParameters::new(95.0, 100.0, 0.2, 0.06, 0.5)
//!     .unwrap()
//!     .with_step_count(126)
//!     .unwrap();
//!
//! for mode in PayoffMode::ASIAN {
//!     let result = pricer.price_detailed(&params, mode).unwrap();
//!     println!("{mode}: {:.4} +/- {:.4}", result.price, result.confidence_95());
//! }
//! ```

mod config;
mod diagnostics;
mod paths;
mod payoff;
mod pricer;
mod workspace;

pub use config::{MonteCarloConfig, MonteCarloConfigBuilder, DEFAULT_REPLICATIONS};
pub use diagnostics::{simulate_path_averages, simulate_terminal_prices, TerminalDiagnostics};
pub use paths::{generate_path, terminal_value, GbmDiscretisation};
pub use payoff::{Averaging, OptionType, PayoffMode};
pub use pricer::{MonteCarloPricer, PricingResult};
pub use workspace::SimulatedPath;
