//! # Random Number Generation
//!
//! Every simulation context owns its randomness explicitly; there is no
//! process-wide generator.
//!
//! ## Module Structure
//!
//! - [`RandomSource`]: capability trait yielding uniform variates in `[0, 1)`
//! - [`PricerRng`]: seeded `StdRng` wrapper, seeded explicitly or from the
//!   wall clock
//! - [`GaussianSampler`]: standard normal variates via the polar Box–Muller
//!   transform with rejection sampling over the unit disc
//!
//! ## Usage Example
//!
//! ```rust
//! use optpricer_pricing::rng::{GaussianSampler, PricerRng};
//!
//! let mut sampler = GaussianSampler::new(PricerRng::from_seed(12345));
//! let z = sampler.sample();
//! assert!(z.is_finite());
//!
//! // Batch generation into a pre-allocated buffer
//! let mut buffer = vec![0.0; 1000];
//! sampler.fill(&mut buffer);
//! ```
//!
//! ## Reproducibility
//!
//! Two samplers built from sources with the same seed produce identical
//! sequences. Independent contexts (threads, pricing calls) must each own a
//! separately seeded source.

mod gaussian;
mod source;

pub use gaussian::GaussianSampler;
pub use source::{PricerRng, RandomSource};
