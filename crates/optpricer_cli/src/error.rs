//! CLI error types.

use optpricer_core::types::PricingError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by `optpricer` commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Pricing or statistics failed.
    #[error("pricing failed: {0}")]
    Pricing(#[from] PricingError),

    /// Configuration could not be loaded or is invalid.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A command-line value was rejected.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Writing results failed.
    #[error("output error: {0}")]
    Output(#[from] std::io::Error),

    /// JSON rendering failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
