//! Error types for simulation configuration.

use thiserror::Error;

/// Invalid or inconsistent simulation parameters.
///
/// Always raised before any work starts; a run never returns a partial result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A count that must be positive was zero.
    #[error("{parameter} must be greater than zero")]
    ZeroParameter { parameter: &'static str },

    /// The per-slot cap is lower than the target average.
    #[error("max_tx_per_slot ({max}) must be at least avg_tx_per_slot ({avg})")]
    MaxBelowAverage { max: u32, avg: u32 },

    /// Skew decay rate is negative, NaN or infinite.
    #[error("skew_lambda must be finite and non-negative, got {lambda}")]
    InvalidSkew { lambda: f64 },

    /// A rate-profile range is empty or out of bounds.
    #[error("rate profile {parameter} is invalid: {reason}")]
    InvalidRateProfile {
        parameter: &'static str,
        reason: String,
    },
}

impl ConfigError {
    /// Name of the offending parameter.
    pub fn parameter(&self) -> &'static str {
        match self {
            ConfigError::ZeroParameter { parameter } => parameter,
            ConfigError::MaxBelowAverage { .. } => "max_tx_per_slot",
            ConfigError::InvalidSkew { .. } => "skew_lambda",
            ConfigError::InvalidRateProfile { parameter, .. } => parameter,
        }
    }
}
