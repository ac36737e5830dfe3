//! Error types for the sweep harness.

use noncegap_simulation::ConfigError;
use thiserror::Error;

/// Errors raised by the sweep harness.
#[derive(Debug, Error)]
pub enum SimulatorError {
    /// A grid cell has an invalid configuration.
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// One axis of the grid has no entries.
    #[error("Sweep grid axis {axis} is empty")]
    EmptyGrid { axis: &'static str },

    /// Skew level name not recognised.
    #[error("Unknown skew level: {0}")]
    UnknownSkewLevel(String),

    /// Histogram could not be created.
    #[error("Histogram error: {0}")]
    Histogram(#[from] hdrhistogram::CreationError),

    /// Report could not be serialized.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Report could not be written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
