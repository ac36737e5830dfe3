//! Nonce-Gap Simulator
//!
//! Sweeps the nonce-gap simulation over a grid of shard counts and sender
//! skew levels, sharing one generated workload across every cell.
//!
//! # Architecture
//!
//! The simulator builds on `noncegap-simulation` to provide:
//!
//! - **Skew Levels**: six named sender-concentration presets
//! - **Sweep Runner**: shard × skew grid, optionally evaluated in parallel
//! - **Workload Statistics**: sender volume ranking, hourly rate, same-sender distances
//! - **Reporting**: percentage table and JSON export for plotting
//!
//! # Example
//!
//! ```ignore
//! use noncegap_simulator::{Sweep, SweepConfig};
//! use noncegap_simulation::SimulationConfig;
//!
//! let config = SweepConfig::default()
//!     .with_base(SimulationConfig::new(10_000, 14, 21).with_seed(42))
//!     .with_shard_counts(vec![1, 4, 32])
//!     .with_parallel(true);
//!
//! let report = Sweep::new(config)?.run()?;
//! report.print_summary();
//! ```

pub mod config;
pub mod error;
pub mod metrics;
pub mod report;
pub mod runner;

pub use config::{SkewLevel, SweepConfig, DEFAULT_SHARD_COUNTS};
pub use error::SimulatorError;
pub use metrics::{DistanceSummary, SkewStats, WorkloadStats};
pub use report::SweepReport;
pub use runner::Sweep;
