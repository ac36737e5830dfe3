//! Nonce-Gap Simulator CLI
//!
//! Sweep shard counts and sender skew levels and print the gap-frequency table.
//!
//! # Example
//!
//! ```bash
//! # Full 30-day sweep with a fixed seed
//! noncegap-sim --seed 42 --parallel
//!
//! # A few cells, with workload statistics and a JSON report
//! noncegap-sim --slots 20000 --shards 2,32 --skew uniform,very_high --stats --json report.json
//! ```

use clap::Parser;
use noncegap_simulation::SimulationConfig;
use noncegap_simulator::{SkewLevel, Sweep, SweepConfig, DEFAULT_SHARD_COUNTS};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Nonce-Gap Simulator
///
/// Estimates how often a sender-agnostic sharded blob mempool splits a
/// sender's same-slot transactions across shards.
#[derive(Parser, Debug)]
#[command(name = "noncegap-sim")]
#[command(version, about, long_about = None)]
struct Args {
    /// Number of slots to simulate (default is 30 days of 12s slots)
    #[arg(long, default_value = "216000")]
    slots: u64,

    /// Target average transactions per slot
    #[arg(long, default_value = "14")]
    avg_tx: u32,

    /// Maximum transactions per slot
    #[arg(long, default_value = "21")]
    max_tx: u32,

    /// Number of distinct senders
    #[arg(long, default_value = "100")]
    senders: u32,

    /// Shard counts to sweep (comma-separated)
    #[arg(long, value_delimiter = ',')]
    shards: Vec<u32>,

    /// Skew levels to sweep (comma-separated: very_high, high, medium_high, medium_low, low, uniform)
    #[arg(long, value_delimiter = ',')]
    skew: Vec<SkewLevel>,

    /// Random seed for reproducible results. When omitted, a random seed is used.
    #[arg(long)]
    seed: Option<u64>,

    /// Evaluate grid cells in parallel
    #[arg(long)]
    parallel: bool,

    /// Print workload statistics after the table
    #[arg(long)]
    stats: bool,

    /// Write the full report as JSON
    #[arg(long)]
    json: Option<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("warn,noncegap_simulator=info,noncegap_simulation=info")
        }))
        .init();

    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Sweep failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), noncegap_simulator::SimulatorError> {
    let seed = args.seed.unwrap_or_else(rand::random);

    let shard_counts = if args.shards.is_empty() {
        DEFAULT_SHARD_COUNTS.to_vec()
    } else {
        args.shards
    };
    let skew_levels = if args.skew.is_empty() {
        SkewLevel::ALL.to_vec()
    } else {
        args.skew
    };

    let base = SimulationConfig::new(args.slots, args.avg_tx, args.max_tx)
        .with_sender_count(args.senders)
        .with_seed(seed);

    let config = SweepConfig::default()
        .with_base(base)
        .with_shard_counts(shard_counts)
        .with_skew_levels(skew_levels)
        .with_parallel(args.parallel);

    let report = Sweep::new(config)?.run()?;
    report.print_summary();

    if args.stats {
        report.print_stats();
    }

    if let Some(path) = args.json {
        report.write_json(&path)?;
        info!(path = %path.display(), "Wrote JSON report");
    }

    Ok(())
}
