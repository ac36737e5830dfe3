//! Sweep results and their presentation.

use crate::{SimulatorError, SkewLevel, WorkloadStats};
use noncegap_simulation::{GapResult, SimulationConfig};
use serde::Serialize;
use std::fmt::Write as _;
use std::path::Path;

/// Gap results for every (shard count, skew level) cell of a sweep.
///
/// Consumed by external plotting: the JSON form carries the same table plus
/// the workload statistics.
#[derive(Clone, Debug, Serialize)]
pub struct SweepReport {
    /// Seed the sweep ran with.
    pub seed: u64,
    /// Shared workload parameters.
    pub base: SimulationConfig,
    /// Row labels.
    pub shard_counts: Vec<u32>,
    /// Column labels.
    pub skew_levels: Vec<SkewLevel>,
    /// `results[row][col]` for `shard_counts[row]` and `skew_levels[col]`.
    pub results: Vec<Vec<GapResult>>,
    /// Statistics of the shared workload.
    pub stats: WorkloadStats,
}

impl SweepReport {
    /// Result for one cell.
    pub fn result(&self, shard_count: u32, level: SkewLevel) -> Option<&GapResult> {
        let row = self.shard_counts.iter().position(|&s| s == shard_count)?;
        let col = self.skew_levels.iter().position(|&l| l == level)?;
        self.results.get(row)?.get(col)
    }

    /// Gap frequency for one cell.
    pub fn gap_frequency(&self, shard_count: u32, level: SkewLevel) -> Option<f64> {
        self.result(shard_count, level).map(|r| r.gap_frequency)
    }

    /// Render the percentage table.
    pub fn format_table(&self) -> String {
        const LABEL_WIDTH: usize = 8;
        let widths: Vec<usize> = self
            .skew_levels
            .iter()
            .map(|level| level.name().len().max(7))
            .collect();

        let mut out = String::new();
        let _ = write!(out, "{:>LABEL_WIDTH$}", "shards");
        for (level, width) in self.skew_levels.iter().zip(widths.iter().copied()) {
            let _ = write!(out, "  {:>width$}", level.name());
        }
        out.push('\n');

        for (shards, row) in self.shard_counts.iter().zip(&self.results) {
            let _ = write!(out, "{shards:>LABEL_WIDTH$}");
            for (result, width) in row.iter().zip(widths.iter().copied()) {
                let _ = write!(out, "  {:>width$}", result.to_string());
            }
            out.push('\n');
        }
        out
    }

    /// Print the gap-frequency table.
    pub fn print_summary(&self) {
        println!("\n=== Nonce Gap Frequency ===");
        println!(
            "{} transactions over {} slots ({:.2} avg/slot, seed {})\n",
            self.stats.total_transactions,
            self.base.slot_count,
            self.stats.mean_tx_per_slot,
            self.seed
        );
        print!("{}", self.format_table());
    }

    /// Print workload statistics.
    pub fn print_stats(&self) {
        println!("\n=== Workload ===");
        println!("Peak tx/slot: {}", self.stats.peak_tx_per_slot);
        if let (Some(min), Some(max)) = (
            self.stats.tx_per_hour.iter().min(),
            self.stats.tx_per_hour.iter().max(),
        ) {
            println!(
                "Tx/hour: min {min}, max {max} over {} hours",
                self.stats.tx_per_hour.len()
            );
        }

        println!("\n=== Same-Sender Distance (slots) ===");
        println!(
            "{:>12}  {:>9}  {:>5}  {:>5}  {:>6}  {:>5}  {:>6}  {:>7}",
            "skew", "top share", "min", "p25", "median", "p75", "max", "mean"
        );
        for skew in &self.stats.skew {
            let d = &skew.sender_distance;
            println!(
                "{:>12}  {:>8.1}%  {:>5}  {:>5}  {:>6}  {:>5}  {:>6}  {:>7.2}",
                skew.level.name(),
                skew.top_sender_share() * 100.0,
                d.min,
                d.p25,
                d.median,
                d.p75,
                d.max,
                d.mean
            );
        }
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String, SimulatorError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the JSON report to `path`.
    pub fn write_json(&self, path: &Path) -> Result<(), SimulatorError> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}
