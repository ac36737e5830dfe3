//! Sweep runner.

use crate::{SimulatorError, SkewLevel, SweepConfig, SweepReport, WorkloadStats};
use noncegap_simulation::{count_gaps, GapResult, SenderAssignment, TransactionStream};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use std::time::Instant;
use tracing::{debug, info};

/// Evaluates every (shard count, skew level) cell against one shared workload.
///
/// The transaction stream is generated once and each skew level draws its
/// senders once, so cells differ only in skew and shard assignment. Every
/// cell owns a ChaCha stream derived from the seed and its grid position,
/// which makes parallel and sequential runs produce identical tables.
pub struct Sweep {
    config: SweepConfig,
}

impl Sweep {
    /// Create a sweep, validating every cell up front.
    pub fn new(config: SweepConfig) -> Result<Self, SimulatorError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The sweep configuration.
    pub fn config(&self) -> &SweepConfig {
        &self.config
    }

    /// Run the sweep.
    pub fn run(&self) -> Result<SweepReport, SimulatorError> {
        let start = Instant::now();
        let base = &self.config.base;
        info!(
            slots = base.slot_count,
            senders = base.sender_count,
            cells = self.config.cell_count(),
            parallel = self.config.parallel,
            seed = base.seed,
            "Starting sweep"
        );

        let mut rng = ChaCha8Rng::seed_from_u64(base.seed);
        let stream = TransactionStream::generate(base, &mut rng);

        let assignments = self
            .config
            .skew_levels
            .iter()
            .map(|&level| {
                SenderAssignment::draw(&stream, base.sender_count, level.lambda(), &mut rng)
                    .map(|assignment| (level, assignment))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let cells: Vec<(usize, usize)> = (0..self.config.shard_counts.len())
            .flat_map(|row| (0..assignments.len()).map(move |col| (row, col)))
            .collect();

        let evaluate = |&(row, col): &(usize, usize)| {
            self.evaluate_cell(&stream, &assignments, row, col)
        };
        let flat: Vec<GapResult> = if self.config.parallel {
            cells.par_iter().map(evaluate).collect()
        } else {
            cells.iter().map(evaluate).collect()
        };

        let results: Vec<Vec<GapResult>> = flat
            .chunks(assignments.len())
            .map(|row| row.to_vec())
            .collect();

        let stats = WorkloadStats::collect(&stream, &assignments)?;

        info!(
            total_transactions = stream.total_transactions(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Sweep complete"
        );

        Ok(SweepReport {
            seed: base.seed,
            base: base.clone(),
            shard_counts: self.config.shard_counts.clone(),
            skew_levels: assignments.iter().map(|(level, _)| *level).collect(),
            results,
            stats,
        })
    }

    fn evaluate_cell(
        &self,
        stream: &TransactionStream,
        assignments: &[(SkewLevel, SenderAssignment)],
        row: usize,
        col: usize,
    ) -> GapResult {
        let shard_count = self.config.shard_counts[row];
        let (level, senders) = &assignments[col];

        let mut rng = ChaCha8Rng::seed_from_u64(self.config.base.seed);
        // Stream 0 drives the shared workload.
        rng.set_stream((row * assignments.len() + col) as u64 + 1);

        let result = count_gaps(stream, senders, shard_count, &mut rng);
        debug!(
            shards = shard_count,
            skew = %level,
            gap_frequency = result.gap_frequency,
            "Cell complete"
        );
        result
    }
}
