//! Workload statistics collected alongside a sweep.
//!
//! These describe the generated workload rather than the gap results: how
//! volume is spread across senders, how the rate moves over time, and how
//! far apart consecutive transactions of one sender are.

use crate::{SimulatorError, SkewLevel};
use hdrhistogram::Histogram;
use noncegap_simulation::{SenderAssignment, TransactionStream};
use noncegap_types::SlotIndex;
use serde::Serialize;

/// 12-second slots in one hour.
pub const SLOTS_PER_HOUR: usize = 300;

/// Statistics for the shared workload of a sweep.
#[derive(Clone, Debug, Serialize)]
pub struct WorkloadStats {
    /// Transactions in the stream.
    pub total_transactions: u64,
    /// Mean transactions per slot.
    pub mean_tx_per_slot: f64,
    /// Busiest slot.
    pub peak_tx_per_slot: u32,
    /// Transactions in each complete hour.
    pub tx_per_hour: Vec<u64>,
    /// Per-skew sender statistics, in sweep column order.
    pub skew: Vec<SkewStats>,
}

/// Sender statistics for one skew level.
#[derive(Clone, Debug, Serialize)]
pub struct SkewStats {
    pub level: SkewLevel,
    /// Transactions per sender, sorted descending.
    pub ranked_sender_counts: Vec<u64>,
    /// Slots between consecutive transactions of the same sender.
    pub sender_distance: DistanceSummary,
}

/// Five-number summary plus mean of a distance distribution.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct DistanceSummary {
    pub samples: u64,
    pub min: u64,
    pub p25: u64,
    pub median: u64,
    pub p75: u64,
    pub max: u64,
    pub mean: f64,
}

impl DistanceSummary {
    fn from_histogram(hist: &Histogram<u64>) -> Self {
        if hist.is_empty() {
            return Self::default();
        }
        Self {
            samples: hist.len(),
            min: hist.min(),
            p25: hist.value_at_quantile(0.25),
            median: hist.value_at_quantile(0.5),
            p75: hist.value_at_quantile(0.75),
            max: hist.max(),
            mean: hist.mean(),
        }
    }
}

impl WorkloadStats {
    /// Collect statistics for a stream and its per-skew sender draws.
    pub fn collect(
        stream: &TransactionStream,
        assignments: &[(SkewLevel, SenderAssignment)],
    ) -> Result<Self, SimulatorError> {
        let tx_per_hour = stream
            .tx_per_slot()
            .chunks_exact(SLOTS_PER_HOUR)
            .map(|hour| hour.iter().map(|&c| c as u64).sum())
            .collect();

        let skew = assignments
            .iter()
            .map(|(level, assignment)| SkewStats::collect(*level, stream, assignment))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            total_transactions: stream.total_transactions() as u64,
            mean_tx_per_slot: stream.mean_tx_per_slot(),
            peak_tx_per_slot: stream.tx_per_slot().iter().copied().max().unwrap_or(0),
            tx_per_hour,
            skew,
        })
    }

    /// Statistics for one skew level, if it was part of the sweep.
    pub fn for_level(&self, level: SkewLevel) -> Option<&SkewStats> {
        self.skew.iter().find(|s| s.level == level)
    }
}

impl SkewStats {
    fn collect(
        level: SkewLevel,
        stream: &TransactionStream,
        assignment: &SenderAssignment,
    ) -> Result<Self, SimulatorError> {
        let mut ranked_sender_counts = assignment.counts_per_sender();
        ranked_sender_counts.sort_unstable_by(|a, b| b.cmp(a));

        let mut hist = Histogram::<u64>::new(3)?;
        let mut last_slot: Vec<Option<SlotIndex>> =
            vec![None; assignment.sender_count() as usize];
        for (&slot, sender) in stream.slots().iter().zip(assignment.senders()) {
            if let Some(entry) = last_slot.get_mut(sender.index()) {
                if let Some(prev) = entry.replace(slot) {
                    let _ = hist.record(slot.distance_from(prev));
                }
            }
        }

        Ok(Self {
            level,
            ranked_sender_counts,
            sender_distance: DistanceSummary::from_histogram(&hist),
        })
    }

    /// Share of all transactions sent by the busiest sender.
    pub fn top_sender_share(&self) -> f64 {
        let total: u64 = self.ranked_sender_counts.iter().sum();
        match self.ranked_sender_counts.first() {
            Some(&top) if total > 0 => top as f64 / total as f64,
            _ => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_hourly_totals_drop_partial_hour() {
        let stream = TransactionStream::from_counts(vec![2; SLOTS_PER_HOUR * 2 + 10]);
        let stats = WorkloadStats::collect(&stream, &[]).unwrap();
        assert_eq!(stats.tx_per_hour, vec![600, 600]);
        assert_eq!(stats.peak_tx_per_slot, 2);
        assert_eq!(stats.total_transactions, (SLOTS_PER_HOUR as u64 * 2 + 10) * 2);
    }

    #[test]
    fn test_single_sender_distances() {
        // One tx every other slot, all from sender 0.
        let stream = TransactionStream::from_counts(vec![1, 0, 1, 0, 1]);
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let assignment = SenderAssignment::draw(&stream, 1, 0.0, &mut rng).unwrap();

        let stats =
            WorkloadStats::collect(&stream, &[(SkewLevel::Uniform, assignment)]).unwrap();
        let skew = stats.for_level(SkewLevel::Uniform).unwrap();
        assert_eq!(skew.ranked_sender_counts, vec![3]);
        assert_eq!(skew.sender_distance.samples, 2);
        assert_eq!(skew.sender_distance.min, 2);
        assert_eq!(skew.sender_distance.max, 2);
        assert_eq!(skew.top_sender_share(), 1.0);
    }

    #[test]
    fn test_skew_concentrates_volume() {
        let stream = TransactionStream::from_counts(vec![14; 2_000]);
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let assignments: Vec<_> = [SkewLevel::VeryHigh, SkewLevel::Uniform]
            .into_iter()
            .map(|level| {
                let a = SenderAssignment::draw(&stream, 100, level.lambda(), &mut rng).unwrap();
                (level, a)
            })
            .collect();

        let stats = WorkloadStats::collect(&stream, &assignments).unwrap();
        let skewed = stats.for_level(SkewLevel::VeryHigh).unwrap();
        let uniform = stats.for_level(SkewLevel::Uniform).unwrap();

        assert!(skewed.top_sender_share() > 0.1);
        assert!(uniform.top_sender_share() < 0.02);
        assert!(
            skewed.ranked_sender_counts.windows(2).all(|w| w[0] >= w[1]),
            "counts must be ranked"
        );
        // Heavy senders come back sooner.
        assert!(skewed.sender_distance.median <= uniform.sender_distance.median);
    }
}
