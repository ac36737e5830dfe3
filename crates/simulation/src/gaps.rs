//! Nonce-gap counting.
//!
//! A nonce gap is a pair of consecutive transactions from one sender that
//! land in the same slot on different shards. A shard serving only part of
//! a sender's slot sees a hole in the nonce sequence.

use noncegap_types::Transaction;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of one simulation: gaps over total transactions.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GapResult {
    /// Same-slot shard switches observed.
    pub gap_count: u64,
    /// Transactions observed.
    pub total_tx: u64,
    /// `gap_count / total_tx`, 0 when no transactions were observed.
    pub gap_frequency: f64,
}

impl GapResult {
    /// Build a result from raw counts.
    pub fn from_counts(gap_count: u64, total_tx: u64) -> Self {
        let gap_frequency = if total_tx == 0 {
            0.0
        } else {
            gap_count as f64 / total_tx as f64
        };
        Self {
            gap_count,
            total_tx,
            gap_frequency,
        }
    }

    /// Gap frequency as a percentage.
    pub fn percentage(&self) -> f64 {
        self.gap_frequency * 100.0
    }
}

impl fmt::Display for GapResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.percentage())
    }
}

/// Streaming gap counter.
///
/// Keeps the previous transaction of each sender, so each sender's sequence
/// is compared pair by pair in arrival order. Within a slot, generation
/// order breaks ties. Transactions must arrive in non-decreasing slot order.
#[derive(Debug, Default)]
pub struct GapCounter {
    /// sender index -> last transaction seen from that sender
    last_seen: Vec<Option<Transaction>>,
    gap_count: u64,
    total_tx: u64,
}

impl GapCounter {
    /// Create a counter sized for `sender_count` senders.
    pub fn new(sender_count: u32) -> Self {
        Self {
            last_seen: vec![None; sender_count as usize],
            gap_count: 0,
            total_tx: 0,
        }
    }

    /// Record a transaction. Returns true if it opened a gap.
    pub fn observe(&mut self, tx: Transaction) -> bool {
        let idx = tx.sender.index();
        if idx >= self.last_seen.len() {
            self.last_seen.resize(idx + 1, None);
        }

        self.total_tx += 1;
        let is_gap = match self.last_seen[idx].replace(tx) {
            Some(prev) => {
                debug_assert!(prev.slot <= tx.slot, "transactions out of slot order");
                prev.splits_from(&tx)
            }
            None => false,
        };
        if is_gap {
            self.gap_count += 1;
        }
        is_gap
    }

    /// Gaps counted so far.
    pub fn gap_count(&self) -> u64 {
        self.gap_count
    }

    /// Finish counting.
    pub fn finish(self) -> GapResult {
        GapResult::from_counts(self.gap_count, self.total_tx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use noncegap_types::{SenderId, ShardId, SlotIndex};

    fn tx(slot: u64, sender: u32, shard: u32) -> Transaction {
        Transaction::new(SlotIndex(slot), SenderId(sender), ShardId(shard))
    }

    #[test]
    fn test_same_slot_shard_switch_is_gap() {
        let mut counter = GapCounter::new(2);
        assert!(!counter.observe(tx(0, 0, 0)));
        assert!(counter.observe(tx(0, 0, 1)));
        // Back to shard 0 within the same slot is another switch.
        assert!(counter.observe(tx(0, 0, 0)));

        let result = counter.finish();
        assert_eq!(result.gap_count, 2);
        assert_eq!(result.total_tx, 3);
    }

    #[test]
    fn test_cross_slot_switch_not_counted() {
        let mut counter = GapCounter::new(1);
        counter.observe(tx(0, 0, 0));
        counter.observe(tx(1, 0, 1));
        counter.observe(tx(5, 0, 2));
        assert_eq!(counter.finish().gap_count, 0);
    }

    #[test]
    fn test_senders_tracked_independently() {
        let mut counter = GapCounter::new(2);
        counter.observe(tx(0, 0, 0));
        counter.observe(tx(0, 1, 1));
        // Sender 0 stays on shard 0 even though sender 1 went elsewhere.
        assert!(!counter.observe(tx(0, 0, 0)));
        assert!(counter.observe(tx(0, 1, 0)));
        assert_eq!(counter.gap_count(), 1);
    }

    #[test]
    fn test_unsized_sender_grows_table() {
        let mut counter = GapCounter::default();
        counter.observe(tx(0, 7, 0));
        assert!(counter.observe(tx(0, 7, 3)));
    }

    #[test]
    fn test_empty_result_is_zero() {
        let result = GapCounter::new(10).finish();
        assert_eq!(result.total_tx, 0);
        assert_eq!(result.gap_frequency, 0.0);
    }

    #[test]
    fn test_result_display() {
        let result = GapResult::from_counts(362, 1000);
        assert_eq!(result.to_string(), "36.2%");
    }
}
