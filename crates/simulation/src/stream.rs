//! Materialised transaction timing shared across configurations.

use crate::{generate_transaction_rate, SimulationConfig};
use noncegap_types::SlotIndex;
use rand::Rng;
use tracing::info;

/// Per-slot transaction counts plus the slot of every transaction.
///
/// Transactions are laid out in non-decreasing slot order, which is the
/// order every per-sender pass relies on.
#[derive(Clone, Debug)]
pub struct TransactionStream {
    tx_per_slot: Vec<u32>,
    slots: Vec<SlotIndex>,
}

impl TransactionStream {
    /// Generate the rate for `config` and expand it into a stream.
    pub fn generate<R: Rng + ?Sized>(config: &SimulationConfig, rng: &mut R) -> Self {
        let stream = Self::from_counts(generate_transaction_rate(config, rng));
        info!(
            slots = stream.slot_count(),
            total_transactions = stream.total_transactions(),
            mean_tx_per_slot = stream.mean_tx_per_slot(),
            "Generated transaction stream"
        );
        stream
    }

    /// Build a stream from explicit per-slot counts.
    pub fn from_counts(tx_per_slot: Vec<u32>) -> Self {
        let total: usize = tx_per_slot.iter().map(|&c| c as usize).sum();
        let mut slots = Vec::with_capacity(total);
        let mut slot = SlotIndex::GENESIS;
        for &count in &tx_per_slot {
            slots.extend(std::iter::repeat(slot).take(count as usize));
            slot = slot.next();
        }
        Self { tx_per_slot, slots }
    }

    /// Transaction count of every slot.
    pub fn tx_per_slot(&self) -> &[u32] {
        &self.tx_per_slot
    }

    /// Slot of every transaction, in generation order.
    pub fn slots(&self) -> &[SlotIndex] {
        &self.slots
    }

    /// Number of slots.
    pub fn slot_count(&self) -> usize {
        self.tx_per_slot.len()
    }

    /// Total number of transactions.
    pub fn total_transactions(&self) -> usize {
        self.slots.len()
    }

    /// Mean transactions per slot (0 for an empty stream).
    pub fn mean_tx_per_slot(&self) -> f64 {
        if self.tx_per_slot.is_empty() {
            return 0.0;
        }
        self.total_transactions() as f64 / self.slot_count() as f64
    }
}
