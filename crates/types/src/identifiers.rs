//! Domain-specific identifier types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Slot index within a simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlotIndex(pub u64);

impl SlotIndex {
    /// First slot of a run.
    pub const GENESIS: Self = SlotIndex(0);

    /// Get the next slot.
    pub fn next(self) -> Self {
        SlotIndex(self.0 + 1)
    }

    /// Number of slots from `earlier` to `self` (zero if `earlier` is later).
    pub fn distance_from(self, earlier: SlotIndex) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl fmt::Display for SlotIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Slot({})", self.0)
    }
}

/// Sender identifier, ranked: lower indices are the heavier senders under skew.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SenderId(pub u32);

impl SenderId {
    /// Index into per-sender tables.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for SenderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sender({})", self.0)
    }
}

/// Mempool shard identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShardId(pub u32);

impl fmt::Display for ShardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Shard({})", self.0)
    }
}
