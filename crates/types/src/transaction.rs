//! Synthetic blob transaction.

use crate::{SenderId, ShardId, SlotIndex};
use serde::{Deserialize, Serialize};

/// A generated blob transaction: when it landed, who sent it, which shard took it.
///
/// Transactions only live for the duration of a single counting pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Transaction {
    /// Slot the transaction was included in.
    pub slot: SlotIndex,

    /// Sending account.
    pub sender: SenderId,

    /// Shard the transaction was routed to.
    pub shard: ShardId,
}

impl Transaction {
    /// Create a new transaction.
    pub fn new(slot: SlotIndex, sender: SenderId, shard: ShardId) -> Self {
        Self {
            slot,
            sender,
            shard,
        }
    }

    /// Whether `next` from the same sender lands in the same slot on another shard.
    ///
    /// Only meaningful when both transactions share a sender.
    pub fn splits_from(&self, next: &Transaction) -> bool {
        self.slot == next.slot && self.shard != next.shard
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_from() {
        let a = Transaction::new(SlotIndex(5), SenderId(1), ShardId(0));
        let same_shard = Transaction::new(SlotIndex(5), SenderId(1), ShardId(0));
        let other_shard = Transaction::new(SlotIndex(5), SenderId(1), ShardId(1));
        let later_slot = Transaction::new(SlotIndex(6), SenderId(1), ShardId(1));

        assert!(!a.splits_from(&same_shard));
        assert!(a.splits_from(&other_shard));
        assert!(!a.splits_from(&later_slot));
    }

    #[test]
    fn test_serializes_as_plain_integers() {
        let tx = Transaction::new(SlotIndex(2), SenderId(9), ShardId(3));
        let json = serde_json::to_string(&tx).unwrap();
        assert_eq!(json, r#"{"slot":2,"sender":9,"shard":3}"#);
    }
}
