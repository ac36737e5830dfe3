//! Core types for the nonce-gap simulator.
//!
//! Identifiers are thin newtypes over integers so that slots, senders and
//! shards can't be mixed up at call sites.

mod identifiers;
mod transaction;

pub use identifiers::{SenderId, ShardId, SlotIndex};
pub use transaction::Transaction;
