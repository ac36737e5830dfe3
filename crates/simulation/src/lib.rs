//! Nonce-gap simulation engine.
//!
//! Estimates how often a sharded blob mempool with no sender affinity splits
//! two consecutive same-slot transactions from one sender across different
//! shards. Given the same seed, every run produces identical results.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                  simulate_nonce_gaps                    │
//! │                                                         │
//! │  ┌────────────────────────────────────────────────────┐ │
//! │  │  generate_transaction_rate → Vec<u32> per slot     │ │
//! │  │  base noise, bursts, lulls, clamp, rescale         │ │
//! │  └────────────────────────┬───────────────────────────┘ │
//! │                           │                             │
//! │                           ▼                             │
//! │  ┌────────────────────────────────────────────────────┐ │
//! │  │  per transaction: SenderSampler (exp(-λ·i))        │ │
//! │  │                   assign_shard (uniform)           │ │
//! │  └────────────────────────┬───────────────────────────┘ │
//! │                           │                             │
//! │                           ▼                             │
//! │  ┌────────────────────────────────────────────────────┐ │
//! │  │  GapCounter: last tx per sender → GapResult        │ │
//! │  └────────────────────────────────────────────────────┘ │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! Sweeps that evaluate many configurations against one workload use
//! [`TransactionStream`], [`SenderAssignment`] and [`count_gaps`] directly so
//! the stream is generated once and shared.

mod config;
mod engine;
mod error;
mod gaps;
mod rate;
mod senders;
mod shards;
mod stream;

pub use config::{RateProfile, SimulationConfig};
pub use engine::{count_gaps, simulate_nonce_gaps, simulate_nonce_gaps_with_rng};
pub use error::ConfigError;
pub use gaps::{GapCounter, GapResult};
pub use rate::generate_transaction_rate;
pub use senders::{sender_distribution, SenderAssignment, SenderSampler};
pub use shards::assign_shard;
pub use stream::TransactionStream;
