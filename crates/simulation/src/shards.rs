//! Shard assignment with no sender affinity.

use noncegap_types::ShardId;
use rand::Rng;

/// Route a transaction to a uniformly random shard in `[0, shard_count)`.
///
/// Ignores the sender entirely. A `shard_count` of zero is rejected by
/// config validation; here it falls back to shard 0.
pub fn assign_shard<R: Rng + ?Sized>(shard_count: u32, rng: &mut R) -> ShardId {
    if shard_count <= 1 {
        return ShardId(0);
    }
    ShardId(rng.gen_range(0..shard_count))
}
