//! Single-pass nonce-gap simulation.

use crate::{
    assign_shard, generate_transaction_rate, ConfigError, GapCounter, GapResult,
    SenderAssignment, SenderSampler, SimulationConfig, TransactionStream,
};
use noncegap_types::{SlotIndex, Transaction};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

/// Run one simulation seeded from `config.seed`.
///
/// Validates first; an invalid config never produces a result.
pub fn simulate_nonce_gaps(config: &SimulationConfig) -> Result<GapResult, ConfigError> {
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    simulate_nonce_gaps_with_rng(config, &mut rng)
}

/// Run one simulation drawing from the caller's generator.
///
/// `config.seed` is ignored.
pub fn simulate_nonce_gaps_with_rng<R: Rng + ?Sized>(
    config: &SimulationConfig,
    rng: &mut R,
) -> Result<GapResult, ConfigError> {
    config.validate()?;

    let rate = generate_transaction_rate(config, rng);
    let sampler = SenderSampler::new(config.sender_count, config.skew_lambda)?;
    let mut counter = GapCounter::new(config.sender_count);

    let mut slot = SlotIndex::GENESIS;
    for &count in &rate {
        for _ in 0..count {
            let sender = sampler.sample(rng);
            let shard = assign_shard(config.shard_count, rng);
            counter.observe(Transaction::new(slot, sender, shard));
        }
        slot = slot.next();
    }

    let result = counter.finish();
    debug!(
        shards = config.shard_count,
        lambda = config.skew_lambda,
        gaps = result.gap_count,
        total = result.total_tx,
        "Simulation complete"
    );
    Ok(result)
}

/// Count gaps over a pre-generated stream and sender draw.
///
/// Only the shard of each transaction is drawn here, so one stream and one
/// sender draw can be evaluated against many shard counts.
pub fn count_gaps<R: Rng + ?Sized>(
    stream: &TransactionStream,
    senders: &SenderAssignment,
    shard_count: u32,
    rng: &mut R,
) -> GapResult {
    debug_assert_eq!(stream.total_transactions(), senders.senders().len());

    let mut counter = GapCounter::new(senders.sender_count());
    for (&slot, &sender) in stream.slots().iter().zip(senders.senders()) {
        let shard = assign_shard(shard_count, rng);
        counter.observe(Transaction::new(slot, sender, shard));
    }
    counter.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RateProfile;

    fn base(slots: u64) -> SimulationConfig {
        SimulationConfig::new(slots, 14, 21)
            .with_sender_count(100)
            .with_seed(42)
    }

    #[test]
    fn test_single_shard_has_no_gaps() {
        let config = base(1_000).with_shard_count(1).with_skew_lambda(0.15);
        let result = simulate_nonce_gaps(&config).unwrap();
        assert!(result.total_tx > 0);
        assert_eq!(result.gap_count, 0);
        assert_eq!(result.gap_frequency, 0.0);
    }

    #[test]
    fn test_high_skew_many_shards() {
        let config = base(100_000).with_shard_count(32).with_skew_lambda(0.15);
        let result = simulate_nonce_gaps(&config).unwrap();
        assert!(
            (0.30..=0.42).contains(&result.gap_frequency),
            "gap frequency {} outside expected band",
            result.gap_frequency
        );
    }

    #[test]
    fn test_uniform_two_shards() {
        let config = base(100_000).with_shard_count(2).with_skew_lambda(0.0);
        let result = simulate_nonce_gaps(&config).unwrap();
        assert!(
            (0.02..=0.06).contains(&result.gap_frequency),
            "gap frequency {} outside expected band",
            result.gap_frequency
        );
    }

    #[test]
    fn test_zero_shards_is_config_error() {
        let config = base(1_000).with_shard_count(0);
        let err = simulate_nonce_gaps(&config).unwrap_err();
        assert_eq!(
            err,
            ConfigError::ZeroParameter {
                parameter: "shard_count"
            }
        );
    }

    #[test]
    fn test_frequency_bounded_and_grows_with_shards() {
        let mut previous = 0.0;
        for shards in [1, 2, 8, 32] {
            let config = base(20_000).with_shard_count(shards).with_skew_lambda(0.07);
            let result = simulate_nonce_gaps(&config).unwrap();
            assert!((0.0..=1.0).contains(&result.gap_frequency));
            assert!(
                result.gap_frequency >= previous,
                "{shards} shards gave {} after {previous}",
                result.gap_frequency
            );
            previous = result.gap_frequency;
        }
    }

    #[test]
    fn test_single_sender_approaches_shard_limit() {
        // One sender: every in-slot pair is consecutive, so the gap rate
        // tends to (pairs / tx) * (shards - 1) / shards.
        let config = base(20_000)
            .with_sender_count(1)
            .with_shard_count(4)
            .with_rate_profile(RateProfile::constant());
        let result = simulate_nonce_gaps(&config).unwrap();
        let expected = (13.0 / 14.0) * 0.75;
        assert!(
            (result.gap_frequency - expected).abs() < 0.01,
            "got {}, expected ~{expected}",
            result.gap_frequency
        );
    }

    #[test]
    fn test_same_seed_is_reproducible() {
        let config = base(5_000).with_shard_count(8).with_skew_lambda(0.1);
        let a = simulate_nonce_gaps(&config).unwrap();
        let b = simulate_nonce_gaps(&config).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_count_gaps_over_shared_stream() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let stream = TransactionStream::generate(&base(2_000), &mut rng);
        let senders = SenderAssignment::draw(&stream, 100, 0.15, &mut rng).unwrap();

        let one = count_gaps(&stream, &senders, 1, &mut rng);
        let many = count_gaps(&stream, &senders, 16, &mut rng);

        assert_eq!(one.total_tx, stream.total_transactions() as u64);
        assert_eq!(one.gap_count, 0);
        assert!(many.gap_count > 0);
        assert_eq!(many.total_tx, one.total_tx);
    }
}
