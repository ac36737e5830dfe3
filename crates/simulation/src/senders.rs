//! Sender selection under exponential skew.

use crate::config::validate_lambda;
use crate::{ConfigError, TransactionStream};
use noncegap_types::SenderId;
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

/// Probability of each sender, weight of sender `i` proportional to `exp(-λ·i)`.
///
/// `λ = 0` is exactly uniform; larger values concentrate volume on the
/// low-index senders. The returned vector sums to 1.
pub fn sender_distribution(sender_count: u32, lambda: f64) -> Result<Vec<f64>, ConfigError> {
    if sender_count == 0 {
        return Err(ConfigError::ZeroParameter {
            parameter: "sender_count",
        });
    }
    validate_lambda(lambda)?;

    let n = sender_count as usize;
    if lambda == 0.0 {
        return Ok(vec![1.0 / n as f64; n]);
    }

    let weights: Vec<f64> = (0..n).map(|i| (-lambda * i as f64).exp()).collect();
    let total: f64 = weights.iter().sum();
    Ok(weights.into_iter().map(|w| w / total).collect())
}

/// Draws sender ids from [`sender_distribution`].
#[derive(Clone, Debug)]
pub struct SenderSampler {
    index: WeightedIndex<f64>,
    sender_count: u32,
}

impl SenderSampler {
    /// Build a sampler for `sender_count` senders with decay `lambda`.
    pub fn new(sender_count: u32, lambda: f64) -> Result<Self, ConfigError> {
        let probs = sender_distribution(sender_count, lambda)?;
        let index =
            WeightedIndex::new(&probs).map_err(|_| ConfigError::InvalidSkew { lambda })?;
        Ok(Self {
            index,
            sender_count,
        })
    }

    /// Number of senders this sampler draws from.
    pub fn sender_count(&self) -> u32 {
        self.sender_count
    }

    /// Draw one sender.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> SenderId {
        SenderId(self.index.sample(rng) as u32)
    }
}

/// One sender per transaction of a [`TransactionStream`], for a given skew.
///
/// Drawn once per skew level and reused across every shard count.
#[derive(Clone, Debug)]
pub struct SenderAssignment {
    lambda: f64,
    sender_count: u32,
    senders: Vec<SenderId>,
}

impl SenderAssignment {
    /// Draw a sender for every transaction in `stream`.
    pub fn draw<R: Rng + ?Sized>(
        stream: &TransactionStream,
        sender_count: u32,
        lambda: f64,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        let sampler = SenderSampler::new(sender_count, lambda)?;
        let senders = (0..stream.total_transactions())
            .map(|_| sampler.sample(rng))
            .collect();
        Ok(Self {
            lambda,
            sender_count,
            senders,
        })
    }

    /// Skew decay rate used for the draw.
    pub fn lambda(&self) -> f64 {
        self.lambda
    }

    /// Number of senders drawn from.
    pub fn sender_count(&self) -> u32 {
        self.sender_count
    }

    /// Sender of each transaction, in stream order.
    pub fn senders(&self) -> &[SenderId] {
        &self.senders
    }

    /// Transactions sent by each sender, indexed by sender id.
    pub fn counts_per_sender(&self) -> Vec<u64> {
        let mut counts = vec![0u64; self.sender_count as usize];
        for sender in &self.senders {
            if let Some(count) = counts.get_mut(sender.index()) {
                *count += 1;
            }
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_uniform_distribution() {
        let probs = sender_distribution(100, 0.0).unwrap();
        assert_eq!(probs.len(), 100);
        assert!(probs.iter().all(|&p| p == 1.0 / 100.0));
    }

    #[test]
    fn test_skewed_distribution_decreasing() {
        for lambda in [0.02, 0.04, 0.07, 0.10, 0.15] {
            let probs = sender_distribution(100, lambda).unwrap();
            let total: f64 = probs.iter().sum();
            assert!((total - 1.0).abs() < 1e-9);
            assert!(
                probs.windows(2).all(|w| w[0] > w[1]),
                "weights must strictly decrease for lambda {lambda}"
            );
        }
    }

    #[test]
    fn test_distribution_rejects_bad_input() {
        assert_eq!(
            sender_distribution(0, 0.1).unwrap_err().parameter(),
            "sender_count"
        );
        assert_eq!(
            sender_distribution(10, -1.0).unwrap_err().parameter(),
            "skew_lambda"
        );
    }

    #[test]
    fn test_sampler_favours_low_indices() {
        let sampler = SenderSampler::new(100, 0.15).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut counts = vec![0u32; 100];
        for _ in 0..20_000 {
            counts[sampler.sample(&mut rng).index()] += 1;
        }
        // Sender 0 carries ~14% of the volume at this skew.
        assert!(counts[0] > 2_000, "sender 0 drew {}", counts[0]);
        assert!(counts[0] > counts[10]);
        assert!(counts[10] > counts[50]);
    }

    #[test]
    fn test_assignment_matches_stream() {
        let stream = TransactionStream::from_counts(vec![3, 0, 5, 2]);
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let assignment = SenderAssignment::draw(&stream, 4, 0.0, &mut rng).unwrap();

        assert_eq!(assignment.senders().len(), 10);
        assert!(assignment.senders().iter().all(|s| s.0 < 4));
        assert_eq!(assignment.counts_per_sender().iter().sum::<u64>(), 10);
    }
}
