//! Configuration types for a simulation run.

use crate::ConfigError;
use serde::{Deserialize, Serialize};

/// Configuration for a single nonce-gap simulation.
///
/// Built once per run and never mutated while the run is in progress.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of slots to simulate.
    pub slot_count: u64,

    /// Target mean transactions per slot.
    pub avg_tx_per_slot: u32,

    /// Hard cap on transactions in one slot.
    pub max_tx_per_slot: u32,

    /// Number of distinct senders.
    pub sender_count: u32,

    /// Number of mempool shards.
    pub shard_count: u32,

    /// Exponential decay rate of sender weights (0 = uniform).
    pub skew_lambda: f64,

    /// Shape of the per-slot transaction rate.
    pub rate_profile: RateProfile,

    /// Random seed for deterministic simulation.
    pub seed: u64,
}

impl SimulationConfig {
    /// Create a new configuration with the default rate profile.
    pub fn new(slot_count: u64, avg_tx_per_slot: u32, max_tx_per_slot: u32) -> Self {
        Self {
            slot_count,
            avg_tx_per_slot,
            max_tx_per_slot,
            sender_count: 100,
            shard_count: 1,
            skew_lambda: 0.0,
            rate_profile: RateProfile::default(),
            seed: 12345,
        }
    }

    /// Set the number of senders.
    pub fn with_sender_count(mut self, senders: u32) -> Self {
        self.sender_count = senders;
        self
    }

    /// Set the number of shards.
    pub fn with_shard_count(mut self, shards: u32) -> Self {
        self.shard_count = shards;
        self
    }

    /// Set the sender skew decay rate.
    pub fn with_skew_lambda(mut self, lambda: f64) -> Self {
        self.skew_lambda = lambda;
        self
    }

    /// Set the rate profile.
    pub fn with_rate_profile(mut self, profile: RateProfile) -> Self {
        self.rate_profile = profile;
        self
    }

    /// Set the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Check every parameter, naming the first one that is out of range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.slot_count == 0 {
            return Err(ConfigError::ZeroParameter {
                parameter: "slot_count",
            });
        }
        if self.avg_tx_per_slot == 0 {
            return Err(ConfigError::ZeroParameter {
                parameter: "avg_tx_per_slot",
            });
        }
        if self.max_tx_per_slot < self.avg_tx_per_slot {
            return Err(ConfigError::MaxBelowAverage {
                max: self.max_tx_per_slot,
                avg: self.avg_tx_per_slot,
            });
        }
        if self.sender_count == 0 {
            return Err(ConfigError::ZeroParameter {
                parameter: "sender_count",
            });
        }
        if self.shard_count == 0 {
            return Err(ConfigError::ZeroParameter {
                parameter: "shard_count",
            });
        }
        validate_lambda(self.skew_lambda)?;
        self.rate_profile.validate()
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        // 30 days of 12s slots.
        Self::new(216_000, 14, 21)
    }
}

pub(crate) fn validate_lambda(lambda: f64) -> Result<(), ConfigError> {
    if !lambda.is_finite() || lambda < 0.0 {
        return Err(ConfigError::InvalidSkew { lambda });
    }
    Ok(())
}

/// Shape of the generated transaction rate.
///
/// Every slot starts from `avg_tx_per_slot` scaled by a factor drawn from
/// `noise`. Bursts and lulls are randomly placed intervals that multiply
/// the rate by an intensity drawn from their range. All ranges are inclusive.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RateProfile {
    /// Base multiplier range applied to the average.
    pub noise: (f64, f64),

    /// Number of burst intervals.
    pub num_bursts: usize,

    /// Burst length in slots.
    pub burst_length: (u64, u64),

    /// Burst rate multiplier.
    pub burst_intensity: (f64, f64),

    /// Number of lull intervals.
    pub num_lulls: usize,

    /// Lull length in slots.
    pub lull_length: (u64, u64),

    /// Lull rate multiplier.
    pub lull_intensity: (f64, f64),
}

impl Default for RateProfile {
    fn default() -> Self {
        Self {
            noise: (0.4, 1.6),
            num_bursts: 200,
            burst_length: (50, 2000),
            burst_intensity: (1.2, 2.0),
            num_lulls: 100,
            lull_length: (100, 1500),
            lull_intensity: (0.3, 0.7),
        }
    }
}

impl RateProfile {
    /// A flat profile: every slot gets exactly the average.
    pub fn constant() -> Self {
        Self {
            noise: (1.0, 1.0),
            num_bursts: 0,
            num_lulls: 0,
            ..Default::default()
        }
    }

    /// Set the base noise range.
    pub fn with_noise(mut self, low: f64, high: f64) -> Self {
        self.noise = (low, high);
        self
    }

    /// Set the number of bursts.
    pub fn with_bursts(mut self, count: usize) -> Self {
        self.num_bursts = count;
        self
    }

    /// Set the number of lulls.
    pub fn with_lulls(mut self, count: usize) -> Self {
        self.num_lulls = count;
        self
    }

    fn validate(&self) -> Result<(), ConfigError> {
        check_factor_range("noise", self.noise)?;
        check_length_range("burst_length", self.burst_length)?;
        check_factor_range("burst_intensity", self.burst_intensity)?;
        check_length_range("lull_length", self.lull_length)?;
        check_factor_range("lull_intensity", self.lull_intensity)
    }
}

fn check_factor_range(parameter: &'static str, (low, high): (f64, f64)) -> Result<(), ConfigError> {
    if !low.is_finite() || !high.is_finite() || low < 0.0 || low > high {
        return Err(ConfigError::InvalidRateProfile {
            parameter,
            reason: format!("expected 0 <= low <= high, got ({low}, {high})"),
        });
    }
    Ok(())
}

fn check_length_range(parameter: &'static str, (low, high): (u64, u64)) -> Result<(), ConfigError> {
    if low == 0 || low > high {
        return Err(ConfigError::InvalidRateProfile {
            parameter,
            reason: format!("expected 1 <= low <= high, got ({low}, {high})"),
        });
    }
    Ok(())
}
