//! Configuration types for the sweep.

use crate::SimulatorError;
use noncegap_simulation::SimulationConfig;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Shard counts swept by default.
pub const DEFAULT_SHARD_COUNTS: [u32; 6] = [1, 2, 4, 8, 16, 32];

/// Named sender-concentration presets.
///
/// Each level maps to the decay rate λ of the sender weights `exp(-λ·i)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkewLevel {
    VeryHigh,
    High,
    MediumHigh,
    MediumLow,
    Low,
    Uniform,
}

impl SkewLevel {
    /// Every level, from most to least skewed.
    pub const ALL: [SkewLevel; 6] = [
        SkewLevel::VeryHigh,
        SkewLevel::High,
        SkewLevel::MediumHigh,
        SkewLevel::MediumLow,
        SkewLevel::Low,
        SkewLevel::Uniform,
    ];

    /// Decay rate for this level.
    pub fn lambda(self) -> f64 {
        match self {
            SkewLevel::VeryHigh => 0.15,
            SkewLevel::High => 0.10,
            SkewLevel::MediumHigh => 0.07,
            SkewLevel::MediumLow => 0.04,
            SkewLevel::Low => 0.02,
            SkewLevel::Uniform => 0.0,
        }
    }

    /// Snake-case name.
    pub fn name(self) -> &'static str {
        match self {
            SkewLevel::VeryHigh => "very_high",
            SkewLevel::High => "high",
            SkewLevel::MediumHigh => "medium_high",
            SkewLevel::MediumLow => "medium_low",
            SkewLevel::Low => "low",
            SkewLevel::Uniform => "uniform",
        }
    }
}

impl fmt::Display for SkewLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SkewLevel {
    type Err = SimulatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        SkewLevel::ALL
            .into_iter()
            .find(|level| level.name() == normalized)
            .ok_or_else(|| SimulatorError::UnknownSkewLevel(s.to_string()))
    }
}

/// Configuration for a shard × skew sweep.
#[derive(Clone, Debug)]
pub struct SweepConfig {
    /// Workload parameters shared by every cell. Its shard count and skew
    /// are overridden per cell.
    pub base: SimulationConfig,

    /// Rows of the grid.
    pub shard_counts: Vec<u32>,

    /// Columns of the grid.
    pub skew_levels: Vec<SkewLevel>,

    /// Evaluate cells on the rayon thread pool.
    pub parallel: bool,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            base: SimulationConfig::default(),
            shard_counts: DEFAULT_SHARD_COUNTS.to_vec(),
            skew_levels: SkewLevel::ALL.to_vec(),
            parallel: false,
        }
    }
}

impl SweepConfig {
    /// Set the shared workload parameters.
    pub fn with_base(mut self, base: SimulationConfig) -> Self {
        self.base = base;
        self
    }

    /// Set the shard counts to sweep.
    pub fn with_shard_counts(mut self, shard_counts: Vec<u32>) -> Self {
        self.shard_counts = shard_counts;
        self
    }

    /// Set the skew levels to sweep.
    pub fn with_skew_levels(mut self, skew_levels: Vec<SkewLevel>) -> Self {
        self.skew_levels = skew_levels;
        self
    }

    /// Enable or disable parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Configuration of one grid cell.
    pub fn cell_config(&self, shard_count: u32, level: SkewLevel) -> SimulationConfig {
        self.base
            .clone()
            .with_shard_count(shard_count)
            .with_skew_lambda(level.lambda())
    }

    /// Number of cells in the grid.
    pub fn cell_count(&self) -> usize {
        self.shard_counts.len() * self.skew_levels.len()
    }

    /// Validate every cell before any work starts.
    pub fn validate(&self) -> Result<(), SimulatorError> {
        if self.shard_counts.is_empty() {
            return Err(SimulatorError::EmptyGrid {
                axis: "shard_counts",
            });
        }
        if self.skew_levels.is_empty() {
            return Err(SimulatorError::EmptyGrid {
                axis: "skew_levels",
            });
        }
        for &shards in &self.shard_counts {
            for &level in &self.skew_levels {
                self.cell_config(shards, level).validate()?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use noncegap_simulation::ConfigError;

    #[test]
    fn test_skew_level_names_parse() {
        for level in SkewLevel::ALL {
            assert_eq!(level.name().parse::<SkewLevel>().unwrap(), level);
        }
        assert_eq!(
            "Very-High".parse::<SkewLevel>().unwrap(),
            SkewLevel::VeryHigh
        );
        assert!(matches!(
            "extreme".parse::<SkewLevel>(),
            Err(SimulatorError::UnknownSkewLevel(_))
        ));
    }

    #[test]
    fn test_skew_levels_ordered_by_lambda() {
        let lambdas: Vec<f64> = SkewLevel::ALL.iter().map(|l| l.lambda()).collect();
        assert!(lambdas.windows(2).all(|w| w[0] > w[1]));
        assert_eq!(SkewLevel::Uniform.lambda(), 0.0);
    }

    #[test]
    fn test_default_grid() {
        let config = SweepConfig::default();
        assert_eq!(config.shard_counts, vec![1, 2, 4, 8, 16, 32]);
        assert_eq!(config.cell_count(), 36);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_cell_config_overrides_shards_and_skew() {
        let config = SweepConfig::default();
        let cell = config.cell_config(16, SkewLevel::High);
        assert_eq!(cell.shard_count, 16);
        assert_eq!(cell.skew_lambda, 0.10);
        assert_eq!(cell.slot_count, config.base.slot_count);
    }

    #[test]
    fn test_zero_shard_row_rejected() {
        let config = SweepConfig::default().with_shard_counts(vec![1, 0, 4]);
        match config.validate() {
            Err(SimulatorError::Config(err)) => {
                assert_eq!(
                    err,
                    ConfigError::ZeroParameter {
                        parameter: "shard_count"
                    }
                );
            }
            other => panic!("expected config error, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_axis_rejected() {
        let config = SweepConfig::default().with_skew_levels(Vec::new());
        assert!(matches!(
            config.validate(),
            Err(SimulatorError::EmptyGrid {
                axis: "skew_levels"
            })
        ));
    }
}
