//! Per-slot transaction rate generation.

use crate::SimulationConfig;
use rand::Rng;

/// Generate a time-varying transaction count for every slot.
///
/// Starts from uniform noise around the average, applies randomly placed
/// bursts and lulls, caps at `max_tx_per_slot`, then rescales so the mean
/// lands back on `avg_tx_per_slot`. Every value is in `[0, max_tx_per_slot]`.
///
/// Expects a validated config.
pub fn generate_transaction_rate<R: Rng + ?Sized>(
    config: &SimulationConfig,
    rng: &mut R,
) -> Vec<u32> {
    let slots = config.slot_count as usize;
    if slots == 0 {
        return Vec::new();
    }

    let profile = &config.rate_profile;
    let avg = config.avg_tx_per_slot as f64;
    let max = config.max_tx_per_slot as f64;

    let (noise_low, noise_high) = profile.noise;
    let mut rate: Vec<f64> = (0..slots)
        .map(|_| rng.gen_range(avg * noise_low..=avg * noise_high))
        .collect();

    for _ in 0..profile.num_bursts {
        scale_interval(&mut rate, profile.burst_length, profile.burst_intensity, rng);
    }
    for _ in 0..profile.num_lulls {
        scale_interval(&mut rate, profile.lull_length, profile.lull_intensity, rng);
    }

    let counts: Vec<u32> = rate.iter().map(|&r| clamp_round(r, max)).collect();

    // Capping skews the mean downward; pull it back to the target.
    let mean = counts.iter().map(|&c| c as f64).sum::<f64>() / slots as f64;
    if mean <= 0.0 {
        return counts;
    }
    let scale = avg / mean;
    counts
        .into_iter()
        .map(|c| clamp_round(c as f64 * scale, max))
        .collect()
}

/// Multiply a random interval of `rate` by a random intensity.
///
/// The interval is truncated at the end of the run.
fn scale_interval<R: Rng + ?Sized>(
    rate: &mut [f64],
    (min_len, max_len): (u64, u64),
    (low, high): (f64, f64),
    rng: &mut R,
) {
    let start = rng.gen_range(0..rate.len());
    let len = rng.gen_range(min_len..=max_len) as usize;
    let end = start.saturating_add(len).min(rate.len());
    let intensity = rng.gen_range(low..=high);
    for r in &mut rate[start..end] {
        *r *= intensity;
    }
}

fn clamp_round(value: f64, max: f64) -> u32 {
    value.clamp(0.0, max).round() as u32
}
