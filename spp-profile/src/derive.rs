//! Per-station derivation: deltas, gradient angle and moving average.
//!
//! Every derived value is an `Option<f64>`; `None` is the "missing" marker
//! for stations where the value cannot be computed. Missing values are
//! never stored as zero.

use crate::profile::{DerivedStation, Station};

/// Number of preceding gradient samples averaged by the moving average.
pub const MOVING_AVERAGE_WINDOW: usize = 30;

/// Kilometer posts are in km, depths in metres.
pub const METRES_PER_KM: f64 = 1000.0;

/// Decimal places kept by the moving average.
pub const MOVING_AVERAGE_PRECISION: i32 = 2;

/// First difference against the previous value. The first entry has no
/// predecessor and is `None`.
pub fn first_difference(values: &[f64]) -> Vec<Option<f64>> {
    let mut deltas = Vec::with_capacity(values.len());
    if values.is_empty() {
        return deltas;
    }
    deltas.push(None);
    deltas.extend(values.windows(2).map(|pair| Some(pair[1] - pair[0])));
    deltas
}

/// Absolute slope angle in degrees between two consecutive stations.
///
/// Returns `None` when either delta is missing or the kp delta is zero,
/// so a repeated kilometer post never produces an infinite ratio.
pub fn gradient(kp_delta: Option<f64>, depth_delta: Option<f64>) -> Option<f64> {
    let kp_delta = kp_delta?;
    let depth_delta = depth_delta?;
    if kp_delta == 0.0 {
        return None;
    }
    let angle = (depth_delta / (kp_delta * METRES_PER_KM))
        .atan()
        .to_degrees()
        .abs();
    angle.is_finite().then_some(angle)
}

/// Round half away from zero to `places` decimals.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Trailing mean over the `window` samples preceding each index.
///
/// The value at `i` averages `samples[i - window..i]` and is `None` while
/// `i < window`. Missing samples inside the window are left out of the
/// denominator; a window with no defined samples is `None`. Runs in O(n)
/// with a running sum.
pub fn moving_average(samples: &[Option<f64>], window: usize) -> Vec<Option<f64>> {
    let mut averages = Vec::with_capacity(samples.len());
    let mut sum = 0.0;
    let mut count = 0usize;

    for (i, sample) in samples.iter().enumerate() {
        let average = if i >= window && count > 0 {
            Some(round_to(sum / count as f64, MOVING_AVERAGE_PRECISION))
        } else {
            None
        };
        averages.push(average);

        // slide: admit samples[i], evict samples[i - window]
        if let Some(value) = sample {
            sum += value;
            count += 1;
        }
        if i >= window {
            if let Some(value) = samples[i - window] {
                sum -= value;
                count -= 1;
            }
        }
        if count == 0 {
            sum = 0.0;
        }
    }

    averages
}

/// Derive every station of a raw profile. The output has the same length
/// and order as the input.
pub fn derive(stations: &[Station]) -> Vec<DerivedStation> {
    let kps: Vec<f64> = stations.iter().map(|s| s.kp).collect();
    let depths: Vec<f64> = stations.iter().map(|s| s.depth).collect();

    let kp_deltas = first_difference(&kps);
    let depth_deltas = first_difference(&depths);
    let gradients: Vec<Option<f64>> = kp_deltas
        .iter()
        .zip(&depth_deltas)
        .map(|(&dk, &dd)| gradient(dk, dd))
        .collect();
    let averages = moving_average(&gradients, MOVING_AVERAGE_WINDOW);

    stations
        .iter()
        .enumerate()
        .map(|(i, station)| DerivedStation {
            kp: station.kp,
            depth: station.depth,
            kp_delta: kp_deltas[i],
            depth_delta: depth_deltas[i],
            gradient: gradients[i],
            moving_average: averages[i],
        })
        .collect()
}
