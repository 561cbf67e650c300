//! Octave summation shared by every kernel.

use smallvec::SmallVec;

use crate::error::NoiseError;

/// Sums `octaves` layers of `kernel`, each at twice the frequency of the last
/// and `persistence` times its amplitude, and normalizes by the total
/// amplitude.
///
/// An octave whose scaled coordinate is no longer finite contributes nothing
/// but still counts toward the normalization.
pub fn sample<F>(
    mut kernel: F,
    coord: &[f64],
    octaves: u32,
    persistence: f64,
) -> Result<f64, NoiseError>
where
    F: FnMut(&[f64]) -> Result<f64, NoiseError>,
{
    let mut scaled: SmallVec<[f64; 4]> = SmallVec::from_slice(coord);

    let mut value = 0.0;
    let mut max_value = 0.0;
    let mut frequency = 1.0;
    let mut amplitude = 1.0;

    for _ in 0..octaves.max(1) {
        for (target, &c) in scaled.iter_mut().zip(coord) {
            *target = c * frequency;
        }

        if scaled.iter().all(|c| c.is_finite()) {
            value += kernel(&scaled)? * amplitude;
        }
        max_value += amplitude;

        frequency *= 2.0;
        amplitude *= persistence;
    }

    Ok((value / max_value).clamp(-1.0, 1.0))
}

/// Total weight of `octaves` layers: `1 + p + p^2 + ...`.
#[must_use]
pub fn amplitude_sum(octaves: u32, persistence: f64) -> f64 {
    let mut amplitude = 1.0;
    let mut total = 0.0;
    for _ in 0..octaves.max(1) {
        total += amplitude;
        amplitude *= persistence;
    }
    total
}
