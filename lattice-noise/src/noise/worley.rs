//! Worley (cellular) noise.
//!
//! Every lattice cell holds one feature point. A sample measures the distance
//! to the feature points of the `3^D` cells around it and hands the sorted
//! distances to a [`DistanceMetric`].

use std::{fmt, sync::Arc};

use serde::Deserialize;
use smallvec::SmallVec;

use crate::error::NoiseError;

use super::{CellPoints, MAX_WORLEY_DIMENSION, NoiseKind, PermutationTable, math::floor};

/// Built-in selections over the sorted neighbor distances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceKind {
    /// Distance to the closest feature point (F1).
    #[default]
    Nearest,
    /// Distance to the second closest feature point (F2).
    SecondNearest,
    /// `F2 - F1`, bright along cell borders.
    Difference,
}

type MetricFn = dyn Fn(&[f64]) -> f64 + Send + Sync;

/// Maps ascending neighbor distances to the statistic Worley noise reports.
///
/// The slice always holds `3^D` entries, so `distances[1]` exists for every
/// dimension.
#[derive(Clone)]
pub struct DistanceMetric {
    name: &'static str,
    select: Arc<MetricFn>,
}

impl DistanceMetric {
    /// F1.
    #[must_use]
    pub fn nearest() -> Self {
        Self::named("nearest", |distances| distances[0])
    }

    /// F2.
    #[must_use]
    pub fn second_nearest() -> Self {
        Self::named("second_nearest", |distances| distances[1])
    }

    /// F2 - F1.
    #[must_use]
    pub fn difference() -> Self {
        Self::named("difference", |distances| distances[1] - distances[0])
    }

    /// Wraps a custom selection. The result is expected to lie in
    /// `[0, sqrt(D)]`; anything outside is clamped after normalization.
    pub fn new<F>(select: F) -> Self
    where
        F: Fn(&[f64]) -> f64 + Send + Sync + 'static,
    {
        Self::named("custom", select)
    }

    fn named<F>(name: &'static str, select: F) -> Self
    where
        F: Fn(&[f64]) -> f64 + Send + Sync + 'static,
    {
        Self {
            name,
            select: Arc::new(select),
        }
    }

    /// Applies the metric to ascending distances.
    #[inline]
    #[must_use]
    pub fn apply(&self, distances: &[f64]) -> f64 {
        (self.select)(distances)
    }

    /// Short label, `"custom"` for closures.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl Default for DistanceMetric {
    fn default() -> Self {
        Self::nearest()
    }
}

impl From<DistanceKind> for DistanceMetric {
    fn from(kind: DistanceKind) -> Self {
        match kind {
            DistanceKind::Nearest => Self::nearest(),
            DistanceKind::SecondNearest => Self::second_nearest(),
            DistanceKind::Difference => Self::difference(),
        }
    }
}

impl fmt::Debug for DistanceMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DistanceMetric").field(&self.name).finish()
    }
}

/// Samples Worley noise at `coord`, 1 to [`MAX_WORLEY_DIMENSION`] dimensions.
///
/// Returns `2 * (metric / sqrt(D)) - 1`, clamped to `[-1, 1]`. A metric that
/// yields NaN is reported as [`NoiseError::NonFiniteSample`].
pub fn sample(
    permutation: &PermutationTable,
    points: &CellPoints,
    metric: &DistanceMetric,
    coord: &[f64],
) -> Result<f64, NoiseError> {
    let dimension = coord.len();
    NoiseKind::Worley.check_dimension(dimension)?;

    let period = permutation.period();
    let position: SmallVec<[f64; 4]> = coord.iter().map(|c| c.rem_euclid(period)).collect();
    let base: SmallVec<[i64; 4]> = position.iter().map(|&c| floor(c)).collect();

    let neighbors = 3usize.pow(dimension as u32);
    let mut distances: SmallVec<[f64; 96]> = SmallVec::with_capacity(neighbors);
    let mut cell: SmallVec<[i64; 4]> = SmallVec::from_elem(0, dimension);
    let mut feature: SmallVec<[f64; 4]> = SmallVec::from_elem(0.0, dimension);

    for neighbor in 0..neighbors {
        // Base-3 digits of `neighbor` are the -1/0/1 offsets per axis
        let mut rest = neighbor;
        for axis in 0..dimension {
            cell[axis] = base[axis] + (rest % 3) as i64 - 1;
            rest /= 3;
        }

        let index = permutation.hash(cell.iter().copied());
        jitter(permutation, points, index, &mut feature);

        let squared: f64 = (0..dimension)
            .map(|axis| {
                let d = position[axis] - (cell[axis] as f64 + feature[axis]);
                d * d
            })
            .sum();
        distances.push(squared.sqrt());
    }

    distances.sort_unstable_by(f64::total_cmp);

    let selected = metric.apply(&distances);
    if selected.is_nan() {
        return Err(NoiseError::NonFiniteSample);
    }

    let normalized = selected / (dimension as f64).sqrt();
    Ok((2.0 * normalized - 1.0).clamp(-1.0, 1.0))
}

/// Writes the feature point offset for the cell hashed to `index`.
fn jitter(permutation: &PermutationTable, points: &CellPoints, index: usize, out: &mut [f64]) {
    match out.len() {
        1 => out[0] = points.get1(index),
        2 => out.copy_from_slice(&points.get2(index)),
        3 => out.copy_from_slice(&points.get3(index)),
        4 => out.copy_from_slice(&points.get4(index)),
        _ => {
            for (axis, value) in out.iter_mut().enumerate() {
                *value = points.scalar(permutation.at(index + axis % permutation.size()));
            }
        }
    }
}
