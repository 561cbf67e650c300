//! Lattice noise kernels and the tables they sample from.
//!
//! Every kernel hashes integer lattice coordinates through a seeded
//! [`PermutationTable`] and reads its per-corner data from a [`GradientSet`]
//! drawn from the same random stream. [`fractal`] layers octaves of any kernel.

use std::fmt;

use serde::Deserialize;

use crate::error::NoiseError;

pub mod fractal;
mod gradients;
pub mod math;
pub mod perlin;
mod permutation;
pub mod simplex;
mod tables;
pub mod value;
pub mod worley;

pub use gradients::{CellPoints, GradientSet, PerlinGradients, ValueRandoms};
pub use permutation::{DEFAULT_TABLE_SIZE, MAX_TABLE_SIZE, PermutationTable, validate_size};
pub use tables::NoiseTables;
pub use worley::{DistanceKind, DistanceMetric};

/// Highest Value noise dimension. Each sample interpolates `2^D` corners.
pub const MAX_VALUE_DIMENSION: usize = 16;

/// Highest Worley noise dimension. Each sample measures `3^D` neighbor cells.
pub const MAX_WORLEY_DIMENSION: usize = 10;

/// The coherent noise algorithms a generator can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoiseKind {
    /// Interpolated random scalars. 1 to [`MAX_VALUE_DIMENSION`] dimensions.
    Value,
    /// Interpolated gradient dot products. 1 to 4 dimensions.
    #[default]
    Perlin,
    /// Gradient contributions over simplex corners. 1 to 4 dimensions.
    Simplex,
    /// Distances to jittered cell points. 1 to [`MAX_WORLEY_DIMENSION`] dimensions.
    Worley,
}

impl NoiseKind {
    /// Highest dimension the kernel accepts.
    #[must_use]
    pub const fn max_dimension(self) -> usize {
        match self {
            Self::Perlin | Self::Simplex => 4,
            Self::Value => MAX_VALUE_DIMENSION,
            Self::Worley => MAX_WORLEY_DIMENSION,
        }
    }

    /// Whether a coordinate of `dimension` axes can be sampled.
    #[must_use]
    pub const fn supports(self, dimension: usize) -> bool {
        dimension >= 1 && dimension <= self.max_dimension()
    }

    /// Rejects coordinates whose dimension the kernel cannot sample.
    pub(crate) fn check_dimension(self, dimension: usize) -> Result<(), NoiseError> {
        if self.supports(dimension) {
            Ok(())
        } else {
            Err(NoiseError::UnsupportedDimension {
                kind: self,
                dimension,
            })
        }
    }
}

impl fmt::Display for NoiseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Value => "value",
            Self::Perlin => "perlin",
            Self::Simplex => "simplex",
            Self::Worley => "worley",
        })
    }
}
