//! Errors reported by noise generation and configuration loading.

use thiserror::Error;

use crate::noise::NoiseKind;

/// Everything that can go wrong while configuring or sampling a generator.
#[derive(Debug, Error)]
pub enum NoiseError {
    /// A setting is outside its valid range.
    #[error("Invalid noise configuration: {0}")]
    InvalidConfiguration(String),

    /// The coordinate has a dimension the kernel cannot sample.
    #[error("{kind} noise does not support {dimension}-dimensional coordinates")]
    UnsupportedDimension {
        /// The kernel that was asked.
        kind: NoiseKind,
        /// Number of axes in the rejected coordinate.
        dimension: usize,
    },

    /// An input axis is NaN or infinite.
    #[error("Coordinate axis {axis} is not finite")]
    NonFiniteCoordinate {
        /// Index of the offending axis.
        axis: usize,
    },

    /// A custom distance metric produced NaN.
    #[error("Distance metric produced a non-finite sample")]
    NonFiniteSample,

    /// The configuration file is not valid JSON5 for [`crate::NoiseConfig`].
    #[error("Failed to parse noise configuration: {0}")]
    ConfigFormat(#[from] serde_json5::Error),

    /// The configuration file could not be read or written.
    #[error("Failed to access noise configuration: {0}")]
    ConfigIo(#[from] std::io::Error),
}
