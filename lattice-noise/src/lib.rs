//! Seeded coherent noise for procedural generation.
//!
//! This crate provides Value, Perlin, Simplex and Worley noise behind one
//! [`NoiseGenerator`], with octave summation and a JSON5 configuration file.
//!
//! # Architecture
//!
//! - [`random`] holds the seeded generators the tables are drawn from
//! - [`noise`] holds the permutation table, the per-kind gradient sets and the
//!   kernels, all pure functions of their tables
//! - [`NoiseGenerator`] owns one table set and publishes setting changes as
//!   immutable snapshots, so it can be shared between threads
//!
//! # Example
//!
//! ```
//! use lattice_noise::{NoiseGenerator, NoiseKind};
//!
//! let generator = NoiseGenerator::with_seed(NoiseKind::Perlin, 42);
//! generator.configure(4, 0.5)?;
//!
//! let height = generator.noise(&[12.5, 3.25])?;
//! assert!((-1.0..=1.0).contains(&height));
//! # Ok::<(), lattice_noise::NoiseError>(())
//! ```

pub mod config;
pub mod error;
pub mod generator;
pub mod noise;
pub mod random;

pub use config::NoiseConfig;
pub use error::NoiseError;
pub use generator::NoiseGenerator;
pub use noise::{DistanceKind, DistanceMetric, NoiseKind, NoiseTables};
pub use random::RandomKind;
