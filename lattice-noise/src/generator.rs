//! The configured, thread-safe entry point for sampling noise.

use std::sync::{Arc, OnceLock};

use arc_swap::ArcSwap;
use rayon::prelude::*;

use crate::{
    config::{NoiseConfig, validate_octaves},
    error::NoiseError,
    noise::{DistanceMetric, NoiseKind, NoiseTables, fractal},
};

/// A seeded noise source with fractal settings.
///
/// Settings live in an immutable snapshot that mutators replace atomically, so
/// a generator can be shared between threads and sampled while another thread
/// reconfigures it. Tables are drawn on the first sample after a change that
/// affects them and are reused by every later snapshot that keeps the same
/// seed, kind, table size and random kind.
#[derive(Debug)]
pub struct NoiseGenerator {
    state: ArcSwap<NoiseState>,
}

#[derive(Debug)]
struct NoiseState {
    config: NoiseConfig,
    /// The effective seed, drawn from entropy when `config.seed` is `None`.
    seed: i64,
    metric: DistanceMetric,
    tables: OnceLock<Arc<NoiseTables>>,
}

impl NoiseState {
    fn new(config: NoiseConfig) -> Self {
        let seed = config.seed.unwrap_or_else(entropy_seed);
        let metric = DistanceMetric::from(config.distance);
        Self {
            config,
            seed,
            metric,
            tables: OnceLock::new(),
        }
    }

    /// The next snapshot for `config`. Keeps the built tables when they would
    /// come out the same, and a custom metric unless the distance kind changed.
    fn reconfigured(&self, config: NoiseConfig) -> Self {
        let seed = config.seed.unwrap_or(self.seed);
        let metric = if config.distance == self.config.distance {
            self.metric.clone()
        } else {
            DistanceMetric::from(config.distance)
        };

        let same_tables = seed == self.seed
            && config.kind == self.config.kind
            && config.table_size == self.config.table_size
            && config.random == self.config.random;
        let tables = match self.tables.get() {
            Some(tables) if same_tables => OnceLock::from(Arc::clone(tables)),
            _ => OnceLock::new(),
        };

        Self {
            config,
            seed,
            metric,
            tables,
        }
    }

    fn tables(&self) -> Result<Arc<NoiseTables>, NoiseError> {
        if let Some(tables) = self.tables.get() {
            return Ok(Arc::clone(tables));
        }
        // Racing builders draw identical tables; the first one published wins.
        let built = Arc::new(NoiseTables::build(
            self.config.kind,
            self.seed,
            self.config.random,
            self.config.table_size,
        )?);
        Ok(Arc::clone(self.tables.get_or_init(|| built)))
    }

    fn sample(&self, tables: &NoiseTables, coord: &[f64]) -> Result<f64, NoiseError> {
        check_coordinate(self.config.kind, coord)?;
        let value = fractal::sample(
            |scaled| tables.sample(scaled, &self.metric),
            coord,
            self.config.octaves,
            self.config.persistence,
        )?;
        if value.is_finite() {
            Ok(value)
        } else {
            Err(NoiseError::NonFiniteSample)
        }
    }
}

fn check_coordinate(kind: NoiseKind, coord: &[f64]) -> Result<(), NoiseError> {
    kind.check_dimension(coord.len())?;
    if let Some(axis) = coord.iter().position(|c| !c.is_finite()) {
        return Err(NoiseError::NonFiniteCoordinate { axis });
    }
    Ok(())
}

fn entropy_seed() -> i64 {
    let seed = rand::random::<i64>();
    log::debug!("Drew noise seed {seed} from entropy");
    seed
}

impl NoiseGenerator {
    /// A single-octave generator of `kind` with an entropy seed.
    #[must_use]
    pub fn new(kind: NoiseKind) -> Self {
        Self::from_state(NoiseState::new(NoiseConfig {
            kind,
            ..NoiseConfig::default()
        }))
    }

    /// A single-octave generator of `kind` with a fixed seed.
    #[must_use]
    pub fn with_seed(kind: NoiseKind, seed: i64) -> Self {
        Self::from_state(NoiseState::new(NoiseConfig {
            kind,
            seed: Some(seed),
            ..NoiseConfig::default()
        }))
    }

    /// A generator for a validated copy of `config`.
    pub fn from_config(config: NoiseConfig) -> Result<Self, NoiseError> {
        config.validate()?;
        Ok(Self::from_state(NoiseState::new(config)))
    }

    fn from_state(state: NoiseState) -> Self {
        Self {
            state: ArcSwap::from_pointee(state),
        }
    }

    /// Samples fractal noise at `coord`. The result lies in `[-1, 1]` and
    /// only depends on the seed, the config and `coord`.
    ///
    /// The number of axes picks the kernel's code path: Perlin and Simplex
    /// take 1 to 4, Value and Worley up to [`NoiseKind::max_dimension`].
    pub fn noise(&self, coord: &[f64]) -> Result<f64, NoiseError> {
        let state = self.state.load();
        let tables = state.tables()?;
        state.sample(&tables, coord)
    }

    /// Samples a `width` by `height` grid in row-major order, starting at
    /// `origin` and advancing `step` per cell along both axes. Rows are
    /// sampled in parallel against one snapshot. A grid whose cell count
    /// overflows `usize` is [`NoiseError::InvalidConfiguration`].
    pub fn sample_grid(
        &self,
        origin: [f64; 2],
        step: f64,
        width: usize,
        height: usize,
    ) -> Result<Vec<f64>, NoiseError> {
        let count = width.checked_mul(height).ok_or_else(|| {
            NoiseError::InvalidConfiguration(format!("Grid of {width}x{height} cells is too large"))
        })?;
        let state = self.state.load_full();
        let tables = state.tables()?;
        (0..count)
            .into_par_iter()
            .map(|i| {
                let x = origin[0] + (i % width) as f64 * step;
                let y = origin[1] + (i / width) as f64 * step;
                state.sample(&tables, &[x, y])
            })
            .collect()
    }

    /// Reseeds the generator. The next sample redraws the tables unless
    /// `seed` equals the current seed.
    pub fn set_seed(&self, seed: i64) {
        self.publish(|state| {
            state.reconfigured(NoiseConfig {
                seed: Some(seed),
                ..state.config.clone()
            })
        });
    }

    /// Switches the kernel, redrawing the tables on the next sample.
    pub fn set_kind(&self, kind: NoiseKind) {
        self.publish(|state| {
            state.reconfigured(NoiseConfig {
                kind,
                ..state.config.clone()
            })
        });
    }

    /// Sets the number of octaves. Rejects 0.
    pub fn set_octaves(&self, octaves: u32) -> Result<(), NoiseError> {
        self.try_publish(|state| {
            validate_octaves(octaves, state.config.persistence)?;
            Ok(state.reconfigured(NoiseConfig {
                octaves,
                ..state.config.clone()
            }))
        })
    }

    /// Sets the number of octaves, raising 0 to 1.
    pub fn set_octaves_clamped(&self, octaves: u32) -> Result<(), NoiseError> {
        self.set_octaves(octaves.max(1))
    }

    /// Sets the amplitude ratio between successive octaves.
    pub fn set_persistence(&self, persistence: f64) -> Result<(), NoiseError> {
        self.try_publish(|state| {
            validate_octaves(state.config.octaves, persistence)?;
            Ok(state.reconfigured(NoiseConfig {
                persistence,
                ..state.config.clone()
            }))
        })
    }

    /// Sets octaves and persistence together, so neither is observed without
    /// the other.
    pub fn configure(&self, octaves: u32, persistence: f64) -> Result<(), NoiseError> {
        self.try_publish(|state| {
            validate_octaves(octaves, persistence)?;
            Ok(state.reconfigured(NoiseConfig {
                octaves,
                persistence,
                ..state.config.clone()
            }))
        })
    }

    /// Replaces the whole configuration. A config without a seed keeps the
    /// current one.
    pub fn set_config(&self, config: NoiseConfig) -> Result<(), NoiseError> {
        config.validate()?;
        self.publish(|state| state.reconfigured(config.clone()));
        Ok(())
    }

    /// Installs the statistic Worley noise reports. Kept for other kinds and
    /// used once the kind is switched to Worley.
    pub fn set_distance_metric(&self, metric: DistanceMetric) {
        self.publish(|state| NoiseState {
            metric: metric.clone(),
            ..state.reconfigured(state.config.clone())
        });
    }

    /// The seed the tables are drawn from.
    #[must_use]
    pub fn seed(&self) -> i64 {
        self.state.load().seed
    }

    /// Whether the seed was set explicitly rather than drawn from entropy.
    #[must_use]
    pub fn is_seeded(&self) -> bool {
        self.state.load().config.seed.is_some()
    }

    /// A copy of the current configuration.
    #[must_use]
    pub fn config(&self) -> NoiseConfig {
        self.state.load().config.clone()
    }

    /// The current tables, drawing them if no sample has yet.
    pub fn tables(&self) -> Result<Arc<NoiseTables>, NoiseError> {
        self.state.load().tables()
    }

    fn publish<F>(&self, mut change: F)
    where
        F: FnMut(&NoiseState) -> NoiseState,
    {
        self.state.rcu(|current| Arc::new(change(current)));
    }

    fn try_publish<F>(&self, mut change: F) -> Result<(), NoiseError>
    where
        F: FnMut(&NoiseState) -> Result<NoiseState, NoiseError>,
    {
        let mut outcome = Ok(());
        self.state.rcu(|current| match change(current) {
            Ok(next) => {
                outcome = Ok(());
                Arc::new(next)
            }
            Err(error) => {
                outcome = Err(error);
                Arc::clone(current)
            }
        });
        if let Err(error) = &outcome {
            log::warn!("Rejected noise setting: {error}");
        }
        outcome
    }
}

impl Default for NoiseGenerator {
    fn default() -> Self {
        Self::new(NoiseKind::default())
    }
}
