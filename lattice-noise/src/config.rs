//! Generator settings and their JSON5 file format.

use std::{fs, path::Path};

use serde::Deserialize;

use crate::{
    error::NoiseError,
    noise::{DEFAULT_TABLE_SIZE, DistanceKind, NoiseKind, fractal::amplitude_sum, validate_size},
    random::RandomKind,
};

const DEFAULT_CONFIG: &str = include_str!("../../package-content/noise_config.json5");

/// Everything that determines what a [`crate::NoiseGenerator`] returns.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NoiseConfig {
    /// Which kernel to sample.
    pub kind: NoiseKind,
    /// Seed for the tables. `None` draws one from system entropy.
    pub seed: Option<i64>,
    /// Number of summed layers, at least 1.
    pub octaves: u32,
    /// Amplitude ratio between successive octaves. Finite and positive.
    pub persistence: f64,
    /// Permutation size, a power of two.
    pub table_size: usize,
    /// Generator family the tables are drawn from.
    pub random: RandomKind,
    /// Built-in Worley distance selection.
    pub distance: DistanceKind,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            kind: NoiseKind::Perlin,
            seed: None,
            octaves: 1,
            persistence: 0.5,
            table_size: DEFAULT_TABLE_SIZE,
            random: RandomKind::Legacy,
            distance: DistanceKind::Nearest,
        }
    }
}

impl NoiseConfig {
    /// Parses and validates a JSON5 document.
    pub fn from_json5(source: &str) -> Result<Self, NoiseError> {
        let config: Self = serde_json5::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates the config file at `path`.
    pub fn load(path: &Path) -> Result<Self, NoiseError> {
        let source = fs::read_to_string(path)?;
        Self::from_json5(&source)
    }

    /// Like [`NoiseConfig::load`], but writes the default config to `path`
    /// first if nothing is there.
    pub fn load_or_create(path: &Path) -> Result<Self, NoiseError> {
        if path.exists() {
            return Self::load(path);
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, DEFAULT_CONFIG)?;
        log::info!("Wrote default noise config to {}", path.display());

        Self::from_json5(DEFAULT_CONFIG)
    }

    /// Checks every field against its valid range.
    pub fn validate(&self) -> Result<(), NoiseError> {
        let result = validate_octaves(self.octaves, self.persistence)
            .and_then(|()| validate_size(self.table_size));
        if let Err(error) = &result {
            log::warn!("Rejected noise config: {error}");
        }
        result
    }
}

/// Checks that `octaves` layers at `persistence` can be normalized.
pub(crate) fn validate_octaves(octaves: u32, persistence: f64) -> Result<(), NoiseError> {
    if octaves < 1 {
        return Err(NoiseError::InvalidConfiguration(
            "Octaves must be at least 1".to_string(),
        ));
    }
    if !persistence.is_finite() || persistence <= 0.0 {
        return Err(NoiseError::InvalidConfiguration(format!(
            "Persistence must be finite and positive, got {persistence}"
        )));
    }
    if !amplitude_sum(octaves, persistence).is_finite() {
        return Err(NoiseError::InvalidConfiguration(format!(
            "{octaves} octaves at persistence {persistence} overflow the amplitude sum"
        )));
    }
    Ok(())
}
