//! The seeded table set one generator samples from.

use crate::{
    error::NoiseError,
    random::{RandomKind, RandomSource},
};

use super::{DistanceMetric, GradientSet, NoiseKind, PermutationTable, perlin, simplex, value, worley};

/// A permutation plus the gradient set of one noise kind, drawn from one
/// seeded stream. Immutable once built.
#[derive(Debug, Clone)]
pub struct NoiseTables {
    kind: NoiseKind,
    seed: i64,
    permutation: PermutationTable,
    gradients: GradientSet,
}

impl NoiseTables {
    /// Draws the permutation and then the gradient set from a fresh `random`
    /// stream seeded with `seed`.
    pub fn build(
        kind: NoiseKind,
        seed: i64,
        random: RandomKind,
        size: usize,
    ) -> Result<Self, NoiseError> {
        let mut source = RandomSource::from_seed(random, seed);
        let permutation = PermutationTable::build(&mut source, size)?;
        let gradients = GradientSet::build(kind, &mut source, size);

        log::debug!("Built {kind} noise tables (seed {seed}, size {size}, {random:?} random)");

        Ok(Self {
            kind,
            seed,
            permutation,
            gradients,
        })
    }

    /// The kind these tables were drawn for.
    #[must_use]
    pub fn kind(&self) -> NoiseKind {
        self.kind
    }

    /// The seed these tables were drawn from.
    #[must_use]
    pub fn seed(&self) -> i64 {
        self.seed
    }

    /// The lattice hash.
    #[must_use]
    pub fn permutation(&self) -> &PermutationTable {
        &self.permutation
    }

    /// The kind-specific auxiliary tables.
    #[must_use]
    pub fn gradients(&self) -> &GradientSet {
        &self.gradients
    }

    /// Samples a single octave of this kind's kernel at `coord`.
    ///
    /// `metric` is only consulted by Worley noise.
    pub fn sample(&self, coord: &[f64], metric: &DistanceMetric) -> Result<f64, NoiseError> {
        let p = &self.permutation;
        let raw = match &self.gradients {
            GradientSet::Value(randoms) => value::sample(p, randoms, coord)?,
            GradientSet::Perlin(gradients) => perlin::sample(p, gradients, coord)?,
            GradientSet::Simplex => simplex::sample(p, coord)?,
            GradientSet::Worley(points) => worley::sample(p, points, metric, coord)?,
        };
        Ok(raw.clamp(-1.0, 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_match_kind() {
        for kind in [
            NoiseKind::Value,
            NoiseKind::Perlin,
            NoiseKind::Simplex,
            NoiseKind::Worley,
        ] {
            let tables = NoiseTables::build(kind, 42, RandomKind::Legacy, 256).unwrap();
            assert_eq!(tables.kind(), kind);
            assert_eq!(tables.seed(), 42);
            let matches = matches!(
                (kind, tables.gradients()),
                (NoiseKind::Value, GradientSet::Value(_))
                    | (NoiseKind::Perlin, GradientSet::Perlin(_))
                    | (NoiseKind::Simplex, GradientSet::Simplex)
                    | (NoiseKind::Worley, GradientSet::Worley(_))
            );
            assert!(matches, "{kind} built the wrong gradient set");
        }
    }

    #[test]
    fn test_permutation_independent_of_kind() {
        let perlin = NoiseTables::build(NoiseKind::Perlin, 9, RandomKind::Xoroshiro, 512).unwrap();
        let worley = NoiseTables::build(NoiseKind::Worley, 9, RandomKind::Xoroshiro, 512).unwrap();
        assert_eq!(perlin.permutation(), worley.permutation());
    }

    #[test]
    fn test_bad_size_rejected() {
        assert!(matches!(
            NoiseTables::build(NoiseKind::Value, 1, RandomKind::Legacy, 300),
            Err(NoiseError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_sample_dispatch_dimensions() {
        let metric = DistanceMetric::default();
        let simplex = NoiseTables::build(NoiseKind::Simplex, 3, RandomKind::Legacy, 256).unwrap();
        assert!(simplex.sample(&[0.1, 0.2, 0.3, 0.4], &metric).is_ok());
        assert!(matches!(
            simplex.sample(&[0.1; 6], &metric),
            Err(NoiseError::UnsupportedDimension {
                kind: NoiseKind::Simplex,
                dimension: 6
            })
        ));

        let value = NoiseTables::build(NoiseKind::Value, 3, RandomKind::Legacy, 256).unwrap();
        assert!(value.sample(&[0.1; 6], &metric).is_ok());
    }
}
