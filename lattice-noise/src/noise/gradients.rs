//! Per-kernel tables drawn from the seeded stream after the permutation.

use std::array;

use crate::random::Random;

use super::NoiseKind;

/// Auxiliary tables for one noise kind, indexed only by permutation output.
#[derive(Debug, Clone)]
pub enum GradientSet {
    /// Scalar lattice values for value noise.
    Value(ValueRandoms),
    /// Unit gradients for Perlin noise.
    Perlin(PerlinGradients),
    /// Simplex noise indexes fixed gradient sets and draws nothing.
    Simplex,
    /// Jittered feature points for Worley noise.
    Worley(CellPoints),
}

impl GradientSet {
    /// Draws the tables `kind` needs, `size` entries each.
    pub fn build<R: Random>(kind: NoiseKind, random: &mut R, size: usize) -> Self {
        match kind {
            NoiseKind::Value => Self::Value(ValueRandoms::build(random, size)),
            NoiseKind::Perlin => Self::Perlin(PerlinGradients::build(random, size)),
            NoiseKind::Simplex => Self::Simplex,
            NoiseKind::Worley => Self::Worley(CellPoints::build(random, size)),
        }
    }
}

/// One random value in `[-1, 1)` per slot.
#[derive(Debug, Clone)]
pub struct ValueRandoms {
    values: Box<[f64]>,
}

impl ValueRandoms {
    fn build<R: Random>(random: &mut R, size: usize) -> Self {
        let values = (0..size).map(|_| signed_unit(random)).collect();
        Self { values }
    }

    /// The value stored at `index`.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> f64 {
        self.values[index]
    }
}

/// Unit gradients of every dimension up to 4.
///
/// Each slot draws four components once; the gradient of dimension `d` at that
/// slot is the normalized prefix of length `d`, so the 1D..4D gradients at one
/// index are correlated.
#[derive(Debug, Clone)]
pub struct PerlinGradients {
    g1: Box<[f64]>,
    g2: Box<[[f64; 2]]>,
    g3: Box<[[f64; 3]]>,
    g4: Box<[[f64; 4]]>,
}

impl PerlinGradients {
    fn build<R: Random>(random: &mut R, size: usize) -> Self {
        let mut g1 = Vec::with_capacity(size);
        let mut g2 = Vec::with_capacity(size);
        let mut g3 = Vec::with_capacity(size);
        let mut g4 = Vec::with_capacity(size);

        for slot in 0..size {
            let components: [f64; 4] = array::from_fn(|_| signed_unit(random));
            g1.push(normalize::<1>(&components, slot)[0]);
            g2.push(normalize::<2>(&components, slot));
            g3.push(normalize::<3>(&components, slot));
            g4.push(normalize::<4>(&components, slot));
        }

        Self {
            g1: g1.into_boxed_slice(),
            g2: g2.into_boxed_slice(),
            g3: g3.into_boxed_slice(),
            g4: g4.into_boxed_slice(),
        }
    }

    /// 1D gradient, always `1.0` or `-1.0`.
    #[inline]
    #[must_use]
    pub fn get1(&self, index: usize) -> f64 {
        self.g1[index]
    }

    /// 2D unit gradient.
    #[inline]
    #[must_use]
    pub fn get2(&self, index: usize) -> [f64; 2] {
        self.g2[index]
    }

    /// 3D unit gradient.
    #[inline]
    #[must_use]
    pub fn get3(&self, index: usize) -> [f64; 3] {
        self.g3[index]
    }

    /// 4D unit gradient.
    #[inline]
    #[must_use]
    pub fn get4(&self, index: usize) -> [f64; 4] {
        self.g4[index]
    }
}

/// Normalizes the first `D` components. A zero-length prefix has no direction
/// and is replaced by the first axis.
fn normalize<const D: usize>(components: &[f64; 4], slot: usize) -> [f64; D] {
    let prefix: [f64; D] = array::from_fn(|axis| components[axis]);
    let length = prefix.iter().map(|c| c * c).sum::<f64>().sqrt();
    if length > 0.0 && length.is_finite() {
        prefix.map(|c| c / length)
    } else {
        log::debug!("Degenerate {D}D gradient at slot {slot} replaced by unit axis");
        array::from_fn(|axis| if axis == 0 { 1.0 } else { 0.0 })
    }
}

/// Feature point offsets inside lattice cells, each in `[0, 1)` per axis.
///
/// Dimensions 1 to 4 draw their own tables. Higher dimensions read one
/// scalar per axis from `scalars`, hashing the axis into the slot.
#[derive(Debug, Clone)]
pub struct CellPoints {
    p1: Box<[f64]>,
    p2: Box<[[f64; 2]]>,
    p3: Box<[[f64; 3]]>,
    p4: Box<[[f64; 4]]>,
    scalars: Box<[f64]>,
}

impl CellPoints {
    fn build<R: Random>(random: &mut R, size: usize) -> Self {
        Self {
            p1: (0..size).map(|_| random.next_f64()).collect(),
            p2: (0..size)
                .map(|_| array::from_fn(|_| random.next_f64()))
                .collect(),
            p3: (0..size)
                .map(|_| array::from_fn(|_| random.next_f64()))
                .collect(),
            p4: (0..size)
                .map(|_| array::from_fn(|_| random.next_f64()))
                .collect(),
            scalars: (0..size).map(|_| random.next_f64()).collect(),
        }
    }

    /// Offset of the 1D feature point at `index`.
    #[inline]
    #[must_use]
    pub fn get1(&self, index: usize) -> f64 {
        self.p1[index]
    }

    /// Offset of the 2D feature point at `index`.
    #[inline]
    #[must_use]
    pub fn get2(&self, index: usize) -> [f64; 2] {
        self.p2[index]
    }

    /// Offset of the 3D feature point at `index`.
    #[inline]
    #[must_use]
    pub fn get3(&self, index: usize) -> [f64; 3] {
        self.p3[index]
    }

    /// Offset of the 4D feature point at `index`.
    #[inline]
    #[must_use]
    pub fn get4(&self, index: usize) -> [f64; 4] {
        self.p4[index]
    }

    /// Scalar jitter for dimensions above 4.
    #[inline]
    #[must_use]
    pub fn scalar(&self, index: usize) -> f64 {
        self.scalars[index]
    }
}

#[inline]
fn signed_unit<R: Random>(random: &mut R) -> f64 {
    random.next_f64() * 2.0 - 1.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{LegacyRandom, Xoroshiro};

    fn length(v: &[f64]) -> f64 {
        v.iter().map(|c| c * c).sum::<f64>().sqrt()
    }

    #[test]
    fn test_perlin_gradients_unit_length() {
        let GradientSet::Perlin(gradients) =
            GradientSet::build(NoiseKind::Perlin, &mut Xoroshiro::from_seed(5), 256)
        else {
            panic!("expected perlin gradients");
        };
        for i in 0..256 {
            assert!((gradients.get1(i).abs() - 1.0).abs() < 1e-12);
            assert!((length(&gradients.get2(i)) - 1.0).abs() < 1e-12);
            assert!((length(&gradients.get3(i)) - 1.0).abs() < 1e-12);
            assert!((length(&gradients.get4(i)) - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_perlin_gradients_share_draws() {
        let GradientSet::Perlin(gradients) =
            GradientSet::build(NoiseKind::Perlin, &mut LegacyRandom::from_seed(11), 64)
        else {
            panic!("expected perlin gradients");
        };
        for i in 0..64 {
            // Every prefix points the same way along the first axis.
            let sign = gradients.get1(i);
            assert!(gradients.get2(i)[0] * sign > 0.0);
            assert!(gradients.get3(i)[0] * sign > 0.0);
            assert!(gradients.get4(i)[0] * sign > 0.0);

            // The 2D gradient is the direction of the 3D gradient's first two components.
            let [x3, y3, _] = gradients.get3(i);
            let [x2, y2] = gradients.get2(i);
            assert!((x3 * y2 - y3 * x2).abs() < 1e-12);
        }
    }

    #[test]
    fn test_perlin_first_slot_from_stream() {
        let mut random = LegacyRandom::from_seed(3);
        let expected: [f64; 4] = array::from_fn(|_| random.next_f64() * 2.0 - 1.0);

        let GradientSet::Perlin(gradients) =
            GradientSet::build(NoiseKind::Perlin, &mut LegacyRandom::from_seed(3), 4)
        else {
            panic!("expected perlin gradients");
        };
        let scale = length(&expected);
        let g4 = gradients.get4(0);
        for axis in 0..4 {
            assert!((g4[axis] - expected[axis] / scale).abs() < 1e-15);
        }
    }

    #[test]
    fn test_degenerate_gradient_replaced() {
        assert_eq!(normalize::<2>(&[0.0, 0.0, 0.5, 0.5], 0), [1.0, 0.0]);
        assert_eq!(normalize::<1>(&[0.0, 0.3, 0.5, 0.5], 0), [1.0]);
        assert_eq!(normalize::<1>(&[-0.25, 0.3, 0.5, 0.5], 0), [-1.0]);
        let g = normalize::<4>(&[0.0, 0.0, 0.0, 0.0], 9);
        assert_eq!(g, [1.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_value_randoms_in_range() {
        let GradientSet::Value(randoms) =
            GradientSet::build(NoiseKind::Value, &mut Xoroshiro::from_seed(9), 512)
        else {
            panic!("expected value randoms");
        };
        for i in 0..512 {
            assert!((-1.0..1.0).contains(&randoms.get(i)));
        }
    }

    #[test]
    fn test_cell_points_in_unit_cell() {
        let GradientSet::Worley(points) =
            GradientSet::build(NoiseKind::Worley, &mut Xoroshiro::from_seed(9), 256)
        else {
            panic!("expected cell points");
        };
        let unit = 0.0..1.0;
        for i in 0..256 {
            assert!(unit.contains(&points.get1(i)));
            assert!(points.get2(i).iter().all(|c| unit.contains(c)));
            assert!(points.get3(i).iter().all(|c| unit.contains(c)));
            assert!(points.get4(i).iter().all(|c| unit.contains(c)));
            assert!(unit.contains(&points.scalar(i)));
        }
    }

    #[test]
    fn test_cell_point_tables_are_separate_draws() {
        let GradientSet::Worley(points) =
            GradientSet::build(NoiseKind::Worley, &mut LegacyRandom::from_seed(1), 32)
        else {
            panic!("expected cell points");
        };
        let differing = (0..32)
            .filter(|&i| points.get3(i)[..2] != points.get2(i)[..])
            .count();
        assert_eq!(differing, 32);
    }

    #[test]
    fn test_simplex_draws_nothing() {
        let mut random = LegacyRandom::from_seed(4);
        assert!(matches!(
            GradientSet::build(NoiseKind::Simplex, &mut random, 256),
            GradientSet::Simplex
        ));
        assert_eq!(random.next_i32(), LegacyRandom::from_seed(4).next_i32());
    }
}
