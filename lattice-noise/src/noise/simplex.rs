//! Simplex noise over 1 to 4 dimensions.
//!
//! Follows the canonical skew/unskew formulation: the input is skewed onto a
//! hypercube lattice, the enclosing simplex is found by ranking the unskewed
//! offsets, and each of its `n + 1` corners contributes a radially attenuated
//! gradient dot product.

// Noise code uses mathematical single-letter variables (x, y, z, i, j, k)
#![allow(clippy::many_single_char_names)]

use std::array;

use crate::error::NoiseError;

use super::{
    NoiseKind, PermutationTable,
    math::{floor, wrap},
};

/// Edge gradients for 2D and 3D noise. 2D uses the first two components.
pub static GRADIENT_3D: [[f64; 3]; 12] = [
    [1.0, 1.0, 0.0],
    [-1.0, 1.0, 0.0],
    [1.0, -1.0, 0.0],
    [-1.0, -1.0, 0.0],
    [1.0, 0.0, 1.0],
    [-1.0, 0.0, 1.0],
    [1.0, 0.0, -1.0],
    [-1.0, 0.0, -1.0],
    [0.0, 1.0, 1.0],
    [0.0, -1.0, 1.0],
    [0.0, 1.0, -1.0],
    [0.0, -1.0, -1.0],
];

/// Edge gradients for 4D noise: every vector with one zero and three `±1`.
pub static GRADIENT_4D: [[f64; 4]; 32] = [
    [0.0, 1.0, 1.0, 1.0],
    [0.0, 1.0, 1.0, -1.0],
    [0.0, 1.0, -1.0, 1.0],
    [0.0, 1.0, -1.0, -1.0],
    [0.0, -1.0, 1.0, 1.0],
    [0.0, -1.0, 1.0, -1.0],
    [0.0, -1.0, -1.0, 1.0],
    [0.0, -1.0, -1.0, -1.0],
    [1.0, 0.0, 1.0, 1.0],
    [1.0, 0.0, 1.0, -1.0],
    [1.0, 0.0, -1.0, 1.0],
    [1.0, 0.0, -1.0, -1.0],
    [-1.0, 0.0, 1.0, 1.0],
    [-1.0, 0.0, 1.0, -1.0],
    [-1.0, 0.0, -1.0, 1.0],
    [-1.0, 0.0, -1.0, -1.0],
    [1.0, 1.0, 0.0, 1.0],
    [1.0, 1.0, 0.0, -1.0],
    [1.0, -1.0, 0.0, 1.0],
    [1.0, -1.0, 0.0, -1.0],
    [-1.0, 1.0, 0.0, 1.0],
    [-1.0, 1.0, 0.0, -1.0],
    [-1.0, -1.0, 0.0, 1.0],
    [-1.0, -1.0, 0.0, -1.0],
    [1.0, 1.0, 1.0, 0.0],
    [1.0, 1.0, -1.0, 0.0],
    [1.0, -1.0, 1.0, 0.0],
    [1.0, -1.0, -1.0, 0.0],
    [-1.0, 1.0, 1.0, 0.0],
    [-1.0, 1.0, -1.0, 0.0],
    [-1.0, -1.0, 1.0, 0.0],
    [-1.0, -1.0, -1.0, 0.0],
];

// Skew constants for 2D simplex
// sqrt(3) = 1.732_050_807_568_877_2
const F2: f64 = 0.366_025_403_784_438_6; // 0.5 * (sqrt(3) - 1)
const G2: f64 = 0.211_324_865_405_187_1; // (3 - sqrt(3)) / 6

const F3: f64 = 1.0 / 3.0;
const G3: f64 = 1.0 / 6.0;

// sqrt(5) = 2.236_067_977_499_79
const F4: f64 = 0.309_016_994_374_947_45; // (sqrt(5) - 1) / 4
const G4: f64 = 0.138_196_601_125_010_5; // (5 - sqrt(5)) / 20

/// Squared falloff radius in 2D.
const RADIUS_2D: f64 = 0.5;
/// Squared falloff radius in 3D and 4D, matching the 32 and 27 output scales.
const RADIUS_3D: f64 = 0.6;

/// Samples simplex noise at a 1 to 4 dimensional `coord`.
pub fn sample(permutation: &PermutationTable, coord: &[f64]) -> Result<f64, NoiseError> {
    match *coord {
        [x] => Ok(simplex_1d(permutation, wrap(x))),
        [x, y] => Ok(simplex_2d(permutation, wrap(x), wrap(y))),
        [x, y, z] => Ok(simplex_3d(permutation, wrap(x), wrap(y), wrap(z))),
        [x, y, z, w] => Ok(simplex_4d(permutation, [x, y, z, w].map(wrap))),
        _ => Err(NoiseError::UnsupportedDimension {
            kind: NoiseKind::Simplex,
            dimension: coord.len(),
        }),
    }
}

/// Compute dot product of gradient with offset.
#[inline]
fn dot(gradient: [f64; 3], x: f64, y: f64, z: f64) -> f64 {
    gradient[0] * x + gradient[1] * y + gradient[2] * z
}

/// Compute corner contribution for simplex noise.
#[inline]
fn corner_noise_3d(gradient_index: usize, x: f64, y: f64, z: f64, radius: f64) -> f64 {
    let d = radius - x * x - y * y - z * z;
    if d < 0.0 {
        0.0
    } else {
        let d = d * d;
        d * d * dot(GRADIENT_3D[gradient_index], x, y, z)
    }
}

#[inline]
fn corner_noise_4d(gradient_index: usize, offset: [f64; 4]) -> f64 {
    let d = RADIUS_3D - offset.iter().map(|c| c * c).sum::<f64>();
    if d < 0.0 {
        0.0
    } else {
        let gradient = GRADIENT_4D[gradient_index];
        let d = d * d;
        d * d * (0..4).map(|axis| gradient[axis] * offset[axis]).sum::<f64>()
    }
}

/// 1D corner: `(1 - x²)⁴` falloff times a signed gradient magnitude in `1..=8`.
#[inline]
fn corner_noise_1d(hash: usize, x: f64) -> f64 {
    let h = hash & 15;
    let gradient = 1.0 + (h & 7) as f64;
    let gradient = if h & 8 == 0 { gradient } else { -gradient };
    let t = 1.0 - x * x;
    let t = t * t;
    t * t * gradient * x
}

fn simplex_1d(p: &PermutationTable, x: f64) -> f64 {
    let i = floor(x);
    let x0 = x - i as f64;
    let x1 = x0 - 1.0;

    let n0 = corner_noise_1d(p.hash1(i), x0);
    let n1 = corner_noise_1d(p.hash1(i + 1), x1);

    // Peak of the two overlapping corners is 8 * (3/4)^4
    0.395 * (n0 + n1)
}

fn simplex_2d(p: &PermutationTable, x: f64, y: f64) -> f64 {
    // Skew input space to determine which simplex cell we're in
    let s = (x + y) * F2;
    let i = floor(x + s);
    let j = floor(y + s);

    // Unskew to get simplex origin
    let t = (i + j) as f64 * G2;
    let x0 = i as f64 - t;
    let y0 = j as f64 - t;

    // Offsets from simplex origin
    let dx0 = x - x0;
    let dy0 = y - y0;

    // Determine which simplex triangle we're in
    let (i1, j1) = if dx0 > dy0 { (1, 0) } else { (0, 1) };

    // Offsets for middle corner
    let dx1 = dx0 - i1 as f64 + G2;
    let dy1 = dy0 - j1 as f64 + G2;

    // Offsets for last corner
    let dx2 = dx0 - 1.0 + 2.0 * G2;
    let dy2 = dy0 - 1.0 + 2.0 * G2;

    let gi0 = p.hash2(i, j) % 12;
    let gi1 = p.hash2(i + i1, j + j1) % 12;
    let gi2 = p.hash2(i + 1, j + 1) % 12;

    // Calculate contributions from three corners
    let n0 = corner_noise_3d(gi0, dx0, dy0, 0.0, RADIUS_2D);
    let n1 = corner_noise_3d(gi1, dx1, dy1, 0.0, RADIUS_2D);
    let n2 = corner_noise_3d(gi2, dx2, dy2, 0.0, RADIUS_2D);

    70.0 * (n0 + n1 + n2)
}

fn simplex_3d(p: &PermutationTable, x: f64, y: f64, z: f64) -> f64 {
    // Skew input space
    let s = (x + y + z) * F3;
    let i = floor(x + s);
    let j = floor(y + s);
    let k = floor(z + s);

    // Unskew
    let t = (i + j + k) as f64 * G3;
    let x0 = i as f64 - t;
    let y0 = j as f64 - t;
    let z0 = k as f64 - t;

    // Offsets from simplex origin
    let dx0 = x - x0;
    let dy0 = y - y0;
    let dz0 = z - z0;

    // Determine which simplex we're in
    let (i1, j1, k1, i2, j2, k2) = if dx0 >= dy0 {
        if dy0 >= dz0 {
            (1, 0, 0, 1, 1, 0)
        } else if dx0 >= dz0 {
            (1, 0, 0, 1, 0, 1)
        } else {
            (0, 0, 1, 1, 0, 1)
        }
    } else if dy0 < dz0 {
        (0, 0, 1, 0, 1, 1)
    } else if dx0 < dz0 {
        (0, 1, 0, 0, 1, 1)
    } else {
        (0, 1, 0, 1, 1, 0)
    };

    // Offsets for corners
    let dx1 = dx0 - i1 as f64 + G3;
    let dy1 = dy0 - j1 as f64 + G3;
    let dz1 = dz0 - k1 as f64 + G3;

    let dx2 = dx0 - i2 as f64 + 2.0 * G3;
    let dy2 = dy0 - j2 as f64 + 2.0 * G3;
    let dz2 = dz0 - k2 as f64 + 2.0 * G3;

    let dx3 = dx0 - 1.0 + 0.5;
    let dy3 = dy0 - 1.0 + 0.5;
    let dz3 = dz0 - 1.0 + 0.5;

    let gi0 = p.hash3(i, j, k) % 12;
    let gi1 = p.hash3(i + i1, j + j1, k + k1) % 12;
    let gi2 = p.hash3(i + i2, j + j2, k + k2) % 12;
    let gi3 = p.hash3(i + 1, j + 1, k + 1) % 12;

    // Calculate contributions
    let n0 = corner_noise_3d(gi0, dx0, dy0, dz0, RADIUS_3D);
    let n1 = corner_noise_3d(gi1, dx1, dy1, dz1, RADIUS_3D);
    let n2 = corner_noise_3d(gi2, dx2, dy2, dz2, RADIUS_3D);
    let n3 = corner_noise_3d(gi3, dx3, dy3, dz3, RADIUS_3D);

    32.0 * (n0 + n1 + n2 + n3)
}

/// Ranks each axis by how many other offsets it exceeds. Ties go to the later
/// axis, so the ranks are always a permutation of `0..4`. The simplex walks
/// from the origin by stepping along axes in decreasing rank order.
fn rank(offsets: &[f64; 4]) -> [usize; 4] {
    let mut rank = [0usize; 4];
    for a in 0..4 {
        for b in a + 1..4 {
            if offsets[a] > offsets[b] {
                rank[a] += 1;
            } else {
                rank[b] += 1;
            }
        }
    }
    rank
}

fn simplex_4d(p: &PermutationTable, coord: [f64; 4]) -> f64 {
    let s = coord.iter().sum::<f64>() * F4;
    let base = coord.map(|c| floor(c + s));
    let t = base.iter().sum::<i64>() as f64 * G4;
    let d0: [f64; 4] = array::from_fn(|axis| coord[axis] - (base[axis] as f64 - t));

    let ranks = rank(&d0);

    let mut total = 0.0;
    for step in 0..5 {
        let offset: [i64; 4] = array::from_fn(|axis| i64::from(ranks[axis] + step >= 4));
        let d = array::from_fn(|axis| d0[axis] - offset[axis] as f64 + step as f64 * G4);
        let gi = p.hash4(
            base[0] + offset[0],
            base[1] + offset[1],
            base[2] + offset[2],
            base[3] + offset[3],
        ) % 32;
        total += corner_noise_4d(gi, d);
    }

    27.0 * total
}
