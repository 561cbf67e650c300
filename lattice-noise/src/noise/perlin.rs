//! Gradient (Perlin) noise over 1 to 4 dimensions.
//!
//! Each lattice corner carries a unit gradient; the sample is the smoothstep
//! interpolation of the corner gradients dotted with the offset from each
//! corner, scaled so the theoretical extreme `sqrt(d) / 2` maps to 1.

// Noise code uses mathematical single-letter variables (x, y, z, i, j, k)
#![allow(clippy::many_single_char_names)]

use std::{array, f64::consts::SQRT_2};

use crate::error::NoiseError;

use super::{
    NoiseKind, PerlinGradients, PermutationTable,
    math::{floor, lerp, lerp_n, lerp2, lerp3, smoothstep},
};

const SCALE_1D: f64 = 2.0;
const SCALE_2D: f64 = SQRT_2;
// 2 / sqrt(3)
const SCALE_3D: f64 = 1.154_700_538_379_251_5;
const SCALE_4D: f64 = 1.0;

/// Samples Perlin noise at a 1 to 4 dimensional `coord`.
pub fn sample(
    permutation: &PermutationTable,
    gradients: &PerlinGradients,
    coord: &[f64],
) -> Result<f64, NoiseError> {
    let period = permutation.period();
    match *coord {
        [x] => Ok(perlin_1d(permutation, gradients, x.rem_euclid(period))),
        [x, y] => Ok(perlin_2d(
            permutation,
            gradients,
            x.rem_euclid(period),
            y.rem_euclid(period),
        )),
        [x, y, z] => Ok(perlin_3d(
            permutation,
            gradients,
            [x, y, z].map(|c| c.rem_euclid(period)),
        )),
        [x, y, z, w] => Ok(perlin_4d(
            permutation,
            gradients,
            [x, y, z, w].map(|c| c.rem_euclid(period)),
        )),
        _ => Err(NoiseError::UnsupportedDimension {
            kind: NoiseKind::Perlin,
            dimension: coord.len(),
        }),
    }
}

#[inline]
fn dot2(g: [f64; 2], x: f64, y: f64) -> f64 {
    g[0] * x + g[1] * y
}

#[inline]
fn dot3(g: [f64; 3], x: f64, y: f64, z: f64) -> f64 {
    g[0] * x + g[1] * y + g[2] * z
}

fn perlin_1d(p: &PermutationTable, g: &PerlinGradients, x: f64) -> f64 {
    let i = floor(x);
    let dx = x - i as f64;

    let a = g.get1(p.hash1(i)) * dx;
    let b = g.get1(p.hash1(i + 1)) * (dx - 1.0);

    lerp(smoothstep(dx), a, b) * SCALE_1D
}

fn perlin_2d(p: &PermutationTable, g: &PerlinGradients, x: f64, y: f64) -> f64 {
    let i = floor(x);
    let j = floor(y);
    let dx = x - i as f64;
    let dy = y - j as f64;

    let a = p.hash1(i);
    let b = p.hash1(i + 1);
    let j0 = p.wrap(j);
    let j1 = p.wrap(j + 1);

    let d00 = dot2(g.get2(p.at(a + j0)), dx, dy);
    let d10 = dot2(g.get2(p.at(b + j0)), dx - 1.0, dy);
    let d01 = dot2(g.get2(p.at(a + j1)), dx, dy - 1.0);
    let d11 = dot2(g.get2(p.at(b + j1)), dx - 1.0, dy - 1.0);

    lerp2(smoothstep(dx), smoothstep(dy), d00, d10, d01, d11) * SCALE_2D
}

fn perlin_3d(p: &PermutationTable, g: &PerlinGradients, [x, y, z]: [f64; 3]) -> f64 {
    let i = floor(x);
    let j = floor(y);
    let k = floor(z);
    let dx = x - i as f64;
    let dy = y - j as f64;
    let dz = z - k as f64;

    let a = p.hash1(i);
    let b = p.hash1(i + 1);
    let aa = p.at(a + p.wrap(j));
    let ab = p.at(a + p.wrap(j + 1));
    let ba = p.at(b + p.wrap(j));
    let bb = p.at(b + p.wrap(j + 1));
    let k0 = p.wrap(k);
    let k1 = p.wrap(k + 1);

    let d000 = dot3(g.get3(p.at(aa + k0)), dx, dy, dz);
    let d100 = dot3(g.get3(p.at(ba + k0)), dx - 1.0, dy, dz);
    let d010 = dot3(g.get3(p.at(ab + k0)), dx, dy - 1.0, dz);
    let d110 = dot3(g.get3(p.at(bb + k0)), dx - 1.0, dy - 1.0, dz);
    let d001 = dot3(g.get3(p.at(aa + k1)), dx, dy, dz - 1.0);
    let d101 = dot3(g.get3(p.at(ba + k1)), dx - 1.0, dy, dz - 1.0);
    let d011 = dot3(g.get3(p.at(ab + k1)), dx, dy - 1.0, dz - 1.0);
    let d111 = dot3(g.get3(p.at(bb + k1)), dx - 1.0, dy - 1.0, dz - 1.0);

    lerp3(
        smoothstep(dx),
        smoothstep(dy),
        smoothstep(dz),
        d000,
        d100,
        d010,
        d110,
        d001,
        d101,
        d011,
        d111,
    ) * SCALE_3D
}

fn perlin_4d(p: &PermutationTable, g: &PerlinGradients, coord: [f64; 4]) -> f64 {
    let base = coord.map(floor);
    let delta: [f64; 4] = array::from_fn(|axis| coord[axis] - base[axis] as f64);

    let mut dots = [0.0; 16];
    for (corner, dot) in dots.iter_mut().enumerate() {
        let offset: [i64; 4] = array::from_fn(|axis| ((corner >> axis) & 1) as i64);
        let gradient = g.get4(p.hash4(
            base[0] + offset[0],
            base[1] + offset[1],
            base[2] + offset[2],
            base[3] + offset[3],
        ));
        *dot = (0..4)
            .map(|axis| gradient[axis] * (delta[axis] - offset[axis] as f64))
            .sum();
    }

    lerp_n(&delta.map(smoothstep), &mut dots) * SCALE_4D
}
