//! Value noise: smoothly interpolated random scalars at lattice corners.

// Noise code uses mathematical single-letter variables (x, y, z, i, j, k)
#![allow(clippy::many_single_char_names)]

use smallvec::SmallVec;

use crate::error::NoiseError;

use super::{
    MAX_VALUE_DIMENSION, NoiseKind, PermutationTable, ValueRandoms,
    math::{floor, lerp, lerp_n, lerp2, lerp3, smoothstep},
};

/// Samples value noise at `coord`, 1 to [`MAX_VALUE_DIMENSION`] dimensions.
pub fn sample(
    permutation: &PermutationTable,
    randoms: &ValueRandoms,
    coord: &[f64],
) -> Result<f64, NoiseError> {
    NoiseKind::Value.check_dimension(coord.len())?;
    let period = permutation.period();
    match *coord {
        [x] => Ok(value_1d(permutation, randoms, x.rem_euclid(period))),
        [x, y] => Ok(value_2d(
            permutation,
            randoms,
            x.rem_euclid(period),
            y.rem_euclid(period),
        )),
        [x, y, z] => Ok(value_3d(
            permutation,
            randoms,
            x.rem_euclid(period),
            y.rem_euclid(period),
            z.rem_euclid(period),
        )),
        _ => Ok(value_n(permutation, randoms, coord)),
    }
}

fn value_1d(p: &PermutationTable, r: &ValueRandoms, x: f64) -> f64 {
    let i = floor(x);
    let dx = x - i as f64;

    let a = r.get(p.hash1(i));
    let b = r.get(p.hash1(i + 1));

    lerp(smoothstep(dx), a, b)
}

fn value_2d(p: &PermutationTable, r: &ValueRandoms, x: f64, y: f64) -> f64 {
    let i = floor(x);
    let j = floor(y);
    let dx = x - i as f64;
    let dy = y - j as f64;

    let a = p.hash1(i);
    let b = p.hash1(i + 1);
    let j0 = p.wrap(j);
    let j1 = p.wrap(j + 1);

    let v00 = r.get(p.at(a + j0));
    let v10 = r.get(p.at(b + j0));
    let v01 = r.get(p.at(a + j1));
    let v11 = r.get(p.at(b + j1));

    lerp2(smoothstep(dx), smoothstep(dy), v00, v10, v01, v11)
}

fn value_3d(p: &PermutationTable, r: &ValueRandoms, x: f64, y: f64, z: f64) -> f64 {
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

    lerp3(
        smoothstep(dx),
        smoothstep(dy),
        smoothstep(dz),
        r.get(p.at(aa + k0)),
        r.get(p.at(ba + k0)),
        r.get(p.at(ab + k0)),
        r.get(p.at(bb + k0)),
        r.get(p.at(aa + k1)),
        r.get(p.at(ba + k1)),
        r.get(p.at(ab + k1)),
        r.get(p.at(bb + k1)),
    )
}

/// Any supported dimension: hashes all `2^n` corners, then collapses them axis
/// by axis.
fn value_n(p: &PermutationTable, r: &ValueRandoms, coord: &[f64]) -> f64 {
    let period = p.period();
    let mut base: SmallVec<[i64; 4]> = SmallVec::with_capacity(coord.len());
    let mut weights: SmallVec<[f64; 4]> = SmallVec::with_capacity(coord.len());
    for &c in coord {
        let c = c.rem_euclid(period);
        let i = floor(c);
        base.push(i);
        weights.push(smoothstep(c - i as f64));
    }

    let corners = 1usize << coord.len();
    let mut values: SmallVec<[f64; 16]> = (0..corners)
        .map(|corner| {
            let lattice = base
                .iter()
                .enumerate()
                .map(|(axis, &i)| i + ((corner >> axis) & 1) as i64);
            r.get(p.hash(lattice))
        })
        .collect();

    lerp_n(&weights, &mut values)
}
