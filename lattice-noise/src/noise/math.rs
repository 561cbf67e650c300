//! Math utilities for lattice noise.

/// Wrap distance for kernels without an exact period.
const ROUND_OFF: f64 = 33_554_432.0;

/// Cubic smoothstep weight.
/// Formula: 3t² - 2t³
#[inline]
#[must_use]
pub fn smoothstep(t: f64) -> f64 {
    t * t * (3.0 - 2.0 * t)
}

/// Linear interpolation between two values.
#[inline]
#[must_use]
pub fn lerp(delta: f64, start: f64, end: f64) -> f64 {
    start + delta * (end - start)
}

/// Bilinear interpolation.
#[inline]
#[must_use]
pub fn lerp2(delta1: f64, delta2: f64, v00: f64, v10: f64, v01: f64, v11: f64) -> f64 {
    lerp(delta2, lerp(delta1, v00, v10), lerp(delta1, v01, v11))
}

/// Trilinear interpolation.
#[allow(clippy::too_many_arguments)] // Trilinear interpolation inherently needs 3 deltas + 8 corner values
#[inline]
#[must_use]
pub fn lerp3(
    delta1: f64,
    delta2: f64,
    delta3: f64,
    v000: f64,
    v100: f64,
    v010: f64,
    v110: f64,
    v001: f64,
    v101: f64,
    v011: f64,
    v111: f64,
) -> f64 {
    lerp(
        delta3,
        lerp2(delta1, delta2, v000, v100, v010, v110),
        lerp2(delta1, delta2, v001, v101, v011, v111),
    )
}

/// Multilinear interpolation over `2^n` corner values, collapsing one axis per pass.
///
/// Bit `a` of a corner's index is its offset along axis `a`, so `values[0b01]`
/// is the corner one step along the first axis. `values` is used as scratch
/// space and must hold exactly `1 << deltas.len()` entries.
#[inline]
pub fn lerp_n(deltas: &[f64], values: &mut [f64]) -> f64 {
    debug_assert_eq!(values.len(), 1 << deltas.len());
    let mut len = values.len();
    for &delta in deltas {
        len /= 2;
        for i in 0..len {
            values[i] = lerp(delta, values[2 * i], values[2 * i + 1]);
        }
    }
    values[0]
}

/// Floor function returning i64, saturating outside the i64 range.
#[inline]
#[must_use]
pub fn floor(value: f64) -> i64 {
    let i = value as i64;
    if value < i as f64 { i.saturating_sub(1) } else { i }
}

/// Wrap a coordinate into `[-ROUND_OFF / 2, ROUND_OFF / 2]` to keep precision for
/// kernels whose lattice does not repeat along the input axes.
#[inline]
#[must_use]
pub fn wrap(value: f64) -> f64 {
    value - (value / ROUND_OFF + 0.5).floor() * ROUND_OFF
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_smoothstep() {
        assert_eq!(smoothstep(0.0).to_bits(), 0.0_f64.to_bits());
        assert_eq!(smoothstep(1.0).to_bits(), 1.0_f64.to_bits());
        assert_eq!(smoothstep(0.5).to_bits(), 0.5_f64.to_bits());
        let result = smoothstep(0.25);
        assert!((result - 0.156_25).abs() < 1e-12);
    }

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(0.0, 10.0, 20.0).to_bits(), 10.0_f64.to_bits());
        assert_eq!(lerp(1.0, 10.0, 20.0).to_bits(), 20.0_f64.to_bits());
        assert_eq!(lerp(0.5, 10.0, 20.0).to_bits(), 15.0_f64.to_bits());
    }

    #[test]
    fn test_lerp_n_matches_lerp3() {
        let corners = [0.1, -0.4, 0.9, 0.3, -0.8, 0.5, 0.0, 0.7];
        let deltas = [0.2, 0.65, 0.9];
        let mut scratch = corners;
        let expected = lerp3(
            deltas[0], deltas[1], deltas[2], corners[0], corners[1], corners[2], corners[3],
            corners[4], corners[5], corners[6], corners[7],
        );
        assert_eq!(lerp_n(&deltas, &mut scratch).to_bits(), expected.to_bits());
    }

    #[test]
    fn test_lerp_n_at_origin_corner() {
        let mut corners = [0.25, 1.0, -1.0, 0.5];
        assert_eq!(lerp_n(&[0.0, 0.0], &mut corners), 0.25);
    }

    #[test]
    fn test_floor() {
        assert_eq!(floor(1.5), 1);
        assert_eq!(floor(-1.5), -2);
        assert_eq!(floor(0.0), 0);
        assert_eq!(floor(-0.1), -1);
        assert_eq!(floor(-3.0), -3);
        assert_eq!(floor(1e300), i64::MAX);
        assert_eq!(floor(-1e300), i64::MIN);
    }

    #[test]
    fn test_wrap() {
        assert!((wrap(0.0) - 0.0).abs() < 1e-10);
        assert!((wrap(100.0) - 100.0).abs() < 1e-10);
        assert!((wrap(-100.25) + 100.25).abs() < 1e-10);

        let large = ROUND_OFF * 2.0 + 1000.0;
        assert!((wrap(large) - 1000.0).abs() < 1e-6);
        assert!(wrap(1e300).abs() <= ROUND_OFF);
        assert!(wrap(-f64::MAX).is_finite());
    }
}
