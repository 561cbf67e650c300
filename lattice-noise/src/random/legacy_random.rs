use crate::random::{DOUBLE_UNIT, Random};

const MULTIPLIER: i64 = 0x5DEECE66D;
const ADDEND: i64 = 0xB;
const MASK: i64 = 0xFFFFFFFFFFFF;

/// The 48-bit linear congruential generator behind `java.util.Random`.
pub struct LegacyRandom {
    seed: i64,
}

impl LegacyRandom {
    /// Scrambles `seed` the same way `java.util.Random::setSeed` does.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed: (seed as i64 ^ MULTIPLIER) & MASK,
        }
    }

    fn next(&mut self, bits: u64) -> i32 {
        (self.next_random() >> (48 - bits)) as i32
    }

    fn next_random(&mut self) -> i64 {
        let l = self.seed;
        let m = l.wrapping_mul(MULTIPLIER).wrapping_add(ADDEND) & MASK;
        self.seed = m;
        m
    }
}

impl Random for LegacyRandom {
    fn next_i32(&mut self) -> i32 {
        self.next(32)
    }

    fn next_i64(&mut self) -> i64 {
        let i = self.next_i32();
        let j = self.next_i32();
        (i64::from(i) << 32).wrapping_add(i64::from(j))
    }

    fn next_f64(&mut self) -> f64 {
        let high = (self.next(26) as u64) << 27;
        let low = self.next(27) as u64;
        (high | low) as f64 * DOUBLE_UNIT
    }
}
