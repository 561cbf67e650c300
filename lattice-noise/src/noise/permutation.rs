//! Seeded permutation table used to hash integer lattice coordinates.

use crate::{error::NoiseError, random::Random};

/// Table size used when a configuration does not pick one.
pub const DEFAULT_TABLE_SIZE: usize = 256;

/// Largest table whose entries still fit in `u16`.
pub const MAX_TABLE_SIZE: usize = 1 << 16;

/// A random permutation of `0..size`, stored twice back to back.
///
/// The doubled layout lets a chained lookup add the next axis' masked
/// coordinate to a previous result (at most `2 * size - 2`) without masking
/// again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermutationTable {
    /// `size - 1`, the lattice coordinate mask.
    mask: i64,
    /// `table[i + size] == table[i]` for every `i < size`.
    table: Box<[u16]>,
}

impl PermutationTable {
    /// Shuffles `0..size` with draws from `random`.
    ///
    /// Every slot `i` is swapped with `next_i32() & (size - 1)`, then the
    /// first half is mirrored into the second.
    pub fn build<R: Random>(random: &mut R, size: usize) -> Result<Self, NoiseError> {
        validate_size(size)?;

        let mut table = vec![0u16; size * 2].into_boxed_slice();

        // Initialize with identity
        for (i, item) in table[..size].iter_mut().enumerate() {
            *item = i as u16;
        }

        let mask = size - 1;
        for i in 0..size {
            let j = random.next_i32() as usize & mask;
            table.swap(i, j);
        }

        let (low, high) = table.split_at_mut(size);
        high.copy_from_slice(low);

        Ok(Self {
            mask: mask as i64,
            table,
        })
    }

    /// Number of distinct entries.
    #[must_use]
    pub fn size(&self) -> usize {
        self.table.len() / 2
    }

    /// Lattice period along every axis, as a float.
    #[inline]
    #[must_use]
    pub fn period(&self) -> f64 {
        (self.mask + 1) as f64
    }

    /// The full doubled table.
    #[must_use]
    pub fn as_slice(&self) -> &[u16] {
        &self.table
    }

    /// Raw lookup; `index` must be below `2 * size`.
    #[inline]
    #[must_use]
    pub fn at(&self, index: usize) -> usize {
        usize::from(self.table[index])
    }

    /// Masks a lattice coordinate into `0..size`.
    #[inline]
    #[must_use]
    pub fn wrap(&self, coord: i64) -> usize {
        (coord & self.mask) as usize
    }

    /// Hashes a 1D lattice point.
    #[inline]
    #[must_use]
    pub fn hash1(&self, x: i64) -> usize {
        self.at(self.wrap(x))
    }

    /// Hashes a 2D lattice point.
    #[inline]
    #[must_use]
    pub fn hash2(&self, x: i64, y: i64) -> usize {
        self.at(self.hash1(x) + self.wrap(y))
    }

    /// Hashes a 3D lattice point.
    #[inline]
    #[must_use]
    pub fn hash3(&self, x: i64, y: i64, z: i64) -> usize {
        self.at(self.hash2(x, y) + self.wrap(z))
    }

    /// Hashes a 4D lattice point.
    #[inline]
    #[must_use]
    pub fn hash4(&self, x: i64, y: i64, z: i64, w: i64) -> usize {
        self.at(self.hash3(x, y, z) + self.wrap(w))
    }

    /// Hashes a lattice point of any dimension by chaining one lookup per axis:
    /// `table[table[...table[x0] + x1...] + xn]`.
    #[inline]
    pub fn hash<I: IntoIterator<Item = i64>>(&self, lattice: I) -> usize {
        lattice
            .into_iter()
            .fold(0, |index, coord| self.at(index + self.wrap(coord)))
    }
}

/// Checks that `size` is a power of two the table can hold.
pub fn validate_size(size: usize) -> Result<(), NoiseError> {
    if !size.is_power_of_two() || !(2..=MAX_TABLE_SIZE).contains(&size) {
        return Err(NoiseError::InvalidConfiguration(format!(
            "Table size must be a power of two in 2..={MAX_TABLE_SIZE}, got {size}"
        )));
    }
    Ok(())
}
