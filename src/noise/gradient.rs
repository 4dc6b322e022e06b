//! Permutation-backed gradient hashing for lattice noise.

use glam::DVec3;
use rand::seq::SliceRandom;
use rand::Rng;

/// The six axis-aligned unit gradients, selected by hash modulo 6.
pub const GRADIENTS: [DVec3; 6] = [
    DVec3::new(0.0, 0.0, 1.0),
    DVec3::new(0.0, 0.0, -1.0),
    DVec3::new(0.0, 1.0, 0.0),
    DVec3::new(0.0, -1.0, 0.0),
    DVec3::new(1.0, 0.0, 0.0),
    DVec3::new(-1.0, 0.0, 0.0),
];

/// Maps integer lattice corners to gradient vectors through a random
/// permutation of `0..=255`.
///
/// The permutation is duplicated to 512 entries so the chained lookups
/// in [`hash`](Self::hash) never wrap: each intermediate sum stays below
/// 512 because the summands are at most 255 each. The permutation itself,
/// applied three times, is the hash; there is no separate hash function.
#[derive(Debug, Clone)]
pub struct GradientTable {
    table: [u8; 512],
}

impl GradientTable {
    /// Builds a table from a fresh random permutation drawn from `rng`.
    pub fn from_rng<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut perm: [u8; 256] = std::array::from_fn(|i| i as u8);
        perm.shuffle(rng);
        Self::from_permutation(perm)
    }

    /// Builds a table from an explicit permutation of `0..=255`.
    ///
    /// Intended for tests that need a fixed lattice.
    pub fn from_permutation(perm: [u8; 256]) -> Self {
        let mut table = [0u8; 512];
        table[..256].copy_from_slice(&perm);
        table[256..].copy_from_slice(&perm);
        Self { table }
    }

    /// Combined hash of a lattice corner: `perm[perm[perm[i] + j] + k]`.
    ///
    /// Coordinates are reduced mod 256; for fixed permutation state this
    /// is a pure function of `(i, j, k)`.
    #[inline]
    pub fn hash(&self, i: usize, j: usize, k: usize) -> u8 {
        let a = self.table[i & 255] as usize;
        let b = self.table[a + (j & 255)] as usize;
        self.table[b + (k & 255)]
    }

    /// Gradient vector assigned to a lattice corner.
    #[inline]
    pub fn gradient(&self, i: usize, j: usize, k: usize) -> DVec3 {
        GRADIENTS[(self.hash(i, j, k) % 6) as usize]
    }
}
