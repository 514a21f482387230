//! Randomness used while importing: jitter draws and species seeds.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::classify::RasterDataType;

/// Source of uniformly distributed random bits.
///
/// Every [`RngCore`] is a `RandomSource`, so seeded generators plug in
/// directly; [`FixedRandom`] pins the output for tests.
pub trait RandomSource {
    /// 32 uniformly distributed bits.
    fn next_bits(&mut self) -> u32;

    /// A value in `0..limit`, or 0 when `limit` is 0.
    ///
    /// Scales the 32 random bits instead of taking a remainder, so the
    /// result grows monotonically with [`next_bits`](Self::next_bits).
    fn random_below(&mut self, limit: u32) -> u32 {
        ((self.next_bits() as u64 * limit as u64) >> 32) as u32
    }
}

impl<R: RngCore> RandomSource for R {
    fn next_bits(&mut self) -> u32 {
        self.next_u32()
    }
}

/// A generator that returns the same bits forever.
///
/// `FixedRandom(0)` makes every [`RandomSource::random_below`] return 0;
/// `FixedRandom(u32::MAX)` makes it return `limit - 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedRandom(pub u32);

impl FixedRandom {
    /// Every draw is 0.
    pub const fn lowest() -> Self {
        Self(0)
    }

    /// Every draw is `u32::MAX`.
    pub const fn highest() -> Self {
        Self(u32::MAX)
    }
}

impl RngCore for FixedRandom {
    fn next_u32(&mut self) -> u32 {
        self.0
    }

    fn next_u64(&mut self) -> u64 {
        ((self.0 as u64) << 32) | self.0 as u64
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(4) {
            chunk.copy_from_slice(&self.0.to_le_bytes()[..chunk.len()]);
        }
    }
}

/// Derive the seed for one import pass from the world seed and layer kind.
///
/// Distinct layers get independent streams, so re-importing one layer does
/// not change how another would have been dithered.
pub fn derive_import_seed(world_seed: u64, kind: RasterDataType) -> u64 {
    let mut hasher = DefaultHasher::new();
    world_seed.hash(&mut hasher);
    kind.hash(&mut hasher);
    hasher.finish()
}

/// A deterministic generator for one import pass.
pub fn import_rng(world_seed: u64, kind: RasterDataType) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(derive_import_seed(world_seed, kind))
}
