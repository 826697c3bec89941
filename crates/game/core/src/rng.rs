//! Seeded random stream for deterministic battle rolls.
//!
//! Every random decision in a fight (speed tie-breaks, critical rolls, status
//! procs) draws from a single [`BattleRng`]. The engine owns one stream and
//! lends it to each fight in turn, so a batch seeded once is reproducible as a
//! whole.
//!
//! # Determinism
//!
//! Given the same seed the stream yields the same sequence on every platform.
//! The generator is PCG-XSH-RR: 64-bit LCG state with a 32-bit permuted output.

use rand_core::{RngCore, SeedableRng, impls};

/// PCG random stream (Permuted Congruential Generator).
///
/// Implements [`RngCore`], so behaviors can use the [`rand::Rng`] extension
/// methods (`gen`, `gen_bool`, `gen_range`) directly on it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BattleRng {
    state: u64,
}

impl BattleRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    /// Creates a stream from a 64-bit seed.
    pub fn new(seed: u64) -> Self {
        Self::from_seed(seed.to_le_bytes())
    }

    /// Creates a stream seeded from the thread-local entropy source.
    ///
    /// Used when no seed is configured; results are not reproducible.
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Returns a uniformly distributed value in `[0, 1)`.
    pub fn next_unit(&mut self) -> f64 {
        // 53 random mantissa bits
        (self.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Returns true with the given probability (clamped to `[0, 1]`).
    pub fn chance(&mut self, probability: f64) -> bool {
        if probability <= 0.0 {
            return false;
        }
        self.next_unit() < probability.min(1.0)
    }

    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output permutation.
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl SeedableRng for BattleRng {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        // Standard PCG32 seeding: step, add seed, step.
        let state = Self::pcg_step(0).wrapping_add(u64::from_le_bytes(seed));
        Self {
            state: Self::pcg_step(state),
        }
    }
}

impl RngCore for BattleRng {
    fn next_u32(&mut self) -> u32 {
        let old = self.state;
        self.state = Self::pcg_step(old);
        Self::pcg_output(old)
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
