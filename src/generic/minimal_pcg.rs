//! A small pseudorandom number generator.
//!
//! Specifically, the *minimal* PCG32 generator described at <https://www.pcg-random.org/>, satisfying [RngCore] so the methods of [Rng](rand::Rng) are available.
//!
//! Each [context](crate::context) owns a generator, seeded from its [configuration](crate::config::Config).
//! So, two contexts built from the same clauses with the same configuration make the same choices.

use rand::SeedableRng;
use rand_core::{impls, RngCore};

/// The multiplier of the underlying linear congruential generator.
const MULTIPLIER: u64 = 6_364_136_223_846_793_005;

/// State and (odd) increment.
#[derive(Clone, Debug, Default)]
pub struct MinimalPCG32 {
    state: u64,
    inc: u64,
}

impl MinimalPCG32 {
    fn step(&mut self) {
        self.state = self.state.wrapping_mul(MULTIPLIER).wrapping_add(self.inc);
    }
}

impl RngCore for MinimalPCG32 {
    fn next_u32(&mut self) -> u32 {
        let old_state = self.state;
        self.step();

        let xorshifted = (((old_state >> 18) ^ old_state) >> 27) as u32;
        let rot = (old_state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }
}

impl SeedableRng for MinimalPCG32 {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        let mut pcg = Self {
            state: 0,
            inc: (0xda3e_39cb_94b9_5bdb_u64 << 1) | 1,
        };
        pcg.step();
        pcg.state = pcg.state.wrapping_add(u64::from_le_bytes(seed));
        pcg.step();
        pcg
    }
}

#[cfg(test)]
mod pcg_tests {
    use super::*;

    #[test]
    fn same_seed_same_stream() {
        let mut a = MinimalPCG32::seed_from_u64(73);
        let mut b = MinimalPCG32::seed_from_u64(73);
        for _ in 0..64 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn distinct_seeds_diverge() {
        let mut a = MinimalPCG32::from_seed(2u64.to_le_bytes());
        let mut b = MinimalPCG32::from_seed(3u64.to_le_bytes());
        let a_stream = (0..8).map(|_| a.next_u32()).collect::<Vec<_>>();
        let b_stream = (0..8).map(|_| b.next_u32()).collect::<Vec<_>>();
        assert_ne!(a_stream, b_stream);
    }

    #[test]
    fn ranges_are_respected() {
        use rand::Rng;
        let mut rng = MinimalPCG32::seed_from_u64(0);
        for _ in 0..256 {
            let x = rng.random_range(0..7_u32);
            assert!(x < 7);
        }
    }
}
