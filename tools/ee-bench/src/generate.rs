//! Seeded input generation
//!
//! The same seed always yields the same input, so runs of different
//! strategies sort identical data.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{RngCore, SeedableRng};

/// `n` values drawn as `next_u32() % n`
pub fn generate_input(n: usize, seed: u64) -> Vec<u32> {
    let mut rng = StdRng::seed_from_u64(seed);
    let modulus = n as u32;
    (0..n).map(|_| rng.next_u32() % modulus).collect()
}

/// `0..len` in shuffled order, used as the successor table for pointer chasing
pub fn pointer_chase_table(len: usize, seed: u64) -> Vec<u32> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut next: Vec<u32> = (0..len as u32).collect();
    next.shuffle(&mut rng);
    next
}
