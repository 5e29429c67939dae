//! Bounded random integers, in two flavors.
//!
//! The explicit-generator family takes `&mut impl Rng` so callers decide
//! where the generator lives (seeded `StdRng` for reproducible runs, or
//! whatever else); it reduces to the target range with a plain modulo, which
//! is slightly biased for ranges that do not divide `u32::MAX + 1` evenly.
//! The `local_*` family draws from the thread-local handle returned by
//! `rand::rng()` with direct bounded generation. It exposes no seeding
//! control, so reproducibility across runs is not guaranteed.

use rand::Rng;

/// Random digit in `[0, 9]`, modulo reduction over `rng`.
pub fn digit<R: Rng>(rng: &mut R) -> u32 {
    rng.random::<u32>() % 10
}

/// Random value in `[1, 10]`, modulo reduction over `rng`.
pub fn one_to_ten<R: Rng>(rng: &mut R) -> u32 {
    rng.random::<u32>() % 10 + 1
}

/// Random value in `[0, n]`, modulo reduction over `rng`.
pub fn zero_to_n<R: Rng>(rng: &mut R, n: u32) -> u32 {
    rng.random::<u32>() % (n + 1)
}

/// Random value in `[1, n]`, modulo reduction over `rng`.
///
/// # Panics
///
/// Panics when `n == 0` (the range is empty).
pub fn one_to_n<R: Rng>(rng: &mut R, n: u32) -> u32 {
    rng.random::<u32>() % n + 1
}

/// Random digit in `[0, 9]` from the thread-local generator.
pub fn local_digit() -> u32 {
    rand::rng().random_range(0..=9)
}

/// Random value in `[1, 10]` from the thread-local generator.
pub fn local_one_to_ten() -> u32 {
    rand::rng().random_range(1..=10)
}

/// Random value in `[0, n]` from the thread-local generator.
pub fn local_zero_to_n(n: u32) -> u32 {
    rand::rng().random_range(0..=n)
}

/// Random value in `[1, n]` from the thread-local generator.
///
/// # Panics
///
/// Panics when `n == 0` (the range is empty).
pub fn local_one_to_n(n: u32) -> u32 {
    rand::rng().random_range(1..=n)
}

/// Random value in `[n, m]` (both inclusive) from the thread-local generator.
///
/// # Panics
///
/// Panics when `m < n` (the range is empty).
pub fn local_n_to_m(n: u32, m: u32) -> u32 {
    rand::rng().random_range(n..=m)
}
