//! Deterministic seeded randomness.
//!
//! Every randomness consumer in the crate derives its values from an explicit
//! `(seed, stream)` pair, never from a global or time-based source. Two forms
//! are provided: pure hash functions (`hash01`, `hash_signed`) for single
//! draws, and [`instance_rng`] for consumers that need several uncorrelated
//! draws per instance. Identical inputs always reproduce identical values.
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

/// Stream salts keep independent consumers off each other's sub-streams.
pub(crate) const SALT_SCATTER: u64 = 0x5343_4154;
pub(crate) const SALT_GRID_VARIATION: u64 = 0x4752_4944;
pub(crate) const SALT_RANDOM_EFFECTOR: u64 = 0x4546_4652;

/// Finalizing avalanche over a 64-bit value (splitmix64 finalizer).
#[inline]
pub fn mix(mut x: u64) -> u64 {
    x ^= x >> 30;
    x = x.wrapping_mul(0xBF58476D1CE4E5B9);
    x ^= x >> 27;
    x = x.wrapping_mul(0x94D049BB133111EB);
    x ^ (x >> 31)
}

/// Derive a sub-stream seed from a base seed and a stream index.
#[inline]
pub fn stream_seed(seed: u64, stream: u64) -> u64 {
    mix(seed ^ stream.wrapping_mul(0x9E3779B97F4A7C15))
}

/// Pure hash to a float in `[0, 1)`. Same `(seed, stream)` always yields the
/// same value.
#[inline]
pub fn hash01(seed: u64, stream: u64) -> f32 {
    let bits = (stream_seed(seed, stream) >> 40) as u32;
    (bits as f32) / ((1u32 << 24) as f32)
}

/// Pure hash to a float in `[-1, 1)`.
#[inline]
pub fn hash_signed(seed: u64, stream: u64) -> f32 {
    hash01(seed, stream) * 2.0 - 1.0
}

/// A generator for consumers drawing multiple values for one instance.
///
/// One rng per instance keeps instances uncorrelated and keeps the draw
/// sequence stable when other instances change their draw counts.
#[inline]
pub fn instance_rng(seed: u64, stream: u64) -> StdRng {
    StdRng::seed_from_u64(stream_seed(seed, stream))
}

/// Generate a random float in the range [0, 1].
#[inline]
pub(crate) fn rand01(rng: &mut dyn RngCore) -> f32 {
    (rng.next_u32() as f32) / ((u32::MAX as f32) + 1.0)
}

/// Generate a random float in the range [-1, 1].
#[inline]
pub(crate) fn rand_signed(rng: &mut dyn RngCore) -> f32 {
    rand01(rng) * 2.0 - 1.0
}
