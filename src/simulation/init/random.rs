use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Deterministic RNG for a given seed
#[inline]
pub(super) fn seeded(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}

/// `min + u * (max - min)` with `u` in [0, 1).
///
/// Unlike `gen_range` this never panics: an inverted or empty range just
/// maps `u` onto it linearly.
#[inline]
pub(super) fn lerp_uniform<R: Rng>(rng: &mut R, min: f32, max: f32) -> f32 {
    min + rng.gen::<f32>() * (max - min)
}

/// Uniform index into a slice of length `len`; `None` when empty
#[inline]
pub(super) fn pick_index<R: Rng>(rng: &mut R, len: usize) -> Option<usize> {
    if len == 0 {
        None
    } else {
        Some(rng.gen_range(0..len))
    }
}
