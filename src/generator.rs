//! Random input arrays.

use rand::Rng;

pub const MIN_VALUE: u32 = 1;
pub const MAX_VALUE: u32 = 100;

/// Draw `size` values uniformly from `[MIN_VALUE, MAX_VALUE]` using the thread RNG.
///
/// `size` is not validated; callers keep it inside the configured bounds.
pub fn generate(size: usize) -> Vec<u32> {
    generate_with(&mut rand::thread_rng(), size)
}

/// Same as [`generate`], drawing from a caller-supplied RNG.
pub fn generate_with<R: Rng>(rng: &mut R, size: usize) -> Vec<u32> {
    (0..size)
        .map(|_| rng.gen_range(MIN_VALUE..=MAX_VALUE))
        .collect()
}
