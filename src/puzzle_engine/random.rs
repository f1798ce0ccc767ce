//! Random draws shared by every generator.
//!
//! All helpers take the caller's RNG so a seeded `StdRng` reproduces a
//! puzzle exactly. Nothing here keeps state between calls.

use rand::Rng;

/// Uniform integer in `[min, max]`, both ends inclusive.
///
/// Callers must keep `min <= max`.
pub fn random_int<R: Rng>(rng: &mut R, min: i64, max: i64) -> i64 {
    debug_assert!(min <= max, "random_int called with min {min} > max {max}");
    rng.gen_range(min..=max)
}

/// Return a shuffled copy of `items`; the input slice is left as is.
pub fn shuffle<R: Rng, T: Clone>(rng: &mut R, items: &[T]) -> Vec<T> {
    let mut out = items.to_vec();
    // Fisher-Yates shuffle
    for i in (1..out.len()).rev() {
        let j = rng.gen_range(0..=i);
        out.swap(i, j);
    }
    out
}

/// Pick one element uniformly; panics on an empty slice.
pub fn pick<'a, R: Rng, T>(rng: &mut R, items: &'a [T]) -> &'a T {
    assert!(!items.is_empty(), "pick from an empty pool");
    &items[rng.gen_range(0..items.len())]
}

pub fn coin_flip<R: Rng>(rng: &mut R) -> bool {
    rng.gen_bool(0.5)
}

/// Magnitude in `[lo, hi]` with a random sign.
pub fn signed_offset<R: Rng>(rng: &mut R, lo: i64, hi: i64) -> i64 {
    let magnitude = random_int(rng, lo, hi);
    if coin_flip(rng) { magnitude } else { -magnitude }
}
