//! Process-wide caches of complex roots of unity.
//!
//! Each set covers the first quadrant only: `roots[j] = e^(i*pi*j/(2n))`
//! for `j = 0..n`. The sets double as twiddle factors and as weights for
//! the right-angle convolution.

use std::f64::consts::PI;
use std::sync::{Arc, OnceLock};

use crate::complex::Complex;

/// Cache bound for radix-2 root sets: transforms of length up to `2^17`.
pub const ROOTS2_CACHE_SIZE: usize = 18;
/// Cache bound for mixed-radix root sets: transforms of length up to `3*2^14`.
pub const ROOTS3_CACHE_SIZE: usize = 15;

// Slots are published write-once via atomic pointer exchange; a reader
// either sees a fully initialised set or initialises it itself.
static ROOTS2_CACHE: [OnceLock<Arc<[Complex]>>; ROOTS2_CACHE_SIZE] =
    [const { OnceLock::new() }; ROOTS2_CACHE_SIZE];
static ROOTS3_CACHE: [OnceLock<Arc<[Complex]>>; ROOTS3_CACHE_SIZE] =
    [const { OnceLock::new() }; ROOTS3_CACHE_SIZE];

/// Root sets for the stages of one radix-2 transform.
///
/// `stage(s)` holds `2^s` first-quadrant roots. Only every other stage
/// index is populated (the radix-4 butterflies consume two stages at a
/// time); the in-between slots are empty and never read.
pub struct RootTable {
    sets: Vec<Arc<[Complex]>>,
}

impl RootTable {
    /// The root set for butterfly stage `s`.
    #[inline]
    #[must_use]
    pub fn stage(&self, s: usize) -> &[Complex] {
        &self.sets[s]
    }
}

/// Returns root sets for a transform of length `2^log_n`, populated at
/// stage indices `log_n, log_n - 2, log_n - 4, ...` down to 0 or 1.
///
/// Sets below [`ROOTS2_CACHE_SIZE`] are memoised process-wide; larger ones
/// are recomputed on every call.
#[must_use]
pub fn roots2(log_n: usize) -> RootTable {
    let empty: Arc<[Complex]> = Arc::from(Vec::new());
    let mut sets = vec![empty; log_n + 1];
    let mut s = log_n as isize;
    while s >= 0 {
        let idx = s as usize;
        sets[idx] = if idx < ROOTS2_CACHE_SIZE {
            Arc::clone(ROOTS2_CACHE[idx].get_or_init(|| calc_roots(1 << idx)))
        } else {
            calc_roots(1 << idx)
        };
        s -= 2;
    }
    RootTable { sets }
}

/// Returns the set of `3 * 2^log_n` first-quadrant roots, memoised below
/// [`ROOTS3_CACHE_SIZE`].
#[must_use]
pub fn roots3(log_n: usize) -> Arc<[Complex]> {
    if log_n < ROOTS3_CACHE_SIZE {
        Arc::clone(ROOTS3_CACHE[log_n].get_or_init(|| calc_roots(3 << log_n)))
    } else {
        calc_roots(3 << log_n)
    }
}

/// Computes the `n` first-quadrant roots `e^(i*pi*j/(2n))` for `j = 0..n`.
///
/// Uses exact values at `j = 0` and `j = n/2` and mirrors the lower half
/// of the quadrant onto the upper half. `n` must be 1 or even.
#[must_use]
pub fn calc_roots(n: usize) -> Arc<[Complex]> {
    debug_assert!(n == 1 || n % 2 == 0);
    if n == 1 {
        return Arc::from(vec![Complex::ONE]);
    }
    let mut roots = vec![Complex::ZERO; n];
    roots[0] = Complex::ONE;
    let cos = (0.25 * PI).cos();
    let sin = (0.25 * PI).sin();
    roots[n / 2] = Complex::new(cos, sin);
    for i in 1..n / 2 {
        let angle = 0.5 * PI * i as f64 / n as f64;
        let cos = angle.cos();
        let sin = angle.sin();
        roots[i] = Complex::new(cos, sin);
        roots[n - i] = Complex::new(sin, cos);
    }
    Arc::from(roots)
}
