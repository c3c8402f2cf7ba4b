//! Memoised powers of ten for the digit pipeline.
//!
//! The recursive parse only ever multiplies by `10^(right-half length)`,
//! and the split rounds right halves to multiples of 16 digits, so a small
//! set of exponents covers an entire conversion. Entries are kept in a
//! process-wide table and snapshotted per conversion, so the (possibly
//! parallel) recursion reads without taking a lock.

use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::bigint::BigInt;
use crate::digits::{split_floor16, DIGITS_PER_U64};
use crate::multiply::multiply;

static POWER_CACHE: Mutex<BTreeMap<usize, Arc<BigInt>>> = Mutex::new(BTreeMap::new());

/// The powers of ten one conversion needs, prefilled before recursion.
pub(crate) struct PowersOfTen {
    entries: BTreeMap<usize, Arc<BigInt>>,
}

impl PowersOfTen {
    /// Walks the split structure of a `len`-digit input and collects every
    /// power of ten its combine steps will request, computing and memoising
    /// the missing ones.
    pub fn for_length(len: usize, recursion_threshold: usize) -> Self {
        let mut entries = BTreeMap::new();
        let mut cache = POWER_CACHE.lock();
        if cache.is_empty() {
            cache.insert(16, Arc::new(pow10_small(16)));
        }
        fill(&mut cache, &mut entries, len, recursion_threshold);
        Self { entries }
    }

    /// `10^exponent`. The exponent must be one the prefill walk visited.
    pub fn get(&self, exponent: usize) -> &BigInt {
        self.entries
            .get(&exponent)
            .expect("power of ten prefilled for every combine step")
    }
}

fn fill(
    cache: &mut BTreeMap<usize, Arc<BigInt>>,
    entries: &mut BTreeMap<usize, Arc<BigInt>>,
    len: usize,
    threshold: usize,
) {
    if len <= threshold {
        return;
    }
    let mid = split_floor16(len);
    let right = len - mid;
    fill(cache, entries, mid, threshold);
    // A repeated right length carries an identical subtree; walking it
    // again would re-derive the same exponents.
    if !entries.contains_key(&right) {
        fill(cache, entries, right, threshold);
        let power = power_of_ten(cache, right);
        entries.insert(right, power);
    }
}

/// `10^n`, composed from the largest memoised power not exceeding `n`.
/// Large compositions dispatch through the multiplier and can reach the
/// FFT.
fn power_of_ten(cache: &mut BTreeMap<usize, Arc<BigInt>>, n: usize) -> Arc<BigInt> {
    if n <= DIGITS_PER_U64 {
        return Arc::new(pow10_small(n));
    }
    if let Some(power) = cache.get(&n) {
        return Arc::clone(power);
    }
    let (floor_n, floor_power) = cache
        .range(..=n)
        .next_back()
        .map(|(k, v)| (*k, Arc::clone(v)))
        .expect("cache is seeded with 10^16");
    let result = if floor_n == n {
        floor_power
    } else {
        let rest = power_of_ten(cache, n - floor_n);
        Arc::new(multiply(&floor_power, &rest, false))
    };
    cache.insert(n, Arc::clone(&result));
    result
}

#[allow(clippy::cast_possible_truncation)]
fn pow10_small(n: usize) -> BigInt {
    debug_assert!(n <= DIGITS_PER_U64);
    BigInt::from_u64(10u64.pow(n as u32))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ten_to(n: usize) -> String {
        let mut s = String::from("1");
        s.push_str(&"0".repeat(n));
        s
    }

    #[test]
    fn small_powers() {
        assert_eq!(pow10_small(0), BigInt::from_u64(1));
        assert_eq!(pow10_small(18).to_decimal_string(), ten_to(18));
    }

    #[test]
    fn prefill_covers_every_combine_exponent() {
        let len = 10_000;
        let threshold = 400;
        let powers = PowersOfTen::for_length(len, threshold);

        // walk the same split structure the parser uses
        fn walk(len: usize, threshold: usize, powers: &PowersOfTen) {
            if len <= threshold {
                return;
            }
            let mid = split_floor16(len);
            let right = len - mid;
            assert_eq!(powers.get(right).to_decimal_string(), {
                let mut s = String::from("1");
                s.push_str(&"0".repeat(right));
                s
            });
            walk(mid, threshold, powers);
            walk(right, threshold, powers);
        }
        walk(len, threshold, &powers);
    }

    #[test]
    fn composed_powers_are_exact() {
        let powers = PowersOfTen::for_length(3000, 400);
        let mid = split_floor16(3000);
        let right = 3000 - mid;
        assert_eq!(powers.get(right).to_decimal_string(), ten_to(right));
    }

    #[test]
    fn repeated_conversions_share_the_cache() {
        let first = PowersOfTen::for_length(5_000, 400);
        let second = PowersOfTen::for_length(5_000, 400);
        let right = 5_000 - split_floor16(5_000);
        assert_eq!(
            first.get(right).to_decimal_string(),
            second.get(right).to_decimal_string()
        );
    }
}
