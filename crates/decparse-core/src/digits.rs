//! Divide-and-conquer conversion of validated digit windows.
//!
//! The input is sliced so the right half of every split is a multiple of
//! 16 digits, which keeps the set of powers of ten small; halves combine
//! as `high * 10^(low digits) + low`. Near the root of the recursion the
//! products are large enough to dispatch into the FFT multiplier.

use crate::bigint::{mag_mul_add_small, BigInt};
use crate::error::ParseError;
use crate::options::ParseOptions;
use crate::pow10::PowersOfTen;

/// The widest digit block a single `u64` accumulates (`10^18 < 2^63`).
pub(crate) const DIGITS_PER_U64: usize = 18;

const TEN_POW_18: u64 = 1_000_000_000_000_000_000;

/// Converts a window of validated ASCII digits into a non-negative value.
pub(crate) fn parse_digits(s: &[u8], opts: &ParseOptions) -> BigInt {
    if s.len() <= opts.recursion_threshold {
        return parse_digits_iterative(s);
    }
    let powers = PowersOfTen::for_length(s.len(), opts.recursion_threshold);
    if opts.parallel && s.len() >= opts.parallel_threshold {
        parse_recursive_parallel(s, &powers, opts)
    } else {
        parse_recursive(s, &powers, opts.recursion_threshold)
    }
}

fn parse_recursive(s: &[u8], powers: &PowersOfTen, threshold: usize) -> BigInt {
    if s.len() <= threshold {
        return parse_digits_iterative(s);
    }
    let mid = split_floor16(s.len());
    let (high, low) = s.split_at(mid);
    let high = parse_recursive(high, powers, threshold);
    let low = parse_recursive(low, powers, threshold);
    crate::multiply::multiply(&high, powers.get(s.len() - mid), false).add(&low)
}

/// Same split structure as [`parse_recursive`], with the halves forked
/// onto the rayon pool. Deterministic: the splits do not depend on the
/// degree of parallelism.
fn parse_recursive_parallel(s: &[u8], powers: &PowersOfTen, opts: &ParseOptions) -> BigInt {
    if s.len() < opts.parallel_threshold {
        return parse_recursive(s, powers, opts.recursion_threshold);
    }
    let mid = split_floor16(s.len());
    let (high_digits, low_digits) = s.split_at(mid);
    let (high, low) = rayon::join(
        || parse_recursive_parallel(high_digits, powers, opts),
        || parse_recursive_parallel(low_digits, powers, opts),
    );
    crate::multiply::multiply(&high, powers.get(s.len() - mid), true).add(&low)
}

/// Scalar path: fold 18-digit blocks into a limb accumulator with
/// `acc * 10^18 + block`.
fn parse_digits_iterative(s: &[u8]) -> BigInt {
    debug_assert!(!s.is_empty());
    let mut first = s.len() % DIGITS_PER_U64;
    if first == 0 {
        first = DIGITS_PER_U64.min(s.len());
    }
    let mut mag: Vec<u32> = Vec::new();
    mag_mul_add_small(&mut mag, 1, parse_u64_decimal(&s[..first]));
    let mut pos = first;
    while pos < s.len() {
        mag_mul_add_small(
            &mut mag,
            TEN_POW_18,
            parse_u64_decimal(&s[pos..pos + DIGITS_PER_U64]),
        );
        pos += DIGITS_PER_U64;
    }
    BigInt::from_signum_and_vec(1, mag)
}

/// Splits `len` digits so the low half is a multiple of 16 digits.
pub(crate) fn split_floor16(len: usize) -> usize {
    let mid = len / 2;
    len - ((len - mid + 15) >> 4 << 4)
}

/// Horner conversion of up to 18 digits, eight at a time where possible.
fn parse_u64_decimal(s: &[u8]) -> u64 {
    debug_assert!(!s.is_empty() && s.len() <= DIGITS_PER_U64);
    let head = s.len() % 8;
    let mut value = 0u64;
    for &b in &s[..head] {
        value = value * 10 + u64::from(b - b'0');
    }
    let mut rest = &s[head..];
    while !rest.is_empty() {
        let word = u64::from_le_bytes(rest[..8].try_into().expect("8-byte chunk"));
        value = value * 100_000_000 + u64::from(eight_digits_to_u32(word));
        rest = &rest[8..];
    }
    value
}

/// Validates that every byte of `s` is an ASCII digit, eight at a time.
/// `base_offset` positions error offsets in the caller's input.
pub(crate) fn validate_digits(s: &[u8], base_offset: usize) -> Result<(), ParseError> {
    let mut chunks = s.chunks_exact(8);
    let mut consumed = 0;
    for chunk in chunks.by_ref() {
        let word = u64::from_le_bytes(chunk.try_into().expect("8-byte chunk"));
        if !is_eight_digits(word) {
            for (i, &b) in chunk.iter().enumerate() {
                if !b.is_ascii_digit() {
                    return Err(ParseError::InvalidDigit {
                        offset: base_offset + consumed + i,
                    });
                }
            }
        }
        consumed += 8;
    }
    for (i, &b) in chunks.remainder().iter().enumerate() {
        if !b.is_ascii_digit() {
            return Err(ParseError::InvalidDigit {
                offset: base_offset + consumed + i,
            });
        }
    }
    Ok(())
}

/// Word-parallel check that all eight bytes are in `'0'..='9'`.
fn is_eight_digits(word: u64) -> bool {
    ((word & 0xF0F0_F0F0_F0F0_F0F0)
        | ((word.wrapping_add(0x0606_0606_0606_0606) & 0xF0F0_F0F0_F0F0_F0F0) >> 4))
        == 0x3333_3333_3333_3333
}

/// Word-parallel conversion of eight ASCII digits, first byte most
/// significant.
#[allow(clippy::cast_possible_truncation)]
fn eight_digits_to_u32(word: u64) -> u32 {
    const MASK: u64 = 0x0000_00FF_0000_00FF;
    const MUL1: u64 = 0x000F_4240_0000_0064; // 100 + (10^6 << 32)
    const MUL2: u64 = 0x0000_2710_0000_0001; // 1 + (10^4 << 32)
    let val = word.wrapping_sub(0x3030_3030_3030_3030);
    let val = val.wrapping_mul(10).wrapping_add(val >> 8);
    let val = (val & MASK)
        .wrapping_mul(MUL1)
        .wrapping_add(((val >> 16) & MASK).wrapping_mul(MUL2))
        >> 32;
    val as u32
}
