//! Immutable signed big integers over little-endian `u32` limbs.
//!
//! The magnitude carries no high zero limb; the canonical zero is an empty
//! magnitude with signum 0. Values are immutable snapshots: every operation
//! returns a new value.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// A signed arbitrary-precision integer.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct BigInt {
    signum: i8,
    mag: Vec<u32>,
}

impl BigInt {
    /// The canonical zero.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            signum: 0,
            mag: Vec::new(),
        }
    }

    /// Builds a value from a signum and a little-endian limb slice,
    /// stripping high zero limbs. An all-zero magnitude yields the
    /// canonical zero regardless of `signum`.
    #[must_use]
    pub fn from_signum_and_mag(signum: i8, mag: &[u32]) -> Self {
        Self::from_signum_and_vec(signum, mag.to_vec())
    }

    pub(crate) fn from_signum_and_vec(signum: i8, mut mag: Vec<u32>) -> Self {
        while mag.last() == Some(&0) {
            mag.pop();
        }
        if mag.is_empty() {
            return Self::zero();
        }
        Self {
            signum: signum.signum(),
            mag,
        }
    }

    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_u64(value: u64) -> Self {
        Self::from_signum_and_vec(1, vec![value as u32, (value >> 32) as u32])
    }

    /// -1, 0 or +1.
    #[inline]
    #[must_use]
    pub fn signum(&self) -> i8 {
        self.signum
    }

    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.signum == 0
    }

    /// Position of the highest set bit, plus one. Zero has bit length 0.
    #[must_use]
    pub fn bit_length(&self) -> usize {
        match self.mag.last() {
            None => 0,
            Some(&top) => (self.mag.len() - 1) * 32 + (32 - top.leading_zeros() as usize),
        }
    }

    /// Borrows the little-endian limb magnitude (no high zero limb).
    #[inline]
    #[must_use]
    pub fn magnitude(&self) -> &[u32] {
        &self.mag
    }

    /// `self + other`
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        self.add_impl(other.signum, &other.mag)
    }

    /// `self - other`
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        self.add_impl(-other.signum, &other.mag)
    }

    /// `-self`
    #[must_use]
    pub fn negated(mut self) -> Self {
        self.signum = -self.signum;
        self
    }

    fn add_impl(&self, other_signum: i8, other_mag: &[u32]) -> Self {
        if other_signum == 0 {
            return self.clone();
        }
        if self.signum == 0 {
            return Self {
                signum: other_signum,
                mag: other_mag.to_vec(),
            };
        }
        if self.signum == other_signum {
            return Self {
                signum: self.signum,
                mag: add_mags(&self.mag, other_mag),
            };
        }
        match cmp_mags(&self.mag, other_mag) {
            Ordering::Equal => Self::zero(),
            Ordering::Greater => {
                Self::from_signum_and_vec(self.signum, sub_mags(&self.mag, other_mag))
            }
            Ordering::Less => {
                Self::from_signum_and_vec(other_signum, sub_mags(other_mag, &self.mag))
            }
        }
    }

    /// Shifts the magnitude left by `n` whole limbs (multiply by `2^(32n)`).
    #[must_use]
    pub(crate) fn shl_limbs(&self, n: usize) -> Self {
        if self.is_zero() || n == 0 {
            return self.clone();
        }
        let mut mag = vec![0u32; n + self.mag.len()];
        mag[n..].copy_from_slice(&self.mag);
        Self {
            signum: self.signum,
            mag,
        }
    }

    /// `self * 2`
    #[must_use]
    pub(crate) fn shl1(&self) -> Self {
        if self.is_zero() {
            return Self::zero();
        }
        let mut mag = Vec::with_capacity(self.mag.len() + 1);
        let mut carry = 0u32;
        for &limb in &self.mag {
            mag.push((limb << 1) | carry);
            carry = limb >> 31;
        }
        if carry != 0 {
            mag.push(carry);
        }
        Self {
            signum: self.signum,
            mag,
        }
    }

    /// `self / 2`; the value must be even.
    #[must_use]
    pub(crate) fn shr1(&self) -> Self {
        debug_assert_eq!(self.mag.first().map_or(0, |l| l & 1), 0);
        if self.is_zero() {
            return Self::zero();
        }
        let mut mag = vec![0u32; self.mag.len()];
        let mut carry = 0u32;
        for (i, &limb) in self.mag.iter().enumerate().rev() {
            mag[i] = (limb >> 1) | (carry << 31);
            carry = limb & 1;
        }
        Self::from_signum_and_vec(self.signum, mag)
    }

    /// `self / divisor`; the division must be exact.
    #[must_use]
    pub(crate) fn div_exact_small(&self, divisor: u32) -> Self {
        if self.is_zero() {
            return Self::zero();
        }
        let mut mag = vec![0u32; self.mag.len()];
        let mut rem = 0u64;
        for (i, &limb) in self.mag.iter().enumerate().rev() {
            let cur = (rem << 32) | u64::from(limb);
            #[allow(clippy::cast_possible_truncation)]
            {
                mag[i] = (cur / u64::from(divisor)) as u32;
            }
            rem = cur % u64::from(divisor);
        }
        debug_assert_eq!(rem, 0, "division must be exact");
        Self::from_signum_and_vec(self.signum, mag)
    }

    /// Re-signs a non-negative value; zero stays zero.
    pub(crate) fn with_signum(mut self, signum: i8) -> Self {
        if self.signum != 0 {
            self.signum = signum.signum();
        }
        self
    }

    /// Formats the value in base 10 by repeated short division.
    #[must_use]
    pub fn to_decimal_string(&self) -> String {
        if self.is_zero() {
            return "0".to_owned();
        }
        let mut limbs = self.mag.clone();
        let mut groups: Vec<u32> = Vec::new();
        while !limbs.is_empty() {
            let mut rem = 0u64;
            for limb in limbs.iter_mut().rev() {
                let cur = (rem << 32) | u64::from(*limb);
                #[allow(clippy::cast_possible_truncation)]
                {
                    *limb = (cur / 1_000_000_000) as u32;
                }
                rem = cur % 1_000_000_000;
            }
            while limbs.last() == Some(&0) {
                limbs.pop();
            }
            #[allow(clippy::cast_possible_truncation)]
            groups.push(rem as u32);
        }
        let mut out = String::with_capacity(groups.len() * 9 + 1);
        if self.signum < 0 {
            out.push('-');
        }
        for (i, group) in groups.iter().rev().enumerate() {
            if i == 0 {
                out.push_str(&group.to_string());
            } else {
                out.push_str(&format!("{group:09}"));
            }
        }
        out
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_decimal_string())
    }
}

impl fmt::Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigInt({self})")
    }
}

impl FromStr for BigInt {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parser::parse_big_integer(s.as_bytes(), 0, s.len())
    }
}

/// Magnitude comparison; both slices must be free of high zero limbs.
pub(crate) fn cmp_mags(a: &[u32], b: &[u32]) -> Ordering {
    if a.len() != b.len() {
        return a.len().cmp(&b.len());
    }
    for i in (0..a.len()).rev() {
        if a[i] != b[i] {
            return a[i].cmp(&b[i]);
        }
    }
    Ordering::Equal
}

fn add_mags(a: &[u32], b: &[u32]) -> Vec<u32> {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let mut out = Vec::with_capacity(long.len() + 1);
    let mut carry = 0u64;
    for (i, &limb) in long.iter().enumerate() {
        let sum = u64::from(limb) + u64::from(short.get(i).copied().unwrap_or(0)) + carry;
        #[allow(clippy::cast_possible_truncation)]
        out.push(sum as u32);
        carry = sum >> 32;
    }
    if carry != 0 {
        #[allow(clippy::cast_possible_truncation)]
        out.push(carry as u32);
    }
    out
}

/// `a - b`; requires `a >= b`. May leave high zero limbs for the caller
/// to strip.
fn sub_mags(a: &[u32], b: &[u32]) -> Vec<u32> {
    let mut out = Vec::with_capacity(a.len());
    let mut borrow = 0i64;
    for (i, &limb) in a.iter().enumerate() {
        let diff = i64::from(limb) - i64::from(b.get(i).copied().unwrap_or(0)) - borrow;
        if diff < 0 {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            out.push((diff + (1i64 << 32)) as u32);
            borrow = 1;
        } else {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            out.push(diff as u32);
            borrow = 0;
        }
    }
    debug_assert_eq!(borrow, 0, "subtraction underflow");
    out
}

/// `mag = mag * factor + addend`, in place. `factor` may use the full
/// 64-bit range; carries ride in a `u128`.
pub(crate) fn mag_mul_add_small(mag: &mut Vec<u32>, factor: u64, addend: u64) {
    let mut carry = u128::from(addend);
    for limb in mag.iter_mut() {
        let t = u128::from(*limb) * u128::from(factor) + carry;
        #[allow(clippy::cast_possible_truncation)]
        {
            *limb = t as u32;
        }
        carry = t >> 32;
    }
    while carry != 0 {
        #[allow(clippy::cast_possible_truncation)]
        mag.push(carry as u32);
        carry >>= 32;
    }
}
