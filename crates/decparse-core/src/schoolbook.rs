//! Schoolbook multiplication, the fallback below the Toom-Cook threshold.

use crate::bigint::BigInt;

/// O(n*m) limb multiplication.
pub(crate) fn mul_mags(a: &[u32], b: &[u32]) -> Vec<u32> {
    let mut out = vec![0u32; a.len() + b.len()];
    for (i, &ai) in a.iter().enumerate() {
        let ai = u64::from(ai);
        let mut carry = 0u64;
        for (j, &bj) in b.iter().enumerate() {
            let t = ai * u64::from(bj) + u64::from(out[i + j]) + carry;
            #[allow(clippy::cast_possible_truncation)]
            {
                out[i + j] = t as u32;
            }
            carry = t >> 32;
        }
        #[allow(clippy::cast_possible_truncation)]
        {
            out[i + b.len()] = carry as u32;
        }
    }
    out
}

/// Multiplies two values with the schoolbook algorithm.
#[must_use]
pub fn multiply_schoolbook(a: &BigInt, b: &BigInt) -> BigInt {
    let signum = a.signum() * b.signum();
    if signum == 0 {
        return BigInt::zero();
    }
    BigInt::from_signum_and_vec(signum, mul_mags(a.magnitude(), b.magnitude()))
}
