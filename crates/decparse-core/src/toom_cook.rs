//! 3-way Toom-Cook multiplication, used between the schoolbook and FFT
//! regimes.
//!
//! Operands are split into three limb chunks and evaluated at
//! 0, 1, -1, 2 and infinity; the five sub-products re-enter the dispatcher,
//! so deeply recursive calls can still reach the FFT. Interpolation follows
//! the usual five-point sequence with exact divisions by 3 and 2.

use crate::bigint::BigInt;
use crate::multiply::multiply;

/// Multiplies two values with 3-way Toom-Cook.
#[must_use]
pub fn multiply_toom_cook_3(a: &BigInt, b: &BigInt) -> BigInt {
    toom3_with(a, b, false)
}

pub(crate) fn toom3_with(a: &BigInt, b: &BigInt, parallel: bool) -> BigInt {
    let signum = a.signum() * b.signum();
    if signum == 0 {
        return BigInt::zero();
    }
    let k = a
        .magnitude()
        .len()
        .max(b.magnitude().len())
        .div_ceil(3);
    let (a0, a1, a2) = split3(a.magnitude(), k);
    let (b0, b1, b2) = split3(b.magnitude(), k);

    // evaluate both polynomials at 1, -1 and 2
    let ta = a0.add(&a2);
    let pa1 = ta.add(&a1);
    let pam1 = ta.sub(&a1);
    let pa2 = a2.shl1().add(&a1).shl1().add(&a0);
    let tb = b0.add(&b2);
    let pb1 = tb.add(&b1);
    let pbm1 = tb.sub(&b1);
    let pb2 = b2.shl1().add(&b1).shl1().add(&b0);

    // five independent sub-products
    let (v0, v1, vm1, v2, vinf) = if parallel {
        let ((v0, v1), ((vm1, v2), vinf)) = rayon::join(
            || {
                rayon::join(
                    || multiply(&a0, &b0, true),
                    || multiply(&pa1, &pb1, true),
                )
            },
            || {
                rayon::join(
                    || {
                        rayon::join(
                            || multiply(&pam1, &pbm1, true),
                            || multiply(&pa2, &pb2, true),
                        )
                    },
                    || multiply(&a2, &b2, true),
                )
            },
        );
        (v0, v1, vm1, v2, vinf)
    } else {
        (
            multiply(&a0, &b0, false),
            multiply(&pa1, &pb1, false),
            multiply(&pam1, &pbm1, false),
            multiply(&pa2, &pb2, false),
            multiply(&a2, &b2, false),
        )
    };

    // five-point interpolation; every division is exact
    let mut t = v2.sub(&vm1).div_exact_small(3);
    let mut c1 = v1.sub(&vm1).shr1();
    let mut c2 = v1.sub(&v0);
    t = t.sub(&c2).shr1();
    c2 = c2.sub(&c1);
    t = t.sub(&vinf.shl1());
    c1 = c1.sub(&t);
    c2 = c2.sub(&vinf);

    let result = v0
        .add(&c1.shl_limbs(k))
        .add(&c2.shl_limbs(2 * k))
        .add(&t.shl_limbs(3 * k))
        .add(&vinf.shl_limbs(4 * k));
    if signum < 0 {
        result.negated()
    } else {
        result
    }
}

/// Splits a magnitude into three chunks of `k` limbs, low first.
fn split3(mag: &[u32], k: usize) -> (BigInt, BigInt, BigInt) {
    let lo = &mag[..k.min(mag.len())];
    let mid = if mag.len() > k {
        &mag[k..(2 * k).min(mag.len())]
    } else {
        &[][..]
    };
    let hi = if mag.len() > 2 * k { &mag[2 * k..] } else { &[][..] };
    (
        BigInt::from_signum_and_mag(1, lo),
        BigInt::from_signum_and_mag(1, mid),
        BigInt::from_signum_and_mag(1, hi),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schoolbook::multiply_schoolbook;
    use num_bigint::BigUint;
    use proptest::prelude::*;

    fn from_decimal(s: &str) -> BigInt {
        s.parse().unwrap()
    }

    #[test]
    fn matches_schoolbook_on_small_operands() {
        let a = from_decimal("123456789012345678901234567890");
        let b = from_decimal("987654321098765432109876543210");
        assert_eq!(multiply_toom_cook_3(&a, &b), multiply_schoolbook(&a, &b));
    }

    #[test]
    fn unbalanced_operands() {
        let a = from_decimal("340282366920938463463374607431768211455");
        let b = from_decimal("3");
        assert_eq!(multiply_toom_cook_3(&a, &b), multiply_schoolbook(&a, &b));
    }

    #[test]
    fn negative_operands() {
        let a = from_decimal("-123456789123456789123456789");
        let b = from_decimal("999999999999999999999999999");
        let got = multiply_toom_cook_3(&a, &b);
        assert_eq!(got.signum(), -1);
        assert_eq!(got, multiply_schoolbook(&a, &b));
    }

    #[test]
    fn parallel_matches_serial() {
        let a = BigInt::from_signum_and_mag(1, &vec![0xDEAD_BEEF; 90]);
        let b = BigInt::from_signum_and_mag(1, &vec![0x1234_5678; 75]);
        assert_eq!(toom3_with(&a, &b, true), toom3_with(&a, &b, false));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(24))]

        #[test]
        fn matches_oracle(a in proptest::collection::vec(any::<u32>(), 60..120),
                          b in proptest::collection::vec(any::<u32>(), 60..120)) {
            let x = BigInt::from_signum_and_mag(1, &a);
            let y = BigInt::from_signum_and_mag(1, &b);
            let got = multiply_toom_cook_3(&x, &y);
            let want = BigUint::new(a.clone()) * BigUint::new(b.clone());
            prop_assert_eq!(got.magnitude(), &want.to_u32_digits()[..]);
        }
    }
}
