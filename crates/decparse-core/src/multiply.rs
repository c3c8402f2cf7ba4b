//! Multiplication dispatch: schoolbook, Toom-Cook or FFT by operand size.

use crate::bigint::BigInt;
use crate::constants::{FFT_THRESHOLD, TOOM_COOK_THRESHOLD};
use crate::schoolbook::multiply_schoolbook;
use crate::toom_cook::toom3_with;

/// Multiplies two values, selecting the algorithm from the operand sizes.
///
/// FFT is used when both operands exceed the Toom-Cook threshold and at
/// least one exceeds the FFT threshold. Aliased arguments route to
/// [`square`]. With `parallel` set, the Toom-Cook evaluation products run
/// on the rayon pool; the result is identical either way.
#[must_use]
pub fn multiply(a: &BigInt, b: &BigInt, parallel: bool) -> BigInt {
    if a.is_zero() || b.is_zero() {
        return BigInt::zero();
    }
    if std::ptr::eq(a, b) {
        return square(a);
    }
    dispatch(a, b, parallel)
}

fn dispatch(a: &BigInt, b: &BigInt, parallel: bool) -> BigInt {
    let x_len = a.bit_length();
    let y_len = b.bit_length();
    if x_len > TOOM_COOK_THRESHOLD && y_len > TOOM_COOK_THRESHOLD {
        if x_len > FFT_THRESHOLD || y_len > FFT_THRESHOLD {
            return multiply_fft(a, b);
        }
        return toom3_with(a, b, parallel);
    }
    multiply_schoolbook(a, b)
}

/// Multiplies two values with the floating-point FFT, regardless of size.
#[must_use]
pub fn multiply_fft(a: &BigInt, b: &BigInt) -> BigInt {
    let signum = a.signum() * b.signum();
    if signum == 0 {
        return BigInt::zero();
    }
    BigInt::from_signum_and_vec(
        signum,
        decparse_bigfft::multiply_fft_mags(a.magnitude(), b.magnitude()),
    )
}

/// Squares a value. Above the FFT threshold this runs one forward
/// transform, a pointwise square and one inverse transform.
#[must_use]
pub fn square(a: &BigInt) -> BigInt {
    if a.is_zero() {
        return BigInt::zero();
    }
    if a.bit_length() > FFT_THRESHOLD {
        return BigInt::from_signum_and_vec(1, decparse_bigfft::square_fft_mags(a.magnitude()));
    }
    dispatch(a, a, false)
}
