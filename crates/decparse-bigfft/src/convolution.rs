//! Right-angle convolution of big-integer magnitudes.
//!
//! Magnitudes are little-endian `u32` limb slices. Each one is packed into
//! a complex vector at a payload width chosen so the floating-point error
//! bound from Percival, "Rapid Multiplication Modulo The Sum And Difference
//! of Highly Composite Numbers", p. 392, guarantees the rounded inverse
//! transform equals the exact convolution. Packed digits are balanced into
//! `(-base/2, base/2]`, which halves the dynamic range the bound sees.
//!
//! The right-angle weighting places the low half of the product in the real
//! lanes and the high half in the imaginary lanes, so a length-n transform
//! multiplies two length-n inputs; see Crandall and Fagin, "Discrete
//! Weighted Transforms and Large-Integer Arithmetic".

use crate::complex::Complex;
use crate::fft::{
    fft, fft_mixed_radix, ifft, ifft_mixed_radix, mul_pointwise, square_pointwise,
};
use crate::roots::{roots2, roots3};

/// Cap on the limb count of an unpacked product.
const MAX_MAG_LIMBS: usize = i32::MAX as usize - 4;

/// The widest payload (in bits) one FFT point can carry at the given
/// operand bit length without breaking the rounding guarantee.
#[must_use]
pub fn bits_per_fft_point(bit_len: usize) -> usize {
    if bit_len <= 19 * (1 << 9) {
        return 19;
    }
    if bit_len <= 18 * (1 << 10) {
        return 18;
    }
    if bit_len <= 17 * (1 << 12) {
        return 17;
    }
    if bit_len <= 16 * (1 << 14) {
        return 16;
    }
    if bit_len <= 15 * (1 << 16) {
        return 15;
    }
    if bit_len <= 14 * (1 << 18) {
        return 14;
    }
    if bit_len <= 13 * (1 << 20) {
        return 13;
    }
    if bit_len <= 12 * (1 << 21) {
        return 12;
    }
    if bit_len <= 11 * (1 << 23) {
        return 11;
    }
    if bit_len <= 10 * (1 << 25) {
        return 10;
    }
    if bit_len <= 9 * (1 << 27) {
        return 9;
    }
    8
}

/// Transform length and shape for a payload of `fft_len` points.
struct TransformPlan {
    fft_len: usize,
    log_fft_len: usize,
    mixed_radix: bool,
}

impl TransformPlan {
    /// Rounds `fft_len` up to `2^n` or `3*2^n`, whichever is shorter.
    fn for_len(fft_len: usize) -> Self {
        let log_fft_len = (usize::BITS - (fft_len - 1).leading_zeros()) as usize;
        let fft_len2 = 1usize << log_fft_len;
        let fft_len3 = fft_len2 * 3 / 4;
        // The mixed-radix twiddle table needs 3*2^(log - 4) entries, so the
        // shape is only available from log 5 up; shorter transforms round
        // to the next power of two.
        if fft_len < fft_len3 && log_fft_len >= 5 {
            Self {
                fft_len: fft_len3,
                log_fft_len,
                mixed_radix: true,
            }
        } else {
            Self {
                fft_len: fft_len2,
                log_fft_len,
                mixed_radix: false,
            }
        }
    }
}

/// Packs a magnitude into an FFT vector, `bits_per_point` bits per real
/// lane, imaginary lanes zero.
///
/// Each packed digit is balanced into `(-base/2, base/2]` by borrowing
/// from its successor; the final slot absorbs the residual carry (the
/// caller reserves one extra point for it).
#[allow(clippy::cast_precision_loss)]
fn to_fft_vector(mag: &[u32], fft_len: usize, bits_per_point: usize) -> Vec<Complex> {
    let base = 1i64 << bits_per_point;
    let mut vec = vec![Complex::ZERO; fft_len];
    let mut fft_idx = 0;
    let mut mag_idx = 0;
    let mut mag_bit = 0; // next bit of the current limb
    let mut carry = 0i64;
    while mag_idx < mag.len() {
        let mut point = 0i64;
        let mut fft_bit = 0;
        loop {
            let bits_to_copy = (32 - mag_bit).min(bits_per_point - fft_bit);
            let piece = (mag[mag_idx] >> mag_bit) as i64 & ((1 << bits_to_copy) - 1);
            point |= piece << fft_bit;
            fft_bit += bits_to_copy;
            mag_bit += bits_to_copy;
            if mag_bit >= 32 {
                mag_bit = 0;
                mag_idx += 1;
                if mag_idx >= mag.len() {
                    break;
                }
            }
            if fft_bit >= bits_per_point {
                break;
            }
        }

        point += carry;
        if point > base / 2 {
            point -= base;
            carry = 1;
        } else {
            carry = 0;
        }

        vec[fft_idx] = Complex::new(point as f64, 0.0);
        fft_idx += 1;
    }
    if carry > 0 {
        vec[fft_idx] = Complex::new(carry as f64, 0.0);
    }
    vec
}

/// Rounds an inverse-transformed vector back into a little-endian
/// magnitude. The real lanes carry the low half of the product and the
/// imaginary lanes the high half; carries propagate through the low half
/// first.
fn from_fft_vector(vec: &[Complex], bits_per_point: usize) -> Vec<u32> {
    let fft_len = vec.len();
    let mag_len = (2 * (fft_len as u64 * bits_per_point as u64 + 31) / 32) as usize;
    let mut mag = vec![0u32; mag_len.min(MAX_MAG_LIMBS)];
    let mask = (1i64 << bits_per_point) - 1;
    let mut mag_idx = 0;
    let mut mag_bit = 0;
    let mut carry = 0i64;
    for part in 0..2 {
        for point in vec {
            let lane = if part == 0 { point.re } else { point.im };
            #[allow(clippy::cast_possible_truncation)]
            let elem = lane.round() as i64 + carry;
            carry = elem >> bits_per_point;
            let elem = (elem & mask) as u64;
            let mut fft_bit = 0;
            loop {
                let bits_to_copy = (32 - mag_bit).min(bits_per_point - fft_bit);
                if mag_idx < mag.len() {
                    #[allow(clippy::cast_possible_truncation)]
                    {
                        mag[mag_idx] |= ((elem >> fft_bit) << mag_bit) as u32;
                    }
                }
                mag_bit += bits_to_copy;
                fft_bit += bits_to_copy;
                if mag_bit >= 32 {
                    mag_bit = 0;
                    mag_idx += 1;
                }
                if fft_bit >= bits_per_point {
                    break;
                }
            }
        }
    }
    mag
}

/// Multiplies every element by the matching weight, turning the plain
/// convolution into a right-angle convolution.
fn apply_weights(a: &mut [Complex], weights: &[Complex]) {
    for (x, &w) in a.iter_mut().zip(weights) {
        *x = x.mul(w);
    }
}

/// Undoes [`apply_weights`] on the inverse-transformed vector.
fn apply_inverse_weights(a: &mut [Complex], weights: &[Complex]) {
    for (x, &w) in a.iter_mut().zip(weights) {
        *x = x.mul_conj(w);
    }
}

/// Multiplies two little-endian magnitudes with the weighted FFT.
///
/// The operands must be non-zero. The returned magnitude may carry
/// high zero limbs; the caller normalises.
#[must_use]
pub fn multiply_fft_mags(a: &[u32], b: &[u32]) -> Vec<u32> {
    let bit_len = a.len().max(b.len()) * 32;
    let bits_per_point = bits_per_fft_point(bit_len);
    let plan = TransformPlan::for_len(bit_len.div_ceil(bits_per_point) + 1);

    if plan.mixed_radix {
        let mut a_vec = to_fft_vector(a, plan.fft_len, bits_per_point);
        let mut b_vec = to_fft_vector(b, plan.fft_len, bits_per_point);
        // roots for length fft_len/3, which is a power of two
        let roots = roots2(plan.log_fft_len - 2);
        let weights = roots3(plan.log_fft_len - 2);
        let twiddles = roots3(plan.log_fft_len - 4);
        apply_weights(&mut a_vec, &weights);
        apply_weights(&mut b_vec, &weights);
        fft_mixed_radix(&mut a_vec, &roots, &twiddles);
        fft_mixed_radix(&mut b_vec, &roots, &twiddles);
        mul_pointwise(&mut a_vec, &b_vec);
        ifft_mixed_radix(&mut a_vec, &roots, &twiddles);
        apply_inverse_weights(&mut a_vec, &weights);
        from_fft_vector(&a_vec, bits_per_point)
    } else {
        let mut a_vec = to_fft_vector(a, plan.fft_len, bits_per_point);
        let mut b_vec = to_fft_vector(b, plan.fft_len, bits_per_point);
        let roots = roots2(plan.log_fft_len);
        apply_weights(&mut a_vec, roots.stage(plan.log_fft_len));
        apply_weights(&mut b_vec, roots.stage(plan.log_fft_len));
        fft(&mut a_vec, &roots);
        fft(&mut b_vec, &roots);
        mul_pointwise(&mut a_vec, &b_vec);
        ifft(&mut a_vec, &roots);
        apply_inverse_weights(&mut a_vec, roots.stage(plan.log_fft_len));
        from_fft_vector(&a_vec, bits_per_point)
    }
}

/// Squares a little-endian magnitude with one forward transform, a
/// pointwise square, and one inverse transform.
#[must_use]
pub fn square_fft_mags(mag: &[u32]) -> Vec<u32> {
    let bit_len = mag.len() * 32;
    let bits_per_point = bits_per_fft_point(bit_len);
    let plan = TransformPlan::for_len(bit_len.div_ceil(bits_per_point) + 1);

    if plan.mixed_radix {
        let mut vec = to_fft_vector(mag, plan.fft_len, bits_per_point);
        let roots = roots2(plan.log_fft_len - 2);
        let weights = roots3(plan.log_fft_len - 2);
        let twiddles = roots3(plan.log_fft_len - 4);
        apply_weights(&mut vec, &weights);
        fft_mixed_radix(&mut vec, &roots, &twiddles);
        square_pointwise(&mut vec);
        ifft_mixed_radix(&mut vec, &roots, &twiddles);
        apply_inverse_weights(&mut vec, &weights);
        from_fft_vector(&vec, bits_per_point)
    } else {
        let mut vec = to_fft_vector(mag, plan.fft_len, bits_per_point);
        let roots = roots2(plan.log_fft_len);
        apply_weights(&mut vec, roots.stage(plan.log_fft_len));
        fft(&mut vec, &roots);
        square_pointwise(&mut vec);
        ifft(&mut vec, &roots);
        apply_inverse_weights(&mut vec, roots.stage(plan.log_fft_len));
        from_fft_vector(&vec, bits_per_point)
    }
}
