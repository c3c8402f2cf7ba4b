//! Forward and inverse FFTs of length `2^n` and `3*2^n`.
//!
//! The radix-2 transforms run radix-4 butterflies (two stages at a time)
//! with a leftover radix-2 pass when the stage count is odd. The `3*2^n`
//! transforms use the Bailey 4-step decomposition into length-3 DFTs and
//! three radix-2 transforms.

use crate::complex::Complex;
use crate::roots::RootTable;

/// Forward FFT of length `2^n`, decimation in frequency.
///
/// `roots` must hold one first-quadrant set at stage indices
/// `log2(n), log2(n) - 2, ...` as produced by [`crate::roots::roots2`].
/// The output is in the scrambled order the inverse expects; it is never
/// observed directly.
pub fn fft(a: &mut [Complex], roots: &RootTable) {
    let n = a.len();
    let log_n = log2(n);

    // two stages at a time (radix-4)
    let mut s = log_n;
    while s >= 2 {
        let stage_roots = roots.stage(s - 2);
        let m = 1usize << s;
        for i in (0..n).step_by(m) {
            for j in 0..m / 4 {
                let w1 = stage_roots[j];
                // Squaring w1 is less accurate than a fresh cos/sin, but it
                // is the same error two radix-2 stages would incur, so the
                // Percival bound still applies.
                let w2 = w1.sq();

                let i0 = i + j;
                let i1 = i + j + m / 4;
                let i2 = i + j + m / 2;
                let i3 = i + j + m / 4 * 3;

                // radix-4 butterfly:
                //   a[i0] = (a[i0] + a[i1]      + a[i2]      + a[i3])
                //   a[i1] = (a[i0] - a[i1]*i    - a[i2]      + a[i3]*i)    * conj(w1)
                //   a[i2] = (a[i0] - a[i1]      + a[i2]      - a[i3])      * conj(w2)
                //   a[i3] = (a[i0] + a[i1]*i    - a[i2]      - a[i3]*i)    * w1
                // The last line multiplies by w1 instead of w1^3
                // (Bernstein's trick); the inverse reorders it back.
                let x0 = a[i0];
                let x1 = a[i1];
                let x2 = a[i2];
                let x3 = a[i3];

                a[i0] = x0.add(x1).add(x2).add(x3);
                a[i1] = x0.sub_times_i(x1).sub(x2).add_times_i(x3).mul_conj(w1);
                a[i2] = x0.sub(x1).add(x2).sub(x3).mul_conj(w2);
                a[i3] = x0.add_times_i(x1).sub(x2).sub_times_i(x3).mul(w1);
            }
        }
        s -= 2;
    }

    // one radix-2 pass if the stage count is odd (omega = 1)
    if s > 0 {
        for i in (0..n).step_by(2) {
            let x0 = a[i];
            let x1 = a[i + 1];
            a[i] = x0.add(x1);
            a[i + 1] = x0.sub(x1);
        }
    }
}

/// Inverse FFT of length `2^n`, decimation in time.
///
/// Takes forward twiddles (the conjugation is baked into the butterfly)
/// and divides every element by `n` at the end via exact exponent scaling.
pub fn ifft(a: &mut [Complex], roots: &RootTable) {
    let n = a.len();
    let log_n = log2(n);

    let mut s = 1;
    // one radix-2 pass if the stage count is odd (omega = 1)
    if log_n % 2 != 0 {
        for i in (0..n).step_by(2) {
            let x0 = a[i];
            let x1 = a[i + 1];
            a[i] = x0.add(x1);
            a[i + 1] = x0.sub(x1);
        }
        s += 1;
    }

    // remaining stages two at a time (radix-4)
    while s <= log_n {
        let stage_roots = roots.stage(s - 1);
        let m = 1usize << (s + 1);
        for i in (0..n).step_by(m) {
            for j in 0..m / 4 {
                let w1 = stage_roots[j];
                let w2 = w1.sq();

                let i0 = i + j;
                let i1 = i + j + m / 4;
                let i2 = i + j + m / 2;
                let i3 = i + j + m / 4 * 3;

                let x0 = a[i0];
                let x1 = a[i1].mul(w1);
                let x2 = a[i2].mul(w2);
                // conj(w1) rather than w1^3 mirrors the forward reordering
                let x3 = a[i3].mul_conj(w1);

                a[i0] = x0.add(x1).add(x2).add(x3);
                a[i1] = x0.add_times_i(x1).sub(x2).sub_times_i(x3);
                a[i2] = x0.sub(x1).add(x2).sub(x3);
                a[i3] = x0.sub_times_i(x1).sub(x2).add_times_i(x3);
            }
        }
        s += 2;
    }

    let shift = -(log_n as i32);
    for z in a.iter_mut() {
        z.scale_by_pow2(shift);
    }
}

/// Forward FFT of length `3*2^n` via the 4-step decomposition:
/// length-3 DFTs across the three thirds, a twiddle pass, then three
/// radix-2 FFTs of length `2^n`.
///
/// `twiddles` must hold `len/4` first-quadrant roots for the full length.
pub fn fft_mixed_radix(a: &mut [Complex], roots2: &RootTable, twiddles: &[Complex]) {
    let n = a.len();
    let third = n / 3;
    let quarter = n / 4;
    let (a0, rest) = a.split_at_mut(third);
    let (a1, a2) = rest.split_at_mut(third);

    // step 1: n/3 transforms of length 3
    fft3(a0, a1, a2, 1.0, 1.0);

    // step 2: twiddle the second and third coefficients. Beyond the first
    // quadrant the roots wrap, so the upper quarter folds the extra
    // rotation into the multiply.
    for i in 0..quarter {
        let w = twiddles[i];
        a1[i] = a1[i].mul_conj(w);
        a2[i] = a2[i].mul_conj(w);
        a2[i] = a2[i].mul_conj(w);
    }
    for i in quarter..third {
        let w = twiddles[i - quarter];
        a1[i] = a1[i].mul_conj_i(w);
        a2[i] = a2[i].mul_conj_i(w);
        a2[i] = a2[i].mul_conj_i(w);
    }

    // step 3 is not needed

    // step 4: three transforms of length n/3
    fft(a0, roots2);
    fft(a1, roots2);
    fft(a2, roots2);
}

/// Inverse of [`fft_mixed_radix`]: radix-2 inverse transforms first, then
/// the (non-conjugate) twiddle pass, then inverse length-3 DFTs with the
/// 1/3 scale folded in.
pub fn ifft_mixed_radix(a: &mut [Complex], roots2: &RootTable, twiddles: &[Complex]) {
    let n = a.len();
    let third = n / 3;
    let quarter = n / 4;
    let (a0, rest) = a.split_at_mut(third);
    let (a1, a2) = rest.split_at_mut(third);

    ifft(a0, roots2);
    ifft(a1, roots2);
    ifft(a2, roots2);

    for i in 0..quarter {
        let w = twiddles[i];
        a1[i] = a1[i].mul(w);
        a2[i] = a2[i].mul(w);
        a2[i] = a2[i].mul(w);
    }
    for i in quarter..third {
        let w = twiddles[i - quarter];
        a1[i] = a1[i].mul_i(w);
        a2[i] = a2[i].mul_i(w);
        a2[i] = a2[i].mul_i(w);
    }

    fft3(a0, a1, a2, -1.0, 1.0 / 3.0);
}

/// Length-3 DFTs on the tuples `(a0[i], a1[i], a2[i])`, in place.
///
/// `sign` is 1.0 for a forward transform and -1.0 for an inverse;
/// `scale` is 1.0 forward and 1/3 inverse.
pub fn fft3(a0: &mut [Complex], a1: &mut [Complex], a2: &mut [Complex], sign: f64, scale: f64) {
    // imaginary part of the primitive cube root: sin(sign * (-2) * pi / 3)
    let omega_imag = sign * -0.5 * 3f64.sqrt();
    for i in 0..a0.len() {
        let r0 = a0[i].re + a1[i].re + a2[i].re;
        let i0 = a0[i].im + a1[i].im + a2[i].im;
        let c = omega_imag * (a2[i].im - a1[i].im);
        let d = omega_imag * (a1[i].re - a2[i].re);
        let e = 0.5 * (a1[i].re + a2[i].re);
        let f = 0.5 * (a1[i].im + a2[i].im);
        let r1 = a0[i].re - e + c;
        let i1 = a0[i].im + d - f;
        let r2 = a0[i].re - e - c;
        let i2 = a0[i].im - d - f;
        a0[i] = Complex::new(r0 * scale, i0 * scale);
        a1[i] = Complex::new(r1 * scale, i1 * scale);
        a2[i] = Complex::new(r2 * scale, i2 * scale);
    }
}

/// Stores `a[i] * b[i]` into `a[i]`.
pub fn mul_pointwise(a: &mut [Complex], b: &[Complex]) {
    for (x, &y) in a.iter_mut().zip(b) {
        *x = x.mul(y);
    }
}

/// Stores `v[i]^2` into `v[i]`.
pub fn square_pointwise(v: &mut [Complex]) {
    for x in v.iter_mut() {
        *x = x.sq();
    }
}

#[inline]
fn log2(n: usize) -> usize {
    debug_assert!(n.is_power_of_two());
    n.trailing_zeros() as usize
}
