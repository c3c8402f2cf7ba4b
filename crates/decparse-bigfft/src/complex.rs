//! Straight-line complex arithmetic for FFT vectors.
//!
//! The rounding analysis of the convolution assumes exactly these
//! real-arithmetic formulas, so the operations must not be re-associated
//! or replaced with fused variants.

/// A complex number stored as two `f64` lanes.
///
/// FFT vectors are contiguous buffers of these values; ownership stays
/// local to a single transform invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    pub const ZERO: Self = Self { re: 0.0, im: 0.0 };
    pub const ONE: Self = Self { re: 1.0, im: 0.0 };

    #[inline]
    #[must_use]
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// `self + c`
    #[inline]
    #[must_use]
    pub fn add(self, c: Self) -> Self {
        Self::new(self.re + c.re, self.im + c.im)
    }

    /// `self - c`
    #[inline]
    #[must_use]
    pub fn sub(self, c: Self) -> Self {
        Self::new(self.re - c.re, self.im - c.im)
    }

    /// `self * c`
    #[inline]
    #[must_use]
    pub fn mul(self, c: Self) -> Self {
        Self::new(
            self.re * c.re - self.im * c.im,
            self.re * c.im + self.im * c.re,
        )
    }

    /// `self * conj(c)`
    #[inline]
    #[must_use]
    pub fn mul_conj(self, c: Self) -> Self {
        Self::new(
            self.re * c.re + self.im * c.im,
            -self.re * c.im + self.im * c.re,
        )
    }

    /// `self * conj(c) * -i`
    ///
    /// The quarter rotation is folded into the multiply; forward and inverse
    /// mixed-radix twiddle passes use opposite rotations, so the convention
    /// cancels over a full convolution.
    #[inline]
    #[must_use]
    pub fn mul_conj_i(self, c: Self) -> Self {
        Self::new(
            -self.re * c.im + self.im * c.re,
            -self.re * c.re - self.im * c.im,
        )
    }

    /// `self * c * i`
    #[inline]
    #[must_use]
    pub fn mul_i(self, c: Self) -> Self {
        Self::new(
            -self.re * c.im - self.im * c.re,
            self.re * c.re - self.im * c.im,
        )
    }

    /// `self + c*i`
    #[inline]
    #[must_use]
    pub fn add_times_i(self, c: Self) -> Self {
        Self::new(self.re - c.im, self.im + c.re)
    }

    /// `self - c*i`
    #[inline]
    #[must_use]
    pub fn sub_times_i(self, c: Self) -> Self {
        Self::new(self.re + c.im, self.im - c.re)
    }

    /// `self * self`
    #[inline]
    #[must_use]
    pub fn sq(self) -> Self {
        Self::new(
            self.re * self.re - self.im * self.im,
            2.0 * self.re * self.im,
        )
    }

    /// Scales both lanes by `2^n`. Exact: only the exponent changes.
    #[inline]
    pub fn scale_by_pow2(&mut self, n: i32) {
        let f = 2f64.powi(n);
        self.re *= f;
        self.im *= f;
    }
}
