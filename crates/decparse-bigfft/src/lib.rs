//! # decparse-bigfft
//!
//! Floating-point FFT multiplication kernel for big-integer magnitudes.
//!
//! Magnitudes are little-endian `u32` limb slices; the crate packs them into
//! balanced complex vectors, runs a right-angle (weighted) convolution using
//! radix-4 transforms of length `2^n` or `3*2^n`, and unpacks the rounded
//! result. The error bounds proved by Percival guarantee that rounding the
//! inverse transform recovers the exact integer convolution.

pub mod complex;
pub mod convolution;
pub mod fft;
pub mod roots;

// Re-exports
pub use complex::Complex;
pub use convolution::{bits_per_fft_point, multiply_fft_mags, square_fft_mags};
pub use roots::{calc_roots, roots2, roots3, RootTable};
