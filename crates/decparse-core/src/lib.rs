//! # decparse-core
//!
//! Parses very long decimal numerals (up to ~1.29e9 digits) into
//! arbitrary-precision integers in sub-quadratic time.
//!
//! The digit pipeline slices the input into blocks, converts each block
//! with scalar arithmetic, and recombines halves as
//! `high * 10^(low digits) + low`; the large products near the root of the
//! recursion dispatch through 3-way Toom-Cook into the floating-point FFT
//! multiplier provided by `decparse-bigfft`.

pub mod bigint;
pub mod constants;
mod digits;
pub mod error;
pub mod multiply;
pub mod options;
pub mod parser;
mod pow10;
pub mod schoolbook;
pub mod toom_cook;

// Re-exports
pub use bigint::BigInt;
pub use error::ParseError;
pub use multiply::{multiply, multiply_fft, square};
pub use options::ParseOptions;
pub use parser::{
    parse_big_integer, parse_big_integer_chars, parse_big_integer_utf16, parse_big_integer_with,
};
pub use schoolbook::multiply_schoolbook;
pub use toom_cook::multiply_toom_cook_3;

/// Parses a decimal string into a [`BigInt`].
///
/// This is a convenience wrapper for simple use cases. For offsets into a
/// larger buffer, other input representations, or parallel conversion, use
/// the functions in [`parser`].
///
/// # Example
/// ```
/// let n = decparse_core::parse_decimal("18446744073709551616").unwrap();
/// assert_eq!(n.to_decimal_string(), "18446744073709551616");
/// ```
pub fn parse_decimal(text: &str) -> Result<BigInt, ParseError> {
    parser::parse_big_integer(text.as_bytes(), 0, text.len())
}
