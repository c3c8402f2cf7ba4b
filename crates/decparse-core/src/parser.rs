//! Public parser entry points.
//!
//! Three input representations share one inner pipeline: the byte slice is
//! the fast path, while UTF-16 code units and chars narrow into a byte
//! buffer first. Offsets and lengths are in the units of the input type;
//! error offsets refer to the original input.

use crate::bigint::BigInt;
use crate::constants::MAX_INPUT_DIGITS;
use crate::digits::{parse_digits, validate_digits};
use crate::error::ParseError;
use crate::options::ParseOptions;

/// Parses a decimal integer from `length` bytes of `input` starting at
/// `offset`. Bytes are ISO-8859-1 (digits are plain ASCII); one leading
/// `+` or `-` is accepted.
///
/// # Example
/// ```
/// use decparse_core::parser::parse_big_integer;
///
/// let n = parse_big_integer(b"-000123", 0, 7).unwrap();
/// assert_eq!(n.to_decimal_string(), "-123");
/// ```
///
/// # Panics
/// Panics if `offset + length` exceeds the input length, like any slice
/// access.
pub fn parse_big_integer(input: &[u8], offset: usize, length: usize) -> Result<BigInt, ParseError> {
    parse_big_integer_with(input, offset, length, &ParseOptions::default())
}

/// [`parse_big_integer`] with explicit options.
pub fn parse_big_integer_with(
    input: &[u8],
    offset: usize,
    length: usize,
    options: &ParseOptions,
) -> Result<BigInt, ParseError> {
    let window = &input[offset..offset + length];
    let (signum, skip) = read_sign(window.first().copied());
    let digits = &window[skip..];
    if digits.is_empty() {
        return Err(ParseError::InvalidDigit {
            offset: offset + skip,
        });
    }
    check_length(digits.len())?;
    validate_digits(digits, offset + skip)?;
    let options = options.clone().normalize();
    Ok(parse_digits(digits, &options).with_signum(signum))
}

/// Parses a decimal integer from a UTF-16 code-unit slice.
pub fn parse_big_integer_utf16(
    input: &[u16],
    offset: usize,
    length: usize,
) -> Result<BigInt, ParseError> {
    let window = &input[offset..offset + length];
    let (signum, skip) = read_sign(window.first().and_then(|&u| u8::try_from(u).ok()));
    let units = &window[skip..];
    if units.is_empty() {
        return Err(ParseError::InvalidDigit {
            offset: offset + skip,
        });
    }
    check_length(units.len())?;
    let mut digits = Vec::new();
    digits
        .try_reserve_exact(units.len())
        .map_err(|_| ParseError::AllocationFailure)?;
    for (i, &unit) in units.iter().enumerate() {
        if !(u16::from(b'0')..=u16::from(b'9')).contains(&unit) {
            return Err(ParseError::InvalidDigit {
                offset: offset + skip + i,
            });
        }
        #[allow(clippy::cast_possible_truncation)]
        digits.push(unit as u8);
    }
    Ok(parse_digits(&digits, &ParseOptions::default()).with_signum(signum))
}

/// Parses a decimal integer from a char slice.
pub fn parse_big_integer_chars(
    input: &[char],
    offset: usize,
    length: usize,
) -> Result<BigInt, ParseError> {
    let window = &input[offset..offset + length];
    let (signum, skip) = read_sign(window.first().and_then(|&c| u8::try_from(c).ok()));
    let chars = &window[skip..];
    if chars.is_empty() {
        return Err(ParseError::InvalidDigit {
            offset: offset + skip,
        });
    }
    check_length(chars.len())?;
    let mut digits = Vec::new();
    digits
        .try_reserve_exact(chars.len())
        .map_err(|_| ParseError::AllocationFailure)?;
    for (i, &c) in chars.iter().enumerate() {
        if !c.is_ascii_digit() {
            return Err(ParseError::InvalidDigit {
                offset: offset + skip + i,
            });
        }
        digits.push(c as u8);
    }
    Ok(parse_digits(&digits, &ParseOptions::default()).with_signum(signum))
}

fn read_sign(first: Option<u8>) -> (i8, usize) {
    match first {
        Some(b'-') => (-1, 1),
        Some(b'+') => (1, 1),
        _ => (1, 0),
    }
}

fn check_length(len: usize) -> Result<(), ParseError> {
    if len > MAX_INPUT_DIGITS {
        return Err(ParseError::LengthExceeded {
            len,
            max: MAX_INPUT_DIGITS,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_inputs() {
        assert_eq!(parse_big_integer(b"0", 0, 1).unwrap(), BigInt::zero());
        assert_eq!(
            parse_big_integer(b"00000000000000000000", 0, 20).unwrap(),
            BigInt::zero()
        );
        assert_eq!(parse_big_integer(b"1", 0, 1).unwrap(), BigInt::from_u64(1));
    }

    #[test]
    fn two_to_the_sixty_four() {
        let n = parse_big_integer(b"18446744073709551616", 0, 20).unwrap();
        assert_eq!(n.to_decimal_string(), "18446744073709551616");
        assert_eq!(n.bit_length(), 65);
        assert_eq!(n.magnitude(), &[0, 0, 1]);
    }

    #[test]
    fn offsets_select_a_window() {
        let n = parse_big_integer(b"xx12345yy", 2, 5).unwrap();
        assert_eq!(n, BigInt::from_u64(12345));
    }

    #[test]
    fn signs() {
        assert_eq!(
            parse_big_integer(b"-987", 0, 4).unwrap().to_decimal_string(),
            "-987"
        );
        assert_eq!(
            parse_big_integer(b"+987", 0, 4).unwrap().to_decimal_string(),
            "987"
        );
        // a signed zero is still the canonical zero
        assert_eq!(parse_big_integer(b"-0", 0, 2).unwrap(), BigInt::zero());
    }

    #[test]
    fn sign_alone_is_invalid() {
        assert_eq!(
            parse_big_integer(b"-", 0, 1),
            Err(ParseError::InvalidDigit { offset: 1 })
        );
        assert_eq!(
            parse_big_integer(b"", 0, 0),
            Err(ParseError::InvalidDigit { offset: 0 })
        );
    }

    #[test]
    fn invalid_digit_reports_input_offset() {
        assert_eq!(
            parse_big_integer(b"nn123a5", 2, 5),
            Err(ParseError::InvalidDigit { offset: 5 })
        );
        // sign is skipped but counted
        assert_eq!(
            parse_big_integer(b"-12.4", 0, 5),
            Err(ParseError::InvalidDigit { offset: 3 })
        );
    }

    #[test]
    fn utf16_path_matches_byte_path() {
        let text = "-9806543217980654321798065432179806543217";
        let units: Vec<u16> = text.encode_utf16().collect();
        let from_utf16 = parse_big_integer_utf16(&units, 0, units.len()).unwrap();
        let from_bytes = parse_big_integer(text.as_bytes(), 0, text.len()).unwrap();
        assert_eq!(from_utf16, from_bytes);
    }

    #[test]
    fn utf16_rejects_wide_units() {
        let units = vec![u16::from(b'1'), 0x0660, u16::from(b'3')]; // Arabic-Indic digit
        assert_eq!(
            parse_big_integer_utf16(&units, 0, 3),
            Err(ParseError::InvalidDigit { offset: 1 })
        );
    }

    #[test]
    fn chars_path_matches_byte_path() {
        let text = "31415926535897932384626433832795028841971693993751";
        let chars: Vec<char> = text.chars().collect();
        let from_chars = parse_big_integer_chars(&chars, 0, chars.len()).unwrap();
        let from_bytes = parse_big_integer(text.as_bytes(), 0, text.len()).unwrap();
        assert_eq!(from_chars, from_bytes);
    }

    #[test]
    fn chars_reject_non_ascii_digits() {
        let chars: Vec<char> = "12\u{FF13}4".chars().collect(); // fullwidth three
        assert_eq!(
            parse_big_integer_chars(&chars, 0, 4),
            Err(ParseError::InvalidDigit { offset: 2 })
        );
    }

    #[test]
    fn length_cap() {
        // The cap applies to the digit count; actually allocating the
        // maximum is out of unit-test reach, so check the boundary math
        // through the error path only.
        assert_eq!(
            super::check_length(MAX_INPUT_DIGITS + 1),
            Err(ParseError::LengthExceeded {
                len: MAX_INPUT_DIGITS + 1,
                max: MAX_INPUT_DIGITS,
            })
        );
        assert_eq!(super::check_length(MAX_INPUT_DIGITS), Ok(()));
    }
}
