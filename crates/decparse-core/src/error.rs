//! Error taxonomy for the parser surface.
//!
//! Errors are reported to the caller; the core does not log, retry, or
//! produce partial results.

/// Error type for big-integer parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// A byte that must be a decimal digit was not one.
    #[error("invalid digit at offset {offset}")]
    InvalidDigit {
        /// Offset of the offending unit, in the units of the input.
        offset: usize,
    },

    /// The input is longer than the supported maximum.
    #[error("input length {len} exceeds the supported maximum of {max} digits")]
    LengthExceeded { len: usize, max: usize },

    /// The result would exceed the implementation's magnitude limits.
    #[error("result would exceed the supported magnitude")]
    NumericOverflow,

    /// The host allocator refused a working-memory request.
    #[error("failed to allocate working memory")]
    AllocationFailure,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offset() {
        let err = ParseError::InvalidDigit { offset: 17 };
        assert_eq!(err.to_string(), "invalid digit at offset 17");
    }

    #[test]
    fn length_exceeded_names_both_lengths() {
        let err = ParseError::LengthExceeded { len: 10, max: 5 };
        assert!(err.to_string().contains("10"));
        assert!(err.to_string().contains('5'));
    }
}
