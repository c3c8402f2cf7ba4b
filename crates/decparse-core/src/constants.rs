//! Thresholds and limits for multiplication dispatch and parsing.

/// Threshold (in bits) above which both operands must lie before
/// 3-way Toom-Cook multiplication is considered.
pub const TOOM_COOK_THRESHOLD: usize = 240 * 8;

/// Threshold (in bits) for floating-point FFT multiplication. FFT is used
/// when both operands exceed [`TOOM_COOK_THRESHOLD`] and at least one
/// exceeds this value.
pub const FFT_THRESHOLD: usize = 3400 * 8;

/// Maximum number of decimal digits one conversion accepts.
pub const MAX_INPUT_DIGITS: usize = 1_292_782_622;

/// Default digit count below which the scalar parsing path is used.
pub const DEFAULT_RECURSION_THRESHOLD: usize = 400;

/// Default digit count above which the parallel digit pipeline splits work.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 32_768;
