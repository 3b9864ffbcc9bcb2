// ============================================================================
// Numeral Module
// Validation, decomposition and alignment of decimal numeral text
// ============================================================================
//
// This module provides:
// - is_valid_numeral: syntax gate for `[sign]digits[.digits]`
// - DecomposedNumeral / Sign: a numeral split into sign and digit runs
// - AlignedPair: two numerals zero-padded to the same shape
// - compare_magnitude: ordering of aligned operands by absolute value
// - ArithmeticError / ConfigError: error types
//
// Design principles:
// - No conversion to fixed-width numeric types
// - Immutable value types, no shared state
// - Validation is always the first gate

mod comparator;
mod decomposed;
mod errors;
mod validator;

pub use comparator::compare_magnitude;
pub use decomposed::{AlignedPair, DecomposedNumeral, Sign};
pub use errors::{ArithmeticError, ArithmeticResult, ConfigError};
pub use validator::is_valid_numeral;
