// ============================================================================
// Engine Module
// Signed decimal addition and subtraction over aligned numerals
// ============================================================================

mod arithmetic;

pub use arithmetic::{
    add_magnitudes, difference, evaluate, negate, normalize, signed_sum, subtract_magnitudes,
    Operation,
};
