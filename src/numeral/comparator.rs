// ============================================================================
// Magnitude Comparator
// Ordering of aligned operands by absolute value
// ============================================================================

use super::decomposed::{AlignedPair, DecomposedNumeral};
use std::cmp::Ordering;

/// Compare the magnitudes of `a` and `b`, ignoring sign.
///
/// Both must come from the same [`AlignedPair`]: with equal-length runs of
/// ASCII digits, byte-wise lexicographic order is numeric order.
pub fn compare_magnitude(a: &DecomposedNumeral, b: &DecomposedNumeral) -> Ordering {
    debug_assert_eq!(a.integer_digits().len(), b.integer_digits().len());
    debug_assert_eq!(a.fractional_digits().len(), b.fractional_digits().len());

    a.integer_digits()
        .cmp(b.integer_digits())
        .then_with(|| a.fractional_digits().cmp(b.fractional_digits()))
}

impl AlignedPair {
    /// Magnitude of the left operand relative to the right.
    #[inline]
    pub fn compare_magnitudes(&self) -> Ordering {
        compare_magnitude(self.left(), self.right())
    }
}
