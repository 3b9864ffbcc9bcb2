// ============================================================================
// Decimal Arithmetic Engine
// Sign resolution and schoolbook carry/borrow passes over digit text
// ============================================================================

use crate::numeral::{AlignedPair, ArithmeticResult, DecomposedNumeral, Sign};
use std::cmp::Ordering;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Binary operation applied to the two numerals of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Operation {
    /// `a + b`
    #[default]
    Add,
    /// `a - b`
    Subtract,
}

impl Operation {
    /// Validate both tokens and apply the operation.
    ///
    /// # Errors
    /// Returns `InvalidNumeral` for the first token that fails validation.
    pub fn apply(self, a: &str, b: &str) -> ArithmeticResult<String> {
        match self {
            Operation::Add => evaluate(a, b),
            Operation::Subtract => difference(a, b),
        }
    }
}

// ============================================================================
// Public Operations
// ============================================================================

/// Signed sum of two numeral tokens, as normalized numeral text.
///
/// # Errors
/// Returns `InvalidNumeral` if either token is not a numeral.
///
/// # Example
/// ```
/// use decimal_strings::engine::evaluate;
///
/// assert_eq!(evaluate("1.5", "2.25").unwrap(), "3.75");
/// assert_eq!(evaluate("10.0", "-0.01").unwrap(), "9.99");
/// assert_eq!(evaluate("5", "-5").unwrap(), "0");
/// ```
pub fn evaluate(a: &str, b: &str) -> ArithmeticResult<String> {
    let left = DecomposedNumeral::parse(a)?;
    let right = DecomposedNumeral::parse(b)?;
    Ok(signed_sum(left, right))
}

/// Signed difference `a - b` of two numeral tokens.
///
/// # Errors
/// Returns `InvalidNumeral` if either token is not a numeral.
pub fn difference(a: &str, b: &str) -> ArithmeticResult<String> {
    let left = DecomposedNumeral::parse(a)?;
    let right = DecomposedNumeral::parse(b)?;
    Ok(signed_sum(left, right.negated()))
}

/// Normalized negation of a numeral token (`"0"` stays unsigned).
///
/// # Errors
/// Returns `InvalidNumeral` if the token is not a numeral.
pub fn negate(token: &str) -> ArithmeticResult<String> {
    let n = DecomposedNumeral::parse(token)?;
    Ok(normalize(&n.negated()))
}

/// Sum of two decomposed operands, normalized.
pub fn signed_sum(left: DecomposedNumeral, right: DecomposedNumeral) -> String {
    let pair = AlignedPair::align(left, right);
    let (l, r) = (pair.left(), pair.right());

    let result = if l.sign() == r.sign() {
        tracing::debug!(sign = ?l.sign(), "same signs, adding magnitudes");
        with_sign(add_magnitudes(&pair), l.sign())
    } else {
        match pair.compare_magnitudes() {
            Ordering::Equal => {
                tracing::debug!("equal magnitudes, opposite signs");
                return "0".to_string();
            },
            Ordering::Greater => {
                tracing::debug!(sign = ?l.sign(), "subtracting right from left");
                with_sign(subtract_magnitudes(l, r), l.sign())
            },
            Ordering::Less => {
                tracing::debug!(sign = ?r.sign(), "subtracting left from right");
                with_sign(subtract_magnitudes(r, l), r.sign())
            },
        }
    };

    normalize(&result)
}

// ============================================================================
// Digit-wise Passes
// ============================================================================

/// Unsigned sum of the aligned magnitudes.
///
/// The fractional run is summed first, its carry flows into the integer run,
/// and a final carry becomes a new leading `1`. The returned numeral is
/// positive and not yet trimmed.
pub fn add_magnitudes(pair: &AlignedPair) -> DecomposedNumeral {
    let (l, r) = (pair.left(), pair.right());

    let (fraction, carry) = add_run(l.fractional_digits(), r.fractional_digits(), 0);
    let (mut integer, carry) = add_run(l.integer_digits(), r.integer_digits(), carry);
    if carry > 0 {
        integer.insert(0, '1');
    }

    DecomposedNumeral::from_digits(Sign::Positive, integer, fraction)
}

/// Unsigned difference `minuend - subtrahend` of two aligned operands.
///
/// The caller guarantees `|minuend| >= |subtrahend|`, so no borrow is left
/// after the most significant digit. The returned numeral is positive and
/// not yet trimmed.
pub fn subtract_magnitudes(
    minuend: &DecomposedNumeral,
    subtrahend: &DecomposedNumeral,
) -> DecomposedNumeral {
    let (fraction, borrow) =
        subtract_run(minuend.fractional_digits(), subtrahend.fractional_digits(), 0);
    let (integer, borrow) =
        subtract_run(minuend.integer_digits(), subtrahend.integer_digits(), borrow);
    debug_assert_eq!(borrow, 0, "subtrahend larger than minuend");

    DecomposedNumeral::from_digits(Sign::Positive, integer, fraction)
}

/// Right-to-left addition of two equal-length digit runs.
fn add_run(a: &str, b: &str, mut carry: u8) -> (String, u8) {
    let mut out = vec![b'0'; a.len()];
    for (i, (x, y)) in a.bytes().zip(b.bytes()).enumerate().rev() {
        let sum = (x - b'0') + (y - b'0') + carry;
        out[i] = b'0' + sum % 10;
        carry = sum / 10;
    }
    (digits_to_string(out), carry)
}

/// Right-to-left subtraction of two equal-length digit runs.
fn subtract_run(a: &str, b: &str, mut borrow: u8) -> (String, u8) {
    let mut out = vec![b'0'; a.len()];
    for (i, (x, y)) in a.bytes().zip(b.bytes()).enumerate().rev() {
        let (x, y) = (x - b'0', y - b'0' + borrow);
        if x >= y {
            out[i] = b'0' + (x - y);
            borrow = 0;
        } else {
            out[i] = b'0' + (x + 10 - y);
            borrow = 1;
        }
    }
    (digits_to_string(out), borrow)
}

#[inline]
fn digits_to_string(digits: Vec<u8>) -> String {
    digits.into_iter().map(char::from).collect()
}

#[inline]
fn with_sign(n: DecomposedNumeral, sign: Sign) -> DecomposedNumeral {
    if sign.is_negative() {
        n.negated()
    } else {
        n
    }
}

// ============================================================================
// Output Normalization
// ============================================================================

/// Render a numeral in canonical form.
///
/// Leading integer zeros are trimmed down to a single digit, trailing
/// fractional zeros are trimmed away (dropping the point when nothing is
/// left), and `-` appears only for a negative non-zero value.
pub fn normalize(n: &DecomposedNumeral) -> String {
    let integer = n.integer_digits().trim_start_matches('0');
    let integer = if integer.is_empty() { "0" } else { integer };
    let fraction = n.fractional_digits().trim_end_matches('0');

    let mut out = String::with_capacity(integer.len() + fraction.len() + 2);
    if n.sign().is_negative() && !n.is_zero() {
        out.push('-');
    }
    out.push_str(integer);
    if !fraction.is_empty() {
        out.push('.');
        out.push_str(fraction);
    }
    out
}
