// ============================================================================
// Numeral Normalizer
// Decomposition into sign/integer/fraction and zero-padded alignment
// ============================================================================

use super::errors::{ArithmeticError, ArithmeticResult};
use super::validator::is_valid_numeral;
use std::fmt;

/// Sign of a numeral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Sign {
    #[default]
    Positive,
    Negative,
}

impl Sign {
    #[inline]
    pub const fn is_negative(self) -> bool {
        matches!(self, Sign::Negative)
    }

    /// The opposite sign.
    #[inline]
    pub const fn flipped(self) -> Self {
        match self {
            Sign::Positive => Sign::Negative,
            Sign::Negative => Sign::Positive,
        }
    }
}

/// A numeral split into its sign and its two digit runs.
///
/// Both runs hold ASCII digits only. The fractional run is empty when the
/// numeral has no decimal point; after [`AlignedPair::align`] the runs of
/// both operands have matching lengths.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DecomposedNumeral {
    sign: Sign,
    integer_digits: String,
    fractional_digits: String,
}

impl DecomposedNumeral {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Decompose a numeral that already passed [`is_valid_numeral`].
    ///
    /// The leading sign is consumed here and never re-examined. Calling this
    /// with unvalidated text gives a meaningless (but memory-safe) result;
    /// use [`DecomposedNumeral::parse`] when the token is untrusted.
    pub fn decompose(validated: &str) -> Self {
        debug_assert!(is_valid_numeral(validated), "unvalidated: {validated:?}");

        let (sign, body) = if let Some(rest) = validated.strip_prefix('-') {
            (Sign::Negative, rest)
        } else if let Some(rest) = validated.strip_prefix('+') {
            (Sign::Positive, rest)
        } else {
            (Sign::Positive, validated)
        };

        let (int_str, frac_str) = body.split_once('.').unwrap_or((body, ""));

        Self {
            sign,
            integer_digits: int_str.to_string(),
            fractional_digits: frac_str.to_string(),
        }
    }

    /// Build from digit runs produced by the arithmetic passes.
    pub(crate) fn from_digits(
        sign: Sign,
        integer_digits: String,
        fractional_digits: String,
    ) -> Self {
        Self {
            sign,
            integer_digits,
            fractional_digits,
        }
    }

    /// Validate then decompose.
    ///
    /// # Errors
    /// Returns `InvalidNumeral` if `text` is not a numeral.
    pub fn parse(text: &str) -> ArithmeticResult<Self> {
        if is_valid_numeral(text) {
            Ok(Self::decompose(text))
        } else {
            Err(ArithmeticError::invalid(text))
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub const fn sign(&self) -> Sign {
        self.sign
    }

    #[inline]
    pub fn integer_digits(&self) -> &str {
        &self.integer_digits
    }

    #[inline]
    pub fn fractional_digits(&self) -> &str {
        &self.fractional_digits
    }

    /// True when every digit is `0`, whatever the sign.
    pub fn is_zero(&self) -> bool {
        self.integer_digits
            .bytes()
            .chain(self.fractional_digits.bytes())
            .all(|b| b == b'0')
    }

    /// Same digits, opposite sign.
    pub fn negated(mut self) -> Self {
        self.sign = self.sign.flipped();
        self
    }
}

impl std::str::FromStr for DecomposedNumeral {
    type Err = ArithmeticError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Renders the digits as stored: no trimming, `-` only for a negative sign.
impl fmt::Display for DecomposedNumeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.sign.is_negative() {
            f.write_str("-")?;
        }
        f.write_str(&self.integer_digits)?;
        if !self.fractional_digits.is_empty() {
            write!(f, ".{}", self.fractional_digits)?;
        }
        Ok(())
    }
}

// ============================================================================
// Alignment
// ============================================================================

/// Two numerals zero-padded to identical shape.
///
/// Integer runs are left-padded and fractional runs right-padded, neither of
/// which changes the value. This is the only input the digit-wise passes
/// accept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignedPair {
    left: DecomposedNumeral,
    right: DecomposedNumeral,
}

impl AlignedPair {
    pub fn align(mut left: DecomposedNumeral, mut right: DecomposedNumeral) -> Self {
        let frac_width = left
            .fractional_digits
            .len()
            .max(right.fractional_digits.len());
        let int_width = left.integer_digits.len().max(right.integer_digits.len());

        for n in [&mut left, &mut right] {
            n.fractional_digits = format!("{:0<width$}", n.fractional_digits, width = frac_width);
            n.integer_digits = format!("{:0>width$}", n.integer_digits, width = int_width);
        }

        Self { left, right }
    }

    #[inline]
    pub fn left(&self) -> &DecomposedNumeral {
        &self.left
    }

    #[inline]
    pub fn right(&self) -> &DecomposedNumeral {
        &self.right
    }

    /// Width of the integer run shared by both sides.
    #[inline]
    pub fn integer_width(&self) -> usize {
        self.left.integer_digits.len()
    }

    /// Width of the fractional run shared by both sides.
    #[inline]
    pub fn fractional_width(&self) -> usize {
        self.left.fractional_digits.len()
    }

    pub fn into_parts(self) -> (DecomposedNumeral, DecomposedNumeral) {
        (self.left, self.right)
    }
}
