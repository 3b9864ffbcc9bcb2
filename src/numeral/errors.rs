// ============================================================================
// Arithmetic Errors
// Error types for numeral validation and batch configuration
// ============================================================================

use thiserror::Error;

/// Errors that can occur while evaluating a pair of numerals.
///
/// Arithmetic on validated, aligned operands cannot fail, so the only
/// failure is a token that is not a numeral.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum ArithmeticError {
    /// Token is not of the form `[sign]digits[.digits]`
    #[error("invalid numeral: {token:?}")]
    InvalidNumeral { token: String },
}

impl ArithmeticError {
    pub(crate) fn invalid(token: &str) -> Self {
        ArithmeticError::InvalidNumeral {
            token: token.to_string(),
        }
    }
}

/// Result type alias for arithmetic operations
pub type ArithmeticResult<T> = Result<T, ArithmeticError>;

/// Errors raised when a batch configuration is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// At least one worker is needed to evaluate lines
    #[error("worker count must be at least 1")]
    ZeroWorkers,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            ArithmeticError::invalid("1.2.3").to_string(),
            "invalid numeral: \"1.2.3\""
        );
        assert_eq!(
            ConfigError::ZeroWorkers.to_string(),
            "worker count must be at least 1"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(ArithmeticError::invalid("x"), ArithmeticError::invalid("x"));
        assert_ne!(ArithmeticError::invalid("x"), ArithmeticError::invalid("y"));
    }
}
