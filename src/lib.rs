// ============================================================================
// Decimal Strings Library
// Arbitrary-precision signed decimal addition and subtraction over text
// ============================================================================

//! # Decimal Strings
//!
//! Adds and subtracts signed decimal numerals of any length without ever
//! converting them to a fixed-width numeric type.
//!
//! ## Features
//!
//! - **Strict numeral syntax**: `[+|-]digits[.digits]`, one decimal point with
//!   digits on both sides
//! - **Schoolbook carry/borrow passes** over zero-padded digit runs
//! - **Canonical output**: no redundant zeros, never a signed zero
//! - **Line batches** with per-line diagnostics and optional worker threads
//!
//! ## Example
//!
//! ```rust
//! use decimal_strings::prelude::*;
//! use std::io::Cursor;
//! use std::sync::Arc;
//!
//! assert_eq!(evaluate("99.9", "0.1").unwrap(), "100");
//! assert_eq!(evaluate("-5", "5").unwrap(), "0");
//! assert!(!is_valid_numeral(".5"));
//!
//! let processor = BatchProcessor::new(BatchConfig::new(), Arc::new(NoOpOutcomeHandler)).unwrap();
//! let outcomes = processor
//!     .process_reader(Cursor::new("1.5 2.25\n1.2.3 4\n"))
//!     .unwrap();
//!
//! assert_eq!(outcomes[0].to_string(), "3.75");
//! assert_eq!(outcomes[1].to_string(), "Invalid number(s) found in line: 2");
//! ```

pub mod batch;
pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeral;
pub mod utils;

// Re-exports for convenience
pub mod prelude {
    pub use crate::batch::{evaluate_line, split_operands, BatchProcessor};
    pub use crate::domain::{BatchConfig, BatchSummary, LineOutcome};
    pub use crate::engine::{difference, evaluate, negate, Operation};
    pub use crate::interfaces::{
        CollectingOutcomeHandler, LoggingOutcomeHandler, NoOpOutcomeHandler, OutcomeHandler,
    };
    pub use crate::numeral::{
        compare_magnitude, is_valid_numeral, AlignedPair, ArithmeticError, ArithmeticResult,
        ConfigError, DecomposedNumeral, Sign,
    };
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use std::io::Cursor;
    use std::sync::Arc;

    #[test]
    fn test_end_to_end_file_like_input() {
        let input = "5 3\n-5 -3\n10.0 -0.01\n++5 1\n99999999999999999999 1\n";
        let handler = Arc::new(CollectingOutcomeHandler::new());
        let processor = BatchProcessor::new(BatchConfig::new(), handler.clone()).unwrap();

        let outcomes = processor.process_reader(Cursor::new(input)).unwrap();
        let rendered: Vec<String> = outcomes.iter().map(|o| o.to_string()).collect();

        assert_eq!(
            rendered,
            vec![
                "8",
                "-8",
                "9.99",
                "Invalid number(s) found in line: 4",
                "100000000000000000000",
            ]
        );
        assert_eq!(handler.len(), 5);

        let summary = BatchSummary::from_outcomes(5, &outcomes);
        assert_eq!(summary.evaluated, 4);
        assert_eq!(summary.invalid, 1);
    }

    #[test]
    fn test_logging_handler_runs() {
        let processor =
            BatchProcessor::new(BatchConfig::new(), Arc::new(LoggingOutcomeHandler)).unwrap();
        let outcomes = processor.process_lines(&["1 1", "x y"]);
        assert_eq!(outcomes[0].value(), Some("2"));
    }

    #[test]
    fn test_decomposed_pipeline() {
        let a: DecomposedNumeral = "-12.5".parse().unwrap();
        let b: DecomposedNumeral = "2.75".parse().unwrap();
        let pair = AlignedPair::align(a, b);
        assert_eq!(
            compare_magnitude(pair.left(), pair.right()),
            std::cmp::Ordering::Greater
        );
        let (a, b) = pair.into_parts();
        assert_eq!(crate::engine::signed_sum(a, b), "-9.75");
    }
}
