// ============================================================================
// Line Outcome
// Result of evaluating one input line
// ============================================================================

use crate::numeral::{ArithmeticError, ArithmeticResult};
use std::fmt;

#[cfg(feature = "serde")]
use serde::ser::{Serialize, SerializeStruct, Serializer};

/// What one numbered line produced: a result or an invalid-numeral diagnostic
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineOutcome {
    /// 1-based line number in the input
    pub line_number: usize,

    pub outcome: ArithmeticResult<String>,
}

impl LineOutcome {
    pub fn new(line_number: usize, outcome: ArithmeticResult<String>) -> Self {
        Self {
            line_number,
            outcome,
        }
    }

    #[inline]
    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }

    /// Computed value, if the line was valid
    pub fn value(&self) -> Option<&str> {
        self.outcome.as_deref().ok()
    }

    pub fn error(&self) -> Option<&ArithmeticError> {
        self.outcome.as_ref().err()
    }
}

/// Result text, or `Invalid number(s) found in line: N`
impl fmt::Display for LineOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            Ok(value) => f.write_str(value),
            Err(ArithmeticError::InvalidNumeral { .. }) => {
                write!(f, "Invalid number(s) found in line: {}", self.line_number)
            },
        }
    }
}

/// `{"line":N,"result":"..."}` or `{"line":N,"error":"..."}`
#[cfg(feature = "serde")]
impl Serialize for LineOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("LineOutcome", 2)?;
        state.serialize_field("line", &self.line_number)?;
        match &self.outcome {
            Ok(value) => state.serialize_field("result", value)?,
            Err(e) => state.serialize_field("error", &e.to_string())?,
        }
        state.end()
    }
}

/// Counts over a finished batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub lines_read: usize,
    pub evaluated: usize,
    pub invalid: usize,
}

impl BatchSummary {
    pub fn from_outcomes<'a>(
        lines_read: usize,
        outcomes: impl IntoIterator<Item = &'a LineOutcome>,
    ) -> Self {
        let mut summary = Self {
            lines_read,
            ..Self::default()
        };
        for outcome in outcomes {
            if outcome.is_ok() {
                summary.evaluated += 1;
            } else {
                summary.invalid += 1;
            }
        }
        summary
    }
}
