// ============================================================================
// Batch Configuration
// How a stream of numeral lines is evaluated
// ============================================================================

use crate::engine::Operation;
use crate::numeral::ConfigError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for evaluating a batch of lines
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BatchConfig {
    /// Operation applied to the two numerals of each line
    pub operation: Operation,

    /// Number of worker threads; 1 evaluates on the calling thread
    pub workers: usize,

    /// Skip blank lines instead of reporting them as invalid.
    /// Skipped lines still consume a line number.
    pub skip_blank_lines: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl BatchConfig {
    /// Sequential addition, blank lines reported as invalid
    pub fn new() -> Self {
        Self {
            operation: Operation::Add,
            workers: 1,
            skip_blank_lines: false,
        }
    }

    /// Builder method: Set the operation
    pub fn with_operation(mut self, operation: Operation) -> Self {
        self.operation = operation;
        self
    }

    /// Builder method: Set the worker count
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Builder method: Skip blank lines
    pub fn with_skip_blank_lines(mut self, skip: bool) -> Self {
        self.skip_blank_lines = skip;
        self
    }

    /// Validate configuration consistency
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.workers == 0 {
            return Err(ConfigError::ZeroWorkers);
        }
        Ok(())
    }

    /// Whether evaluation fans out to worker threads
    #[inline]
    pub fn is_parallel(&self) -> bool {
        self.workers > 1
    }
}
