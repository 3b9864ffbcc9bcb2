// ============================================================================
// Outcome Handler Interface
// Defines the contract for consuming per-line outcomes
// ============================================================================

use crate::domain::LineOutcome;
use parking_lot::Mutex;

/// Receives every outcome of a batch, in line order.
/// Implementations can print, log, collect, etc.
pub trait OutcomeHandler: Send + Sync {
    /// Handle one line outcome
    fn on_outcome(&self, outcome: &LineOutcome);

    /// Batch handler (optional optimization)
    fn on_outcomes(&self, outcomes: &[LineOutcome]) {
        for outcome in outcomes {
            self.on_outcome(outcome);
        }
    }
}

/// No-op handler for testing
pub struct NoOpOutcomeHandler;

impl OutcomeHandler for NoOpOutcomeHandler {
    fn on_outcome(&self, _outcome: &LineOutcome) {}
}

/// Logging handler
pub struct LoggingOutcomeHandler;

impl OutcomeHandler for LoggingOutcomeHandler {
    fn on_outcome(&self, outcome: &LineOutcome) {
        tracing::debug!(line = outcome.line_number, "outcome: {}", outcome);
    }
}

/// Keeps a copy of every outcome it sees
#[derive(Default)]
pub struct CollectingOutcomeHandler {
    outcomes: Mutex<Vec<LineOutcome>>,
}

impl CollectingOutcomeHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain collected outcomes
    pub fn take(&self) -> Vec<LineOutcome> {
        std::mem::take(&mut *self.outcomes.lock())
    }

    pub fn len(&self) -> usize {
        self.outcomes.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl OutcomeHandler for CollectingOutcomeHandler {
    fn on_outcome(&self, outcome: &LineOutcome) {
        self.outcomes.lock().push(outcome.clone());
    }
}
