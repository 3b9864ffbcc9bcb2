// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod outcome_handler;

pub use outcome_handler::{
    CollectingOutcomeHandler, LoggingOutcomeHandler, NoOpOutcomeHandler, OutcomeHandler,
};
