// ============================================================================
// Domain Models Module
// Batch configuration and per-line outcomes
// ============================================================================

pub mod config;
pub mod outcome;

pub use config::BatchConfig;
pub use outcome::{BatchSummary, LineOutcome};
