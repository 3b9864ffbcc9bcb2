// ============================================================================
// Utilities Module
// Logging setup shared by the binary and tests
// ============================================================================

#[cfg(feature = "logging")]
pub mod logger;

#[cfg(feature = "logging")]
pub use logger::init_cli_logger;
