// ============================================================================
// Batch Module
// Line-oriented front of the arithmetic engine
// ============================================================================

mod processor;

pub use processor::{
    evaluate_line, evaluate_numbered_parallel, lossy_lines, split_operands, BatchProcessor,
};
