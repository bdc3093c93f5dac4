/// Concurrent, fault-isolated batch processing of stored items
///
/// Architecture:
/// - Task: one item fetched, marked processed and saved
/// - Aggregator: fans tasks out onto the worker pool and folds the outcomes
/// - Engine: public entry point taking the ID snapshot
/// - Reporter: side channel for absorbed per-item failures
pub mod aggregator;
pub mod engine;
pub mod reporter;
pub mod task;

pub use aggregator::{BatchAggregator, BatchSummary};
pub use engine::{BatchEngine, BatchProcessor};
pub use reporter::{FailureReporter, LogFailureReporter};
pub use task::process_item;
