use crate::log_warn;
use crate::modules::items::domain::{ItemId, ProcessingError};

/// Side channel for per-item failures absorbed by a batch.
///
/// This is the only place individual failures surface outside the batch.
pub trait FailureReporter: Send + Sync {
    fn report(&self, id: ItemId, cause: &ProcessingError);
}

/// Reports failures through the application log
#[derive(Debug, Clone, Copy, Default)]
pub struct LogFailureReporter;

impl FailureReporter for LogFailureReporter {
    fn report(&self, id: ItemId, cause: &ProcessingError) {
        log_warn!("Error processing item {}: {}", id, cause);
    }
}
