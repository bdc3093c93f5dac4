/// Fan-out/fan-in over one batch of item IDs
///
/// One task per ID goes to the worker pool. The aggregator waits for every
/// task to be terminal, then keeps the successes and reports the failures.
use super::reporter::FailureReporter;
use super::task::process_item;
use crate::modules::items::domain::{Item, ItemId, ItemRepository, Outcome, ProcessingError};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::{LogContext, TimedOperation};
use crate::shared::WorkerPool;
use crate::log_debug;
use futures::future;
use std::any::Any;
use std::sync::Arc;
use tokio::task::JoinError;

/// Counts for one finished batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub dispatched: usize,
    pub succeeded: usize,
    pub failed: usize,
}

pub struct BatchAggregator {
    repository: Arc<dyn ItemRepository>,
    pool: WorkerPool,
    reporter: Arc<dyn FailureReporter>,
}

impl BatchAggregator {
    pub fn new(
        repository: Arc<dyn ItemRepository>,
        pool: WorkerPool,
        reporter: Arc<dyn FailureReporter>,
    ) -> Self {
        Self {
            repository,
            pool,
            reporter,
        }
    }

    /// Process `ids` and return the successfully processed items, in `ids` order
    pub async fn aggregate(&self, ids: Vec<ItemId>) -> AppResult<Vec<Item>> {
        let (items, _) = self.aggregate_with_summary(ids).await?;
        Ok(items)
    }

    pub async fn aggregate_with_summary(
        &self,
        ids: Vec<ItemId>,
    ) -> AppResult<(Vec<Item>, BatchSummary)> {
        if ids.is_empty() {
            log_debug!("Batch: nothing to dispatch");
            return Ok((Vec::new(), BatchSummary::default()));
        }

        let timer = TimedOperation::new("batch processing");

        let handles: Vec<_> = ids
            .iter()
            .map(|&id| {
                let repo = Arc::clone(&self.repository);
                self.pool.submit(move || process_item(repo.as_ref(), id))
            })
            .collect();

        // Nothing is surfaced until every handle is terminal
        let joined = future::join_all(handles).await;

        let outcomes = ids
            .iter()
            .zip(joined)
            .map(|(&id, result)| Self::settle(id, result))
            .collect::<AppResult<Vec<Outcome>>>()?;

        let (items, summary) = self.partition(outcomes);

        LogContext::batch_summary(summary.dispatched, summary.succeeded, summary.failed);
        timer.finish_with_info(&format!("{} items", summary.dispatched));

        Ok((items, summary))
    }

    /// Turn a joined task handle into an outcome. A panic belongs to its item;
    /// any other join failure means the pool itself gave out.
    fn settle(id: ItemId, result: Result<Outcome, JoinError>) -> AppResult<Outcome> {
        match result {
            Ok(outcome) => Ok(outcome),
            Err(err) if err.is_panic() => Ok(Outcome::failure(ProcessingError::Panicked {
                id,
                message: panic_message(err.into_panic()),
            })),
            Err(err) => Err(AppError::AggregationFault(format!(
                "task for item {} did not complete: {}",
                id, err
            ))),
        }
    }

    fn partition(&self, outcomes: Vec<Outcome>) -> (Vec<Item>, BatchSummary) {
        let mut summary = BatchSummary {
            dispatched: outcomes.len(),
            ..BatchSummary::default()
        };
        let mut items = Vec::with_capacity(outcomes.len());

        for outcome in outcomes {
            match outcome {
                Outcome::Success(item) => {
                    summary.succeeded += 1;
                    items.push(item);
                }
                Outcome::Failure { id, cause } => {
                    summary.failed += 1;
                    self.reporter.report(id, &cause);
                }
            }
        }

        (items, summary)
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
