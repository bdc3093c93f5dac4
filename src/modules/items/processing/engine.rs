use super::aggregator::BatchAggregator;
use super::reporter::FailureReporter;
use crate::modules::items::domain::{Item, ItemRepository};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::WorkerPool;
use crate::log_info;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Anything that can run a full item batch
#[async_trait]
pub trait BatchProcessor: Send + Sync {
    /// Resolves with the processed items; errors only when the batch
    /// itself could not be aggregated.
    async fn process_all(&self) -> AppResult<Vec<Item>>;
}

/// Public entry point for batch processing.
///
/// Takes one snapshot of the store's IDs per call and hands it to the
/// aggregator. Per-item failures never fail the returned future.
pub struct BatchEngine {
    repository: Arc<dyn ItemRepository>,
    pool: WorkerPool,
    aggregator: BatchAggregator,
}

impl BatchEngine {
    pub fn new(
        repository: Arc<dyn ItemRepository>,
        pool: WorkerPool,
        reporter: Arc<dyn FailureReporter>,
    ) -> Self {
        let aggregator = BatchAggregator::new(Arc::clone(&repository), pool.clone(), reporter);
        Self {
            repository,
            pool,
            aggregator,
        }
    }

    pub async fn process_all(&self) -> AppResult<Vec<Item>> {
        let repo = Arc::clone(&self.repository);
        let ids = self
            .pool
            .submit(move || repo.find_all_ids())
            .await
            .map_err(|e| AppError::AggregationFault(format!("ID snapshot failed: {}", e)))?;

        log_info!("Processing batch of {} items", ids.len());
        self.aggregator.aggregate(ids).await
    }

    /// Start a batch on the pool and return right away; the handle resolves
    /// to the same result `process_all` would.
    pub fn dispatch(self: &Arc<Self>) -> JoinHandle<AppResult<Vec<Item>>> {
        let engine = Arc::clone(self);
        self.pool.spawn(async move { engine.process_all().await })
    }
}

#[async_trait]
impl BatchProcessor for BatchEngine {
    async fn process_all(&self) -> AppResult<Vec<Item>> {
        BatchEngine::process_all(self).await
    }
}
