/// Test helper functions, store doubles and service builders
use itemflow_lib::modules::items::{
    BatchEngine, FailureReporter, InMemoryItemRepository, Item, ItemId, ItemRepository,
    ProcessingError,
};
use itemflow_lib::shared::errors::{AppError, AppResult};
use itemflow_lib::shared::WorkerPool;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Which kind of failure a report carried
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    NotFound,
    Persistence,
    Panicked,
}

/// Reporter that remembers every failure it was handed
#[derive(Default)]
pub struct RecordingReporter {
    reports: Mutex<Vec<(ItemId, ReportKind, String)>>,
}

impl RecordingReporter {
    pub fn reports(&self) -> Vec<(ItemId, ReportKind, String)> {
        self.reports.lock().unwrap().clone()
    }

    pub fn kinds(&self) -> Vec<(ItemId, ReportKind)> {
        let mut kinds: Vec<_> = self
            .reports()
            .into_iter()
            .map(|(id, kind, _)| (id, kind))
            .collect();
        kinds.sort_by_key(|(id, _)| *id);
        kinds
    }
}

impl FailureReporter for RecordingReporter {
    fn report(&self, id: ItemId, cause: &ProcessingError) {
        let kind = match cause {
            ProcessingError::NotFound(_) => ReportKind::NotFound,
            ProcessingError::Persistence { .. } => ReportKind::Persistence,
            ProcessingError::Panicked { .. } => ReportKind::Panicked,
        };
        self.reports
            .lock()
            .unwrap()
            .push((id, kind, cause.to_string()));
    }
}

/// Store double wrapping the in-memory store: it can advertise IDs that do
/// not exist, fail saves, panic on lookups and sleep on every call.
pub struct ScriptedRepository {
    inner: InMemoryItemRepository,
    phantom_ids: Vec<ItemId>,
    failing_saves: HashSet<ItemId>,
    panicking_lookups: HashSet<ItemId>,
    latency: Option<Duration>,
}

impl ScriptedRepository {
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            inner: InMemoryItemRepository::with_items(items).unwrap(),
            phantom_ids: Vec::new(),
            failing_saves: HashSet::new(),
            panicking_lookups: HashSet::new(),
            latency: None,
        }
    }

    /// IDs reported by `find_all_ids` that have no item behind them
    pub fn with_phantom_ids(mut self, ids: &[ItemId]) -> Self {
        self.phantom_ids.extend_from_slice(ids);
        self
    }

    pub fn failing_save_for(mut self, ids: &[ItemId]) -> Self {
        self.failing_saves.extend(ids.iter().copied());
        self
    }

    pub fn panicking_lookup_for(mut self, ids: &[ItemId]) -> Self {
        self.panicking_lookups.extend(ids.iter().copied());
        self
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    fn pause(&self) {
        if let Some(latency) = self.latency {
            std::thread::sleep(latency);
        }
    }
}

impl ItemRepository for ScriptedRepository {
    fn find_all(&self) -> Vec<Item> {
        self.inner.find_all()
    }

    fn find_all_ids(&self) -> Vec<ItemId> {
        let mut ids = self.inner.find_all_ids();
        ids.extend(self.phantom_ids.iter().copied());
        ids
    }

    fn find_by_id(&self, id: ItemId) -> Option<Item> {
        self.pause();
        if self.panicking_lookups.contains(&id) {
            panic!("lookup exploded for item {}", id);
        }
        self.inner.find_by_id(id)
    }

    fn save(&self, item: Item) -> AppResult<Item> {
        self.pause();
        match item.id {
            Some(id) if self.failing_saves.contains(&id) => {
                Err(AppError::DatabaseError("DB Error".to_string()))
            }
            _ => self.inner.save(item),
        }
    }

    fn delete_by_id(&self, id: ItemId) -> AppResult<()> {
        self.inner.delete_by_id(id)
    }
}

pub struct TestEngine {
    pub engine: Arc<BatchEngine>,
    pub reporter: Arc<RecordingReporter>,
}

/// Build an engine over `repository` on the current test runtime
pub fn build_engine(repository: Arc<dyn ItemRepository>) -> TestEngine {
    let reporter = Arc::new(RecordingReporter::default());
    let pool = WorkerPool::current().expect("tests run inside a Tokio runtime");
    let engine = Arc::new(BatchEngine::new(repository, pool, reporter.clone()));
    TestEngine { engine, reporter }
}
