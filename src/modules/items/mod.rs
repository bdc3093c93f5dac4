/// Item store and batch processing module
///
/// Architecture:
/// - Domain: Item entity, processing outcomes and repository trait
/// - Infrastructure: in-memory repository implementation
/// - Application: CRUD service over the repository
/// - Processing: fan-out/fan-in batch engine
/// - Commands: request/response binding for transports
pub mod application;
pub mod commands;
pub mod domain;
pub mod infrastructure;
pub mod processing;

// Re-exports for easy access
pub use application::ItemService;
pub use commands::{CommandResponse, ItemCommands, ItemRequest};
pub use domain::{Item, ItemId, ItemRepository, ItemStatus, Outcome, ProcessingError};
pub use infrastructure::InMemoryItemRepository;
pub use processing::{
    BatchAggregator, BatchEngine, BatchProcessor, BatchSummary, FailureReporter,
    LogFailureReporter,
};
