// Shared kernel used by every module

pub mod errors; // Shared error types
pub mod infrastructure; // Shared infrastructure (worker pool)
pub mod utils; // Shared utilities (logging, validation)

// Re-exports for convenience
pub use infrastructure::{PoolConfig, WorkerPool};
