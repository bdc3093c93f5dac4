/// Shared infrastructure concerns
///
/// This module contains infrastructure that is shared across
/// multiple bounded contexts (modules).
pub mod worker_pool;

// Re-exports for convenience
pub use worker_pool::{PoolConfig, WorkerPool};
