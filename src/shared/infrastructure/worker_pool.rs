use crate::log_info;
use crate::shared::errors::{AppError, AppResult};
use std::env;
use std::future::Future;
use tokio::runtime::{Builder, Handle, Runtime};
use tokio::task::JoinHandle;

pub const WORKER_THREADS_VAR: &str = "ITEMS_WORKER_THREADS";
pub const MAX_BLOCKING_THREADS_VAR: &str = "ITEMS_MAX_BLOCKING_THREADS";

/// Sizing for the process-wide worker runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolConfig {
    /// Async worker threads driving futures
    pub worker_threads: usize,
    /// Upper bound on threads running blocking store calls
    pub max_blocking_threads: usize,
}

impl Default for PoolConfig {
    /// Calculate pool sizing based on system resources
    fn default() -> Self {
        let cpu_count = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(4);

        // Store calls mostly wait on I/O, so blocking threads are over-provisioned
        Self {
            worker_threads: cpu_count,
            max_blocking_threads: cpu_count * 4,
        }
    }
}

impl PoolConfig {
    /// Read the configuration from process environment variables
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Read the configuration through an arbitrary variable lookup; unset
    /// variables fall back to the CPU-derived defaults.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let config = Self {
            worker_threads: Self::parse_var(WORKER_THREADS_VAR, lookup(WORKER_THREADS_VAR))?
                .unwrap_or(defaults.worker_threads),
            max_blocking_threads: Self::parse_var(
                MAX_BLOCKING_THREADS_VAR,
                lookup(MAX_BLOCKING_THREADS_VAR),
            )?
            .unwrap_or(defaults.max_blocking_threads),
        };

        config.validate()?;
        Ok(config)
    }

    fn parse_var(name: &str, raw: Option<String>) -> AppResult<Option<usize>> {
        match raw {
            None => Ok(None),
            Some(value) => value.trim().parse::<usize>().map(Some).map_err(|e| {
                AppError::ConfigError(format!("{} must be a positive integer: {}", name, e))
            }),
        }
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.worker_threads == 0 {
            return Err(AppError::ConfigError(format!(
                "{} must be at least 1",
                WORKER_THREADS_VAR
            )));
        }
        if self.max_blocking_threads == 0 {
            return Err(AppError::ConfigError(format!(
                "{} must be at least 1",
                MAX_BLOCKING_THREADS_VAR
            )));
        }
        Ok(())
    }

    /// Build the multi-threaded runtime backing the worker pool
    pub fn build_runtime(&self) -> AppResult<Runtime> {
        let runtime = Builder::new_multi_thread()
            .worker_threads(self.worker_threads)
            .max_blocking_threads(self.max_blocking_threads)
            .thread_name("itemflow-worker")
            .enable_all()
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to build worker runtime: {}", e)))?;

        log_info!(
            "Worker runtime initialized with {} worker threads, max {} blocking threads",
            self.worker_threads,
            self.max_blocking_threads
        );

        Ok(runtime)
    }
}

/// Shared execution substrate for batch tasks and store calls.
///
/// Blocking work lands on the runtime's blocking thread pool, which grows on
/// demand up to its configured bound, so one slow store call never holds up
/// independent work. Cloning is cheap; every clone submits to the same runtime.
#[derive(Debug, Clone)]
pub struct WorkerPool {
    handle: Handle,
}

impl WorkerPool {
    pub fn new(handle: Handle) -> Self {
        Self { handle }
    }

    /// Pool over the runtime the caller is currently running on
    pub fn current() -> AppResult<Self> {
        Handle::try_current()
            .map(Self::new)
            .map_err(|e| AppError::InternalError(format!("No Tokio runtime available: {}", e)))
    }

    /// Submit one unit of blocking work; the handle resolves once it is terminal.
    pub fn submit<F, T>(&self, work: F) -> JoinHandle<T>
    where
        F: FnOnce() -> T + Send + 'static,
        T: Send + 'static,
    {
        self.handle.spawn_blocking(work)
    }

    /// Run a future on the pool's runtime without blocking the caller
    pub fn spawn<F>(&self, future: F) -> JoinHandle<F::Output>
    where
        F: Future + Send + 'static,
        F::Output: Send + 'static,
    {
        self.handle.spawn(future)
    }

    /// Submit blocking work and wait for its value
    pub async fn run_blocking<F, T>(&self, work: F) -> AppResult<T>
    where
        F: FnOnce() -> T + Send + 'static,
        T: Send + 'static,
    {
        Ok(self.submit(work).await?)
    }
}
