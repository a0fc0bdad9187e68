//! Configuration for running batches of grocery store simulations
//!
//! A single simulation is always sequential. These settings only decide how
//! independent replicas are spread over threads.

/// Enumeration of supported concurrency modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConcurrencyMode {
    /// Replicas run one after another on the calling thread
    #[default]
    Sequential,
    /// Replicas run on a Rayon thread pool
    Rayon,
}

/// Configuration for replica execution
#[derive(Debug, Clone, Default)]
pub struct SimulationConfig {
    /// The concurrency mode to use for execution
    pub concurrency_mode: ConcurrencyMode,
    /// The size of the thread pool for parallel execution
    /// Only relevant when concurrency_mode is Rayon
    pub thread_pool_size: Option<usize>,
}

impl SimulationConfig {
    /// Sequential execution with no thread pool
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_concurrency(mut self, mode: ConcurrencyMode) -> Self {
        self.concurrency_mode = mode;
        self
    }

    /// Set the thread pool size for parallel execution
    ///
    /// # Note
    /// This setting only affects execution when concurrency_mode is Rayon
    pub fn with_thread_pool_size(mut self, size: usize) -> Self {
        self.thread_pool_size = Some(size);
        self
    }
}
