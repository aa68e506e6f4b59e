//! Worker pool owned by a parallel searcher.

use tracing::debug;

use crate::error::SearchError;

/// Fork-join worker pool scoped to the searcher that owns it.
///
/// Built when the searcher is constructed and shut down when it is
/// dropped; forks issued inside [`install`](SearchPool::install) run on
/// these workers and never on rayon's global pool.
pub struct SearchPool {
    pool: rayon::ThreadPool,
}

impl SearchPool {
    /// Start a pool with `threads` workers (`0` picks one per logical CPU).
    pub fn new(threads: usize) -> Result<Self, SearchError> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("jamboree-worker-{i}"))
            .build()?;
        debug!(threads = pool.current_num_threads(), "search pool started");
        Ok(Self { pool })
    }

    /// Number of worker threads.
    pub fn num_threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Run `op` on a worker; `rayon::join`/`rayon::scope` inside it fork
    /// onto this pool.
    pub fn install<OP, T>(&self, op: OP) -> T
    where
        OP: FnOnce() -> T + Send,
        T: Send,
    {
        self.pool.install(op)
    }
}

impl Drop for SearchPool {
    fn drop(&mut self) {
        debug!(threads = self.num_threads(), "search pool shutting down");
    }
}

impl std::fmt::Debug for SearchPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchPool")
            .field("num_threads", &self.num_threads())
            .finish()
    }
}
