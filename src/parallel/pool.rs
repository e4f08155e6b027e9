//! Rayon thread pool configuration for draw simulation.
//!
//! Use [WorkerPool::install] to run a simulation with a fixed number of threads, or rely on
//! Rayon's default (all CPU cores).

use rayon::ThreadPoolBuilder;

/// Configures how many worker threads run simulation batches.
#[derive(Debug, Clone, Copy, Default)]
pub struct WorkerPool {
    /// Number of worker threads. If 0, use Rayon default (num_cpus).
    pub workers: usize,
}

impl WorkerPool {
    /// Use exactly `n` worker threads.
    pub fn with_workers(n: usize) -> Self {
        Self { workers: n }
    }

    /// Run a closure on a thread pool with this worker count. If [workers](WorkerPool::workers)
    /// is 0, or a dedicated pool cannot be built, uses the global Rayon pool.
    pub fn install<F, R>(&self, f: F) -> R
    where
        F: FnOnce() -> R + Send,
        R: Send,
    {
        if self.workers == 0 {
            return f();
        }
        match ThreadPoolBuilder::new().num_threads(self.workers).build() {
            Ok(pool) => pool.install(f),
            Err(err) => {
                tracing::warn!(workers = self.workers, %err, "falling back to global rayon pool");
                f()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rayon::prelude::*;

    #[test]
    fn dedicated_pool_runs_closure() {
        let pool = WorkerPool::with_workers(2);
        let threads = pool.install(rayon::current_num_threads);
        assert_eq!(threads, 2);
        let sum: u64 = pool.install(|| (1..=100u64).into_par_iter().sum());
        assert_eq!(sum, 5050);
    }
}
