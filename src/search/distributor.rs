//! Static interleaved striping of window indices across workers

use crate::core::error::{Result, SearchError};

/// Hands worker `w` the indices `w, w + W, w + 2W, ...` below the total
///
/// Every window costs the same (one generation, one prefilter scan), so a
/// fixed stripe balances well and needs no coordination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkDistributor {
    workers: usize,
    total: u64,
}

impl WorkDistributor {
    pub fn new(workers: usize, total: u64) -> Result<Self> {
        if workers == 0 {
            return Err(SearchError::InvalidConfig("workers must be positive".into()));
        }
        Ok(Self { workers, total })
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    /// Indices assigned to `worker`, ascending
    ///
    /// Empty for a worker id outside the pool.
    pub fn stripe(&self, worker: usize) -> impl Iterator<Item = u64> {
        let start = if worker < self.workers {
            worker as u64
        } else {
            self.total
        };
        (start..self.total).step_by(self.workers)
    }

    /// How many indices `worker` will see
    pub fn stripe_len(&self, worker: usize) -> u64 {
        let worker = worker as u64;
        if worker >= self.workers as u64 || worker >= self.total {
            return 0;
        }
        (self.total - worker - 1) / self.workers as u64 + 1
    }
}
