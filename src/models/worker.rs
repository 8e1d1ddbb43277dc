//! Worker pool model.
//!
//! Workers are interchangeable: they carry no skills or calendars, only
//! the date until which they are busy. A worker is identified by its
//! index in the pool.

/// Busy-until state of a fixed pool of interchangeable workers.
///
/// `None` means the worker is idle (never assigned, or every assignment
/// has been rolled back).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerPool {
    busy_until: Vec<Option<i64>>,
}

impl WorkerPool {
    /// Creates a pool of `count` idle workers.
    pub fn new(count: usize) -> Self {
        Self {
            busy_until: vec![None; count],
        }
    }

    /// Number of workers.
    pub fn len(&self) -> usize {
        self.busy_until.len()
    }

    /// Whether the pool has no workers.
    pub fn is_empty(&self) -> bool {
        self.busy_until.is_empty()
    }

    /// Last busy date of a worker, `None` if idle.
    pub fn busy_until(&self, worker: usize) -> Option<i64> {
        self.busy_until[worker]
    }

    /// Whether a worker holds no task at all.
    pub fn is_idle(&self, worker: usize) -> bool {
        self.busy_until[worker].is_none()
    }

    /// Lowest-indexed worker free on `starting_date` (first-fit).
    ///
    /// A worker is free if it is idle or its last task ends strictly
    /// before `starting_date`.
    pub fn first_available(&self, starting_date: i64) -> Option<usize> {
        self.busy_until
            .iter()
            .position(|busy| busy.is_none_or(|until| until < starting_date))
    }

    /// Marks a worker busy until `ending_date`, returning its prior state.
    pub fn occupy(&mut self, worker: usize, ending_date: i64) -> Option<i64> {
        self.busy_until[worker].replace(ending_date)
    }

    /// Restores a worker to a state previously returned by [`occupy`](Self::occupy).
    pub fn release(&mut self, worker: usize, prior: Option<i64>) {
        self.busy_until[worker] = prior;
    }

    /// Marks every worker idle.
    pub fn reset(&mut self) {
        self.busy_until.iter_mut().for_each(|busy| *busy = None);
    }
}
