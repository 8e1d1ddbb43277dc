//! Best-solution and histogram bookkeeping.

use std::time::Duration;

use super::{ProfitHistogram, SearchOutcome};

/// Result state updated at every leaf of the enumeration.
///
/// Never rolled back: the search only ever adds to it.
#[derive(Debug, Clone)]
pub struct SolutionTracker {
    best_profit: u64,
    best_assignment: Vec<bool>,
    histogram: ProfitHistogram,
    valid_assignment_count: u128,
}

impl SolutionTracker {
    /// Creates an empty tracker for `task_count` tasks.
    ///
    /// The best solution starts as the empty assignment with profit 0.
    pub fn new(task_count: usize) -> Self {
        Self {
            best_profit: 0,
            best_assignment: vec![false; task_count],
            histogram: ProfitHistogram::new(),
            valid_assignment_count: 0,
        }
    }

    /// Records a complete assignment.
    ///
    /// The best assignment is replaced only on strict improvement, so the
    /// first assignment reaching the best profit is the one kept.
    pub fn record_leaf(&mut self, profit: u64, assignment: &[bool]) {
        self.valid_assignment_count += 1;
        self.histogram.record(profit);
        if profit > self.best_profit {
            self.best_profit = profit;
            self.best_assignment.copy_from_slice(assignment);
        }
    }

    /// Best profit recorded so far.
    #[cfg(test)]
    fn best_profit(&self) -> u64 {
        self.best_profit
    }

    /// Number of leaves recorded so far.
    #[cfg(test)]
    fn valid_assignment_count(&self) -> u128 {
        self.valid_assignment_count
    }

    /// Finishes tracking.
    pub fn into_outcome(self, elapsed: Duration) -> SearchOutcome {
        SearchOutcome {
            best_profit: self.best_profit,
            best_assignment: self.best_assignment,
            histogram: self.histogram,
            valid_assignment_count: self.valid_assignment_count,
            elapsed,
        }
    }
}
