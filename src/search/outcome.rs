//! Search result.

use std::time::Duration;

use super::ProfitHistogram;
use crate::models::Task;

/// The outcome of an exhaustive enumeration.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    /// Highest total profit over all complete assignments.
    pub best_profit: u64,
    /// Inclusion flag per task (aligned with the sorted task list) of the
    /// first assignment reaching `best_profit`.
    pub best_assignment: Vec<bool>,
    /// Number of complete assignments per total profit.
    pub histogram: ProfitHistogram,
    /// Number of complete assignments enumerated, the empty one included.
    pub valid_assignment_count: u128,
    /// Wall time spent enumerating.
    pub elapsed: Duration,
}

impl SearchOutcome {
    /// Indices of the tasks included in the best assignment.
    pub fn selected_tasks(&self) -> Vec<usize> {
        self.best_assignment
            .iter()
            .enumerate()
            .filter(|(_, &done)| done)
            .map(|(i, _)| i)
            .collect()
    }

    /// Profit of the best assignment scored against `tasks`.
    pub fn best_assignment_profit(&self, tasks: &[Task]) -> u64 {
        self.selected_tasks().iter().map(|&i| tasks[i].profit).sum()
    }

    /// Whether two outcomes agree on everything except timing.
    pub fn same_result(&self, other: &SearchOutcome) -> bool {
        self.best_profit == other.best_profit
            && self.best_assignment == other.best_assignment
            && self.histogram == other.histogram
            && self.valid_assignment_count == other.valid_assignment_count
    }
}
