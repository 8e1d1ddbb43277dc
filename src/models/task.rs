//! Task model.
//!
//! A task is a unit of work bounded by a starting and an ending date,
//! worth a fixed profit when some worker performs it.
//!
//! # Time Representation
//! Dates are integer days. Both endpoints are inclusive: a task spanning
//! `[3, 5]` keeps its worker busy on days 3, 4 and 5.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A task that may be performed by at most one worker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// First day of work (inclusive).
    pub starting_date: i64,
    /// Last day of work (inclusive). Never earlier than `starting_date`.
    pub ending_date: i64,
    /// Profit earned if the task is performed.
    pub profit: u64,
    /// Worker currently performing this task. `None` = unassigned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<usize>,
}

impl Task {
    /// Creates an unassigned task with zero profit.
    pub fn new(starting_date: i64, ending_date: i64) -> Self {
        Self {
            starting_date,
            ending_date,
            profit: 0,
            assigned_to: None,
        }
    }

    /// Sets the profit.
    pub fn with_profit(mut self, profit: u64) -> Self {
        self.profit = profit;
        self
    }

    /// Whether the two date ranges share at least one day.
    #[inline]
    pub fn overlaps(&self, other: &Task) -> bool {
        self.starting_date <= other.ending_date && other.starting_date <= self.ending_date
    }

    /// Whether a worker currently holds this task.
    #[inline]
    pub fn is_assigned(&self) -> bool {
        self.assigned_to.is_some()
    }

    /// Ordering used for the search: by starting date, then ending date.
    pub fn date_order(&self, other: &Task) -> Ordering {
        self.starting_date
            .cmp(&other.starting_date)
            .then(self.ending_date.cmp(&other.ending_date))
    }
}
