//! Exhaustive include/exclude enumeration.
//!
//! # Algorithm
//!
//! Depth-first over the sorted task list, one decision per task:
//! 1. Exclude the task and recurse.
//! 2. Include it on the lowest-indexed worker free on its starting date
//!    (first-fit) and recurse, then restore the worker, the running
//!    profit and the inclusion flag. Skipped if no worker is free.
//!
//! Every fully decided assignment is a leaf recorded by the
//! [`SolutionTracker`]. Recursion depth equals the task count.
//!
//! # Complexity
//! O(2^T * P) time, O(T + P + distinct profits) space.

use std::time::Instant;

use log::debug;

use super::{SearchOutcome, SolutionTracker};
use crate::models::{Instance, Task, WorkerPool};
use crate::validation;

/// Brute-force enumerator of every feasible task subset.
///
/// # Example
///
/// ```
/// use u_jobselect::models::{Instance, Task};
/// use u_jobselect::search::SearchEngine;
///
/// let instance = Instance::new(
///     vec![Task::new(0, 1).with_profit(5), Task::new(2, 3).with_profit(7)],
///     1,
/// ).unwrap();
/// let outcome = SearchEngine::new(&instance).enumerate();
/// assert_eq!(outcome.best_profit, 12);
/// assert_eq!(outcome.valid_assignment_count, 4);
/// ```
#[derive(Debug, Clone)]
pub struct SearchEngine {
    tasks: Vec<Task>,
    workers: WorkerPool,
    current_assignment: Vec<bool>,
    current_profit: u64,
}

impl SearchEngine {
    /// Creates an engine for a validated instance.
    pub fn new(instance: &Instance) -> Self {
        Self::from_parts(instance.tasks(), instance.worker_count())
    }

    /// Creates an engine from a raw task list.
    ///
    /// The caller guarantees the preconditions normally enforced by
    /// [`Instance`]: tasks sorted by `(starting_date, ending_date)`,
    /// `starting_date <= ending_date` and at least one worker. They are
    /// only checked in debug builds.
    pub fn from_parts(tasks: &[Task], worker_count: usize) -> Self {
        debug_assert!(worker_count > 0, "at least one worker is required");
        debug_assert!(validation::is_sorted(tasks), "tasks must be sorted");
        debug_assert!(
            tasks.iter().all(|t| t.starting_date <= t.ending_date),
            "tasks must not end before they start"
        );
        debug_assert!(
            validation::checked_total_profit(tasks).is_some(),
            "sum of profits must fit in a u64"
        );

        Self {
            tasks: tasks.to_vec(),
            workers: WorkerPool::new(worker_count),
            current_assignment: vec![false; tasks.len()],
            current_profit: 0,
        }
    }

    /// Working copy of the tasks. Every task is unassigned outside of
    /// [`enumerate`](Self::enumerate).
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Number of workers.
    pub fn worker_count(&self) -> usize {
        self.workers.len()
    }

    /// Enumerates every feasible assignment and returns the best one
    /// together with the profit histogram and the leaf count.
    ///
    /// Repeated calls return identical results.
    pub fn enumerate(&mut self) -> SearchOutcome {
        self.workers.reset();
        self.current_assignment.iter_mut().for_each(|f| *f = false);
        self.current_profit = 0;
        for task in &mut self.tasks {
            task.assigned_to = None;
        }

        let mut tracker = SolutionTracker::new(self.tasks.len());

        debug!(
            "Enumerating {} tasks on {} workers",
            self.tasks.len(),
            self.workers.len()
        );
        let started = Instant::now();
        self.descend(0, &mut tracker);
        let outcome = tracker.into_outcome(started.elapsed());
        debug!(
            "Enumeration finished in {:?}: best profit {}, {} valid assignments",
            outcome.elapsed, outcome.best_profit, outcome.valid_assignment_count
        );

        outcome
    }

    fn descend(&mut self, position: usize, tracker: &mut SolutionTracker) {
        if position == self.tasks.len() {
            tracker.record_leaf(self.current_profit, &self.current_assignment);
            return;
        }

        // Exclude
        self.tasks[position].assigned_to = None;
        self.descend(position + 1, tracker);

        // Include
        let Task {
            starting_date,
            ending_date,
            profit,
            ..
        } = self.tasks[position];
        let Some(worker) = self.workers.first_available(starting_date) else {
            return;
        };

        let prior_busy = self.workers.occupy(worker, ending_date);
        let prior_profit = self.current_profit;
        self.tasks[position].assigned_to = Some(worker);
        self.current_profit += profit;
        self.current_assignment[position] = true;

        self.descend(position + 1, tracker);

        self.current_assignment[position] = false;
        self.current_profit = prior_profit;
        self.tasks[position].assigned_to = None;
        self.workers.release(worker, prior_busy);
    }
}

/// Enumerates a validated instance.
pub fn enumerate(instance: &Instance) -> SearchOutcome {
    SearchEngine::new(instance).enumerate()
}

/// Replays first-fit worker assignment on an inclusion pattern.
///
/// Returns the worker of each task (`None` for excluded tasks), or `None`
/// if some included task finds no free worker.
pub fn replay_first_fit(
    tasks: &[Task],
    worker_count: usize,
    included: &[bool],
) -> Option<Vec<Option<usize>>> {
    let mut workers = WorkerPool::new(worker_count);
    tasks
        .iter()
        .zip(included)
        .map(|(task, &done)| {
            if !done {
                return Some(None);
            }
            let worker = workers.first_available(task.starting_date)?;
            workers.occupy(worker, task.ending_date);
            Some(Some(worker))
        })
        .collect()
}
