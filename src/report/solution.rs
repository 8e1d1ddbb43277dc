//! Solution report.
//!
//! Renders a finished search as the plain-text solution file or as JSON.
//!
//! # Text layout
//!
//! ```text
//! T = 2
//! P = 1
//! Profits not ignored
//! Solution time = 1.200000e-6
//! Max Profit = 12
//! Number of viable task sets = 4
//! Task data (number, starting date, ending date, profit, done in optimal solution)
//!     0   0   1     5   1
//!     1   2   3     7   1
//! End
//! ```

use serde::Serialize;
use std::fmt;

use super::SelectionKpi;
use crate::models::Instance;
use crate::search::{replay_first_fit, SearchOutcome};

/// One task line of the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskRow {
    /// Position in the sorted task list.
    pub index: usize,
    pub starting_date: i64,
    pub ending_date: i64,
    pub profit: u64,
    /// Whether the task is part of the best assignment.
    pub done: bool,
    /// First-fit worker in the best assignment.
    pub worker: Option<usize>,
}

/// Complete description of a solved instance.
#[derive(Debug, Clone, Serialize)]
pub struct SolutionReport {
    pub name: Option<String>,
    pub task_count: usize,
    pub worker_count: usize,
    pub profits_ignored: bool,
    /// Search wall time in seconds.
    pub solution_time: f64,
    pub max_profit: u64,
    pub valid_assignments: u128,
    pub tasks: Vec<TaskRow>,
    /// Non-zero `(profit, count)` buckets, ascending by profit.
    pub histogram: Vec<(u64, u128)>,
    pub kpi: SelectionKpi,
}

impl SolutionReport {
    /// Builds the report of a finished search.
    pub fn new(instance: &Instance, outcome: &SearchOutcome) -> Self {
        let task_count = instance.task_count();
        let workers = replay_first_fit(
            instance.tasks(),
            instance.worker_count(),
            &outcome.best_assignment,
        )
        .unwrap_or_else(|| vec![None; task_count]);

        let tasks = instance
            .tasks()
            .iter()
            .zip(&outcome.best_assignment)
            .zip(workers)
            .enumerate()
            .map(|(index, ((task, &done), worker))| TaskRow {
                index,
                starting_date: task.starting_date,
                ending_date: task.ending_date,
                profit: task.profit,
                done,
                worker,
            })
            .collect();

        Self {
            name: instance.name().map(str::to_owned),
            task_count,
            worker_count: instance.worker_count(),
            profits_ignored: instance.profits_ignored(),
            solution_time: outcome.elapsed.as_secs_f64(),
            max_profit: outcome.best_profit,
            valid_assignments: outcome.valid_assignment_count,
            tasks,
            histogram: outcome.histogram.iter_nonzero().collect(),
            kpi: SelectionKpi::calculate(instance, outcome),
        }
    }

    /// One `profit count` line per non-zero histogram bucket.
    pub fn render_histogram(&self) -> String {
        self.histogram
            .iter()
            .map(|(profit, count)| format!("{profit:2} {count:4}\n"))
            .collect()
    }

    /// Pretty-printed JSON form of the report.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for SolutionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = &self.name {
            writeln!(f, "Name = {name}")?;
        }
        writeln!(f, "T = {}", self.task_count)?;
        writeln!(f, "P = {}", self.worker_count)?;
        writeln!(
            f,
            "Profits{} ignored",
            if self.profits_ignored { "" } else { " not" }
        )?;
        writeln!(f, "Solution time = {:.6e}", self.solution_time)?;
        writeln!(f, "Max Profit = {}", self.max_profit)?;
        writeln!(f, "Number of viable task sets = {}", self.valid_assignments)?;
        writeln!(
            f,
            "Task data (number, starting date, ending date, profit, done in optimal solution)"
        )?;
        for row in &self.tasks {
            writeln!(
                f,
                "  {:3} {:3} {:3} {:5} {:3}",
                row.index,
                row.starting_date,
                row.ending_date,
                row.profit,
                u8::from(row.done)
            )?;
        }
        writeln!(f, "End")
    }
}
