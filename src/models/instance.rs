//! Problem instance model.
//!
//! An instance couples a task list with a worker count. Construction
//! sorts the tasks by `(starting_date, ending_date)` and validates them,
//! so every `Instance` satisfies the search preconditions.

use serde::{Deserialize, Serialize};
use std::io::Read;

use super::Task;
use crate::error::SelectionResult;
use crate::validation::validate_instance;

/// Capacity bounds checked when an instance is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceLimits {
    /// Maximum number of tasks.
    pub max_tasks: usize,
    /// Maximum number of workers.
    pub max_workers: usize,
}

impl InstanceLimits {
    /// Sets the maximum number of tasks.
    pub fn with_max_tasks(mut self, max_tasks: usize) -> Self {
        self.max_tasks = max_tasks;
        self
    }

    /// Sets the maximum number of workers.
    pub fn with_max_workers(mut self, max_workers: usize) -> Self {
        self.max_workers = max_workers;
        self
    }
}

impl Default for InstanceLimits {
    fn default() -> Self {
        Self {
            max_tasks: 64,
            max_workers: 10,
        }
    }
}

/// On-disk instance document.
///
/// ```json
/// { "name": "demo", "workers": 2, "tasks": [{ "starting_date": 0, "ending_date": 3, "profit": 40 }] }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstanceFile {
    /// Optional label carried into reports.
    #[serde(default)]
    pub name: Option<String>,
    /// Number of workers.
    pub workers: usize,
    /// Tasks in any order.
    pub tasks: Vec<Task>,
}

impl InstanceFile {
    /// Reads a document from a JSON stream.
    pub fn from_reader<R: Read>(reader: R) -> SelectionResult<Self> {
        Ok(serde_json::from_reader(reader)?)
    }
}

/// A validated job selection problem.
///
/// # Example
///
/// ```
/// use u_jobselect::models::{Instance, Task};
///
/// let instance = Instance::new(
///     vec![Task::new(2, 3).with_profit(7), Task::new(0, 1).with_profit(5)],
///     1,
/// ).unwrap();
/// assert_eq!(instance.tasks()[0].starting_date, 0);
/// assert_eq!(instance.total_profit(), 12);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Instance {
    name: Option<String>,
    tasks: Vec<Task>,
    worker_count: usize,
    profits_ignored: bool,
}

impl Instance {
    /// Builds an instance under the default capacity limits.
    pub fn new(tasks: Vec<Task>, worker_count: usize) -> SelectionResult<Self> {
        Self::with_limits(tasks, worker_count, &InstanceLimits::default())
    }

    /// Sorts and validates the tasks under the given limits.
    ///
    /// Any prior `assigned_to` values are cleared.
    pub fn with_limits(
        mut tasks: Vec<Task>,
        worker_count: usize,
        limits: &InstanceLimits,
    ) -> SelectionResult<Self> {
        tasks.sort_by(Task::date_order);
        for task in &mut tasks {
            task.assigned_to = None;
        }
        validate_instance(&tasks, worker_count, limits)?;

        Ok(Self {
            name: None,
            tasks,
            worker_count,
            profits_ignored: false,
        })
    }

    /// Builds an instance from a parsed document.
    pub fn from_file(file: InstanceFile, limits: &InstanceLimits) -> SelectionResult<Self> {
        let instance = Self::with_limits(file.tasks, file.workers, limits)?;
        Ok(match file.name {
            Some(name) => instance.with_name(name),
            None => instance,
        })
    }

    /// Sets the label used in reports.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Returns a copy where every task is worth 1.
    ///
    /// The best profit then counts the largest number of tasks that
    /// the workers can perform.
    pub fn ignoring_profits(&self) -> Self {
        let mut instance = self.clone();
        for task in &mut instance.tasks {
            task.profit = 1;
        }
        instance.profits_ignored = true;
        instance
    }

    /// Tasks sorted by `(starting_date, ending_date)`.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Number of tasks.
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Number of workers.
    pub fn worker_count(&self) -> usize {
        self.worker_count
    }

    /// Sum of all task profits. Validation guarantees it fits in a `u64`.
    pub fn total_profit(&self) -> u64 {
        self.tasks.iter().map(|t| t.profit).sum()
    }

    /// Instance label, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Whether profits were replaced by 1 via [`ignoring_profits`](Self::ignoring_profits).
    pub fn profits_ignored(&self) -> bool {
        self.profits_ignored
    }
}
