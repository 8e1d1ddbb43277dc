//! Input validation for job selection problems.
//!
//! Checks the preconditions the search relies on before it starts.
//! Detects:
//! - Missing workers, or more workers than the configured capacity
//! - More tasks than the configured capacity
//! - Tasks ending before they start
//! - Tasks not sorted by `(starting_date, ending_date)`
//! - Profits whose sum does not fit in a `u64`
//!
//! All issues are collected rather than stopping at the first one.

use thiserror::Error;

use crate::models::{InstanceLimits, Task};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The worker count is zero.
    NoWorkers,
    /// The worker count exceeds the configured maximum.
    TooManyWorkers,
    /// The task count exceeds the configured maximum.
    TooManyTasks,
    /// A task ends before it starts.
    InvalidInterval,
    /// Tasks are not ordered by starting date, then ending date.
    UnsortedTasks,
    /// The sum of all profits overflows `u64`.
    ProfitOverflow,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a task list and worker count against capacity limits.
///
/// Checks:
/// 1. `1 <= worker_count <= limits.max_workers`
/// 2. `tasks.len() <= limits.max_tasks`
/// 3. Every task has `starting_date <= ending_date`
/// 4. Tasks are sorted ascending by `(starting_date, ending_date)`
/// 5. The sum of all profits fits in a `u64`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_instance(
    tasks: &[Task],
    worker_count: usize,
    limits: &InstanceLimits,
) -> ValidationResult {
    let mut errors = Vec::new();

    if worker_count == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NoWorkers,
            "At least one worker is required",
        ));
    } else if worker_count > limits.max_workers {
        errors.push(ValidationError::new(
            ValidationErrorKind::TooManyWorkers,
            format!(
                "Worker count {worker_count} exceeds the maximum of {}",
                limits.max_workers
            ),
        ));
    }

    if tasks.len() > limits.max_tasks {
        errors.push(ValidationError::new(
            ValidationErrorKind::TooManyTasks,
            format!(
                "Task count {} exceeds the maximum of {}",
                tasks.len(),
                limits.max_tasks
            ),
        ));
    }

    for (i, task) in tasks.iter().enumerate() {
        if task.ending_date < task.starting_date {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidInterval,
                format!(
                    "Task {i} ends on day {} before starting on day {}",
                    task.ending_date, task.starting_date
                ),
            ));
        }
    }

    if let Some(i) = first_unsorted(tasks) {
        errors.push(ValidationError::new(
            ValidationErrorKind::UnsortedTasks,
            format!("Task {i} is out of (starting date, ending date) order"),
        ));
    }

    if checked_total_profit(tasks).is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::ProfitOverflow,
            "Sum of task profits exceeds the u64 range",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Whether tasks are ordered by starting date, then ending date.
pub fn is_sorted(tasks: &[Task]) -> bool {
    first_unsorted(tasks).is_none()
}

/// Sum of all profits, `None` on overflow.
pub fn checked_total_profit(tasks: &[Task]) -> Option<u64> {
    tasks
        .iter()
        .try_fold(0u64, |sum, task| sum.checked_add(task.profit))
}

/// Index of the first task that sorts before its predecessor.
fn first_unsorted(tasks: &[Task]) -> Option<usize> {
    tasks
        .windows(2)
        .position(|pair| pair[0].date_order(&pair[1]).is_gt())
        .map(|i| i + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tasks() -> Vec<Task> {
        vec![
            Task::new(0, 2).with_profit(10),
            Task::new(0, 4).with_profit(20),
            Task::new(3, 3).with_profit(5),
        ]
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_instance(&sample_tasks(), 2, &InstanceLimits::default()).is_ok());
    }

    #[test]
    fn test_empty_task_list_is_valid() {
        assert!(validate_instance(&[], 1, &InstanceLimits::default()).is_ok());
    }

    #[test]
    fn test_no_workers() {
        let errors = validate_instance(&sample_tasks(), 0, &InstanceLimits::default()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NoWorkers));
    }

    #[test]
    fn test_too_many_workers() {
        let limits = InstanceLimits::default().with_max_workers(2);
        let errors = validate_instance(&sample_tasks(), 3, &limits).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::TooManyWorkers);
    }

    #[test]
    fn test_too_many_tasks() {
        let limits = InstanceLimits::default().with_max_tasks(2);
        let errors = validate_instance(&sample_tasks(), 1, &limits).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::TooManyTasks && e.message.contains("3")));
    }

    #[test]
    fn test_invalid_interval() {
        let tasks = vec![Task::new(5, 4)];
        let errors = validate_instance(&tasks, 1, &InstanceLimits::default()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidInterval));
    }

    #[test]
    fn test_unsorted_tasks() {
        let tasks = vec![Task::new(0, 4), Task::new(0, 2)];
        assert!(!is_sorted(&tasks));
        let errors = validate_instance(&tasks, 1, &InstanceLimits::default()).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::UnsortedTasks);
        assert!(errors[0].message.contains("Task 1"));
    }

    #[test]
    fn test_equal_tasks_are_sorted() {
        assert!(is_sorted(&[Task::new(1, 1), Task::new(1, 1)]));
    }

    #[test]
    fn test_profit_sum_overflow() {
        let half = u64::MAX / 2 + 1;
        let tasks = vec![Task::new(0, 1).with_profit(half), Task::new(2, 3).with_profit(half)];
        assert_eq!(checked_total_profit(&tasks), None);
        let errors = validate_instance(&tasks, 1, &InstanceLimits::default()).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::ProfitOverflow);
    }

    #[test]
    fn test_largest_profit_is_valid() {
        let tasks = vec![Task::new(0, 1).with_profit(u64::MAX), Task::new(2, 3)];
        assert_eq!(checked_total_profit(&tasks), Some(u64::MAX));
        assert!(validate_instance(&tasks, 1, &InstanceLimits::default()).is_ok());
    }

    #[test]
    fn test_multiple_errors() {
        let tasks = vec![Task::new(9, 1), Task::new(0, 0)];
        let errors = validate_instance(&tasks, 0, &InstanceLimits::default()).unwrap_err();
        assert!(errors.len() >= 3);
    }
}
