//! Selection quality metrics (KPIs).
//!
//! Summarizes a finished enumeration.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Best profit | Highest total profit of any valid assignment |
//! | Tasks done | Tasks included in the best assignment |
//! | Profit capture | Best profit / sum of all profits |
//! | Distinct profits | Non-zero histogram buckets |
//! | Mean / Std dev | Count-weighted profit statistics over all valid assignments |

use serde::Serialize;

use crate::models::Instance;
use crate::search::SearchOutcome;

/// Summary metrics of a search.
#[derive(Debug, Clone, Serialize)]
pub struct SelectionKpi {
    /// Highest total profit found.
    pub best_profit: u64,
    /// Number of tasks included in the best assignment.
    pub tasks_done: usize,
    /// Fraction of the total available profit captured (0.0..1.0).
    pub profit_capture: f64,
    /// Number of valid assignments.
    pub valid_assignments: u128,
    /// Number of distinct total profits reached.
    pub distinct_profits: usize,
    /// Mean total profit over all valid assignments.
    pub mean_profit: f64,
    /// Standard deviation of total profit over all valid assignments.
    pub profit_std_dev: f64,
}

impl SelectionKpi {
    /// Computes KPIs from an instance and its search outcome.
    pub fn calculate(instance: &Instance, outcome: &SearchOutcome) -> Self {
        let total_profit = instance.total_profit();
        let profit_capture = if total_profit == 0 {
            1.0
        } else {
            outcome.best_profit as f64 / total_profit as f64
        };

        Self {
            best_profit: outcome.best_profit,
            tasks_done: outcome.selected_tasks().len(),
            profit_capture,
            valid_assignments: outcome.valid_assignment_count,
            distinct_profits: outcome.histogram.distinct_profits(),
            mean_profit: outcome.histogram.mean(),
            profit_std_dev: outcome.histogram.std_dev(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Task;
    use crate::search::enumerate;

    #[test]
    fn test_kpi_two_disjoint_tasks() {
        let instance = Instance::new(
            vec![Task::new(0, 1).with_profit(5), Task::new(2, 3).with_profit(7)],
            1,
        )
        .unwrap();
        let kpi = SelectionKpi::calculate(&instance, &enumerate(&instance));

        assert_eq!(kpi.best_profit, 12);
        assert_eq!(kpi.tasks_done, 2);
        assert!((kpi.profit_capture - 1.0).abs() < 1e-10);
        assert_eq!(kpi.valid_assignments, 4);
        assert_eq!(kpi.distinct_profits, 4);
        assert!((kpi.mean_profit - 6.0).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_partial_capture() {
        let instance = Instance::new(
            vec![Task::new(0, 2).with_profit(5), Task::new(1, 3).with_profit(15)],
            1,
        )
        .unwrap();
        let kpi = SelectionKpi::calculate(&instance, &enumerate(&instance));

        assert_eq!(kpi.tasks_done, 1);
        assert!((kpi.profit_capture - 0.75).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_empty_instance() {
        let instance = Instance::new(vec![], 1).unwrap();
        let kpi = SelectionKpi::calculate(&instance, &enumerate(&instance));

        assert_eq!(kpi.best_profit, 0);
        assert_eq!(kpi.tasks_done, 0);
        assert!((kpi.profit_capture - 1.0).abs() < 1e-10);
        assert_eq!(kpi.profit_std_dev, 0.0);
    }
}
