//! Exhaustive weighted job selection for the U-Engine ecosystem.
//!
//! Given tasks with date ranges and profits and a pool of interchangeable
//! workers, enumerates every task subset the workers can perform without
//! any worker holding two overlapping tasks. Reports the most profitable
//! subset, the number of valid subsets and how often each total profit
//! occurs.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Task`, `WorkerPool`, `Instance`, `InstanceLimits`
//! - **`validation`**: Precondition checks (worker count, capacity, intervals, ordering)
//! - **`search`**: Brute-force enumeration — `SearchEngine`, `SolutionTracker`, `ProfitHistogram`
//! - **`report`**: `SelectionKpi` metrics and the `SolutionReport` text/JSON output
//! - **`error`**: `SelectionError` for instance loading
//!
//! # Example
//!
//! ```
//! use u_jobselect::models::{Instance, Task};
//! use u_jobselect::search;
//!
//! let instance = Instance::new(
//!     vec![Task::new(0, 2).with_profit(5), Task::new(1, 3).with_profit(7)],
//!     1,
//! ).unwrap();
//! let outcome = search::enumerate(&instance);
//! assert_eq!(outcome.best_profit, 7);
//! assert_eq!(outcome.valid_assignment_count, 3);
//! ```
//!
//! # References
//!
//! - Kolen et al. (2007), "Interval scheduling: A survey"
//! - Arkin & Silverberg (1987), "Scheduling jobs with fixed start and end times"

pub mod error;
pub mod models;
pub mod report;
pub mod search;
pub mod validation;

pub use error::{SelectionError, SelectionResult};
