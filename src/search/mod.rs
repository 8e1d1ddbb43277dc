//! Exhaustive search for the most profitable task selection.
//!
//! Enumerates every subset of tasks that the workers can perform under
//! first-fit assignment, keeping the best one, the number of subsets and
//! how many subsets reach each total profit.
//!
//! # Components
//!
//! - [`SearchEngine`]: depth-first include/exclude recursion with
//!   save/restore backtracking of worker and profit state
//! - [`SolutionTracker`]: best solution, histogram and leaf counter
//! - [`SearchOutcome`]: the result handed to reports
//!
//! The engine is a brute-force baseline. It does no bounding or pruning
//! beyond skipping includes that find no free worker.

mod engine;
mod histogram;
mod outcome;
mod tracker;

pub use engine::{enumerate, replay_first_fit, SearchEngine};
pub use histogram::ProfitHistogram;
pub use outcome::SearchOutcome;
pub use tracker::SolutionTracker;
