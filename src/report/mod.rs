//! Reports and KPI evaluation.
//!
//! Turns a [`SearchOutcome`](crate::search::SearchOutcome) into summary
//! metrics and into the solution report consumed by people and scripts.
//!
//! # KPI
//!
//! `SelectionKpi` computes the best profit, the share of the available
//! profit it captures, and the mean and spread of the profit histogram.
//!
//! # Report
//!
//! `SolutionReport` renders the solution text file, the histogram file
//! and a JSON document.

mod kpi;
mod solution;

pub use kpi::SelectionKpi;
pub use solution::{SolutionReport, TaskRow};
