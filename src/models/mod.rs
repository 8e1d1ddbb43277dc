//! Job selection domain models.
//!
//! Provides the data types for describing a problem: tasks with date
//! ranges and profits, a pool of interchangeable workers, and the
//! validated instance handed to the search.
//!
//! # Domain Mappings
//!
//! | u-jobselect | Software team | Equipment rental | Crew rostering |
//! |-------------|---------------|------------------|----------------|
//! | Task | Programming contract | Rental request | Shift |
//! | Worker | Programmer | Identical unit | Crew member |
//! | Profit | Contract value | Rental fee | Coverage value |

mod instance;
mod task;
mod worker;

pub use instance::{Instance, InstanceFile, InstanceLimits};
pub use task::Task;
pub use worker::WorkerPool;
