//! Proportional allocation of a fixed budget of parts.
//!
//! Each ranked task receives `round(score / total * budget)` parts and a
//! percentage of `score / total * 100`. Shares are rounded one at a time
//! with no remainder correction, so the parts handed out can miss the
//! budget by a few; [`Distribution::total_parts`] reports the actual sum.
//!
//! When there are no tasks or the scores do not add up to a positive
//! total, the result is an empty, degenerate [`Distribution`] rather than
//! an error.

mod allocator;
mod config;

pub use allocator::{allocate, Allocation, Allocator, Distribution};
pub use config::{AllocationConfig, Rounding, DEFAULT_BUDGET, MAX_BUDGET};
