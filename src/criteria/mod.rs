//! Task criteria records.
//!
//! A task is described by four criteria: core-mission alignment, effort,
//! organizational value, and days until due. [`TaskSet`] holds the
//! criteria of every task in one run, keyed by task name.

mod task_set;
mod types;

pub use task_set::TaskSet;
pub use types::{Criteria, Criterion};
