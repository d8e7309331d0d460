//! Weighted multi-criterion task prioritization.
//!
//! Turns a set of tasks into a ranked list and a proportional split of a
//! fixed budget of parts:
//!
//! - **Scoring**: each task's four criteria (core alignment, effort,
//!   organizational value, days until due) are normalized, weighted, and
//!   summed. Urgency follows a decaying-exponential curve; a task with no
//!   due date gets zero urgency.
//! - **Ranking**: tasks sorted by score, highest first, ties kept in
//!   input order.
//! - **Allocation**: a budget of 20 parts (configurable) split in
//!   proportion to score, each share rounded on its own.
//!
//! Around that core sit a YAML extractor (`yaml` feature), plain-text
//! reports, and the `taskrank` command-line tool (`cli` feature).
//!
//! # Example
//!
//! ```
//! use u_taskrank::criteria::{Criteria, TaskSet};
//! use u_taskrank::pipeline::Prioritizer;
//! use u_taskrank::scoring::WeightConfig;
//!
//! let tasks: TaskSet = [
//!     ("Fix login bug", Criteria::new(95.0, 3.0, 10.0, 2)),
//!     ("Write docs", Criteria::new(40.0, 2.0, 9.0, 0)),
//! ]
//! .into_iter()
//! .collect();
//!
//! let result = Prioritizer::new(WeightConfig::default()).run(&tasks);
//! assert_eq!(result.ranking[0].name, "Fix login bug");
//! assert!(!result.distribution.is_degenerate());
//! ```

pub mod allocation;
pub mod criteria;
pub mod error;
#[cfg(feature = "yaml")]
pub mod extract;
pub mod pipeline;
pub mod ranking;
pub mod report;
pub mod scoring;

pub use error::{Result, TaskRankError};
