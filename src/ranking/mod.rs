//! Task ranking.
//!
//! Every task is scored exactly once, then sorted by score, highest
//! first. The sort is stable: tasks with equal scores keep the order in
//! which they appear in the [`TaskSet`](crate::criteria::TaskSet).

mod ranker;

pub use ranker::{rank, RankedEntry, Ranker};
