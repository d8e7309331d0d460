//! Score-descending stable ranking.

use std::cmp::Ordering;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::criteria::{Criteria, TaskSet};
use crate::scoring::{NoopObserver, ScoreObserver, Scorer};

/// A task name paired with its computed score.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankedEntry {
    pub name: String,
    pub score: f64,
}

impl RankedEntry {
    pub fn new(name: impl Into<String>, score: f64) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }
}

/// Orders tasks by score, highest first.
///
/// Tasks with equal scores keep their task-set order. A `NaN` score
/// ranks below every other score.
///
/// # Examples
///
/// ```
/// use u_taskrank::criteria::{Criteria, TaskSet};
/// use u_taskrank::ranking::Ranker;
/// use u_taskrank::scoring::Scorer;
///
/// let tasks: TaskSet = [
///     ("later", Criteria::new(50.0, 0.0, 0.0, 60)),
///     ("soon", Criteria::new(50.0, 0.0, 0.0, 2)),
/// ]
/// .into_iter()
/// .collect();
///
/// let scorer = Scorer::default();
/// let ranked = Ranker::new(&scorer).rank(&tasks);
/// assert_eq!(ranked[0].name, "soon");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Ranker<'a> {
    scorer: &'a Scorer,
    #[cfg_attr(not(feature = "parallel"), allow(dead_code))]
    parallel: bool,
}

impl<'a> Ranker<'a> {
    pub fn new(scorer: &'a Scorer) -> Self {
        Self {
            scorer,
            parallel: false,
        }
    }

    /// Scores tasks on the rayon thread pool.
    ///
    /// Ranking output is identical to the serial path. Observer callbacks
    /// may arrive out of task order.
    #[cfg(feature = "parallel")]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Scores every task once and sorts by score, descending.
    pub fn rank(&self, tasks: &TaskSet) -> Vec<RankedEntry> {
        self.rank_observed(tasks, &NoopObserver)
    }

    /// Like [`rank`](Self::rank), reporting each score computation to
    /// `observer`.
    pub fn rank_observed(
        &self,
        tasks: &TaskSet,
        observer: &dyn ScoreObserver,
    ) -> Vec<RankedEntry> {
        let mut ranked = self.score_all(tasks.as_slice(), observer);
        ranked.sort_by(|a, b| descending(a.score, b.score));
        tracing::trace!(tasks = ranked.len(), "ranked tasks");
        ranked
    }

    fn score_all(
        &self,
        entries: &[(String, Criteria)],
        observer: &dyn ScoreObserver,
    ) -> Vec<RankedEntry> {
        let score_one = |(name, criteria): &(String, Criteria)| {
            RankedEntry::new(name.clone(), self.scorer.score_observed(name, criteria, observer))
        };

        #[cfg(feature = "parallel")]
        {
            if self.parallel {
                return entries.par_iter().map(score_one).collect();
            }
        }

        entries.iter().map(score_one).collect()
    }
}

/// Ranks tasks with the given scorer.
pub fn rank(tasks: &TaskSet, scorer: &Scorer) -> Vec<RankedEntry> {
    Ranker::new(scorer).rank(tasks)
}

fn rank_key(score: f64) -> f64 {
    if score.is_nan() {
        f64::NEG_INFINITY
    } else {
        score
    }
}

fn descending(a: f64, b: f64) -> Ordering {
    rank_key(b)
        .partial_cmp(&rank_key(a))
        .unwrap_or(Ordering::Equal)
}
