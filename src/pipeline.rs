//! Score → rank → allocate in one call.

use crate::allocation::{AllocationConfig, Allocator, Distribution};
use crate::criteria::TaskSet;
use crate::error::Result;
use crate::ranking::{RankedEntry, Ranker};
use crate::scoring::{NoopObserver, ScoreObserver, Scorer, UrgencyCurve, WeightConfig};

/// Output of one pipeline run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Prioritization {
    /// Tasks by score, highest first.
    pub ranking: Vec<RankedEntry>,
    /// Budget split in ranking order.
    pub distribution: Distribution,
}

/// Runs the full prioritization pipeline over a task set.
///
/// # Examples
///
/// ```
/// use u_taskrank::criteria::{Criteria, TaskSet};
/// use u_taskrank::pipeline::Prioritizer;
/// use u_taskrank::scoring::WeightConfig;
///
/// let tasks: TaskSet = [("only", Criteria::new(100.0, 5.0, 10.0, 30))]
///     .into_iter()
///     .collect();
///
/// let result = Prioritizer::new(WeightConfig::default()).run(&tasks);
/// assert_eq!(result.distribution.allocations[0].parts, 20);
/// ```
#[derive(Debug)]
pub struct Prioritizer {
    scorer: Scorer,
    allocator: Allocator,
    #[cfg_attr(not(feature = "parallel"), allow(dead_code))]
    parallel: bool,
}

impl Prioritizer {
    pub fn new(weights: WeightConfig) -> Self {
        Self {
            scorer: Scorer::new(weights),
            allocator: Allocator::default(),
            parallel: false,
        }
    }

    /// Builds a pipeline after validating every configuration part.
    pub fn try_new(
        weights: WeightConfig,
        curve: UrgencyCurve,
        allocation: AllocationConfig,
    ) -> Result<Self> {
        allocation.validate()?;
        Ok(Self::new(weights)
            .with_scorer(Scorer::try_new(weights, curve)?)
            .with_allocation(allocation))
    }

    pub fn with_scorer(mut self, scorer: Scorer) -> Self {
        self.scorer = scorer;
        self
    }

    pub fn with_urgency_curve(mut self, curve: UrgencyCurve) -> Self {
        self.scorer = self.scorer.with_urgency_curve(curve);
        self
    }

    pub fn with_allocation(mut self, config: AllocationConfig) -> Self {
        self.allocator = Allocator::new(config);
        self
    }

    #[cfg(feature = "parallel")]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn scorer(&self) -> &Scorer {
        &self.scorer
    }

    pub fn allocator(&self) -> &Allocator {
        &self.allocator
    }

    pub fn run(&self, tasks: &TaskSet) -> Prioritization {
        self.run_observed(tasks, &NoopObserver)
    }

    pub fn run_observed(&self, tasks: &TaskSet, observer: &dyn ScoreObserver) -> Prioritization {
        let ranking = self.ranker().rank_observed(tasks, observer);
        let distribution = self.allocator.allocate(&ranking);
        tracing::debug!(
            tasks = tasks.len(),
            total_score = distribution.total_score,
            total_parts = distribution.total_parts(),
            degenerate = distribution.is_degenerate(),
            "prioritization complete"
        );
        Prioritization {
            ranking,
            distribution,
        }
    }

    fn ranker(&self) -> Ranker<'_> {
        let ranker = Ranker::new(&self.scorer);
        #[cfg(feature = "parallel")]
        let ranker = ranker.with_parallel(self.parallel);
        ranker
    }
}

impl Default for Prioritizer {
    fn default() -> Self {
        Self::new(WeightConfig::default())
    }
}
