//! Proportional budget allocation.

use super::config::AllocationConfig;
use crate::error::Result;
use crate::ranking::RankedEntry;

/// One task's share of the budget.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Allocation {
    pub name: String,
    pub score: f64,
    /// Whole parts of the budget, in `[0, budget]`.
    pub parts: u32,
    /// `score / total_score * 100`.
    pub percentage: f64,
}

/// Result of an allocation run.
///
/// An empty `allocations` list means no distribution was possible: there
/// were no tasks, or the scores did not sum to a positive finite total.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Distribution {
    /// Allocations in the order the ranked entries were given.
    pub allocations: Vec<Allocation>,
    /// Parts that were to be distributed.
    pub budget: u32,
    /// Sum of all input scores.
    pub total_score: f64,
}

impl Distribution {
    /// `true` when no distribution was possible.
    pub fn is_degenerate(&self) -> bool {
        self.allocations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.allocations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.allocations.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Allocation> {
        self.allocations.iter()
    }

    pub fn get(&self, name: &str) -> Option<&Allocation> {
        self.allocations.iter().find(|a| a.name == name)
    }

    /// Parts actually handed out.
    ///
    /// Each share is rounded on its own, so this can differ from
    /// [`budget`](Self::budget) by a few parts, including past
    /// `u32::MAX` for very large budgets.
    pub fn total_parts(&self) -> u64 {
        self.allocations.iter().map(|a| u64::from(a.parts)).sum()
    }

    /// Sum of all percentages; `100.0` up to rounding error unless
    /// degenerate.
    pub fn total_percentage(&self) -> f64 {
        self.allocations.iter().map(|a| a.percentage).sum()
    }

    /// Allocations sorted by parts, largest first. Ties keep rank order.
    pub fn by_parts_desc(&self) -> Vec<&Allocation> {
        let mut sorted: Vec<&Allocation> = self.allocations.iter().collect();
        sorted.sort_by(|a, b| b.parts.cmp(&a.parts));
        sorted
    }
}

impl<'a> IntoIterator for &'a Distribution {
    type Item = &'a Allocation;
    type IntoIter = std::slice::Iter<'a, Allocation>;

    fn into_iter(self) -> Self::IntoIter {
        self.allocations.iter()
    }
}

/// Splits a fixed budget of parts across ranked tasks in proportion to
/// their scores.
///
/// Every share is rounded independently; there is no remainder pass, so
/// [`Distribution::total_parts`] may land slightly above or below the
/// budget.
///
/// # Examples
///
/// ```
/// use u_taskrank::allocation::Allocator;
/// use u_taskrank::ranking::RankedEntry;
///
/// let ranked = vec![RankedEntry::new("a", 6.0), RankedEntry::new("b", 4.0)];
/// let dist = Allocator::default().allocate(&ranked);
///
/// assert_eq!(dist.allocations[0].parts, 12);
/// assert_eq!(dist.allocations[1].parts, 8);
/// assert!((dist.allocations[0].percentage - 60.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Allocator {
    config: AllocationConfig,
}

impl Allocator {
    pub fn new(config: AllocationConfig) -> Self {
        Self { config }
    }

    /// Creates an allocator after validating `config`.
    pub fn try_new(config: AllocationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config))
    }

    pub fn config(&self) -> &AllocationConfig {
        &self.config
    }

    /// Allocates the budget across `ranked`, preserving its order.
    pub fn allocate(&self, ranked: &[RankedEntry]) -> Distribution {
        let budget = self.config.budget;
        let total_score: f64 = ranked.iter().map(|e| e.score).sum();

        if ranked.is_empty() || !total_score.is_finite() || total_score <= 0.0 {
            tracing::debug!(
                tasks = ranked.len(),
                total_score,
                "no distribution possible"
            );
            return Distribution {
                allocations: Vec::new(),
                budget,
                total_score,
            };
        }

        let budget_f = f64::from(budget);
        let allocations = ranked
            .iter()
            .map(|entry| {
                let share = entry.score / total_score;
                let parts = self
                    .config
                    .rounding
                    .apply(share * budget_f)
                    .clamp(0.0, budget_f) as u32;
                Allocation {
                    name: entry.name.clone(),
                    score: entry.score,
                    parts,
                    percentage: share * 100.0,
                }
            })
            .collect();

        let dist = Distribution {
            allocations,
            budget,
            total_score,
        };
        if dist.total_parts() != u64::from(budget) {
            tracing::debug!(
                budget,
                total_parts = dist.total_parts(),
                "rounded parts do not sum to budget"
            );
        }
        dist
    }
}

/// Allocates the default 20-part budget with half-to-even rounding.
pub fn allocate(ranked: &[RankedEntry]) -> Distribution {
    Allocator::default().allocate(ranked)
}
