//! Core trait for criterion normalization rules.

use crate::criteria::{Criteria, Criterion};

/// Maps one criterion of a task to a dimensionless sub-score.
///
/// The [`Scorer`](super::Scorer) multiplies each rule's sub-score by the
/// configured weight and sums the results. Higher sub-scores mean higher
/// priority.
///
/// # Examples
///
/// ```
/// use u_taskrank::criteria::{Criteria, Criterion};
/// use u_taskrank::scoring::{CriterionRule, OrganizationValueRule};
///
/// let rule = OrganizationValueRule;
/// assert_eq!(rule.criterion(), Criterion::OrganizationValue);
/// assert_eq!(rule.normalize(&Criteria::new(0.0, 0.0, 15.0, 0)), 1.0);
/// ```
pub trait CriterionRule: Send + Sync {
    /// The criterion this rule reads.
    fn criterion(&self) -> Criterion;

    /// Returns the name of this rule.
    fn name(&self) -> &str {
        self.criterion().label()
    }

    /// Computes the normalized sub-score for the given task.
    fn normalize(&self, criteria: &Criteria) -> f64;
}

/// One criterion's contribution to a task score.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SubScore {
    pub criterion: Criterion,
    /// Value read from the task's criteria.
    pub raw: f64,
    /// Dimensionless sub-score before weighting.
    pub normalized: f64,
    pub weight: f64,
    /// `normalized * weight`.
    pub weighted: f64,
}

/// Per-criterion explanation of a task score.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreBreakdown {
    /// Contributions in canonical criterion order.
    pub terms: Vec<SubScore>,
    /// Sum of all weighted contributions.
    pub total: f64,
}

impl ScoreBreakdown {
    /// Returns the contribution of one criterion.
    pub fn term(&self, criterion: Criterion) -> Option<&SubScore> {
        self.terms.iter().find(|t| t.criterion == criterion)
    }

    /// Returns the term with the largest weighted contribution.
    pub fn top_term(&self) -> Option<&SubScore> {
        self.terms.iter().max_by(|a, b| {
            a.weighted
                .partial_cmp(&b.weighted)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
    }
}
