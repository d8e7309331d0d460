//! Weighted multi-criterion scorer.

use super::config::{UrgencyCurve, WeightConfig};
use super::observer::{NoopObserver, ScoreObserver};
use super::rules::{CoreAlignmentRule, EffortRule, OrganizationValueRule, UrgencyRule};
use super::types::{CriterionRule, ScoreBreakdown, SubScore};
use crate::criteria::Criteria;
use crate::error::Result;

/// Computes a task's score as the weighted sum of its normalized criteria.
///
/// The final score is not normalized; its range depends on the weights.
///
/// # Examples
///
/// ```
/// use u_taskrank::criteria::Criteria;
/// use u_taskrank::scoring::{Scorer, WeightConfig};
///
/// let scorer = Scorer::new(WeightConfig::default());
/// let score = scorer.score(&Criteria::new(100.0, 5.0, 10.0, 30));
///
/// // 1.0 + 0.5 + 1.0 + (1 + 6 * e^-3)
/// assert!((score - 3.798_722).abs() < 1e-6);
/// ```
///
/// # Custom urgency curve
///
/// ```
/// use u_taskrank::criteria::Criteria;
/// use u_taskrank::scoring::{Scorer, UrgencyCurve, WeightConfig};
///
/// let scorer = Scorer::new(WeightConfig::uniform(0.0).with_weight(
///     u_taskrank::criteria::Criterion::DueInDays,
///     1.0,
/// ))
/// .with_urgency_curve(UrgencyCurve::default().with_scale(0.0));
///
/// assert_eq!(scorer.score(&Criteria::new(0.0, 0.0, 0.0, 3)), 1.0);
/// ```
pub struct Scorer {
    rules: Vec<Box<dyn CriterionRule>>,
    weights: WeightConfig,
    curve: UrgencyCurve,
}

impl Scorer {
    /// Creates a scorer with the default urgency curve.
    pub fn new(weights: WeightConfig) -> Self {
        let curve = UrgencyCurve::default();
        Self {
            rules: standard_rules(curve),
            weights,
            curve,
        }
    }

    /// Creates a scorer after validating the weights and curve.
    pub fn try_new(weights: WeightConfig, curve: UrgencyCurve) -> Result<Self> {
        weights.validate()?;
        curve.validate()?;
        Ok(Self::new(weights).with_urgency_curve(curve))
    }

    /// Replaces the urgency curve.
    pub fn with_urgency_curve(mut self, curve: UrgencyCurve) -> Self {
        self.curve = curve;
        self.with_rule(UrgencyRule::new(curve))
    }

    /// Replaces the rule that normalizes `rule.criterion()`.
    ///
    /// The rule keeps that criterion's slot in evaluation order and its
    /// weight from the [`WeightConfig`].
    ///
    /// # Examples
    ///
    /// ```
    /// use u_taskrank::criteria::{Criteria, Criterion};
    /// use u_taskrank::scoring::{CriterionRule, Scorer, WeightConfig};
    ///
    /// struct LowEffortFirst;
    ///
    /// impl CriterionRule for LowEffortFirst {
    ///     fn criterion(&self) -> Criterion {
    ///         Criterion::EffortComplexity
    ///     }
    ///
    ///     fn normalize(&self, criteria: &Criteria) -> f64 {
    ///         1.0 - criteria.effort_complexity / 10.0
    ///     }
    /// }
    ///
    /// let weights = WeightConfig::uniform(0.0).with_weight(Criterion::EffortComplexity, 1.0);
    /// let scorer = Scorer::new(weights).with_rule(LowEffortFirst);
    /// assert!((scorer.score(&Criteria::new(0.0, 2.0, 0.0, 0)) - 0.8).abs() < 1e-12);
    /// ```
    pub fn with_rule<R: CriterionRule + 'static>(mut self, rule: R) -> Self {
        let criterion = rule.criterion();
        match self.rules.iter_mut().find(|r| r.criterion() == criterion) {
            Some(slot) => *slot = Box::new(rule),
            None => self.rules.push(Box::new(rule)),
        }
        self
    }

    /// Replaces the weights.
    pub fn with_weights(mut self, weights: WeightConfig) -> Self {
        self.weights = weights;
        self
    }

    pub fn weights(&self) -> &WeightConfig {
        &self.weights
    }

    pub fn urgency_curve(&self) -> &UrgencyCurve {
        &self.curve
    }

    /// Returns the names of all rules in evaluation order.
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Scores a single task.
    pub fn score(&self, criteria: &Criteria) -> f64 {
        self.score_observed("", criteria, &NoopObserver)
    }

    /// Scores a single task, reporting every step to `observer`.
    pub fn score_observed(
        &self,
        task: &str,
        criteria: &Criteria,
        observer: &dyn ScoreObserver,
    ) -> f64 {
        let mut total = 0.0;
        for rule in &self.rules {
            let sub = self.sub_score(rule.as_ref(), criteria);
            total += sub.weighted;
            observer.on_sub_score(task, &sub, total);
        }
        observer.on_total(task, total);
        total
    }

    /// Returns every criterion's contribution along with the total.
    pub fn breakdown(&self, criteria: &Criteria) -> ScoreBreakdown {
        let mut total = 0.0;
        let terms = self
            .rules
            .iter()
            .map(|rule| {
                let sub = self.sub_score(rule.as_ref(), criteria);
                total += sub.weighted;
                sub
            })
            .collect();
        ScoreBreakdown { terms, total }
    }

    fn sub_score(&self, rule: &dyn CriterionRule, criteria: &Criteria) -> SubScore {
        let criterion = rule.criterion();
        let normalized = rule.normalize(criteria);
        let weight = self.weights.get(criterion);
        SubScore {
            criterion,
            raw: criteria.value(criterion),
            normalized,
            weight,
            weighted: normalized * weight,
        }
    }
}

impl Default for Scorer {
    fn default() -> Self {
        Self::new(WeightConfig::default())
    }
}

impl std::fmt::Debug for Scorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scorer")
            .field("rules", &self.rule_names())
            .field("weights", &self.weights)
            .field("curve", &self.curve)
            .finish()
    }
}

fn standard_rules(curve: UrgencyCurve) -> Vec<Box<dyn CriterionRule>> {
    vec![
        Box::new(CoreAlignmentRule),
        Box::new(EffortRule),
        Box::new(OrganizationValueRule),
        Box::new(UrgencyRule::new(curve)),
    ]
}
