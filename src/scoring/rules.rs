//! The four standard criterion rules.

use super::config::UrgencyCurve;
use super::types::CriterionRule;
use crate::criteria::{Criteria, Criterion};

/// `core_percentage / 100`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CoreAlignmentRule;

impl CriterionRule for CoreAlignmentRule {
    fn criterion(&self) -> Criterion {
        Criterion::CorePercentage
    }

    fn normalize(&self, criteria: &Criteria) -> f64 {
        criteria.core_percentage / 100.0
    }
}

/// `effort_complexity / 10`.
///
/// Effort is not inverted: a more complex task gets a higher sub-score.
#[derive(Debug, Clone, Copy, Default)]
pub struct EffortRule;

impl CriterionRule for EffortRule {
    fn criterion(&self) -> Criterion {
        Criterion::EffortComplexity
    }

    fn normalize(&self, criteria: &Criteria) -> f64 {
        criteria.effort_complexity / 10.0
    }
}

/// `min(organization_value / 10, 1.0)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrganizationValueRule;

impl CriterionRule for OrganizationValueRule {
    fn criterion(&self) -> Criterion {
        Criterion::OrganizationValue
    }

    fn normalize(&self, criteria: &Criteria) -> f64 {
        (criteria.organization_value / 10.0).min(1.0)
    }
}

/// Urgency from days until due, via an [`UrgencyCurve`].
#[derive(Debug, Clone, Copy, Default)]
pub struct UrgencyRule {
    pub curve: UrgencyCurve,
}

impl UrgencyRule {
    pub fn new(curve: UrgencyCurve) -> Self {
        Self { curve }
    }
}

impl CriterionRule for UrgencyRule {
    fn criterion(&self) -> Criterion {
        Criterion::DueInDays
    }

    fn name(&self) -> &str {
        "Urgency"
    }

    fn normalize(&self, criteria: &Criteria) -> f64 {
        self.curve.evaluate(criteria.due_in_days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with(core: f64, effort: f64, org: f64, due: u32) -> Criteria {
        Criteria::new(core, effort, org, due)
    }

    #[test]
    fn test_core_alignment() {
        assert!((CoreAlignmentRule.normalize(&with(100.0, 0.0, 0.0, 0)) - 1.0).abs() < 1e-15);
        assert!((CoreAlignmentRule.normalize(&with(35.0, 0.0, 0.0, 0)) - 0.35).abs() < 1e-15);
    }

    #[test]
    fn test_core_alignment_out_of_domain_not_clamped() {
        assert!((CoreAlignmentRule.normalize(&with(150.0, 0.0, 0.0, 0)) - 1.5).abs() < 1e-15);
    }

    #[test]
    fn test_effort_not_inverted() {
        let low = EffortRule.normalize(&with(0.0, 2.0, 0.0, 0));
        let high = EffortRule.normalize(&with(0.0, 8.0, 0.0, 0));
        assert!(high > low);
        assert!((high - 0.8).abs() < 1e-15);
    }

    #[test]
    fn test_organization_value_capped() {
        assert_eq!(OrganizationValueRule.normalize(&with(0.0, 0.0, 15.0, 0)), 1.0);
        assert_eq!(OrganizationValueRule.normalize(&with(0.0, 0.0, 10.0, 0)), 1.0);
        assert!((OrganizationValueRule.normalize(&with(0.0, 0.0, 7.0, 0)) - 0.7).abs() < 1e-15);
    }

    #[test]
    fn test_urgency_rule_uses_curve() {
        let rule = UrgencyRule::new(UrgencyCurve::default().with_scale(0.0));
        assert_eq!(rule.normalize(&with(0.0, 0.0, 0.0, 5)), 1.0);
        assert_eq!(rule.normalize(&with(0.0, 0.0, 0.0, 0)), 0.0);
    }

    #[test]
    fn test_rule_names() {
        assert_eq!(CoreAlignmentRule.name(), "Core Alignment");
        assert_eq!(EffortRule.name(), "Effort Complexity");
        assert_eq!(OrganizationValueRule.name(), "Organization Value");
        assert_eq!(UrgencyRule::default().name(), "Urgency");
    }
}
