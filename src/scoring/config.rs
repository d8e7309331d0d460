//! Scoring configuration: per-criterion weights and the urgency curve.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::criteria::Criterion;
use crate::error::{Result, TaskRankError};

/// Per-criterion multipliers applied to normalized sub-scores.
///
/// Every weight defaults to `1.0`. When built from a key/value map,
/// unrecognized keys are ignored and missing keys keep the default.
///
/// # Examples
///
/// ```
/// use u_taskrank::criteria::Criterion;
/// use u_taskrank::scoring::WeightConfig;
///
/// let weights = WeightConfig::from_pairs([("dueInDays", 3.5), ("unknown", 9.0)]);
/// assert_eq!(weights.get(Criterion::DueInDays), 3.5);
/// assert_eq!(weights.get(Criterion::CorePercentage), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct WeightConfig {
    pub core_percentage: f64,
    pub effort_complexity: f64,
    pub organization_value: f64,
    pub due_in_days: f64,
}

impl Default for WeightConfig {
    fn default() -> Self {
        Self::uniform(1.0)
    }
}

impl WeightConfig {
    /// All four criteria weighted equally.
    pub fn uniform(weight: f64) -> Self {
        Self {
            core_percentage: weight,
            effort_complexity: weight,
            organization_value: weight,
            due_in_days: weight,
        }
    }

    /// Builds weights from `(key, weight)` pairs, ignoring unknown keys.
    pub fn from_pairs<K, I>(pairs: I) -> Self
    where
        K: AsRef<str>,
        I: IntoIterator<Item = (K, f64)>,
    {
        let mut config = Self::default();
        for (key, weight) in pairs {
            if let Some(criterion) = Criterion::from_key(key.as_ref()) {
                config.set(criterion, weight);
            }
        }
        config
    }

    pub fn get(&self, criterion: Criterion) -> f64 {
        match criterion {
            Criterion::CorePercentage => self.core_percentage,
            Criterion::EffortComplexity => self.effort_complexity,
            Criterion::OrganizationValue => self.organization_value,
            Criterion::DueInDays => self.due_in_days,
        }
    }

    pub fn set(&mut self, criterion: Criterion, weight: f64) {
        match criterion {
            Criterion::CorePercentage => self.core_percentage = weight,
            Criterion::EffortComplexity => self.effort_complexity = weight,
            Criterion::OrganizationValue => self.organization_value = weight,
            Criterion::DueInDays => self.due_in_days = weight,
        }
    }

    pub fn with_weight(mut self, criterion: Criterion, weight: f64) -> Self {
        self.set(criterion, weight);
        self
    }

    /// Iterates `(criterion, weight)` in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Criterion, f64)> + '_ {
        Criterion::ALL.into_iter().map(|c| (c, self.get(c)))
    }

    /// Checks that every weight is finite and non-negative.
    pub fn validate(&self) -> Result<()> {
        for (criterion, weight) in self.iter() {
            if !weight.is_finite() || weight < 0.0 {
                return Err(TaskRankError::InvalidConfig(format!(
                    "weight for {criterion} must be a non-negative number, got {weight}"
                )));
            }
        }
        Ok(())
    }
}

/// Decaying-exponential urgency curve.
///
/// For a task due in `d > 0` days the urgency is
/// `base + scale * exp(-alpha * d)`. A task with no due date (`d == 0`)
/// has urgency `0.0`, which ranks it below any dated task.
///
/// # Defaults
///
/// ```
/// use u_taskrank::scoring::UrgencyCurve;
///
/// let curve = UrgencyCurve::default();
/// assert_eq!((curve.base, curve.scale, curve.alpha), (1.0, 6.0, 0.1));
/// assert_eq!(curve.evaluate(0), 0.0);
/// assert!((curve.evaluate(30) - 1.298_722).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct UrgencyCurve {
    /// Floor approached as the due date recedes.
    pub base: f64,
    /// Extra urgency at the first day; the ceiling is `base + scale`.
    pub scale: f64,
    /// Decay rate per day.
    pub alpha: f64,
}

impl Default for UrgencyCurve {
    fn default() -> Self {
        Self {
            base: 1.0,
            scale: 6.0,
            alpha: 0.1,
        }
    }
}

impl UrgencyCurve {
    pub fn with_base(mut self, base: f64) -> Self {
        self.base = base;
        self
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Urgency sub-score for a task due in `due_in_days` days.
    pub fn evaluate(&self, due_in_days: u32) -> f64 {
        if due_in_days == 0 {
            return 0.0;
        }
        self.base + self.scale * (-self.alpha * f64::from(due_in_days)).exp()
    }

    /// Checks that the curve is finite and actually decays.
    pub fn validate(&self) -> Result<()> {
        if !(self.base.is_finite() && self.scale.is_finite() && self.alpha.is_finite()) {
            return Err(TaskRankError::InvalidConfig(
                "urgency curve parameters must be finite".into(),
            ));
        }
        if self.alpha <= 0.0 {
            return Err(TaskRankError::InvalidConfig(
                "urgency alpha must be positive".into(),
            ));
        }
        if self.scale < 0.0 {
            return Err(TaskRankError::InvalidConfig(
                "urgency scale must be non-negative".into(),
            ));
        }
        Ok(())
    }
}
