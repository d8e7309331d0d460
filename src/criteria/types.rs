//! Criterion keys and the per-task criteria record.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Result, TaskRankError};

/// One of the four scoring criteria.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Criterion {
    /// Alignment with the core mission, 0–100.
    CorePercentage,
    /// Required effort, 0–10. Higher means more effort.
    EffortComplexity,
    /// Value to the organization, capped at 10 when scoring.
    OrganizationValue,
    /// Days until due; 0 means no due date.
    DueInDays,
}

impl Criterion {
    /// All criteria in canonical order.
    pub const ALL: [Criterion; 4] = [
        Criterion::CorePercentage,
        Criterion::EffortComplexity,
        Criterion::OrganizationValue,
        Criterion::DueInDays,
    ];

    /// Canonical key used in weight maps and task documents.
    pub fn key(self) -> &'static str {
        match self {
            Criterion::CorePercentage => "corePercentage",
            Criterion::EffortComplexity => "effortComplexity",
            Criterion::OrganizationValue => "organizationValue",
            Criterion::DueInDays => "dueInDays",
        }
    }

    /// Human-readable label for reports.
    pub fn label(self) -> &'static str {
        match self {
            Criterion::CorePercentage => "Core Alignment",
            Criterion::EffortComplexity => "Effort Complexity",
            Criterion::OrganizationValue => "Organization Value",
            Criterion::DueInDays => "Due In Days",
        }
    }

    /// Looks up a criterion by its canonical key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.key() == key)
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Criterion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Criteria describing a single task.
///
/// Values outside their nominal domains are accepted; the scorer only
/// caps `organization_value`.
///
/// # Examples
///
/// ```
/// use u_taskrank::criteria::Criteria;
///
/// let c = Criteria::new(100.0, 5.0, 10.0, 30);
/// assert!(c.has_due_date());
/// assert_eq!(Criteria::default().due_in_days, 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct Criteria {
    pub core_percentage: f64,
    pub effort_complexity: f64,
    pub organization_value: f64,
    /// Days until due. `0` is the "no due date" sentinel, not "due today".
    pub due_in_days: u32,
}

impl Criteria {
    pub fn new(
        core_percentage: f64,
        effort_complexity: f64,
        organization_value: f64,
        due_in_days: u32,
    ) -> Self {
        Self {
            core_percentage,
            effort_complexity,
            organization_value,
            due_in_days,
        }
    }

    /// Returns the raw value of one criterion.
    pub fn value(&self, criterion: Criterion) -> f64 {
        match criterion {
            Criterion::CorePercentage => self.core_percentage,
            Criterion::EffortComplexity => self.effort_complexity,
            Criterion::OrganizationValue => self.organization_value,
            Criterion::DueInDays => f64::from(self.due_in_days),
        }
    }

    /// Whether the task carries a due date.
    pub fn has_due_date(&self) -> bool {
        self.due_in_days != 0
    }

    /// Builds criteria from a loose key/value record.
    ///
    /// Unrecognized keys are ignored. Every criterion key must be present;
    /// defaulting is the extractor's job, so an absent key here is a
    /// contract violation reported as [`TaskRankError::MissingField`].
    ///
    /// # Errors
    ///
    /// - `MissingField` when a criterion key is absent.
    /// - `MalformedSource` when `dueInDays` is negative or not an integer.
    pub fn from_fields<'a, I>(task: &str, fields: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        let mut values = [None; 4];
        for (key, value) in fields {
            if let Some(criterion) = Criterion::from_key(key) {
                values[criterion.index()] = Some(value);
            }
        }

        let take = |criterion: Criterion| {
            values[criterion.index()].ok_or_else(|| TaskRankError::MissingField {
                task: task.to_string(),
                field: criterion.key(),
            })
        };

        let core_percentage = take(Criterion::CorePercentage)?;
        let effort_complexity = take(Criterion::EffortComplexity)?;
        let organization_value = take(Criterion::OrganizationValue)?;
        let due = take(Criterion::DueInDays)?;

        if !due.is_finite() || due < 0.0 || due.fract() != 0.0 || due > f64::from(u32::MAX) {
            return Err(TaskRankError::MalformedSource {
                source_name: task.to_string(),
                reason: format!("dueInDays must be a non-negative integer, got {due}"),
            });
        }

        Ok(Self::new(
            core_percentage,
            effort_complexity,
            organization_value,
            due as u32,
        ))
    }
}
