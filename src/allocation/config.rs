//! Allocation configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Result, TaskRankError};

/// Default number of parts distributed across tasks.
pub const DEFAULT_BUDGET: u32 = 20;

/// Largest budget accepted by [`AllocationConfig::validate`].
pub const MAX_BUDGET: u32 = 10_000;

/// How a fractional share of the budget is rounded to whole parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Rounding {
    /// Banker's rounding: `2.5 -> 2`, `3.5 -> 4`.
    #[default]
    HalfToEven,
    /// `2.5 -> 3`, `3.5 -> 4`.
    HalfAwayFromZero,
}

impl Rounding {
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Rounding::HalfToEven => value.round_ties_even(),
            Rounding::HalfAwayFromZero => value.round(),
        }
    }
}

/// Configuration for [`Allocator`](super::Allocator).
///
/// # Examples
///
/// ```
/// use u_taskrank::allocation::{AllocationConfig, Rounding};
///
/// let config = AllocationConfig::default()
///     .with_budget(100)
///     .with_rounding(Rounding::HalfAwayFromZero);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AllocationConfig {
    /// Total number of parts to distribute.
    pub budget: u32,
    /// Rounding applied independently to each task's share.
    pub rounding: Rounding,
}

impl Default for AllocationConfig {
    fn default() -> Self {
        Self {
            budget: DEFAULT_BUDGET,
            rounding: Rounding::default(),
        }
    }
}

impl AllocationConfig {
    pub fn with_budget(mut self, budget: u32) -> Self {
        self.budget = budget;
        self
    }

    pub fn with_rounding(mut self, rounding: Rounding) -> Self {
        self.rounding = rounding;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.budget == 0 {
            return Err(TaskRankError::InvalidConfig(
                "budget must be at least 1".into(),
            ));
        }
        if self.budget > MAX_BUDGET {
            return Err(TaskRankError::InvalidConfig(format!(
                "budget must be at most {MAX_BUDGET}, got {}",
                self.budget
            )));
        }
        Ok(())
    }
}
