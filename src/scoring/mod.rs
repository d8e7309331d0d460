//! Weighted multi-criterion task scoring.
//!
//! Each criterion is normalized to a dimensionless sub-score by a
//! [`CriterionRule`], multiplied by its weight from [`WeightConfig`], and
//! summed:
//!
//! | Criterion            | Sub-score                                   |
//! |----------------------|---------------------------------------------|
//! | `corePercentage`     | `value / 100`                               |
//! | `effortComplexity`   | `value / 10`                                |
//! | `organizationValue`  | `min(value / 10, 1)`                        |
//! | `dueInDays`          | `0` if no due date, else `base + scale·e^(−alpha·d)` |
//!
//! The urgency constants live in [`UrgencyCurve`] and default to
//! `base = 1`, `scale = 6`, `alpha = 0.1`.
//!
//! Scoring is silent by default. Pass a [`ScoreObserver`] such as
//! [`TracingObserver`] to [`Scorer::score_observed`] to trace each step.

mod config;
mod observer;
mod rules;
mod scorer;
mod types;

pub use config::{UrgencyCurve, WeightConfig};
pub use observer::{NoopObserver, ScoreObserver, TracingObserver};
pub use rules::{CoreAlignmentRule, EffortRule, OrganizationValueRule, UrgencyRule};
pub use scorer::Scorer;
pub use types::{CriterionRule, ScoreBreakdown, SubScore};
