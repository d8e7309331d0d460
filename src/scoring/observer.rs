//! Opt-in hooks for watching a score being computed.

use super::types::SubScore;

/// Receives each step of a score computation.
///
/// Callers that want a trace of how a score was assembled pass an
/// observer to [`Scorer::score_observed`](super::Scorer::score_observed).
/// Both methods default to doing nothing.
pub trait ScoreObserver: Send + Sync {
    /// Called after each criterion is weighted, with the total so far.
    fn on_sub_score(&self, _task: &str, _sub: &SubScore, _running_total: f64) {}

    /// Called once the task's score is complete.
    fn on_total(&self, _task: &str, _total: f64) {}
}

/// Observer that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl ScoreObserver for NoopObserver {}

/// Observer that emits `tracing` debug events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl ScoreObserver for TracingObserver {
    fn on_sub_score(&self, task: &str, sub: &SubScore, running_total: f64) {
        tracing::debug!(
            task,
            criterion = %sub.criterion,
            raw = sub.raw,
            normalized = sub.normalized,
            weight = sub.weight,
            weighted = sub.weighted,
            running_total,
            "sub-score"
        );
    }

    fn on_total(&self, task: &str, total: f64) {
        tracing::debug!(task, total, "task scored");
    }
}
