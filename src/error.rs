//! Error types for u-taskrank.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading tasks or building a scoring pipeline.
///
/// A zero total score is not an error: it surfaces as a degenerate
/// [`Distribution`](crate::allocation::Distribution).
#[derive(Error, Debug)]
pub enum TaskRankError {
    /// The task document could not be located.
    #[error("task source '{}' not found", path.display())]
    MissingSource { path: PathBuf },

    /// The task document is not structurally valid.
    #[error("malformed task source '{source_name}': {reason}")]
    MalformedSource { source_name: String, reason: String },

    /// A raw criteria record lacks one of the four criterion keys.
    #[error("task '{task}' is missing criterion '{field}'")]
    MissingField { task: String, field: &'static str },

    /// A weight, curve, or allocation parameter is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TaskRankError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_source_message() {
        let err = TaskRankError::MissingSource {
            path: PathBuf::from("tasks.yaml"),
        };
        assert_eq!(err.to_string(), "task source 'tasks.yaml' not found");
    }

    #[test]
    fn test_missing_field_message() {
        let err = TaskRankError::MissingField {
            task: "Ship".into(),
            field: "dueInDays",
        };
        assert_eq!(err.to_string(), "task 'Ship' is missing criterion 'dueInDays'");
    }
}
