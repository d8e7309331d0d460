//! Criteria extraction from YAML task documents.
//!
//! Expected document shape:
//!
//! ```yaml
//! tasks:
//!   - title: Ship release
//!     coreAlignment: { percentage: 80 }
//!     magnitude: { effortComplexity: 4 }
//!     organization: { value: 7 }
//!     timeframe: { dueInDays: 10 }
//! ```
//!
//! Missing sections and values default to `0`, a missing title to
//! `"Unknown Task"`. Other task fields are ignored. When two tasks share a
//! title, the later one wins.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::Deserialize;

use crate::criteria::{Criteria, TaskSet};
use crate::error::{Result, TaskRankError};
use crate::scoring::WeightConfig;

const UNKNOWN_TITLE: &str = "Unknown Task";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TaskDocument {
    tasks: Option<Vec<TaskRecord>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct TaskRecord {
    title: Option<String>,
    core_alignment: CoreAlignment,
    magnitude: Magnitude,
    organization: Organization,
    timeframe: Timeframe,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CoreAlignment {
    percentage: f64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct Magnitude {
    effort_complexity: f64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Organization {
    value: f64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct Timeframe {
    due_in_days: u32,
}

impl TaskRecord {
    fn into_entry(self) -> (String, Criteria) {
        let title = self.title.unwrap_or_else(|| UNKNOWN_TITLE.to_string());
        let criteria = Criteria::new(
            self.core_alignment.percentage,
            self.magnitude.effort_complexity,
            self.organization.value,
            self.timeframe.due_in_days,
        );
        (title, criteria)
    }
}

/// Reads and parses a task document from disk.
///
/// # Errors
///
/// - `MissingSource` if the file does not exist.
/// - `MalformedSource` if it is not a valid task document.
/// - `Io` for any other read failure.
pub fn load_tasks(path: impl AsRef<Path>) -> Result<TaskSet> {
    let path = path.as_ref();
    let text = read_source(path)?;
    parse_named(&text, &path.display().to_string())
}

/// Parses a task document from a string.
pub fn parse_tasks(text: &str) -> Result<TaskSet> {
    parse_named(text, "<string>")
}

fn parse_named(text: &str, source_name: &str) -> Result<TaskSet> {
    let document: Option<TaskDocument> = parse_yaml(text, source_name)?;

    let Some(records) = document.and_then(|d| d.tasks) else {
        tracing::warn!(source = source_name, "no tasks found in document");
        return Ok(TaskSet::new());
    };

    let mut tasks = TaskSet::with_capacity(records.len());
    for record in records {
        let (title, criteria) = record.into_entry();
        if tasks.insert(title.clone(), criteria).is_some() {
            tracing::debug!(task = %title, "duplicate title, keeping the later entry");
        }
    }
    tracing::info!(source = source_name, tasks = tasks.len(), "parsed tasks");
    Ok(tasks)
}

/// Reads a weight map from a YAML file.
pub fn load_weights(path: impl AsRef<Path>) -> Result<WeightConfig> {
    let path = path.as_ref();
    let text = read_source(path)?;
    parse_weights_named(&text, &path.display().to_string())
}

/// Parses a weight map such as `{ corePercentage: 1.2, dueInDays: 3.5 }`.
///
/// Unrecognized keys are ignored; missing keys default to `1.0`.
pub fn parse_weights(text: &str) -> Result<WeightConfig> {
    parse_weights_named(text, "<string>")
}

fn parse_weights_named(text: &str, source_name: &str) -> Result<WeightConfig> {
    let weights: Option<WeightConfig> = parse_yaml(text, source_name)?;
    let weights = weights.unwrap_or_default();
    weights.validate()?;
    Ok(weights)
}

fn parse_yaml<T>(text: &str, source_name: &str) -> Result<Option<T>>
where
    T: serde::de::DeserializeOwned,
{
    if text.trim().is_empty() {
        return Ok(None);
    }
    serde_yaml::from_str(text).map_err(|e| TaskRankError::MalformedSource {
        source_name: source_name.to_string(),
        reason: e.to_string(),
    })
}

fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => TaskRankError::MissingSource {
            path: path.to_path_buf(),
        },
        _ => TaskRankError::Io {
            path: path.to_path_buf(),
            source,
        },
    })
}
