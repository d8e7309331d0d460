//! Ordered, name-keyed collection of task criteria.

use std::collections::HashMap;

use super::types::Criteria;

/// Tasks keyed by name, iterated in insertion order.
///
/// Re-inserting an existing name replaces its criteria but keeps the
/// position of the first insertion (last write wins).
///
/// # Examples
///
/// ```
/// use u_taskrank::criteria::{Criteria, TaskSet};
///
/// let mut tasks = TaskSet::new();
/// tasks.insert("a", Criteria::new(10.0, 1.0, 1.0, 0));
/// tasks.insert("b", Criteria::default());
/// tasks.insert("a", Criteria::new(90.0, 1.0, 1.0, 0));
///
/// let names: Vec<&str> = tasks.names().collect();
/// assert_eq!(names, vec!["a", "b"]);
/// assert_eq!(tasks.get("a").unwrap().core_percentage, 90.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskSet {
    entries: Vec<(String, Criteria)>,
    index: HashMap<String, usize>,
}

impl TaskSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Inserts or overwrites a task. Returns the replaced criteria, if any.
    pub fn insert(&mut self, name: impl Into<String>, criteria: Criteria) -> Option<Criteria> {
        let name = name.into();
        if let Some(&pos) = self.index.get(&name) {
            return Some(std::mem::replace(&mut self.entries[pos].1, criteria));
        }
        self.index.insert(name.clone(), self.entries.len());
        self.entries.push((name, criteria));
        None
    }

    pub fn get(&self, name: &str) -> Option<&Criteria> {
        self.index.get(name).map(|&pos| &self.entries[pos].1)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates `(name, criteria)` pairs in insertion order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &Criteria)> + '_ {
        self.entries.iter().map(|(n, c)| (n.as_str(), c))
    }

    pub fn names(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub(crate) fn as_slice(&self) -> &[(String, Criteria)] {
        &self.entries
    }
}

impl<S: Into<String>> FromIterator<(S, Criteria)> for TaskSet {
    fn from_iter<I: IntoIterator<Item = (S, Criteria)>>(iter: I) -> Self {
        let mut set = TaskSet::new();
        set.extend(iter);
        set
    }
}

impl<S: Into<String>> Extend<(S, Criteria)> for TaskSet {
    fn extend<I: IntoIterator<Item = (S, Criteria)>>(&mut self, iter: I) {
        for (name, criteria) in iter {
            self.insert(name, criteria);
        }
    }
}
