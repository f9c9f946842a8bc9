use std::fmt;

use crate::error::TaskError;

/// A task description.
///
/// Construction goes through [`Task::new`], which rejects descriptions that
/// are empty or whitespace-only. Once built, a task's text never changes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Task(String);

impl Task {
    pub fn new(description: impl Into<String>) -> Result<Self, TaskError> {
        let description = description.into();
        if description.trim().is_empty() {
            return Err(TaskError::InvalidTask(description));
        }
        Ok(Self(description))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whitespace-separated tokens of the description.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.0.split_whitespace()
    }
}

impl PartialEq<str> for Task {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Task {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
