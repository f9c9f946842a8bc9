use super::{Task, Tier};

/// A task located by a keyword query.
///
/// `index` is the position inside the sequence that owns the task: the
/// high-priority chain for `now`/`next`/`soon`, the `later` list otherwise.
/// A `soon` task therefore never has an index below 2.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskMatch {
    pub tier: Tier,
    pub index: usize,
    pub task: Task,
}

/// Outcome of `done` or `bump`.
///
/// The command only applies when exactly one task matched. `matched` always
/// carries every task the query found, so callers can explain an ambiguous
/// or empty result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    pub succeeded: bool,
    pub matched: Vec<Task>,
}

impl MatchResult {
    pub(crate) fn from_matches(matches: Vec<TaskMatch>) -> Self {
        Self {
            succeeded: matches.len() == 1,
            matched: matches.into_iter().map(|m| m.task).collect(),
        }
    }

    /// The task the command applied to, when it succeeded.
    pub fn task(&self) -> Option<&Task> {
        if self.succeeded {
            self.matched.first()
        } else {
            None
        }
    }

    pub fn is_ambiguous(&self) -> bool {
        self.matched.len() > 1
    }
}
