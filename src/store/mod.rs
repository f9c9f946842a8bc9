//! The four-tier task container.
//!
//! Tasks live in two ordered sequences:
//!
//! - the high-priority chain, where position 0 is `now`, position 1 is
//!   `next` and every later position is `soon`, in order;
//! - the low-priority list, which is `later`, in order.
//!
//! Tiers are positional, never tagged, so "at most one `now`" and "no `next`
//! without a `now`" hold by construction. Inserting into `now` or `next`
//! shifts everything behind the insertion point down by one; nothing is ever
//! dropped by a promotion.

mod keywords;

pub use keywords::KeywordQuery;

use tracing::debug;

use crate::error::TaskError;
use crate::models::{MatchResult, Task, TaskMatch, Tier};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskStore {
    high_priority: Vec<Task>,
    low_priority: Vec<Task>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ============================================================
    // Accessors
    // ============================================================

    pub fn now(&self) -> Option<&Task> {
        self.high_priority.first()
    }

    pub fn next(&self) -> Option<&Task> {
        self.high_priority.get(1)
    }

    pub fn soon(&self) -> &[Task] {
        self.high_priority.get(2..).unwrap_or(&[])
    }

    pub fn later(&self) -> &[Task] {
        &self.low_priority
    }

    /// Total number of tasks across all tiers.
    pub fn len(&self) -> usize {
        self.high_priority.len() + self.low_priority.len()
    }

    pub fn is_empty(&self) -> bool {
        self.high_priority.is_empty() && self.low_priority.is_empty()
    }

    // ============================================================
    // Insertion
    // ============================================================

    /// Make `description` the `now` task.
    ///
    /// The previous `now` becomes `next`, the previous `next` becomes the
    /// first `soon`, and so on down the chain.
    pub fn set_now(&mut self, description: impl Into<String>) -> Result<(), TaskError> {
        let task = Task::new(description)?;
        self.insert_at_front(task);
        Ok(())
    }

    /// Make `description` the `next` task.
    ///
    /// On an empty chain the task becomes `now`, since there is no `next`
    /// without a `now`. Otherwise the previous `next` and everything behind
    /// it shift down by one.
    pub fn set_next(&mut self, description: impl Into<String>) -> Result<(), TaskError> {
        let task = Task::new(description)?;
        self.insert_at_second(task);
        Ok(())
    }

    /// Append to the end of the high-priority chain.
    ///
    /// When the chain holds fewer than two tasks the new task fills the
    /// first free position, so on an empty store it becomes `now`.
    pub fn append_soon(&mut self, description: impl Into<String>) -> Result<(), TaskError> {
        let task = Task::new(description)?;
        self.high_priority.push(task);
        Ok(())
    }

    pub fn append_later(&mut self, description: impl Into<String>) -> Result<(), TaskError> {
        let task = Task::new(description)?;
        self.low_priority.push(task);
        Ok(())
    }

    fn insert_at_front(&mut self, task: Task) {
        self.high_priority.insert(0, task);
    }

    fn insert_at_second(&mut self, task: Task) {
        let position = self.high_priority.len().min(1);
        self.high_priority.insert(position, task);
    }

    // ============================================================
    // Keyword operations
    // ============================================================

    /// Every task matching `query`, high-priority chain first, then `later`.
    pub fn find(&self, query: &str) -> Vec<TaskMatch> {
        let query = KeywordQuery::parse(query);

        let high = self
            .high_priority
            .iter()
            .enumerate()
            .map(|(index, task)| (Tier::of_high_priority(index), index, task));
        let low = self
            .low_priority
            .iter()
            .enumerate()
            .map(|(index, task)| (Tier::Later, index, task));

        high.chain(low)
            .filter(|(_, _, task)| query.matches(task))
            .map(|(tier, index, task)| TaskMatch {
                tier,
                index,
                task: task.clone(),
            })
            .collect()
    }

    /// Remove the single task matching `query`.
    ///
    /// Nothing changes unless exactly one task matches. Removal closes the
    /// gap: tasks behind it move up one position.
    pub fn done(&mut self, query: &str) -> MatchResult {
        let matches = self.find(query);
        if let [only] = matches.as_slice() {
            self.remove(only.tier, only.index);
        } else {
            debug!(query, matched = matches.len(), "done: no unique match");
        }
        MatchResult::from_matches(matches)
    }

    /// Move the single task matching `query` to `now`.
    ///
    /// Equivalent to removing the task and calling [`set_now`](Self::set_now)
    /// with its text. Nothing changes unless exactly one task matches.
    pub fn bump(&mut self, query: &str) -> MatchResult {
        let matches = self.find(query);
        if let [only] = matches.as_slice() {
            let task = self.remove(only.tier, only.index);
            self.insert_at_front(task);
        } else {
            debug!(query, matched = matches.len(), "bump: no unique match");
        }
        MatchResult::from_matches(matches)
    }

    fn remove(&mut self, tier: Tier, index: usize) -> Task {
        match tier {
            Tier::Later => self.low_priority.remove(index),
            Tier::Now | Tier::Next | Tier::Soon => self.high_priority.remove(index),
        }
    }
}
