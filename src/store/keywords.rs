//! Keyword queries used by `find`, `done` and `bump`.
//!
//! A query is split on whitespace into a set of keywords. A task matches when
//! every keyword equals one of the task's own whitespace-separated tokens.
//! Matching is case-sensitive and token-exact: `doc` does not match `docs`.
//! A query with no keywords matches every task.

use std::collections::HashSet;

use crate::models::Task;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordQuery<'q> {
    keywords: HashSet<&'q str>,
}

impl<'q> KeywordQuery<'q> {
    pub fn parse(query: &'q str) -> Self {
        Self {
            keywords: query.split_whitespace().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    pub fn matches(&self, task: &Task) -> bool {
        let tokens: HashSet<&str> = task.tokens().collect();
        self.keywords.is_subset(&tokens)
    }
}
