//! Value types for the task tracker.
//!
//! - [`Task`]: A non-empty description. Tasks have no identity beyond their text.
//! - [`Tier`]: One of the four priority buckets (`now`, `next`, `soon`, `later`).
//! - [`TaskMatch`]: Where a keyword query found a task.
//! - [`MatchResult`]: Outcome of a search-and-mutate command (`done`, `bump`).

mod matching;
mod task;
mod tier;

pub use matching::*;
pub use task::*;
pub use tier::*;
