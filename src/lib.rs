//! A four-tier personal task tracker.
//!
//! Tasks sit in one of four tiers: `now` (the active task), `next` (the
//! queued task), `soon` and `later` (ordered lists). The core is
//! [`TaskStore`]; everything else loads it, renders it and saves it.

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod render;
pub mod storage;
pub mod store;

pub use error::{ConfigError, StorageError, TaskError};
pub use models::{MatchResult, Task, TaskMatch, Tier};
pub use store::TaskStore;
