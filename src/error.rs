//! Error types shared across the crate.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by [`TaskStore`](crate::store::TaskStore) mutations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskError {
    #[error("Invalid task: {0:?} is not a task description")]
    InvalidTask(String),
}

/// Errors raised while reading or writing the task file.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml_bw::Error,
    },

    #[error("Failed to serialize tasks: {0}")]
    Serialize(#[source] serde_yaml_bw::Error),

    #[error("Failed to lock {path}: {source}")]
    Lock {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid task record in {path}: {source}")]
    InvalidRecord {
        path: PathBuf,
        #[source]
        source: TaskError,
    },
}

/// Errors raised while resolving the environment and configuration record.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} is not set; point it at the directory holding your tasks")]
    MissingTaskDir(&'static str),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml_bw::Error,
    },
}
