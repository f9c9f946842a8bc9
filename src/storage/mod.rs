//! File persistence for the task store.
//!
//! The store is written as a YAML [`TaskRecord`] to `tasks.yaml` inside the
//! task directory. Writes go through a temp file + rename so a crash never
//! leaves a half-written record, and mutating commands hold an exclusive lock
//! on the hidden `.tasks.lock` for the whole load/mutate/save cycle.

mod record;

pub use record::TaskRecord;

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use tracing::debug;

use crate::error::StorageError;
use crate::store::TaskStore;

const TASKS_FILE: &str = "tasks.yaml";
const LOCK_FILE: &str = ".tasks.lock";

/// Handle to the task file inside a task directory.
#[derive(Debug, Clone)]
pub struct TaskFile {
    path: PathBuf,
    lock_path: PathBuf,
}

impl TaskFile {
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            path: dir.join(TASKS_FILE),
            lock_path: dir.join(LOCK_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the store.
    ///
    /// A missing or blank file yields an empty store. Malformed YAML or a
    /// record holding an invalid task is an error.
    pub fn load(&self) -> Result<TaskStore, StorageError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No task file, starting empty");
                return Ok(TaskStore::new());
            }
            Err(source) => {
                return Err(StorageError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        if content.trim().is_empty() {
            return Ok(TaskStore::new());
        }

        let record: TaskRecord =
            serde_yaml_bw::from_str(&content).map_err(|source| StorageError::Parse {
                path: self.path.clone(),
                source,
            })?;

        let store = TaskStore::from_record(record).map_err(|source| {
            StorageError::InvalidRecord {
                path: self.path.clone(),
                source,
            }
        })?;

        debug!(path = %self.path.display(), tasks = store.len(), "Loaded tasks");
        Ok(store)
    }

    /// Write the store atomically, creating the task directory if needed.
    pub fn save(&self, store: &TaskStore) -> Result<(), StorageError> {
        self.ensure_dir()?;
        let yaml =
            serde_yaml_bw::to_string(&store.to_record()).map_err(StorageError::Serialize)?;

        let tmp_path = self.temp_path();
        let io_err = |source| StorageError::Io {
            path: tmp_path.clone(),
            source,
        };

        let mut tmp_file = File::create(&tmp_path).map_err(io_err)?;
        tmp_file.write_all(yaml.as_bytes()).map_err(io_err)?;
        tmp_file.sync_all().map_err(io_err)?;
        drop(tmp_file);

        fs::rename(&tmp_path, &self.path).map_err(|source| StorageError::Io {
            path: self.path.clone(),
            source,
        })?;

        debug!(path = %self.path.display(), tasks = store.len(), "Saved tasks");
        Ok(())
    }

    /// Take the exclusive lock. Released when the guard drops.
    pub fn lock(&self) -> Result<TaskFileLock, StorageError> {
        self.ensure_dir()?;
        let lock_err = |source| StorageError::Lock {
            path: self.lock_path.clone(),
            source,
        };

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&self.lock_path)
            .map_err(lock_err)?;
        file.lock_exclusive().map_err(lock_err)?;

        Ok(TaskFileLock { file })
    }

    fn ensure_dir(&self) -> Result<(), StorageError> {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => {
                fs::create_dir_all(parent).map_err(|source| StorageError::Io {
                    path: parent.to_path_buf(),
                    source,
                })
            }
            _ => Ok(()),
        }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = std::ffi::OsString::from(".");
        if let Some(file_name) = self.path.file_name() {
            name.push(file_name);
        }
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

/// Guard holding the task directory's exclusive lock.
#[derive(Debug)]
pub struct TaskFileLock {
    file: File,
}

impl Drop for TaskFileLock {
    fn drop(&mut self) {
        let _ = FileExt::unlock(&self.file);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let store = TaskFile::in_dir(dir.path()).load().unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_blank_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(TASKS_FILE), "\n  \n").unwrap();
        let store = TaskFile::in_dir(dir.path()).load().unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_save_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        let file = TaskFile::in_dir(dir.path());
        let mut store = TaskStore::new();
        store.set_now("write docs").unwrap();

        file.save(&store).unwrap();

        assert!(file.path().exists());
        assert!(!dir.path().join(".tasks.yaml.tmp").exists());
    }

    #[test]
    fn test_save_creates_missing_dir() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("nested").join("tasks");
        let file = TaskFile::in_dir(&nested);

        file.save(&TaskStore::new()).unwrap();
        assert!(nested.join(TASKS_FILE).exists());
    }

    #[test]
    fn test_lock_file_is_hidden() {
        let dir = TempDir::new().unwrap();
        let _lock = TaskFile::in_dir(dir.path()).lock().unwrap();

        assert!(dir.path().join(".tasks.lock").exists());
        assert!(!dir.path().join("tasks.lock").exists());
    }

    #[test]
    fn test_lock_can_be_retaken_after_release() {
        let dir = TempDir::new().unwrap();
        let file = TaskFile::in_dir(dir.path());

        drop(file.lock().unwrap());
        assert!(file.lock().is_ok());
    }
}
