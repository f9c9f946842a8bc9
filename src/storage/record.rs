use serde::{Deserialize, Serialize};

use crate::error::TaskError;
use crate::store::TaskStore;

/// The persisted shape of a [`TaskStore`].
///
/// `now` and `next` are omitted when the tier is empty; an absent key is not
/// the same as an empty string, which is rejected as an invalid task on load.
/// `soon` and `later` are always present, possibly empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub now: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    pub soon: Vec<String>,
    pub later: Vec<String>,
}

impl TaskStore {
    /// Rebuild a store by replaying the record's fields in order: `now`,
    /// `next`, each `soon`, each `later`.
    ///
    /// A record with `next` but no `now` therefore loads that task as `now`.
    pub fn from_record(record: TaskRecord) -> Result<Self, TaskError> {
        let mut store = TaskStore::new();
        if let Some(now) = record.now {
            store.set_now(now)?;
        }
        if let Some(next) = record.next {
            store.set_next(next)?;
        }
        for task in record.soon {
            store.append_soon(task)?;
        }
        for task in record.later {
            store.append_later(task)?;
        }
        Ok(store)
    }

    pub fn to_record(&self) -> TaskRecord {
        TaskRecord {
            now: self.now().map(|t| t.to_string()),
            next: self.next().map(|t| t.to_string()),
            soon: self.soon().iter().map(|t| t.to_string()).collect(),
            later: self.later().iter().map(|t| t.to_string()).collect(),
        }
    }
}
