//! JSON blob persistence for the task collection.
//!
//! The whole collection is stored as one serialized array under a fixed file
//! name in the application data directory. The store is deliberately dumb: it
//! loads once at startup and rewrites the full blob after every mutation.
//! There is no migration or versioning scheme — a blob that cannot be parsed
//! is treated as "no data" and replaced on the next save, never surfaced as a
//! fatal error.

use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::libs::task::Task;
use crate::msg_warning;
use anyhow::Result;
use std::fs::{self, File};
use std::path::PathBuf;

pub const TASKS_FILE_NAME: &str = "tasks.json";

/// Blob store keyed by [`TASKS_FILE_NAME`] in the platform data directory.
#[derive(Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new() -> Result<Store> {
        let path = DataStorage::new().get_path(TASKS_FILE_NAME)?;
        Ok(Store { path })
    }

    /// Loads the persisted collection. A missing, unreadable, or malformed
    /// blob yields an empty collection (best-effort recovery).
    pub fn load(&self) -> Vec<Task> {
        if !self.path.exists() {
            return Vec::new();
        }
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(_) => {
                msg_warning!(Message::StorageUnreadable);
                return Vec::new();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(tasks) => tasks,
            Err(_) => {
                msg_warning!(Message::StorageMalformed);
                Vec::new()
            }
        }
    }

    /// Rewrites the blob with the given collection.
    pub fn save(&self, tasks: &[Task]) -> Result<()> {
        let file = File::create(&self.path)?;
        serde_json::to_writer_pretty(&file, &tasks)?;
        Ok(())
    }
}
