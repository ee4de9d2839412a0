/*
[INPUT]:  Activity records and a JSON file path
[OUTPUT]: Durable activity list with atomic overwrite semantics
[POS]:    Persistence layer - single JSON file under the data directory
[UPDATE]: When changing the storage location or file format
*/

use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio::fs;

use crate::record::ActivityRecord;

const STORE_FILE_NAME: &str = "activities.json";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("corrupt activity data: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// File-backed store for the activity list. The whole list is rewritten on
/// every save; there is no incremental diff and no schema version.
#[derive(Debug)]
pub struct ActivityStore {
    path: PathBuf,
}

impl ActivityStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(STORE_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the stored list. `Ok(None)` when no file exists yet; a parse
    /// failure is reported as [`StorageError::Corrupt`] so the caller can
    /// decide the fallback.
    pub async fn load(&self) -> Result<Option<Vec<ActivityRecord>>, StorageError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path).await?;
        let records: Vec<ActivityRecord> = serde_json::from_str(&content)?;
        Ok(Some(records))
    }

    /// Overwrites the stored list with a full serialization of `records`.
    pub async fn save(&self, records: &[ActivityRecord]) -> Result<(), StorageError> {
        let content = serde_json::to_string_pretty(records)?;

        // Atomic write: write to temp file then rename
        let temp_path = self.path.with_extension("tmp");
        fs::write(&temp_path, content).await?;
        fs::rename(&temp_path, &self.path).await?;
        Ok(())
    }
}
