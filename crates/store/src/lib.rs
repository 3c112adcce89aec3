//! Best-score persistence backed by a JSON file.
//!
//! The original browser build kept the best score in local storage; here it
//! lives in a small JSON record on disk. The [`BestScoreStore`] impl keeps
//! the game-facing contract infallible (missing or unreadable data loads as
//! 0, a failed write is dropped); hosts that care about the error can use
//! [`JsonFileStore::try_load`] / [`JsonFileStore::try_save`] directly.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use tui_2048_core::BestScoreStore;

#[derive(Debug, Serialize, Deserialize)]
struct BestScoreRecord {
    best: u32,
}

/// File-backed best-score store.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the persisted best score. A missing file is 0, not an error.
    pub fn try_load(&self) -> Result<u32> {
        if !self.path.exists() {
            return Ok(0);
        }
        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("reading best score from {}", self.path.display()))?;
        let record: BestScoreRecord = serde_json::from_str(&raw)
            .with_context(|| format!("parsing best score in {}", self.path.display()))?;
        Ok(record.best)
    }

    /// Write the best score, creating parent directories as needed.
    pub fn try_save(&self, best: u32) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
        }
        let raw = serde_json::to_string(&BestScoreRecord { best })?;
        fs::write(&self.path, raw)
            .with_context(|| format!("writing best score to {}", self.path.display()))?;
        Ok(())
    }
}

impl BestScoreStore for JsonFileStore {
    fn load(&mut self) -> u32 {
        self.try_load().unwrap_or(0)
    }

    fn save(&mut self, best: u32) {
        // Best-effort: losing a high score must not end the process.
        let _ = self.try_save(best);
    }
}
