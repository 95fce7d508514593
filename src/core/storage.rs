//! Storage - JSON snapshot file
//!
//! The whole store is written as one `ModelSnapshot`. Loading goes through
//! `Model::from_snapshot`, so a hand-edited file that breaks an invariant
//! is refused instead of half-loaded.
//!
//! A missing file is an empty store.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::debug;

use super::model::{Model, ModelSnapshot};

pub struct Storage {
    path: PathBuf,
}

impl Storage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read the snapshot file, or an empty snapshot if there is none
    pub fn read_snapshot(&self) -> Result<ModelSnapshot> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no data file, starting empty");
            return Ok(ModelSnapshot::default());
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read data file {}", self.path.display()))?;
        let snapshot = serde_json::from_str(&content)
            .with_context(|| format!("Malformed data file {}", self.path.display()))?;
        Ok(snapshot)
    }

    /// Load the store
    pub fn load(&self) -> Result<Model> {
        let snapshot = self.read_snapshot()?;
        let model = Model::from_snapshot(snapshot).with_context(|| {
            format!("Inconsistent data in {}", self.path.display())
        })?;

        debug!(
            path = %self.path.display(),
            contacts = model.contacts().len(),
            events = model.events().len(),
            tags = model.tags().len(),
            "loaded store"
        );
        Ok(model)
    }

    /// Write the full snapshot of `model`, creating parent directories
    pub fn save(&self, model: &Model) -> Result<()> {
        let content = serde_json::to_string_pretty(&model.snapshot())?;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, content)
            .with_context(|| format!("Failed to write data file {}", self.path.display()))?;

        debug!(path = %self.path.display(), "saved store");
        Ok(())
    }
}
