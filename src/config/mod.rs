//! Configuration module
//!
//! `config.toml` lives in the platform config directory
//! (e.g. `~/.config/jobfest/config.toml`) unless `--config` /
//! `JOBFEST_CONFIG` points elsewhere. Every section is optional.
//!
//! ```toml
//! [storage]
//! data_file = "/home/me/jobfest.json"
//!
//! [display]
//! color = true
//! table_style = "rounded"
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Environment variable overriding the data file location
pub const DATA_ENV: &str = "JOBFEST_DATA";

const DATA_FILE_NAME: &str = "jobfest.json";

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct StorageConfig {
    /// Snapshot file; platform data dir when unset
    #[serde(default)]
    pub data_file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_color")]
    pub color: bool,

    #[serde(default)]
    pub table_style: TableStyle,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color: default_color(),
            table_style: TableStyle::default(),
        }
    }
}

fn default_color() -> bool {
    true
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TableStyle {
    #[default]
    Rounded,
    Ascii,
    Markdown,
    Blank,
}

impl Config {
    /// Load config from `explicit` if given, else the platform location,
    /// else defaults
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }

        match Self::default_config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load config from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        Ok(config)
    }

    /// Save config to a file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Platform config file path
    pub fn default_config_path() -> Option<PathBuf> {
        project_dirs().map(|d| d.config_dir().join("config.toml"))
    }

    /// Platform data file path
    pub fn default_data_path() -> Option<PathBuf> {
        project_dirs().map(|d| d.data_dir().join(DATA_FILE_NAME))
    }

    /// Data file with priority:
    /// 1. `explicit` (the `--data` flag or `JOBFEST_DATA`)
    /// 2. `[storage] data_file`
    /// 3. platform data dir
    /// 4. `./jobfest.json`
    pub fn data_file(&self, explicit: Option<&Path>) -> PathBuf {
        if let Some(path) = explicit {
            return path.to_path_buf();
        }
        if let Some(path) = &self.storage.data_file {
            return path.clone();
        }
        Self::default_data_path().unwrap_or_else(|| PathBuf::from(DATA_FILE_NAME))
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "jobfest")
}
