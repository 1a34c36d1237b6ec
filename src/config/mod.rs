use crate::utils::{CONFIG_FILE, DEFAULT_MEMORY_DIR, DEFAULT_OUTPUT_DIR, DEFAULT_SPEED_DIR};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

fn default_speed_dir() -> String {
    DEFAULT_SPEED_DIR.to_string()
}

fn default_memory_dir() -> String {
    DEFAULT_MEMORY_DIR.to_string()
}

fn default_output_dir() -> String {
    DEFAULT_OUTPUT_DIR.to_string()
}

/// Directory names used to lay out a run, relative to the root directory
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MergeConfig {
    /// Holds `<id>.json`, `<id>.html` and `<id>.metadata.json`
    #[serde(default = "default_speed_dir")]
    pub speed_dir: String,
    /// Holds `<id>.json` and `<id>.html`
    #[serde(default = "default_memory_dir")]
    pub memory_dir: String,
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            speed_dir: default_speed_dir(),
            memory_dir: default_memory_dir(),
            output_dir: default_output_dir(),
        }
    }
}

impl MergeConfig {
    /// Replace directory names with any explicitly given values
    pub fn with_overrides(
        mut self,
        speed_dir: Option<String>,
        memory_dir: Option<String>,
        output_dir: Option<String>,
    ) -> Self {
        if let Some(dir) = speed_dir {
            self.speed_dir = dir;
        }
        if let Some(dir) = memory_dir {
            self.memory_dir = dir;
        }
        if let Some(dir) = output_dir {
            self.output_dir = dir;
        }
        self
    }
}

/// Path of the config file under the given root
pub fn get_config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

/// Read the configuration file
pub async fn read_config(root: &Path) -> Result<Option<MergeConfig>, ConfigError> {
    let config_path = get_config_path(root);

    if !config_path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(&config_path).await?;
    let config: MergeConfig = serde_json::from_str(&content)?;
    Ok(Some(config))
}

/// Write the configuration file
pub async fn write_config(root: &Path, config: &MergeConfig) -> Result<(), ConfigError> {
    let config_path = get_config_path(root);
    let content = serde_json::to_string_pretty(config)?;
    fs::write(&config_path, content).await?;
    Ok(())
}
