//! Configuration file handling for the CLI.
//!
//! Stores settings in `$XDG_CONFIG_HOME/workers/config.toml` following
//! the XDG Base Directory Specification.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration stored on disk
#[derive(Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Record source section
    #[serde(default)]
    pub source: SourceConfig,
}

/// Where employees are loaded from
#[derive(Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// API base URL; the list is read from `<api_base_url>/employees`
    pub api_base_url: Option<String>,
}

impl Config {
    /// Get the configuration file path.
    ///
    /// Returns `$XDG_CONFIG_HOME/workers/config.toml` on Linux,
    /// appropriate paths on other platforms.
    pub fn config_path() -> Result<PathBuf> {
        let project_dirs = ProjectDirs::from("com", "workers", "workers")
            .context("Failed to determine config directory")?;

        Ok(project_dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from the default location.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`.
    ///
    /// Returns default configuration if file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Save configuration to the default location.
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Save configuration to `path`, creating the parent directory.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }

    /// Get the saved API base URL.
    pub fn api_base_url(&self) -> Option<&str> {
        self.source.api_base_url.as_deref()
    }

    pub fn set_api_base_url(&mut self, url: &str) {
        self.source.api_base_url = Some(url.trim().to_owned());
    }

    pub fn clear(&mut self) {
        self.source.api_base_url = None;
    }
}
