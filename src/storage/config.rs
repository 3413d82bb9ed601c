//! Configuration handling for bookdeal
//!
//! Configuration is read from `~/.config/bookdeal/config.toml` (global) and
//! `bookdeal.toml` in the working directory (local). Local values override
//! global ones; command-line flags override both.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Name of the per-directory configuration file
pub const LOCAL_CONFIG_FILE: &str = "bookdeal.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// Output format for commands
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// One configuration file's worth of settings
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ConfigFile {
    /// Catalog to load when `--catalog` is not given
    pub catalog: Option<PathBuf>,

    /// Default output format (text or json)
    pub default_format: Option<OutputFormat>,
}

impl ConfigFile {
    /// Overlays `other` on top of `self`
    fn merge(self, other: ConfigFile) -> ConfigFile {
        ConfigFile {
            catalog: other.catalog.or(self.catalog),
            default_format: other.default_format.or(self.default_format),
        }
    }

    /// Reads a config file, returning defaults if it does not exist
    pub fn read(path: &Path) -> Result<ConfigFile> {
        if !path.exists() {
            return Ok(ConfigFile::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::Parse(e.to_string()))
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }
}

/// Combined configuration (global + local)
#[derive(Debug, Clone, Default)]
pub struct Config {
    settings: ConfigFile,
    /// Directory of the config file that set `catalog`
    base_dir: Option<PathBuf>,
}

impl Config {
    /// Loads configuration from the default locations
    pub fn load() -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to determine current directory")?;
        Self::load_from(Self::global_config_dir().as_deref(), &cwd)
    }

    /// Loads configuration from an explicit global dir and working directory
    pub fn load_from(global_dir: Option<&Path>, local_dir: &Path) -> Result<Self> {
        let global = match global_dir {
            Some(dir) => ConfigFile::read(&dir.join("config.toml"))?,
            None => ConfigFile::default(),
        };
        let local = ConfigFile::read(&local_dir.join(LOCAL_CONFIG_FILE))?;

        let local_has_catalog = local.catalog.is_some();
        let base_dir = if local_has_catalog {
            Some(local_dir.to_path_buf())
        } else {
            global_dir.map(Path::to_path_buf)
        };

        Ok(Self {
            settings: global.merge(local),
            base_dir,
        })
    }

    /// Returns the global config directory
    pub fn global_config_dir() -> Option<PathBuf> {
        ProjectDirs::from("dev", "bookdeal", "bookdeal").map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Catalog path from configuration, resolved against its config file's directory
    pub fn catalog(&self) -> Option<PathBuf> {
        let catalog = self.settings.catalog.as_ref()?;
        match &self.base_dir {
            Some(base) if catalog.is_relative() => Some(base.join(catalog)),
            _ => Some(catalog.clone()),
        }
    }

    /// Configured output format, or text
    pub fn default_format(&self) -> OutputFormat {
        self.settings.default_format.unwrap_or_default()
    }
}
