//! # Configuration Persistence
//!
//! Manages user configuration stored in `~/.config/frecent/config.json`.
//!
//! ## Overview
//!
//! The [`Config`] struct is serialized to / deserialized from a JSON file
//! in the user's XDG config directory. It supplies defaults for the root
//! locations, the number of trailing path components to keep in output,
//! and an optional history-file override; command-line flags win over all
//! of them.
//!
//! ## File Location
//!
//! ```text
//! ~/.config/frecent/config.json
//! ```
//!
//! The `directories` crate is used to resolve the platform-appropriate
//! config directory.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Persisted user configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Root locations to list when no `--root` flag is given. Each entry
    /// may itself be a comma-separated spec.
    #[serde(default = "default_roots")]
    pub roots: Vec<String>,

    /// Default number of trailing path components to keep in output
    /// (0 keeps full items).
    #[serde(default)]
    pub components: usize,

    /// Override for the history file location.
    #[serde(default)]
    pub history_file: Option<PathBuf>,
}

fn default_roots() -> Vec<String> {
    vec![".".to_string()]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            roots: default_roots(),
            components: 0,
            history_file: None,
        }
    }
}

impl Config {
    /// Load configuration from disk. Returns `Config::default()` if the
    /// file does not exist or cannot be parsed.
    pub fn load() -> Self {
        Self::try_load().unwrap_or_default()
    }

    /// Try to load configuration, returning an error on failure.
    fn try_load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    /// Load configuration from a specific path. Returns `Config::default()`
    /// if the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Save the current configuration to disk.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        self.save_to(&path)
    }

    /// Save the current configuration to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Return the path to the config file.
    fn config_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("", "", "frecent")
            .context("Could not determine config directory")?;
        Ok(dirs.config_dir().join("config.json"))
    }
}

/// Default location of the history file, under the platform data
/// directory.
pub fn default_history_file() -> Result<PathBuf> {
    let dirs = directories::ProjectDirs::from("", "", "frecent")
        .context("Could not determine application data directory")?;
    Ok(dirs.data_dir().join("history.json"))
}
