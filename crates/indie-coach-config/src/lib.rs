//! User configuration for the indie-coach tools.
//!
//! The config lives at `~/.config/indie-coach/config.toml`:
//!
//! ```toml
//! history_path = "~/Music/coach/history.json"
//! ```
//!
//! Paths may use `~` and `$VARS`; they are expanded on load.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

const APP_DIR: &str = "indie-coach";
const CONFIG_FILE: &str = "config.toml";
const DEFAULT_HISTORY: &str = "~/.local/share/indie-coach/history.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Exported chat history (a JSON array of sessions).
    #[serde(default = "Config::default_history_path")]
    pub history_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            history_path: Self::default_history_path(),
        }
    }
}

impl Config {
    /// Loads the config at `config_path`, or `Ok(None)` if there is no file.
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        config.history_path = Self::expand_path(&config.history_path);
        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        Self::load_from_path(Self::config_path())
    }

    /// Loads the user config, falling back to defaults when none exists.
    pub fn load_or_default() -> Result<Self, ConfigError> {
        Ok(Self::load()?.unwrap_or_default())
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(config_path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to_path(Self::config_path())
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config");
        PathBuf::from(config_dir.as_ref())
            .join(APP_DIR)
            .join(CONFIG_FILE)
    }

    pub fn default_history_path() -> PathBuf {
        PathBuf::from(shellexpand::tilde(DEFAULT_HISTORY).as_ref())
    }

    /// Picks the history file: an explicit argument wins over the config.
    pub fn history_path_or(&self, arg: Option<&Path>) -> PathBuf {
        match arg {
            Some(path) => Self::expand_path(path),
            None => self.history_path.clone(),
        }
    }

    /// Expands `~` and environment variables. Unresolvable variables leave
    /// the path untouched.
    fn expand_path(path: &Path) -> PathBuf {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => PathBuf::from(expanded.as_ref()),
            Err(_) => path.to_path_buf(),
        }
    }
}
