//! Tool configuration with RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const CONFIG_FILE: &str = "config.ron";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub history: HistoryConfig,
    pub output: OutputConfig,
    pub debug: DebugConfig,
}

/// Saved-run history settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct HistoryConfig {
    /// Directory holding the history file. `None` uses the platform data dir.
    pub dir: Option<PathBuf>,
    /// Runs kept before the oldest are dropped.
    pub max_entries: usize,
}

/// Report rendering settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

/// How reports are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Debug/development settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log filter (e.g. "debug", "info,impactor_store=debug").
    pub log_level: String,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            dir: None,
            max_entries: impactor_store::history::DEFAULT_MAX_ENTRIES,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Read `config.ron` from `config_dir`, writing the defaults there when
    /// the file does not exist yet.
    pub fn load_or_create(config_dir: &Path) -> Result<(Self, ConfigOrigin), ConfigError> {
        let path = config_path(config_dir);
        match std::fs::read_to_string(&path) {
            Ok(contents) => {
                let config = ron::from_str(&contents)
                    .map_err(|source| ConfigError::Parse { path, source })?;
                Ok((config, ConfigOrigin::File))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let config = Config::default();
                config.save(config_dir)?;
                Ok((config, ConfigOrigin::CreatedDefault))
            }
            Err(source) => Err(ConfigError::Read { path, source }),
        }
    }

    /// Write `config.ron` into `config_dir`, creating the directory.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(|source| ConfigError::Write {
            path: config_dir.to_path_buf(),
            source,
        })?;

        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .enumerate_arrays(false);
        let text = ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::Encode)?;

        let path = config_path(config_dir);
        std::fs::write(&path, text).map_err(|source| ConfigError::Write { path, source })
    }

    /// Directory saved runs live in.
    pub fn history_dir(&self) -> PathBuf {
        self.history.dir.clone().unwrap_or_else(default_history_dir)
    }
}

/// Where [`Config::load_or_create`] got its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigOrigin {
    File,
    CreatedDefault,
}

pub fn config_path(config_dir: &Path) -> PathBuf {
    config_dir.join(CONFIG_FILE)
}

/// Platform config directory for the tool, falling back to the working directory.
pub fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("impact-report"))
        .unwrap_or_else(|| PathBuf::from("."))
}

fn default_history_dir() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join("impact-report"))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("history")
}
