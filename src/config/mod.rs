// ABOUTME: Configuration management for the Ajo terminal client
// Handles the TOML config file and the tutorial completion store

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub mod completion;
pub mod status;

pub use completion::{
    CompletionStore, FileCompletionStore, MemoryCompletionStore, StoreError, SEEN_MARKER,
    TUTORIAL_SEEN_KEY,
};
pub use status::TutorialStatus;

const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    /// Where client state lives
    #[serde(default)]
    pub storage: StorageConfig,

    /// Log output settings
    #[serde(default)]
    pub logging: LoggingConfig,

    /// UI preferences
    #[serde(default)]
    pub ui: UiPreferences,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StorageConfig {
    /// Overrides the default data directory (~/.soroban-ajo)
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoggingConfig {
    /// tracing-subscriber filter directive; RUST_LOG wins when set
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UiPreferences {
    /// Event poll interval in milliseconds (default: 250ms)
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

impl Default for UiPreferences {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

fn default_log_filter() -> String {
    "ajo_tutorial=info".to_string()
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl AppConfig {
    /// Default config location (`~/.soroban-ajo/config.toml`)
    pub fn default_path() -> Result<PathBuf> {
        Ok(completion::default_data_dir()
            .context("Could not locate config directory")?
            .join(CONFIG_FILE_NAME))
    }

    /// Load configuration.
    ///
    /// An explicit path must exist; the default path falls back to
    /// built-in defaults when absent.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => {
                anyhow::ensure!(path.exists(), "Config file not found: {}", path.display());
                path.to_path_buf()
            }
            None => match Self::default_path() {
                Ok(path) if path.exists() => path,
                _ => return Ok(Self::default()),
            },
        };

        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))
    }

    /// Data directory for this run. Ephemeral runs touch no files, so
    /// they resolve to `None` without consulting the home directory.
    pub fn resolve_data_dir(
        &self,
        override_dir: Option<PathBuf>,
        ephemeral: bool,
    ) -> Result<Option<PathBuf>> {
        if ephemeral {
            return Ok(None);
        }
        match override_dir {
            Some(dir) => Ok(Some(dir)),
            None => self.data_dir().map(Some),
        }
    }

    /// Resolved directory for the completion store and logs
    pub fn data_dir(&self) -> Result<PathBuf> {
        match &self.storage.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => completion::default_data_dir().context("Could not determine data directory"),
        }
    }
}
