// ABOUTME: Persistence capability for the "tutorial already seen" marker
// Abstract key-value store plus file-backed and in-memory implementations

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Well-known key recording that the walkthrough was dismissed
pub const TUTORIAL_SEEN_KEY: &str = "hasSeenTutorial";

/// Marker value written under [`TUTORIAL_SEEN_KEY`]
pub const SEEN_MARKER: &str = "true";

const STORE_FILE_NAME: &str = "tutorial.toml";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize completion store: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Could not determine home directory")]
    NoHomeDir,
}

/// Key-value persistence consumed by the tutorial controller.
///
/// Values are opaque markers; callers only care about presence.
#[cfg_attr(test, mockall::automock)]
pub trait CompletionStore {
    /// Whether a marker exists under `key`
    fn contains(&self, key: &str) -> Result<bool, StoreError>;

    /// Record `marker` under `key`
    fn set(&mut self, key: &str, marker: &str) -> Result<(), StoreError>;
}

impl<T: CompletionStore + ?Sized> CompletionStore for Box<T> {
    fn contains(&self, key: &str) -> Result<bool, StoreError> {
        (**self).contains(key)
    }

    fn set(&mut self, key: &str, marker: &str) -> Result<(), StoreError> {
        (**self).set(key, marker)
    }
}

/// Default directory holding client state (`~/.soroban-ajo`)
pub fn default_data_dir() -> Result<PathBuf, StoreError> {
    let home = dirs::home_dir().ok_or(StoreError::NoHomeDir)?;
    Ok(home.join(".soroban-ajo"))
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
struct StoredEntry {
    value: String,
    /// RFC 3339 timestamp of the write
    #[serde(default)]
    written_at: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreDocument {
    #[serde(default)]
    entries: BTreeMap<String, StoredEntry>,
}

/// Completion store persisted as a TOML document on disk
#[derive(Debug, Clone)]
pub struct FileCompletionStore {
    path: PathBuf,
}

impl FileCompletionStore {
    /// Store living at `<data_dir>/tutorial.toml`
    pub fn in_dir(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: data_dir.as_ref().join(STORE_FILE_NAME),
        }
    }

    /// Store under the default data directory
    pub fn open_default() -> Result<Self, StoreError> {
        Ok(Self::in_dir(default_data_dir()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<StoreDocument, StoreError> {
        if !self.path.exists() {
            return Ok(StoreDocument::default());
        }

        let content = fs::read_to_string(&self.path).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    fn save(&self, document: &StoreDocument) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let content = toml::to_string_pretty(document)?;

        // Write beside the target and rename so a crash never leaves a torn file
        let tmp_path = self.path.with_extension("toml.tmp");
        fs::write(&tmp_path, content).map_err(|source| StoreError::Io {
            path: tmp_path.clone(),
            source,
        })?;

        fs::rename(&tmp_path, &self.path).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

impl CompletionStore for FileCompletionStore {
    fn contains(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.load()?.entries.contains_key(key))
    }

    fn set(&mut self, key: &str, marker: &str) -> Result<(), StoreError> {
        let mut document = match self.load() {
            Ok(document) => document,
            Err(StoreError::Parse { path, source }) => {
                tracing::warn!("Replacing unreadable {}: {}", path.display(), source);
                StoreDocument::default()
            }
            Err(e) => return Err(e),
        };
        document.entries.insert(
            key.to_string(),
            StoredEntry {
                value: marker.to_string(),
                written_at: Some(Utc::now().to_rfc3339()),
            },
        );
        self.save(&document)?;

        tracing::debug!("Persisted '{}' to {}", key, self.path.display());
        Ok(())
    }
}

/// Mapping-backed store that lives for the process only
#[derive(Debug, Clone, Default)]
pub struct MemoryCompletionStore {
    entries: HashMap<String, String>,
    writes: usize,
}

impl MemoryCompletionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that already carries the seen marker
    pub fn seen() -> Self {
        let mut store = Self::new();
        store
            .entries
            .insert(TUTORIAL_SEEN_KEY.to_string(), SEEN_MARKER.to_string());
        store
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Number of successful `set` calls
    pub fn write_count(&self) -> usize {
        self.writes
    }
}

impl CompletionStore for MemoryCompletionStore {
    fn contains(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.entries.contains_key(key))
    }

    fn set(&mut self, key: &str, marker: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), marker.to_string());
        self.writes += 1;
        Ok(())
    }
}
