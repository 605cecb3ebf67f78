// ABOUTME: Read-only report of whether the tutorial has been completed
// Backs the `status` command in text and JSON form

use serde::Serialize;
use std::path::{Path, PathBuf};

use super::completion::{CompletionStore, StoreError, TUTORIAL_SEEN_KEY};

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TutorialStatus {
    /// Seen marker present in the store
    pub seen: bool,
    /// Directory backing the store; `None` for in-memory runs
    pub data_dir: Option<PathBuf>,
}

impl TutorialStatus {
    /// Query the store. Takes a shared reference, so it cannot write.
    pub fn read<S: CompletionStore + ?Sized>(
        store: &S,
        data_dir: Option<&Path>,
    ) -> Result<Self, StoreError> {
        Ok(Self {
            seen: store.contains(TUTORIAL_SEEN_KEY)?,
            data_dir: data_dir.map(Path::to_path_buf),
        })
    }

    pub fn to_text(&self) -> String {
        let state = if self.seen {
            "Tutorial: completed"
        } else {
            "Tutorial: not yet seen (shown on next launch)"
        };
        let location = match &self.data_dir {
            Some(dir) => format!("Data directory: {}", dir.display()),
            None => "Data directory: none (in-memory)".to_string(),
        };
        format!("{state}\n{location}")
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
