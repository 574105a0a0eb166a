// changelog configuration

use crate::utils::reader::DEFAULT_MAX_READ_BYTES;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// configuration for the changelog check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangelogConfig {
    /// changelog document, relative to the project root (default: "README.rst")
    pub file: PathBuf,

    /// read at most this many bytes of the document
    pub max_read_bytes: u64,

    /// the matching entry must be the most recent dated entry
    pub require_latest: bool,
}

impl ChangelogConfig {
    /// create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file(mut self, file: impl Into<PathBuf>) -> Self {
        self.file = file.into();
        self
    }

    pub fn max_read_bytes(mut self, limit: u64) -> Self {
        self.max_read_bytes = limit;
        self
    }

    pub fn require_latest(mut self, required: bool) -> Self {
        self.require_latest = required;
        self
    }
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from("README.rst"),
            max_read_bytes: DEFAULT_MAX_READ_BYTES,
            require_latest: false,
        }
    }
}
