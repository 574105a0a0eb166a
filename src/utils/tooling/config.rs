// tooling configuration settings

use crate::utils::reader::DEFAULT_MAX_READ_BYTES;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// configuration for the pinned dependency check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolingConfig {
    /// tooling document, relative to the project root (default: "tox.ini")
    pub file: PathBuf,

    /// name of the pinned section header (default: "install_requires")
    pub section: String,

    pub max_read_bytes: u64,
}

impl ToolingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file(mut self, file: impl Into<PathBuf>) -> Self {
        self.file = file.into();
        self
    }

    pub fn section(mut self, section: impl Into<String>) -> Self {
        self.section = section.into();
        self
    }

    pub fn max_read_bytes(mut self, limit: u64) -> Self {
        self.max_read_bytes = limit;
        self
    }
}

impl Default for ToolingConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from("tox.ini"),
            section: "install_requires".to_string(),
            max_read_bytes: DEFAULT_MAX_READ_BYTES,
        }
    }
}
