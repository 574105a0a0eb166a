// tooling configuration data structures

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// a `<package>==<version>` line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinnedDependency {
    pub name: String,
    pub version: String,
    pub line_number: usize,
}

impl PinnedDependency {
    pub fn new(name: String, version: String, line_number: usize) -> Self {
        Self {
            name,
            version,
            line_number,
        }
    }
}

/// the indented block following a section header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinnedSection {
    pub header_line: usize,
    pub dependencies: Vec<PinnedDependency>,
}

impl PinnedSection {
    pub fn new(header_line: usize) -> Self {
        Self {
            header_line,
            dependencies: Vec::new(),
        }
    }

    pub fn add_dependency(&mut self, dependency: PinnedDependency) {
        self.dependencies.push(dependency);
    }

    /// package names in section order
    pub fn names(&self) -> Vec<&str> {
        self.dependencies.iter().map(|d| d.name.as_str()).collect()
    }
}

/// parsed tooling document, `section` is `None` when the header is absent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolingConfigDocument {
    pub path: PathBuf,
    pub section_name: String,
    pub section: Option<PinnedSection>,
}

impl ToolingConfigDocument {
    pub fn new(path: PathBuf, section_name: impl Into<String>) -> Self {
        Self {
            path,
            section_name: section_name.into(),
            section: None,
        }
    }

    pub fn has_section(&self) -> bool {
        self.section.is_some()
    }

    pub fn pinned(&self) -> &[PinnedDependency] {
        self.section
            .as_ref()
            .map(|s| s.dependencies.as_slice())
            .unwrap_or(&[])
    }
}
