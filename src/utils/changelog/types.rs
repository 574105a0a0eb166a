// changelog data structures

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// a dated release line, `<version> - <YYYY>-<MM>-<DD>`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseEntry {
    pub version: String,
    /// date text as written
    pub date: String,
    pub line_number: usize,
}

impl ReleaseEntry {
    pub fn new(version: String, date: String, line_number: usize) -> Self {
        Self {
            version,
            date,
            line_number,
        }
    }

    /// the date as a calendar date, `None` when the digits are not one
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }
}

/// dated release entries of a changelog, in document order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChangelogDocument {
    pub path: PathBuf,
    pub releases: Vec<ReleaseEntry>,
}

impl ChangelogDocument {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            releases: Vec::new(),
        }
    }

    pub fn add_release(&mut self, entry: ReleaseEntry) {
        self.releases.push(entry);
    }

    pub fn has_version(&self, version: &str) -> bool {
        self.releases.iter().any(|r| r.version == version)
    }

    pub fn get_version(&self, version: &str) -> Option<&ReleaseEntry> {
        self.releases.iter().find(|r| r.version == version)
    }

    /// the first dated entry, changelogs list newest first
    pub fn latest(&self) -> Option<&ReleaseEntry> {
        self.releases.first()
    }

    pub fn is_empty(&self) -> bool {
        self.releases.is_empty()
    }
}
