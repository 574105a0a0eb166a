// declared project identity

use super::config::{ExpectedMetadata, IdentityConfig};
use super::reader::TextReader;
use crate::error::{Error, IdentityAttribute, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

/// `__author__ = '...'` style module assignment
static MODULE_ATTRIBUTE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?m)^__(author|license|version)__\s*=\s*(?:'([^'\r\n]*)'|"([^"\r\n]*)")"#)
        .expect("module attribute pattern is valid")
});

/// identity attributes in comparison order
pub const IDENTITY_ATTRIBUTES: [IdentityAttribute; 3] = [
    IdentityAttribute::Author,
    IdentityAttribute::License,
    IdentityAttribute::Version,
];

/// author, license and version as the project declares them
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectIdentity {
    pub author: String,
    pub license: String,
    pub version: String,
}

impl ProjectIdentity {
    pub fn new(
        author: impl Into<String>,
        license: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            author: author.into(),
            license: license.into(),
            version: version.into(),
        }
    }

    pub fn get(&self, attribute: IdentityAttribute) -> &str {
        match attribute {
            IdentityAttribute::Author => &self.author,
            IdentityAttribute::License => &self.license,
            IdentityAttribute::Version => &self.version,
        }
    }

    fn set(&mut self, attribute: IdentityAttribute, value: String) {
        match attribute {
            IdentityAttribute::Author => self.author = value,
            IdentityAttribute::License => self.license = value,
            IdentityAttribute::Version => self.version = value,
        }
    }

    /// collect identity assignments from module source text
    ///
    /// the first assignment of each attribute wins, absent ones stay empty
    pub fn parse_module(content: &str) -> Self {
        let mut identity = Self::default();
        let mut seen = [false; 3];

        for caps in MODULE_ATTRIBUTE_RE.captures_iter(content) {
            let (slot, attribute) = match &caps[1] {
                "author" => (0, IdentityAttribute::Author),
                "license" => (1, IdentityAttribute::License),
                _ => (2, IdentityAttribute::Version),
            };
            if seen[slot] {
                continue;
            }
            seen[slot] = true;

            let value = caps
                .get(2)
                .or_else(|| caps.get(3))
                .map(|m| m.as_str().to_string())
                .unwrap_or_default();
            identity.set(attribute, value);
        }

        identity
    }

    /// scan a module file (bounded read), unreadable files give an empty identity
    pub fn scan_module<P: AsRef<Path>>(path: P, max_read_bytes: u64) -> Self {
        let content = TextReader::read_bounded(path, max_read_bytes);
        Self::parse_module(&content)
    }

    /// build the identity from configuration, resolving `source` against `root`
    pub fn resolve<P: AsRef<Path>>(root: P, config: &IdentityConfig, max_read_bytes: u64) -> Self {
        let mut identity = match &config.source {
            Some(source) => Self::scan_module(root.as_ref().join(source), max_read_bytes),
            None => Self::default(),
        };

        let overrides = [
            (IdentityAttribute::Author, &config.author),
            (IdentityAttribute::License, &config.license),
            (IdentityAttribute::Version, &config.version),
        ];
        for (attribute, value) in overrides {
            if let Some(value) = value {
                identity.set(attribute, value.clone());
            }
        }

        identity
    }

    /// first attribute that differs from the expected literals
    pub fn first_mismatch(&self, expected: &ExpectedMetadata) -> Option<IdentityAttribute> {
        IDENTITY_ATTRIBUTES
            .into_iter()
            .find(|attribute| self.get(*attribute) != expected.get(*attribute))
    }

    /// verify every attribute equals its expected literal
    pub fn verify(&self, expected: &ExpectedMetadata) -> Result<()> {
        match self.first_mismatch(expected) {
            Some(attribute) => Err(Error::Mismatch { attribute }),
            None => Ok(()),
        }
    }
}
