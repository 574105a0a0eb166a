use super::changelog::ChangelogConfig;
use super::tooling::ToolingConfig;
use crate::error::{Error, IdentityAttribute, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// name of the configuration file looked up in the project root
pub const CONFIG_FILE_NAME: &str = "metacheck.toml";

/// metadata the project is expected to declare everywhere
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpectedMetadata {
    /// distribution name, informational only
    #[serde(default)]
    pub name: String,

    pub author: String,

    pub license: String,

    /// released version, `MAJOR.MINOR.PATCH`
    pub version: String,

    /// build-time dependencies in declaration order
    #[serde(default)]
    pub install_requires: Vec<String>,
}

impl ExpectedMetadata {
    pub fn new(
        author: impl Into<String>,
        license: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            name: String::new(),
            author: author.into(),
            license: license.into(),
            version: version.into(),
            install_requires: Vec::new(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn install_requires<I, S>(mut self, packages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.install_requires = packages.into_iter().map(Into::into).collect();
        self
    }

    pub fn get(&self, attribute: IdentityAttribute) -> &str {
        match attribute {
            IdentityAttribute::Author => &self.author,
            IdentityAttribute::License => &self.license,
            IdentityAttribute::Version => &self.version,
        }
    }

    /// parse the expected version as semver
    pub fn semver(&self) -> Result<semver::Version> {
        semver::Version::parse(&self.version).map_err(|e| Error::InvalidVersion {
            version: self.version.clone(),
            source: e,
        })
    }
}

/// where the declared identity comes from
///
/// `source` names a module file scanned for `__author__`-style assignments,
/// inline values override whatever the scan found
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityConfig {
    pub source: Option<PathBuf>,
    pub author: Option<String>,
    pub license: Option<String>,
    pub version: Option<String>,
}

impl IdentityConfig {
    pub fn is_empty(&self) -> bool {
        self.source.is_none()
            && self.author.is_none()
            && self.license.is_none()
            && self.version.is_none()
    }
}

/// main configuration for metacheck
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetacheckConfig {
    /// expected metadata literals
    pub project: ExpectedMetadata,

    #[serde(default)]
    pub identity: IdentityConfig,

    #[serde(default)]
    pub changelog: ChangelogConfig,

    #[serde(default)]
    pub tooling: ToolingConfig,
}

impl MetacheckConfig {
    pub fn new(project: ExpectedMetadata, identity: IdentityConfig) -> Self {
        Self {
            project,
            identity,
            changelog: ChangelogConfig::default(),
            tooling: ToolingConfig::default(),
        }
    }

    /// parse configuration from TOML text
    pub fn parse_str(contents: &str, path: &Path) -> Result<Self> {
        let config: MetacheckConfig =
            toml::from_str(contents).map_err(|e| Error::TomlParseError {
                path: path.to_path_buf(),
                source: e,
            })?;

        config.validate()?;
        Ok(config)
    }

    /// load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| Error::FileReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse_str(&contents, path)
    }

    /// find configuration file in the project root
    pub fn find_config_file<P: AsRef<Path>>(root: P) -> Option<PathBuf> {
        let config_path = root.as_ref().join(CONFIG_FILE_NAME);

        if config_path.is_file() {
            Some(config_path)
        } else {
            None
        }
    }

    /// load `metacheck.toml` from the project root
    pub fn load_from_root<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref();
        match Self::find_config_file(root) {
            Some(config_path) => Self::load_from_file(config_path),
            None => Err(Error::ConfigError {
                reason: format!("{} not found in {}", CONFIG_FILE_NAME, root.display()),
            }),
        }
    }

    fn validate(&self) -> Result<()> {
        self.project.semver()?;

        if self.identity.is_empty() {
            return Err(Error::ConfigError {
                reason: "[identity] needs a `source` file or inline attributes".to_string(),
            });
        }

        if self.tooling.section.trim().is_empty() {
            return Err(Error::ConfigError {
                reason: "[tooling] section name is empty".to_string(),
            });
        }

        Ok(())
    }
}
