use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

/// which of the consistency checks produced a failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckKind {
    Identity,
    Changelog,
    PinnedDependencies,
}

impl fmt::Display for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckKind::Identity => write!(f, "identity"),
            CheckKind::Changelog => write!(f, "changelog"),
            CheckKind::PinnedDependencies => write!(f, "pinned_dependencies"),
        }
    }
}

/// identity attribute compared against its expected literal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentityAttribute {
    Author,
    License,
    Version,
}

impl IdentityAttribute {
    /// attribute name as declared in a module file
    pub fn module_name(&self) -> &'static str {
        match self {
            IdentityAttribute::Author => "__author__",
            IdentityAttribute::License => "__license__",
            IdentityAttribute::Version => "__version__",
        }
    }
}

impl fmt::Display for IdentityAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.module_name())
    }
}

/// reason the pinned dependency check failed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum PinnedMismatch {
    /// the section header was not found (or the file was unreadable)
    MissingSection { section: String },
    /// the section exists but names differ in content or order
    Differs {
        declared: Vec<String>,
        found: Vec<String>,
    },
}

#[derive(Debug)]
pub enum Error {
    FileReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    TomlParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
    ConfigError {
        reason: String,
    },
    InvalidVersion {
        version: String,
        source: semver::Error,
    },
    IoError(std::io::Error),
    Mismatch {
        attribute: IdentityAttribute,
    },
    MissingEntry {
        version: String,
        path: PathBuf,
    },
    PinnedDependencyMismatch {
        path: PathBuf,
        kind: PinnedMismatch,
    },
}

impl Error {
    /// the check this error belongs to, `None` for setup failures
    pub fn check(&self) -> Option<CheckKind> {
        match self {
            Error::Mismatch { .. } => Some(CheckKind::Identity),
            Error::MissingEntry { .. } => Some(CheckKind::Changelog),
            Error::PinnedDependencyMismatch { .. } => Some(CheckKind::PinnedDependencies),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::FileReadError { path, source } => {
                write!(f, "failed to read file: {} ({})", path.display(), source)
            }
            Error::TomlParseError { path, source } => {
                write!(
                    f,
                    "failed to parse toml file: {} ({})",
                    path.display(),
                    source
                )
            }
            Error::ConfigError { reason } => {
                write!(f, "invalid configuration: {}", reason)
            }
            Error::InvalidVersion { version, source } => {
                write!(f, "invalid project version '{}': {}", version, source)
            }
            Error::IoError(err) => {
                write!(f, "io error: {}", err)
            }
            Error::Mismatch { attribute } => {
                write!(f, "mismatch: {}", attribute)
            }
            Error::MissingEntry { version, path } => {
                write!(
                    f,
                    "version {} not found in changelog file {}",
                    version,
                    path.display()
                )
            }
            Error::PinnedDependencyMismatch { path, kind } => match kind {
                PinnedMismatch::MissingSection { section } => {
                    write!(f, "missing {} section in {}", section, path.display())
                }
                PinnedMismatch::Differs { declared, found } => {
                    write!(
                        f,
                        "missing/unordered pinned dependencies in {} (declared: [{}], found: [{}])",
                        path.display(),
                        declared.join(", "),
                        found.join(", ")
                    )
                }
            },
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::FileReadError { source, .. } => Some(source),
            Error::TomlParseError { source, .. } => Some(source),
            Error::InvalidVersion { source, .. } => Some(source),
            Error::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::IoError(err)
    }
}
