use super::changelog::{ChangelogConfig, ChangelogDocument, read_changelog, verify_changelog};
use super::config::{ExpectedMetadata, MetacheckConfig};
use super::identity::{IDENTITY_ATTRIBUTES, ProjectIdentity};
use super::reader::DEFAULT_MAX_READ_BYTES;
use super::tooling::{
    ToolingConfig, ToolingConfigDocument, read_tooling_config, verify_pinned_dependencies,
};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const MIN_NAME_WIDTH: usize = 10;

/// everything the checker reads, for inspection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetadataReport {
    pub expected: ExpectedMetadata,
    pub identity: ProjectIdentity,
    pub changelog: ChangelogDocument,
    pub tooling: ToolingConfigDocument,
}

impl MetadataReport {
    /// display identity attributes next to their expected values
    pub fn display_identity(&self) {
        println!("identity:");
        println!(
            "  {:<12}  {:<24}  {:<24}  {}",
            "Attribute", "Expected", "Declared", "Match"
        );
        println!("  {}  {}  {}  -----", "-".repeat(12), "-".repeat(24), "-".repeat(24));

        for attribute in IDENTITY_ATTRIBUTES {
            let expected = self.expected.get(attribute);
            let declared = self.identity.get(attribute);
            let status = if declared == expected { "OK" } else { "FAIL" };

            println!(
                "  {:<12}  {:<24}  {:<24}  {}",
                attribute.module_name(),
                expected,
                declared,
                status
            );
        }
        println!();
    }

    /// display dated changelog entries
    pub fn display_changelog(&self) {
        println!("changelog: {}", self.changelog.path.display());

        if self.changelog.is_empty() {
            println!("  no dated release entries found.");
            println!();
            return;
        }

        let width = self
            .changelog
            .releases
            .iter()
            .map(|r| r.version.len())
            .max()
            .unwrap_or(MIN_NAME_WIDTH)
            .max(MIN_NAME_WIDTH);

        println!("  {:<width$}  {:<10}  {:>6}", "Version", "Date", "Line", width = width);
        println!("  {}  ----------  ------", "-".repeat(width));

        for release in &self.changelog.releases {
            let marker = if release.version == self.expected.version {
                "  <- current"
            } else {
                ""
            };
            println!(
                "  {:<width$}  {:<10}  {:>6}{}",
                release.version,
                release.date,
                release.line_number,
                marker,
                width = width
            );
        }
        println!();
    }

    /// display the pinned section next to the declared dependencies
    pub fn display_pinned(&self) {
        println!(
            "pinned dependencies: {} [{}]",
            self.tooling.path.display(),
            self.tooling.section_name
        );

        if !self.tooling.has_section() {
            println!("  section not found.");
            println!();
            return;
        }

        let pinned = self.tooling.pinned();
        let declared = &self.expected.install_requires;
        let rows = pinned.len().max(declared.len());

        let width = pinned
            .iter()
            .map(|d| d.name.len())
            .chain(declared.iter().map(String::len))
            .max()
            .unwrap_or(MIN_NAME_WIDTH)
            .max(MIN_NAME_WIDTH);

        println!(
            "  {:<width$}  {:<width$}  {:<12}",
            "Declared",
            "Pinned",
            "Version",
            width = width
        );
        println!(
            "  {}  {}  ------------",
            "-".repeat(width),
            "-".repeat(width)
        );

        for row in 0..rows {
            let declared_name = declared.get(row).map(String::as_str).unwrap_or("-");
            let (pinned_name, version) = pinned
                .get(row)
                .map(|d| (d.name.as_str(), d.version.as_str()))
                .unwrap_or(("-", "-"));

            println!(
                "  {:<width$}  {:<width$}  {:<12}",
                declared_name,
                pinned_name,
                version,
                width = width
            );
        }
        println!();
    }
}

/// verifies that declared metadata agrees with the changelog and tooling files
#[derive(Debug, Clone)]
pub struct MetadataChecker {
    root: PathBuf,
    expected: ExpectedMetadata,
    identity: ProjectIdentity,
    changelog: ChangelogConfig,
    tooling: ToolingConfig,
}

impl MetadataChecker {
    pub fn new<P: AsRef<Path>>(
        root: P,
        expected: ExpectedMetadata,
        identity: ProjectIdentity,
    ) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            expected,
            identity,
            changelog: ChangelogConfig::default(),
            tooling: ToolingConfig::default(),
        }
    }

    pub fn changelog_config(mut self, config: ChangelogConfig) -> Self {
        self.changelog = config;
        self
    }

    pub fn tooling_config(mut self, config: ToolingConfig) -> Self {
        self.tooling = config;
        self
    }

    /// build a checker from `metacheck.toml` settings, scanning the identity source
    pub fn from_config<P: AsRef<Path>>(root: P, config: &MetacheckConfig) -> Self {
        let root = root.as_ref();
        let identity = ProjectIdentity::resolve(root, &config.identity, DEFAULT_MAX_READ_BYTES);

        Self::new(root, config.project.clone(), identity)
            .changelog_config(config.changelog.clone())
            .tooling_config(config.tooling.clone())
    }

    pub fn expected(&self) -> &ExpectedMetadata {
        &self.expected
    }

    pub fn identity(&self) -> &ProjectIdentity {
        &self.identity
    }

    pub fn changelog_path(&self) -> PathBuf {
        self.root.join(&self.changelog.file)
    }

    pub fn tooling_path(&self) -> PathBuf {
        self.root.join(&self.tooling.file)
    }

    fn read_changelog(&self) -> ChangelogDocument {
        read_changelog(self.changelog_path(), self.changelog.max_read_bytes)
    }

    fn read_tooling(&self) -> ToolingConfigDocument {
        read_tooling_config(
            self.tooling_path(),
            &self.tooling.section,
            self.tooling.max_read_bytes,
        )
    }

    /// compare author, license and version against the expected literals
    pub fn verify_identity(&self) -> Result<()> {
        tracing::debug!("verifying identity attributes");
        self.identity.verify(&self.expected)
    }

    /// require a dated changelog entry for the expected version
    pub fn verify_changelog(&self) -> Result<()> {
        tracing::debug!(version = %self.expected.version, "verifying changelog entry");
        let changelog = self.read_changelog();
        verify_changelog(&changelog, &self.expected.version, &self.changelog)
    }

    /// require the pinned section to list `declared` in order, skipped when empty
    pub fn verify_pinned_dependencies(&self, declared: &[String]) -> Result<()> {
        if declared.is_empty() {
            tracing::debug!("no declared dependencies, pinned section check skipped");
            return Ok(());
        }

        tracing::debug!(declared = declared.len(), "verifying pinned dependencies");
        let tooling = self.read_tooling();
        verify_pinned_dependencies(&tooling, declared)
    }

    /// run every check in order, the first failure aborts the run
    pub fn run(&self) -> Result<()> {
        self.verify_identity()?;
        self.verify_changelog()?;
        self.verify_pinned_dependencies(&self.expected.install_requires)?;

        tracing::debug!(root = %self.root.display(), "metadata is consistent");
        Ok(())
    }

    /// collect the parsed inputs without judging them
    pub fn report(&self) -> MetadataReport {
        MetadataReport {
            expected: self.expected.clone(),
            identity: self.identity.clone(),
            changelog: self.read_changelog(),
            tooling: self.read_tooling(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, IdentityAttribute, PinnedMismatch};
    use std::fs;
    use tempfile::TempDir;

    fn expected() -> ExpectedMetadata {
        ExpectedMetadata::new("@Robpol86", "MIT", "2.2.1").install_requires([
            "click",
            "colorclass",
            "sphinx",
        ])
    }

    fn project() -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("README.rst"),
            "Changelog\n=========\n\n2.2.1 - 2018-01-05\n------------------\n",
        )
        .unwrap();
        fs::write(
            temp_dir.path().join("tox.ini"),
            "[general]\ninstall_requires =\n    click==6.7\n    colorclass==2.2.0\n    sphinx==1.6.5\nname = x\n",
        )
        .unwrap();
        temp_dir
    }

    fn checker(root: &Path) -> MetadataChecker {
        MetadataChecker::new(root, expected(), ProjectIdentity::new("@Robpol86", "MIT", "2.2.1"))
    }

    #[test]
    fn test_run_passes() {
        let temp_dir = project();
        assert!(checker(temp_dir.path()).run().is_ok());
    }

    #[test]
    fn test_run_is_repeatable() {
        let temp_dir = project();
        let checker = checker(temp_dir.path());

        assert!(checker.run().is_ok());
        assert!(checker.run().is_ok());
    }

    #[test]
    fn test_identity_failure_wins_over_later_checks() {
        let temp_dir = TempDir::new().unwrap();
        let checker = MetadataChecker::new(
            temp_dir.path(),
            expected(),
            ProjectIdentity::new("@Robpol86", "GPL", "2.2.1"),
        );

        match checker.run() {
            Err(Error::Mismatch { attribute }) => assert_eq!(attribute, IdentityAttribute::License),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_missing_changelog_file() {
        let temp_dir = project();
        fs::remove_file(temp_dir.path().join("README.rst")).unwrap();

        let err = checker(temp_dir.path()).verify_changelog().unwrap_err();
        assert!(matches!(err, Error::MissingEntry { .. }));
    }

    #[test]
    fn test_custom_changelog_file() {
        let temp_dir = project();
        fs::write(temp_dir.path().join("CHANGES"), "2.2.1 - 2018-01-05\n").unwrap();
        fs::write(temp_dir.path().join("README.rst"), "nothing here\n").unwrap();

        let checker = checker(temp_dir.path())
            .changelog_config(ChangelogConfig::default().file("CHANGES"));
        assert!(checker.verify_changelog().is_ok());
    }

    #[test]
    fn test_empty_declared_skips_even_without_file() {
        let temp_dir = TempDir::new().unwrap();
        let checker = checker(temp_dir.path());

        assert!(checker.verify_pinned_dependencies(&[]).is_ok());
    }

    #[test]
    fn test_missing_tooling_file_is_missing_section() {
        let temp_dir = project();
        fs::remove_file(temp_dir.path().join("tox.ini")).unwrap();

        let err = checker(temp_dir.path())
            .verify_pinned_dependencies(&expected().install_requires)
            .unwrap_err();
        assert!(matches!(
            err,
            Error::PinnedDependencyMismatch {
                kind: PinnedMismatch::MissingSection { .. },
                ..
            }
        ));
    }

    #[test]
    fn test_report_collects_inputs() {
        let temp_dir = project();
        let report = checker(temp_dir.path()).report();

        assert_eq!(report.changelog.releases.len(), 1);
        assert_eq!(report.tooling.pinned().len(), 3);
        assert_eq!(report.identity.version, "2.2.1");
    }
}
