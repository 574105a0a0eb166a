// integration tests for the metadata checker over a fixture project tree

use metacheck::{
    CheckKind, Error, IdentityAttribute, MetacheckConfig, MetadataChecker, PinnedMismatch,
};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const CONFIG: &str = r#"
[project]
name = "sphinxcontrib-versioning"
author = "@Robpol86"
license = "MIT"
version = "2.2.1"
install_requires = ["click", "colorclass", "sphinx"]

[identity]
source = "sphinxcontrib/versioning/__init__.py"
"#;

const MODULE: &str = "\
\"\"\"Sphinx extension that allows building versioned docs for self-hosting.\"\"\"

__author__ = '@Robpol86'
__license__ = 'MIT'
__version__ = '2.2.1'
";

const README: &str = "\
=======================
sphinxcontrib-versioning
=======================

Changelog
=========

This project adheres to `Semantic Versioning <http://semver.org/>`_.

2.2.1 - 2018-01-05
------------------

Fixed
    * Compatibility with Sphinx 1.6.

2.2.0 - 2016-09-15
------------------
";

const TOX_INI: &str = "\
[general]
install_requires =
    click==6.7
    colorclass==2.2.0
    sphinx==1.6.5
name = sphinxcontrib

[tox]
envlist = lint,py{34,27}
";

fn create_test_project(root: &Path) {
    fs::create_dir_all(root.join("sphinxcontrib/versioning")).unwrap();
    fs::write(root.join("metacheck.toml"), CONFIG).unwrap();
    fs::write(root.join("sphinxcontrib/versioning/__init__.py"), MODULE).unwrap();
    fs::write(root.join("README.rst"), README).unwrap();
    fs::write(root.join("tox.ini"), TOX_INI).unwrap();
}

fn load_checker(root: &Path) -> MetadataChecker {
    let config = MetacheckConfig::load_from_root(root).unwrap();
    MetadataChecker::from_config(root, &config)
}

#[test]
fn test_consistent_project_passes() {
    let temp_dir = TempDir::new().unwrap();
    create_test_project(temp_dir.path());

    let checker = load_checker(temp_dir.path());
    assert!(checker.run().is_ok());
}

#[test]
fn test_run_twice_gives_same_outcome() {
    let temp_dir = TempDir::new().unwrap();
    create_test_project(temp_dir.path());
    fs::write(temp_dir.path().join("tox.ini"), "[general]\n").unwrap();

    let checker = load_checker(temp_dir.path());
    let first = checker.run().unwrap_err().to_string();
    let second = checker.run().unwrap_err().to_string();
    assert_eq!(first, second);

    // inputs are untouched
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("README.rst")).unwrap(),
        README
    );
}

#[test]
fn test_module_version_drift() {
    let temp_dir = TempDir::new().unwrap();
    create_test_project(temp_dir.path());
    fs::write(
        temp_dir.path().join("sphinxcontrib/versioning/__init__.py"),
        MODULE.replace("'2.2.1'", "'2.2.2'"),
    )
    .unwrap();

    let err = load_checker(temp_dir.path()).run().unwrap_err();
    assert!(matches!(
        err,
        Error::Mismatch {
            attribute: IdentityAttribute::Version
        }
    ));
    assert_eq!(err.check(), Some(CheckKind::Identity));
}

#[test]
fn test_changelog_drift() {
    let temp_dir = TempDir::new().unwrap();
    create_test_project(temp_dir.path());
    fs::write(
        temp_dir.path().join("README.rst"),
        README.replace("2.2.1 - 2018-01-05", "2.2.1 - unreleased"),
    )
    .unwrap();

    let err = load_checker(temp_dir.path()).run().unwrap_err();
    assert_eq!(err.check(), Some(CheckKind::Changelog));
    assert!(err.to_string().contains("2.2.1"));
}

#[test]
fn test_tooling_drift() {
    let temp_dir = TempDir::new().unwrap();
    create_test_project(temp_dir.path());
    fs::write(
        temp_dir.path().join("tox.ini"),
        TOX_INI.replace("    colorclass==2.2.0\n", ""),
    )
    .unwrap();

    let err = load_checker(temp_dir.path()).run().unwrap_err();
    match err {
        Error::PinnedDependencyMismatch {
            kind: PinnedMismatch::Differs { declared, found },
            ..
        } => {
            assert_eq!(declared, vec!["click", "colorclass", "sphinx"]);
            assert_eq!(found, vec!["click", "sphinx"]);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_tooling_section_removed() {
    let temp_dir = TempDir::new().unwrap();
    create_test_project(temp_dir.path());
    fs::write(
        temp_dir.path().join("tox.ini"),
        "[tox]\nenvlist = lint,py{34,27}\n",
    )
    .unwrap();

    let err = load_checker(temp_dir.path()).run().unwrap_err();
    assert!(matches!(
        err,
        Error::PinnedDependencyMismatch {
            kind: PinnedMismatch::MissingSection { .. },
            ..
        }
    ));
}

#[test]
fn test_no_declared_dependencies_ignores_tooling() {
    let temp_dir = TempDir::new().unwrap();
    create_test_project(temp_dir.path());
    fs::remove_file(temp_dir.path().join("tox.ini")).unwrap();
    fs::write(
        temp_dir.path().join("metacheck.toml"),
        CONFIG.replace(
            "install_requires = [\"click\", \"colorclass\", \"sphinx\"]",
            "install_requires = []",
        ),
    )
    .unwrap();

    assert!(load_checker(temp_dir.path()).run().is_ok());
}

#[test]
fn test_show_report_reflects_files() {
    let temp_dir = TempDir::new().unwrap();
    create_test_project(temp_dir.path());

    let report = load_checker(temp_dir.path()).report();
    let versions: Vec<_> = report
        .changelog
        .releases
        .iter()
        .map(|r| r.version.as_str())
        .collect();

    assert_eq!(versions, vec!["2.2.1", "2.2.0"]);
    assert_eq!(report.tooling.pinned()[2].version, "1.6.5");
    assert_eq!(report.identity.author, "@Robpol86");
}
