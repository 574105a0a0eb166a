// changelog validator

use super::config::ChangelogConfig;
use super::types::ChangelogDocument;
use crate::error::{Error, Result};

/// check if a version has a dated changelog entry
pub fn has_version_entry(changelog: &ChangelogDocument, version: &str) -> bool {
    changelog.has_version(version)
}

/// check if the most recent dated entry belongs to `version`
pub fn is_latest_entry(changelog: &ChangelogDocument, version: &str) -> bool {
    changelog
        .latest()
        .map(|entry| entry.version == version)
        .unwrap_or(false)
}

/// verify the changelog carries an entry for `version`
pub fn verify_changelog(
    changelog: &ChangelogDocument,
    version: &str,
    config: &ChangelogConfig,
) -> Result<()> {
    let found = if config.require_latest {
        is_latest_entry(changelog, version)
    } else {
        has_version_entry(changelog, version)
    };

    if !found {
        return Err(Error::MissingEntry {
            version: version.to_string(),
            path: changelog.path.clone(),
        });
    }

    Ok(())
}
