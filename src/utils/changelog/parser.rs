// changelog parser

use super::types::{ChangelogDocument, ReleaseEntry};
use crate::utils::reader::TextReader;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

/// column-0 release line terminated by a line break
static RELEASE_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^(\S+) - (\d{4}-\d{2}-\d{2})[\r\n]").expect("release line pattern is valid")
});

/// parse changelog text into its dated release entries
pub fn parse_changelog(content: &str, path: &Path) -> ChangelogDocument {
    let mut changelog = ChangelogDocument::new(path.to_path_buf());

    let mut line_number = 1;
    let mut scanned = 0;

    for caps in RELEASE_LINE_RE.captures_iter(content) {
        let Some(whole) = caps.get(0) else {
            continue;
        };

        line_number += content[scanned..whole.start()].matches('\n').count();
        scanned = whole.start();

        changelog.add_release(ReleaseEntry::new(
            caps[1].to_string(),
            caps[2].to_string(),
            line_number,
        ));
    }

    tracing::debug!(
        path = %path.display(),
        releases = changelog.releases.len(),
        "parsed changelog"
    );

    changelog
}

/// read (bounded) and parse a changelog file, unreadable files parse as empty
pub fn read_changelog<P: AsRef<Path>>(path: P, max_read_bytes: u64) -> ChangelogDocument {
    let path = path.as_ref();
    let content = TextReader::read_bounded(path, max_read_bytes);
    parse_changelog(&content, path)
}
