// pinned section parser

use super::types::{PinnedDependency, PinnedSection, ToolingConfigDocument};
use crate::utils::reader::TextReader;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

/// indented `<package>==<version>` line
static PIN_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s+([^=\s]+)==([\w.-]+)").expect("pin line pattern is valid")
});

fn is_section_header(line: &str, section_name: &str) -> bool {
    line.strip_prefix(section_name)
        .map(|rest| rest.trim() == "=")
        .unwrap_or(false)
}

fn is_indented(line: &str) -> bool {
    line.starts_with(' ') || line.starts_with('\t')
}

/// parse the named pinned section out of tooling configuration text
///
/// the header must start at column 0; the section runs over indented and
/// blank lines until the next unindented line or end of input
pub fn parse_tooling_config(
    content: &str,
    path: &Path,
    section_name: &str,
) -> ToolingConfigDocument {
    let mut document = ToolingConfigDocument::new(path.to_path_buf(), section_name);
    let mut lines = content.lines().enumerate();

    let header_line = lines
        .by_ref()
        .find(|(_, line)| is_section_header(line, section_name))
        .map(|(index, _)| index + 1);

    let Some(header_line) = header_line else {
        tracing::debug!(path = %path.display(), section = section_name, "section header not found");
        return document;
    };

    let mut section = PinnedSection::new(header_line);

    for (index, line) in lines {
        if line.trim().is_empty() {
            continue;
        }
        if !is_indented(line) {
            break;
        }

        // indented lines without a pin (comments, options) are skipped
        if let Some(caps) = PIN_LINE_RE.captures(line) {
            section.add_dependency(PinnedDependency::new(
                caps[1].to_string(),
                caps[2].to_string(),
                index + 1,
            ));
        }
    }

    tracing::debug!(
        path = %path.display(),
        section = section_name,
        pinned = section.dependencies.len(),
        "parsed pinned section"
    );

    document.section = Some(section);
    document
}

/// read (bounded) and parse a tooling file, unreadable files have no section
pub fn read_tooling_config<P: AsRef<Path>>(
    path: P,
    section_name: &str,
    max_read_bytes: u64,
) -> ToolingConfigDocument {
    let path = path.as_ref();
    let content = TextReader::read_bounded(path, max_read_bytes);
    parse_tooling_config(&content, path, section_name)
}
