// pinned dependency section of the tooling configuration

pub mod config;
pub mod parser;
pub mod types;

pub use config::ToolingConfig;
pub use parser::{parse_tooling_config, read_tooling_config};
pub use types::{PinnedDependency, PinnedSection, ToolingConfigDocument};

use crate::error::{Error, PinnedMismatch, Result};

/// verify the pinned section lists `declared` names in the same order
pub fn verify_pinned_dependencies(
    document: &ToolingConfigDocument,
    declared: &[String],
) -> Result<()> {
    let Some(section) = &document.section else {
        return Err(Error::PinnedDependencyMismatch {
            path: document.path.clone(),
            kind: PinnedMismatch::MissingSection {
                section: document.section_name.clone(),
            },
        });
    };

    let found = section.names();
    if found != declared {
        return Err(Error::PinnedDependencyMismatch {
            path: document.path.clone(),
            kind: PinnedMismatch::Differs {
                declared: declared.to_vec(),
                found: found.into_iter().map(str::to_string).collect(),
            },
        });
    }

    Ok(())
}
