pub mod error;
pub mod utils;

pub use error::*;
pub use utils::changelog::{
    ChangelogConfig, ChangelogDocument, ReleaseEntry, has_version_entry, is_latest_entry,
    parse_changelog, read_changelog, verify_changelog,
};
pub use utils::checker::{MetadataChecker, MetadataReport};
pub use utils::config::{CONFIG_FILE_NAME, ExpectedMetadata, IdentityConfig, MetacheckConfig};
pub use utils::identity::{IDENTITY_ATTRIBUTES, ProjectIdentity};
pub use utils::reader::{DEFAULT_MAX_READ_BYTES, TextReader};
pub use utils::tooling::{
    PinnedDependency, PinnedSection, ToolingConfig, ToolingConfigDocument, parse_tooling_config,
    read_tooling_config, verify_pinned_dependencies,
};
