// changelog verification module

pub mod config;
pub mod parser;
pub mod types;
pub mod validator;

pub use config::ChangelogConfig;
pub use parser::{parse_changelog, read_changelog};
pub use types::{ChangelogDocument, ReleaseEntry};
pub use validator::{has_version_entry, is_latest_entry, verify_changelog};
